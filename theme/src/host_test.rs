use std::cell::Cell;
use std::rc::Rc;

use super::*;

fn counting_subscription() -> (Subscription, Rc<Cell<u32>>) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    (sub, count)
}

#[test]
fn subscription_cancels_on_drop() {
    let (sub, count) = counting_subscription();
    assert_eq!(count.get(), 0);
    drop(sub);
    assert_eq!(count.get(), 1);
}

#[test]
fn subscription_cancel_runs_exactly_once() {
    let (sub, count) = counting_subscription();
    sub.cancel();
    assert_eq!(count.get(), 1);
}

#[test]
fn inert_subscription_drops_quietly() {
    let sub = Subscription::inert();
    assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
    drop(sub);
}

#[test]
fn store_error_messages() {
    assert_eq!(StoreError::Unavailable.to_string(), "preference storage unavailable");
    assert_eq!(
        StoreError::Backend("QuotaExceededError".into()).to_string(),
        "preference storage error: QuotaExceededError"
    );
}
