//! Browser glue shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! web-sys access lives here so components stay renderable on the server and
//! testable natively.

pub mod theme_dom;
