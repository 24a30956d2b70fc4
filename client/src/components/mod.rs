//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome. Browser-only behavior is attached from
//! `Effect`s so server rendering stays deterministic.

pub mod theme_toggle;
