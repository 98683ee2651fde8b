//! Reconciliation rules

pub mod cutoff;
pub mod reconciler;

pub use cutoff::cutoff_day;
pub use reconciler::{needs_review, reconcile};
