//! Inspection scheduling
//!
//! Computes when each equipment item must next be inspected and selects
//! the items that need attention within a day threshold. Everything here
//! is pure: callers pass already-fetched records and the current date.

pub mod alerts;
pub mod due_date;

pub use alerts::{build_alerts, filter_due_soon, sort_by_urgency, EpiAlert, Severity};
pub use due_date::{compute_next_inspection, resolve_periodicity, NextInspection};
