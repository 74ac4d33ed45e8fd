//! Next inspection date computation

use chrono::{Days, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Epi;

/// Next mandatory inspection of an item.
///
/// Both fields are `None` when the item has no schedule: no base date, or
/// no positive periodicity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct NextInspection {
    pub next_date: Option<NaiveDate>,
    /// Days from today until `next_date`, negative when overdue
    pub days_remaining: Option<i64>,
}

impl NextInspection {
    const NONE: Self = Self {
        next_date: None,
        days_remaining: None,
    };
}

/// Date the schedule counts from: the last inspection, else the service date.
pub fn base_date(epi: &Epi) -> Option<NaiveDate> {
    epi.dernier_controle.or(epi.date_mise_service)
}

/// Inspection interval in days.
///
/// Candidates are tried in order and the first positive one wins: the
/// item's own periodicity, then its type's. Returns 0 when none applies.
pub fn resolve_periodicity(epi: &Epi) -> i64 {
    let candidates = [
        epi.periodicite_controle,
        epi.type_epi.as_ref().and_then(|t| t.periodicite_controle),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|days| *days > 0)
        .map(i64::from)
        .unwrap_or(0)
}

/// Compute the next inspection date of `epi` and the days left as of `today`.
pub fn compute_next_inspection(epi: &Epi, today: NaiveDate) -> NextInspection {
    let Some(base) = base_date(epi) else {
        return NextInspection::NONE;
    };

    let periodicity = resolve_periodicity(epi);
    if periodicity <= 0 {
        return NextInspection::NONE;
    }

    // Out of chrono's calendar range: treat as unscheduled
    let Some(next_date) = base.checked_add_days(Days::new(periodicity as u64)) else {
        return NextInspection::NONE;
    };

    NextInspection {
        next_date: Some(next_date),
        days_remaining: Some((next_date - today).num_days()),
    }
}
