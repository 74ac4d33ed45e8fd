//! Alert selection for upcoming and overdue inspections

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Epi;

/// Urgency of an upcoming inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Overdue,
    Urgent,
    Warning,
    Ok,
}

impl Severity {
    pub fn classify(days_remaining: i64) -> Self {
        match days_remaining {
            d if d < 0 => Severity::Overdue,
            0..=6 => Severity::Urgent,
            7..=14 => Severity::Warning,
            _ => Severity::Ok,
        }
    }
}

/// Equipment item flagged by the alert filter
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EpiAlert {
    pub epi: Epi,
    pub next_inspection: NaiveDate,
    pub days_remaining: i64,
    pub severity: Severity,
}

/// True when an inspection `days_remaining` away must be reported.
///
/// Overdue items are reported whatever the threshold.
fn is_due(days_remaining: i64, threshold_days: i64) -> bool {
    days_remaining < 0 || days_remaining <= threshold_days
}

/// Next inspection date and days left, when `epi` must be reported.
fn due_schedule(epi: &Epi, threshold_days: i64, today: NaiveDate) -> Option<(NaiveDate, i64)> {
    let next = epi.next_inspection(today);
    let (next_date, days_remaining) = (next.next_date?, next.days_remaining?);
    is_due(days_remaining, threshold_days).then_some((next_date, days_remaining))
}

/// Items whose next inspection falls within `threshold_days`, in input order.
///
/// Items without a computable due date are never returned.
pub fn filter_due_soon<'a>(epis: &'a [Epi], threshold_days: i64, today: NaiveDate) -> Vec<&'a Epi> {
    epis.iter()
        .filter(|epi| due_schedule(epi, threshold_days, today).is_some())
        .collect()
}

/// Same selection as [`filter_due_soon`], with the computed schedule attached.
pub fn build_alerts(epis: Vec<Epi>, threshold_days: i64, today: NaiveDate) -> Vec<EpiAlert> {
    epis.into_iter()
        .filter_map(|epi| {
            let (next_inspection, days_remaining) = due_schedule(&epi, threshold_days, today)?;
            Some(EpiAlert {
                epi,
                next_inspection,
                days_remaining,
                severity: Severity::classify(days_remaining),
            })
        })
        .collect()
}

/// Most urgent first; equal days keep their relative order.
pub fn sort_by_urgency(alerts: &mut [EpiAlert]) {
    alerts.sort_by_key(|alert| alert.days_remaining);
}
