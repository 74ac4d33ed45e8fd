//! Protective equipment (EPI) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::inspection::{self, NextInspection};

/// Equipment type as embedded in an equipment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TypeEpiRef {
    pub id: i32,
    pub libelle: String,
    pub periodicite_controle: Option<i32>,
}

/// Equipment item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Epi {
    pub id: i32,
    /// Owner-facing identifier (label printed on the item)
    pub identifiant_perso: String,
    pub marque: String,
    pub modele: String,
    /// Date the item entered service
    pub date_mise_service: Option<NaiveDate>,
    /// Date of the most recent recorded inspection
    pub dernier_controle: Option<NaiveDate>,
    /// Inspection interval in days; falls back to the type's when unset
    pub periodicite_controle: Option<i32>,
    pub type_epi: Option<TypeEpiRef>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

impl Epi {
    /// Next mandatory inspection relative to `today`
    pub fn next_inspection(&self, today: NaiveDate) -> NextInspection {
        inspection::compute_next_inspection(self, today)
    }
}

/// Flat row as selected from `epis` joined with `types_epi`
#[derive(Debug, FromRow)]
pub struct EpiRow {
    pub id: i32,
    pub identifiant_perso: String,
    pub marque: String,
    pub modele: String,
    pub date_mise_service: Option<NaiveDate>,
    pub dernier_controle: Option<NaiveDate>,
    pub periodicite_controle: Option<i32>,
    pub type_epi_id: Option<i32>,
    pub type_libelle: Option<String>,
    pub type_periodicite_controle: Option<i32>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

impl From<EpiRow> for Epi {
    fn from(row: EpiRow) -> Self {
        let type_epi = match (row.type_epi_id, row.type_libelle) {
            (Some(id), Some(libelle)) => Some(TypeEpiRef {
                id,
                libelle,
                periodicite_controle: row.type_periodicite_controle,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            identifiant_perso: row.identifiant_perso,
            marque: row.marque,
            modele: row.modele,
            date_mise_service: row.date_mise_service,
            dernier_controle: row.dernier_controle,
            periodicite_controle: row.periodicite_controle,
            type_epi,
            crea_date: row.crea_date,
            modif_date: row.modif_date,
        }
    }
}

/// Create equipment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateEpi {
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifiant_perso: String,
    #[validate(length(min = 1, message = "Brand is required"))]
    pub marque: String,
    #[validate(length(min = 1, message = "Model is required"))]
    pub modele: String,
    pub date_mise_service: Option<NaiveDate>,
    #[validate(range(min = 0, message = "Periodicity must not be negative"))]
    pub periodicite_controle: Option<i32>,
    pub type_epi_id: Option<i32>,
}

/// Update equipment request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateEpi {
    #[validate(length(min = 1, message = "Identifier must not be empty"))]
    pub identifiant_perso: Option<String>,
    #[validate(length(min = 1, message = "Brand must not be empty"))]
    pub marque: Option<String>,
    #[validate(length(min = 1, message = "Model must not be empty"))]
    pub modele: Option<String>,
    pub date_mise_service: Option<NaiveDate>,
    #[validate(range(min = 0, message = "Periodicity must not be negative"))]
    pub periodicite_controle: Option<i32>,
    pub type_epi_id: Option<i32>,
}

/// Equipment list filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct EpiQuery {
    /// Only items of this equipment type
    pub type_epi_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row() -> EpiRow {
        EpiRow {
            id: 7,
            identifiant_perso: "HAR-007".to_string(),
            marque: "Petzl".to_string(),
            modele: "Avao".to_string(),
            date_mise_service: NaiveDate::from_ymd_opt(2023, 5, 2),
            dernier_controle: None,
            periodicite_controle: None,
            type_epi_id: Some(3),
            type_libelle: Some("Harnais".to_string()),
            type_periodicite_controle: Some(365),
            crea_date: None,
            modif_date: None,
        }
    }

    #[test]
    fn test_row_with_type() {
        let epi = Epi::from(row());
        assert_eq!(
            epi.type_epi,
            Some(TypeEpiRef {
                id: 3,
                libelle: "Harnais".to_string(),
                periodicite_controle: Some(365),
            })
        );
    }

    #[test]
    fn test_next_inspection_from_type_periodicity() {
        let epi = Epi::from(row());
        let next = epi.next_inspection(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(next.next_date, NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(next.days_remaining, Some(0));
    }

    #[test]
    fn test_update_rejects_blank_labels() {
        let update = UpdateEpi {
            identifiant_perso: None,
            marque: Some(String::new()),
            modele: Some(String::new()),
            date_mise_service: None,
            periodicite_controle: None,
            type_epi_id: None,
        };
        let errors = update.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("marque"));
        assert!(fields.contains_key("modele"));
    }

    #[test]
    fn test_row_without_type() {
        let epi = Epi::from(EpiRow {
            type_epi_id: None,
            type_libelle: None,
            type_periodicite_controle: None,
            ..row()
        });
        assert!(epi.type_epi.is_none());
    }
}
