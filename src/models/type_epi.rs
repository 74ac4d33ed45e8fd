//! Equipment type model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Equipment type (harness, helmet, lanyard...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TypeEpi {
    pub id: i32,
    /// Display label
    pub libelle: String,
    /// Default inspection interval in days for items of this type
    pub periodicite_controle: Option<i32>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create equipment type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTypeEpi {
    #[validate(length(min = 1, message = "Label is required"))]
    pub libelle: String,
    #[validate(range(min = 0, message = "Periodicity must not be negative"))]
    pub periodicite_controle: Option<i32>,
}

/// Update equipment type request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTypeEpi {
    #[validate(length(min = 1, message = "Label must not be empty"))]
    pub libelle: Option<String>,
    #[validate(range(min = 0, message = "Periodicity must not be negative"))]
    pub periodicite_controle: Option<i32>,
}
