//! Inspection status model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Outcome category of an inspection (passed, failed, to repair...)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StatutControle {
    pub id: i32,
    pub libelle: String,
}

/// Create or rename a status
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SaveStatutControle {
    #[validate(length(min = 1, max = 100, message = "Label must be 1-100 characters"))]
    pub libelle: String,
}
