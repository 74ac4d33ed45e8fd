//! Manager model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Person responsible for, or performing, inspections
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Gestionnaire {
    pub id: i32,
    pub nom: String,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create manager request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGestionnaire {
    #[validate(length(min = 1, message = "Name is required"))]
    pub nom: String,
    pub prenom: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// Update manager request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGestionnaire {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub nom: Option<String>,
    pub prenom: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}
