//! Inspection (contrôle) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Recorded inspection of one equipment item
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Controle {
    pub id: i32,
    pub epi_id: i32,
    pub gestionnaire_id: i32,
    pub statut_id: i32,
    pub date_controle: NaiveDate,
    pub remarques: Option<String>,
    /// Joined display labels
    pub epi_identifiant: Option<String>,
    pub gestionnaire_nom: Option<String>,
    pub statut_libelle: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create inspection request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateControle {
    pub epi_id: i32,
    pub gestionnaire_id: i32,
    pub statut_id: i32,
    pub date_controle: NaiveDate,
    #[validate(length(max = 2000, message = "Remarks are limited to 2000 characters"))]
    pub remarques: Option<String>,
}

/// Update inspection request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateControle {
    pub epi_id: Option<i32>,
    pub gestionnaire_id: Option<i32>,
    pub statut_id: Option<i32>,
    pub date_controle: Option<NaiveDate>,
    #[validate(length(max = 2000, message = "Remarks are limited to 2000 characters"))]
    pub remarques: Option<String>,
}

/// Inspection list filters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ControleQuery {
    pub epi_id: Option<i32>,
    pub gestionnaire_id: Option<i32>,
    pub statut_id: Option<i32>,
}
