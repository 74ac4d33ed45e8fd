//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::AppResult,
    inspection::EpiAlert,
    models::epi::{CreateEpi, Epi, EpiQuery, UpdateEpi},
};

use super::ValidatedJson;

/// Ordering of the alerts list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertSort {
    /// Same order as the equipment list
    #[default]
    Default,
    /// Most overdue first
    Urgency,
}

/// Alerts query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AlertQuery {
    /// Report items due within this many days (server default when omitted)
    pub days: Option<i64>,
    pub sort: Option<AlertSort>,
}

/// List equipment
#[utoipa::path(
    get,
    path = "/epis",
    tag = "epis",
    params(EpiQuery),
    responses(
        (status = 200, description = "Equipment list", body = Vec<Epi>)
    )
)]
pub async fn list_epis(
    State(state): State<crate::AppState>,
    Query(query): Query<EpiQuery>,
) -> AppResult<Json<Vec<Epi>>> {
    let epis = state.services.epis.list(&query).await?;
    Ok(Json(epis))
}

/// Equipment due for inspection
#[utoipa::path(
    get,
    path = "/epis/alerts",
    tag = "epis",
    params(AlertQuery),
    responses(
        (status = 200, description = "Equipment needing an inspection soon or overdue", body = Vec<EpiAlert>),
        (status = 400, description = "Threshold out of range", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_alerts(
    State(state): State<crate::AppState>,
    Query(query): Query<AlertQuery>,
) -> AppResult<Json<Vec<EpiAlert>>> {
    let by_urgency = query.sort.unwrap_or_default() == AlertSort::Urgency;
    let alerts = state.services.epis.alerts(query.days, by_urgency).await?;
    Ok(Json(alerts))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/epis/{id}",
    tag = "epis",
    params(("id" = i32, Path, description = "EPI ID")),
    responses(
        (status = 200, description = "Equipment details", body = Epi),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_epi(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Epi>> {
    let epi = state.services.epis.get_by_id(id).await?;
    Ok(Json(epi))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/epis",
    tag = "epis",
    request_body = CreateEpi,
    responses(
        (status = 201, description = "Equipment created", body = Epi),
        (status = 400, description = "Invalid payload or unknown equipment type", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_epi(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateEpi>,
) -> AppResult<(StatusCode, Json<Epi>)> {
    let epi = state.services.epis.create(&data).await?;
    Ok((StatusCode::CREATED, Json(epi)))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/epis/{id}",
    tag = "epis",
    params(("id" = i32, Path, description = "EPI ID")),
    request_body = UpdateEpi,
    responses(
        (status = 200, description = "Equipment updated", body = Epi),
        (status = 400, description = "Invalid payload or unknown equipment type", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_epi(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ValidatedJson(data): ValidatedJson<UpdateEpi>,
) -> AppResult<Json<Epi>> {
    let epi = state.services.epis.update(id, &data).await?;
    Ok(Json(epi))
}

/// Delete equipment and its inspection history
#[utoipa::path(
    delete,
    path = "/epis/{id}",
    tag = "epis",
    params(("id" = i32, Path, description = "EPI ID")),
    responses(
        (status = 204, description = "Equipment deleted")
    )
)]
pub async fn delete_epi(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.epis.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
