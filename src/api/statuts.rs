//! Inspection status API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::statut::{SaveStatutControle, StatutControle},
};

use super::ValidatedJson;

/// List inspection statuses
#[utoipa::path(
    get,
    path = "/statuts",
    tag = "statuts",
    responses(
        (status = 200, description = "Inspection statuses", body = Vec<StatutControle>)
    )
)]
pub async fn list_statuts(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<StatutControle>>> {
    let statuts = state.services.statuts.list().await?;
    Ok(Json(statuts))
}

/// Get an inspection status by ID
#[utoipa::path(
    get,
    path = "/statuts/{id}",
    tag = "statuts",
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 200, description = "Inspection status", body = StatutControle)
    )
)]
pub async fn get_statut(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<StatutControle>> {
    let statut = state.services.statuts.get_by_id(id).await?;
    Ok(Json(statut))
}

/// Create an inspection status
#[utoipa::path(
    post,
    path = "/statuts",
    tag = "statuts",
    request_body = SaveStatutControle,
    responses(
        (status = 201, description = "Status created", body = StatutControle)
    )
)]
pub async fn create_statut(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<SaveStatutControle>,
) -> AppResult<(StatusCode, Json<StatutControle>)> {
    let statut = state.services.statuts.create(&data).await?;
    Ok((StatusCode::CREATED, Json(statut)))
}

/// Rename an inspection status
#[utoipa::path(
    put,
    path = "/statuts/{id}",
    tag = "statuts",
    params(("id" = i32, Path, description = "Status ID")),
    request_body = SaveStatutControle,
    responses(
        (status = 200, description = "Status updated", body = StatutControle)
    )
)]
pub async fn update_statut(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ValidatedJson(data): ValidatedJson<SaveStatutControle>,
) -> AppResult<Json<StatutControle>> {
    let statut = state.services.statuts.update(id, &data).await?;
    Ok(Json(statut))
}

/// Delete an inspection status
#[utoipa::path(
    delete,
    path = "/statuts/{id}",
    tag = "statuts",
    params(("id" = i32, Path, description = "Status ID")),
    responses(
        (status = 204, description = "Status deleted"),
        (status = 409, description = "Status still used by inspections", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_statut(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.statuts.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
