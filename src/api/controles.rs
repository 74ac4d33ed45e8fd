//! Inspection API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::controle::{Controle, ControleQuery, CreateControle, UpdateControle},
};

use super::ValidatedJson;

/// List inspections
#[utoipa::path(
    get,
    path = "/controles",
    tag = "controles",
    params(ControleQuery),
    responses(
        (status = 200, description = "Inspections, most recent first", body = Vec<Controle>)
    )
)]
pub async fn list_controles(
    State(state): State<crate::AppState>,
    Query(query): Query<ControleQuery>,
) -> AppResult<Json<Vec<Controle>>> {
    let controles = state.services.controles.list(&query).await?;
    Ok(Json(controles))
}

/// Inspection history of one equipment item
#[utoipa::path(
    get,
    path = "/epis/{id}/controles",
    tag = "controles",
    params(("id" = i32, Path, description = "EPI ID")),
    responses(
        (status = 200, description = "Inspections of the item", body = Vec<Controle>),
        (status = 404, description = "Equipment not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_epi_controles(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Vec<Controle>>> {
    let controles = state.services.controles.list_for_epi(id).await?;
    Ok(Json(controles))
}

/// Get an inspection by ID
#[utoipa::path(
    get,
    path = "/controles/{id}",
    tag = "controles",
    params(("id" = i32, Path, description = "Inspection ID")),
    responses(
        (status = 200, description = "Inspection details", body = Controle)
    )
)]
pub async fn get_controle(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Controle>> {
    let controle = state.services.controles.get_by_id(id).await?;
    Ok(Json(controle))
}

/// Record an inspection
#[utoipa::path(
    post,
    path = "/controles",
    tag = "controles",
    request_body = CreateControle,
    responses(
        (status = 201, description = "Inspection recorded", body = Controle),
        (status = 400, description = "Unknown equipment, manager or status", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_controle(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateControle>,
) -> AppResult<(StatusCode, Json<Controle>)> {
    let controle = state.services.controles.create(&data).await?;
    Ok((StatusCode::CREATED, Json(controle)))
}

/// Update an inspection
#[utoipa::path(
    put,
    path = "/controles/{id}",
    tag = "controles",
    params(("id" = i32, Path, description = "Inspection ID")),
    request_body = UpdateControle,
    responses(
        (status = 200, description = "Inspection updated", body = Controle),
        (status = 400, description = "Unknown equipment, manager or status", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_controle(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ValidatedJson(data): ValidatedJson<UpdateControle>,
) -> AppResult<Json<Controle>> {
    let controle = state.services.controles.update(id, &data).await?;
    Ok(Json(controle))
}

/// Delete an inspection
#[utoipa::path(
    delete,
    path = "/controles/{id}",
    tag = "controles",
    params(("id" = i32, Path, description = "Inspection ID")),
    responses(
        (status = 204, description = "Inspection deleted")
    )
)]
pub async fn delete_controle(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.controles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
