//! Equipment type API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::type_epi::{CreateTypeEpi, TypeEpi, UpdateTypeEpi},
};

use super::ValidatedJson;

/// List equipment types
#[utoipa::path(
    get,
    path = "/types-epi",
    tag = "types_epi",
    responses(
        (status = 200, description = "Equipment types", body = Vec<TypeEpi>)
    )
)]
pub async fn list_types(State(state): State<crate::AppState>) -> AppResult<Json<Vec<TypeEpi>>> {
    let types = state.services.types_epi.list().await?;
    Ok(Json(types))
}

/// Get an equipment type by ID
#[utoipa::path(
    get,
    path = "/types-epi/{id}",
    tag = "types_epi",
    params(("id" = i32, Path, description = "EPI type ID")),
    responses(
        (status = 200, description = "Equipment type", body = TypeEpi)
    )
)]
pub async fn get_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<TypeEpi>> {
    let type_epi = state.services.types_epi.get_by_id(id).await?;
    Ok(Json(type_epi))
}

/// Create an equipment type
#[utoipa::path(
    post,
    path = "/types-epi",
    tag = "types_epi",
    request_body = CreateTypeEpi,
    responses(
        (status = 201, description = "Equipment type created", body = TypeEpi)
    )
)]
pub async fn create_type(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateTypeEpi>,
) -> AppResult<(StatusCode, Json<TypeEpi>)> {
    let type_epi = state.services.types_epi.create(&data).await?;
    Ok((StatusCode::CREATED, Json(type_epi)))
}

/// Update an equipment type
#[utoipa::path(
    put,
    path = "/types-epi/{id}",
    tag = "types_epi",
    params(("id" = i32, Path, description = "EPI type ID")),
    request_body = UpdateTypeEpi,
    responses(
        (status = 200, description = "Equipment type updated", body = TypeEpi)
    )
)]
pub async fn update_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ValidatedJson(data): ValidatedJson<UpdateTypeEpi>,
) -> AppResult<Json<TypeEpi>> {
    let type_epi = state.services.types_epi.update(id, &data).await?;
    Ok(Json(type_epi))
}

/// Delete an equipment type
#[utoipa::path(
    delete,
    path = "/types-epi/{id}",
    tag = "types_epi",
    params(("id" = i32, Path, description = "EPI type ID")),
    responses(
        (status = 204, description = "Equipment type deleted"),
        (status = 409, description = "Type still used by equipment", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.types_epi.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
