//! Manager API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::gestionnaire::{CreateGestionnaire, Gestionnaire, UpdateGestionnaire},
};

use super::ValidatedJson;

/// List managers
#[utoipa::path(
    get,
    path = "/gestionnaires",
    tag = "gestionnaires",
    responses(
        (status = 200, description = "Managers", body = Vec<Gestionnaire>)
    )
)]
pub async fn list_gestionnaires(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Gestionnaire>>> {
    let gestionnaires = state.services.gestionnaires.list().await?;
    Ok(Json(gestionnaires))
}

/// Get a manager by ID
#[utoipa::path(
    get,
    path = "/gestionnaires/{id}",
    tag = "gestionnaires",
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 200, description = "Manager", body = Gestionnaire)
    )
)]
pub async fn get_gestionnaire(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Gestionnaire>> {
    let gestionnaire = state.services.gestionnaires.get_by_id(id).await?;
    Ok(Json(gestionnaire))
}

/// Create a manager
#[utoipa::path(
    post,
    path = "/gestionnaires",
    tag = "gestionnaires",
    request_body = CreateGestionnaire,
    responses(
        (status = 201, description = "Manager created", body = Gestionnaire)
    )
)]
pub async fn create_gestionnaire(
    State(state): State<crate::AppState>,
    ValidatedJson(data): ValidatedJson<CreateGestionnaire>,
) -> AppResult<(StatusCode, Json<Gestionnaire>)> {
    let gestionnaire = state.services.gestionnaires.create(&data).await?;
    Ok((StatusCode::CREATED, Json(gestionnaire)))
}

/// Update a manager
#[utoipa::path(
    put,
    path = "/gestionnaires/{id}",
    tag = "gestionnaires",
    params(("id" = i32, Path, description = "Manager ID")),
    request_body = UpdateGestionnaire,
    responses(
        (status = 200, description = "Manager updated", body = Gestionnaire)
    )
)]
pub async fn update_gestionnaire(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    ValidatedJson(data): ValidatedJson<UpdateGestionnaire>,
) -> AppResult<Json<Gestionnaire>> {
    let gestionnaire = state.services.gestionnaires.update(id, &data).await?;
    Ok(Json(gestionnaire))
}

/// Delete a manager
#[utoipa::path(
    delete,
    path = "/gestionnaires/{id}",
    tag = "gestionnaires",
    params(("id" = i32, Path, description = "Manager ID")),
    responses(
        (status = 204, description = "Manager deleted"),
        (status = 409, description = "Manager still referenced by inspections", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_gestionnaire(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.gestionnaires.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
