//! API handlers for GestEPI REST endpoints

pub mod controles;
pub mod epis;
pub mod gestionnaires;
pub mod health;
pub mod openapi;
pub mod statuts;
pub mod types_epi;

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{
    error::{self, AppError},
    AppState,
};

/// JSON body extractor that also runs the payload's validation rules
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Build the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Equipment
        .route("/epis", get(epis::list_epis).post(epis::create_epi))
        .route("/epis/alerts", get(epis::list_alerts))
        .route(
            "/epis/:id",
            get(epis::get_epi).put(epis::update_epi).delete(epis::delete_epi),
        )
        .route("/epis/:id/controles", get(controles::list_epi_controles))
        // Equipment types
        .route("/types-epi", get(types_epi::list_types).post(types_epi::create_type))
        .route(
            "/types-epi/:id",
            get(types_epi::get_type)
                .put(types_epi::update_type)
                .delete(types_epi::delete_type),
        )
        // Inspections
        .route("/controles", get(controles::list_controles).post(controles::create_controle))
        .route(
            "/controles/:id",
            get(controles::get_controle)
                .put(controles::update_controle)
                .delete(controles::delete_controle),
        )
        // Managers
        .route(
            "/gestionnaires",
            get(gestionnaires::list_gestionnaires).post(gestionnaires::create_gestionnaire),
        )
        .route(
            "/gestionnaires/:id",
            get(gestionnaires::get_gestionnaire)
                .put(gestionnaires::update_gestionnaire)
                .delete(gestionnaires::delete_gestionnaire),
        )
        // Inspection statuses
        .route("/statuts", get(statuts::list_statuts).post(statuts::create_statut))
        .route(
            "/statuts/:id",
            get(statuts::get_statut)
                .put(statuts::update_statut)
                .delete(statuts::delete_statut),
        )
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi::create_openapi_router())
        .fallback(error::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
