//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{controles, epis, gestionnaires, health, statuts, types_epi};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GestEPI API",
        version = "1.0.0",
        description = "Protective equipment inventory and inspection tracking REST API"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        epis::list_epis,
        epis::list_alerts,
        epis::get_epi,
        epis::create_epi,
        epis::update_epi,
        epis::delete_epi,
        // Equipment types
        types_epi::list_types,
        types_epi::get_type,
        types_epi::create_type,
        types_epi::update_type,
        types_epi::delete_type,
        // Inspections
        controles::list_controles,
        controles::list_epi_controles,
        controles::get_controle,
        controles::create_controle,
        controles::update_controle,
        controles::delete_controle,
        // Managers
        gestionnaires::list_gestionnaires,
        gestionnaires::get_gestionnaire,
        gestionnaires::create_gestionnaire,
        gestionnaires::update_gestionnaire,
        gestionnaires::delete_gestionnaire,
        // Statuses
        statuts::list_statuts,
        statuts::get_statut,
        statuts::create_statut,
        statuts::update_statut,
        statuts::delete_statut,
    ),
    components(
        schemas(
            // Equipment
            crate::models::epi::Epi,
            crate::models::epi::TypeEpiRef,
            crate::models::epi::CreateEpi,
            crate::models::epi::UpdateEpi,
            crate::models::epi::EpiQuery,
            // Alerts
            crate::inspection::EpiAlert,
            crate::inspection::Severity,
            crate::inspection::NextInspection,
            epis::AlertQuery,
            epis::AlertSort,
            // Equipment types
            crate::models::type_epi::TypeEpi,
            crate::models::type_epi::CreateTypeEpi,
            crate::models::type_epi::UpdateTypeEpi,
            // Inspections
            crate::models::controle::Controle,
            crate::models::controle::CreateControle,
            crate::models::controle::UpdateControle,
            crate::models::controle::ControleQuery,
            // Managers
            crate::models::gestionnaire::Gestionnaire,
            crate::models::gestionnaire::CreateGestionnaire,
            crate::models::gestionnaire::UpdateGestionnaire,
            // Statuses
            crate::models::statut::StatutControle,
            crate::models::statut::SaveStatutControle,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "epis", description = "Protective equipment and inspection alerts"),
        (name = "types_epi", description = "Equipment types"),
        (name = "controles", description = "Inspection records"),
        (name = "gestionnaires", description = "Managers"),
        (name = "statuts", description = "Inspection statuses")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alerts_path_documented() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/epis/alerts"));
        assert!(doc.paths.paths.contains_key("/epis/{id}/controles"));
    }
}
