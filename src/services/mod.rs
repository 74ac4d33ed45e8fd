//! Business logic services

pub mod controles;
pub mod epis;
pub mod gestionnaires;
pub mod statuts;
pub mod types_epi;

use std::sync::Arc;

use crate::{config::AlertsConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub epis: epis::EpisService,
    pub types_epi: types_epi::TypesEpiService,
    pub controles: controles::ControlesService,
    pub gestionnaires: gestionnaires::GestionnairesService,
    pub statuts: statuts::StatutsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, alerts_config: AlertsConfig) -> Self {
        Self {
            epis: epis::EpisService::new(Arc::new(repository.epis.clone()), alerts_config),
            types_epi: types_epi::TypesEpiService::new(repository.clone()),
            controles: controles::ControlesService::new(repository.clone()),
            gestionnaires: gestionnaires::GestionnairesService::new(repository.clone()),
            statuts: statuts::StatutsService::new(repository.clone()),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
