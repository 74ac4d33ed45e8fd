//! Inspections service

use crate::{
    error::AppResult,
    models::controle::{Controle, ControleQuery, CreateControle, UpdateControle},
    repository::{EpiStore, Repository},
};

#[derive(Clone)]
pub struct ControlesService {
    repository: Repository,
}

impl ControlesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, query: &ControleQuery) -> AppResult<Vec<Controle>> {
        self.repository.controles.list(query).await
    }

    /// Inspection history of one item; 404 when the item does not exist
    pub async fn list_for_epi(&self, epi_id: i32) -> AppResult<Vec<Controle>> {
        self.repository.epis.get_by_id(epi_id).await?;
        let query = ControleQuery {
            epi_id: Some(epi_id),
            ..ControleQuery::default()
        };
        self.repository.controles.list(&query).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Controle> {
        self.repository.controles.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateControle) -> AppResult<Controle> {
        let controle = self.repository.controles.create(data).await?;
        tracing::info!(
            id = controle.id,
            epi_id = controle.epi_id,
            date = %controle.date_controle,
            "Inspection recorded"
        );
        Ok(controle)
    }

    pub async fn update(&self, id: i32, data: &UpdateControle) -> AppResult<Controle> {
        self.repository.controles.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.controles.delete(id).await
    }
}
