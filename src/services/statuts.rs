//! Inspection statuses service

use crate::{
    error::AppResult,
    models::statut::{SaveStatutControle, StatutControle},
    repository::Repository,
};

#[derive(Clone)]
pub struct StatutsService {
    repository: Repository,
}

impl StatutsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<StatutControle>> {
        self.repository.statuts.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<StatutControle> {
        self.repository.statuts.get_by_id(id).await
    }

    pub async fn create(&self, data: &SaveStatutControle) -> AppResult<StatutControle> {
        self.repository.statuts.create(data).await
    }

    pub async fn update(&self, id: i32, data: &SaveStatutControle) -> AppResult<StatutControle> {
        self.repository.statuts.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.statuts.delete(id).await
    }
}
