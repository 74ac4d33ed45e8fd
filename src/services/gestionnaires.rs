//! Managers service

use crate::{
    error::AppResult,
    models::gestionnaire::{CreateGestionnaire, Gestionnaire, UpdateGestionnaire},
    repository::Repository,
};

#[derive(Clone)]
pub struct GestionnairesService {
    repository: Repository,
}

impl GestionnairesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Gestionnaire>> {
        self.repository.gestionnaires.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Gestionnaire> {
        self.repository.gestionnaires.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateGestionnaire) -> AppResult<Gestionnaire> {
        self.repository.gestionnaires.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateGestionnaire) -> AppResult<Gestionnaire> {
        self.repository.gestionnaires.update(id, data).await
    }

    /// Rejected with a conflict while inspections still name the manager
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.gestionnaires.delete(id).await
    }
}
