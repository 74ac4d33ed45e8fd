//! Equipment types service

use crate::{
    error::AppResult,
    models::type_epi::{CreateTypeEpi, TypeEpi, UpdateTypeEpi},
    repository::Repository,
};

#[derive(Clone)]
pub struct TypesEpiService {
    repository: Repository,
}

impl TypesEpiService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<TypeEpi>> {
        self.repository.types_epi.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TypeEpi> {
        self.repository.types_epi.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateTypeEpi) -> AppResult<TypeEpi> {
        self.repository.types_epi.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateTypeEpi) -> AppResult<TypeEpi> {
        self.repository.types_epi.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.types_epi.delete(id).await
    }
}
