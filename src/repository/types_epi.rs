//! Equipment types repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::type_epi::{CreateTypeEpi, TypeEpi, UpdateTypeEpi},
};

#[derive(Clone)]
pub struct TypesEpiRepository {
    pool: Pool<Postgres>,
}

impl TypesEpiRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<TypeEpi>> {
        let rows = sqlx::query_as::<_, TypeEpi>("SELECT * FROM types_epi ORDER BY libelle")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<TypeEpi> {
        sqlx::query_as::<_, TypeEpi>("SELECT * FROM types_epi WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("EPI type {} not found", id)))
    }

    pub async fn create(&self, data: &CreateTypeEpi) -> AppResult<TypeEpi> {
        let row = sqlx::query_as::<_, TypeEpi>(
            r#"
            INSERT INTO types_epi (libelle, periodicite_controle)
            VALUES ($1, $2)
            RETURNING *
            "#,
        )
        .bind(&data.libelle)
        .bind(data.periodicite_controle)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateTypeEpi) -> AppResult<TypeEpi> {
        sqlx::query_as::<_, TypeEpi>(
            r#"
            UPDATE types_epi SET
                libelle = COALESCE($2, libelle),
                periodicite_controle = COALESCE($3, periodicite_controle),
                modif_date = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.libelle)
        .bind(data.periodicite_controle)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("EPI type {} not found", id)))
    }

    /// Fails with a reference violation while equipment still uses the type
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM types_epi WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("EPI type {} not found", id)));
        }
        Ok(())
    }
}
