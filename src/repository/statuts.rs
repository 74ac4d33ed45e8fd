//! Inspection statuses repository

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::statut::{SaveStatutControle, StatutControle},
};

#[derive(Clone)]
pub struct StatutsRepository {
    pool: Pool<Postgres>,
}

impl StatutsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<StatutControle>> {
        let rows = sqlx::query_as::<_, StatutControle>(
            "SELECT id, libelle FROM statuts_controle ORDER BY id"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<StatutControle> {
        sqlx::query_as::<_, StatutControle>("SELECT id, libelle FROM statuts_controle WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inspection status {} not found", id)))
    }

    pub async fn create(&self, data: &SaveStatutControle) -> AppResult<StatutControle> {
        let row = sqlx::query_as::<_, StatutControle>(
            "INSERT INTO statuts_controle (libelle) VALUES ($1) RETURNING id, libelle",
        )
        .bind(&data.libelle)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &SaveStatutControle) -> AppResult<StatutControle> {
        sqlx::query_as::<_, StatutControle>(
            "UPDATE statuts_controle SET libelle = $2 WHERE id = $1 RETURNING id, libelle",
        )
        .bind(id)
        .bind(&data.libelle)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Inspection status {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM statuts_controle WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inspection status {} not found", id)));
        }
        Ok(())
    }
}
