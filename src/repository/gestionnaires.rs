//! Managers repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::gestionnaire::{CreateGestionnaire, Gestionnaire, UpdateGestionnaire},
};

#[derive(Clone)]
pub struct GestionnairesRepository {
    pool: Pool<Postgres>,
}

impl GestionnairesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> AppResult<Vec<Gestionnaire>> {
        let rows = sqlx::query_as::<_, Gestionnaire>(
            "SELECT * FROM gestionnaires ORDER BY nom, prenom"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Gestionnaire> {
        sqlx::query_as::<_, Gestionnaire>("SELECT * FROM gestionnaires WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Manager {} not found", id)))
    }

    pub async fn create(&self, data: &CreateGestionnaire) -> AppResult<Gestionnaire> {
        let row = sqlx::query_as::<_, Gestionnaire>(
            r#"
            INSERT INTO gestionnaires (nom, prenom, email)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.nom)
        .bind(&data.prenom)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn update(&self, id: i32, data: &UpdateGestionnaire) -> AppResult<Gestionnaire> {
        sqlx::query_as::<_, Gestionnaire>(
            r#"
            UPDATE gestionnaires SET
                nom = COALESCE($2, nom),
                prenom = COALESCE($3, prenom),
                email = COALESCE($4, email),
                modif_date = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&data.nom)
        .bind(&data.prenom)
        .bind(&data.email)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Manager {} not found", id)))
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM gestionnaires WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Manager {} not found", id)));
        }
        Ok(())
    }
}
