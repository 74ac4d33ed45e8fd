//! Inspections repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::controle::{Controle, ControleQuery, CreateControle, UpdateControle},
};

/// Inspections with the labels of the records they point to
const CONTROLE_SELECT: &str = r#"
    SELECT c.id, c.epi_id, c.gestionnaire_id, c.statut_id, c.date_controle, c.remarques,
           e.identifiant_perso AS epi_identifiant,
           NULLIF(CONCAT_WS(' ', g.prenom, g.nom), '') AS gestionnaire_nom,
           s.libelle AS statut_libelle,
           c.crea_date, c.modif_date
    FROM controles c
    LEFT JOIN epis e ON e.id = c.epi_id
    LEFT JOIN gestionnaires g ON g.id = c.gestionnaire_id
    LEFT JOIN statuts_controle s ON s.id = c.statut_id
"#;

#[derive(Clone)]
pub struct ControlesRepository {
    pool: Pool<Postgres>,
}

impl ControlesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List inspections, most recent first
    pub async fn list(&self, query: &ControleQuery) -> AppResult<Vec<Controle>> {
        let sql = format!(
            r#"{}
            WHERE ($1::int IS NULL OR c.epi_id = $1)
              AND ($2::int IS NULL OR c.gestionnaire_id = $2)
              AND ($3::int IS NULL OR c.statut_id = $3)
            ORDER BY c.date_controle DESC, c.id DESC"#,
            CONTROLE_SELECT
        );
        let rows = sqlx::query_as::<_, Controle>(&sql)
            .bind(query.epi_id)
            .bind(query.gestionnaire_id)
            .bind(query.statut_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Controle> {
        let sql = format!("{} WHERE c.id = $1", CONTROLE_SELECT);
        sqlx::query_as::<_, Controle>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Inspection {} not found", id)))
    }

    pub async fn create(&self, data: &CreateControle) -> AppResult<Controle> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO controles (epi_id, gestionnaire_id, statut_id, date_controle, remarques)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(data.epi_id)
        .bind(data.gestionnaire_id)
        .bind(data.statut_id)
        .bind(data.date_controle)
        .bind(&data.remarques)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)?;

        self.get_by_id(id).await
    }

    pub async fn update(&self, id: i32, data: &UpdateControle) -> AppResult<Controle> {
        sqlx::query_scalar::<_, i32>(
            r#"
            UPDATE controles SET
                epi_id = COALESCE($2, epi_id),
                gestionnaire_id = COALESCE($3, gestionnaire_id),
                statut_id = COALESCE($4, statut_id),
                date_controle = COALESCE($5, date_controle),
                remarques = COALESCE($6, remarques),
                modif_date = $7
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(data.epi_id)
        .bind(data.gestionnaire_id)
        .bind(data.statut_id)
        .bind(data.date_controle)
        .bind(&data.remarques)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from_write)?
        .ok_or_else(|| AppError::NotFound(format!("Inspection {} not found", id)))?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM controles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Inspection {} not found", id)));
        }
        Ok(())
    }
}
