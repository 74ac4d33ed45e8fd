//! Equipment repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::epi::{CreateEpi, Epi, EpiQuery, EpiRow, UpdateEpi},
};

/// Equipment joined with its type; `dernier_controle` is the latest inspection date.
const EPI_SELECT: &str = r#"
    SELECT e.id, e.identifiant_perso, e.marque, e.modele, e.date_mise_service,
           (SELECT MAX(c.date_controle) FROM controles c WHERE c.epi_id = e.id) AS dernier_controle,
           e.periodicite_controle, e.type_epi_id,
           t.libelle AS type_libelle,
           t.periodicite_controle AS type_periodicite_controle,
           e.crea_date, e.modif_date
    FROM epis e
    LEFT JOIN types_epi t ON t.id = e.type_epi_id
"#;

/// Data access for equipment records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EpiStore: Send + Sync {
    async fn list(&self, query: &EpiQuery) -> AppResult<Vec<Epi>>;
    async fn get_by_id(&self, id: i32) -> AppResult<Epi>;
    async fn create(&self, data: &CreateEpi) -> AppResult<Epi>;
    async fn update(&self, id: i32, data: &UpdateEpi) -> AppResult<Epi>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[derive(Clone)]
pub struct EpisRepository {
    pool: Pool<Postgres>,
}

impl EpisRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EpiStore for EpisRepository {
    /// List equipment ordered by personal identifier
    async fn list(&self, query: &EpiQuery) -> AppResult<Vec<Epi>> {
        let sql = format!(
            "{} WHERE ($1::int IS NULL OR e.type_epi_id = $1) ORDER BY e.identifiant_perso, e.id",
            EPI_SELECT
        );
        let rows = sqlx::query_as::<_, EpiRow>(&sql)
            .bind(query.type_epi_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Epi::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Epi> {
        let sql = format!("{} WHERE e.id = $1", EPI_SELECT);
        sqlx::query_as::<_, EpiRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(Epi::from)
            .ok_or_else(|| AppError::NotFound(format!("EPI {} not found", id)))
    }

    async fn create(&self, data: &CreateEpi) -> AppResult<Epi> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO epis (identifiant_perso, marque, modele, date_mise_service, periodicite_controle, type_epi_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&data.identifiant_perso)
        .bind(&data.marque)
        .bind(&data.modele)
        .bind(data.date_mise_service)
        .bind(data.periodicite_controle)
        .bind(data.type_epi_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::from_write)?;

        self.get_by_id(id).await
    }

    /// Update the provided fields only
    async fn update(&self, id: i32, data: &UpdateEpi) -> AppResult<Epi> {
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.identifiant_perso, "identifiant_perso");
        add_field!(data.marque, "marque");
        add_field!(data.modele, "modele");
        add_field!(data.date_mise_service, "date_mise_service");
        add_field!(data.periodicite_controle, "periodicite_controle");
        add_field!(data.type_epi_id, "type_epi_id");

        let query = format!(
            "UPDATE epis SET {} WHERE id = ${} RETURNING id",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_scalar::<_, i32>(&query).bind(Utc::now());

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.identifiant_perso);
        bind_field!(data.marque);
        bind_field!(data.modele);
        bind_field!(data.date_mise_service);
        bind_field!(data.periodicite_controle);
        bind_field!(data.type_epi_id);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::from_write)?
            .ok_or_else(|| AppError::NotFound(format!("EPI {} not found", id)))?;

        self.get_by_id(id).await
    }

    /// Delete an item; its inspections go with it
    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM epis WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("EPI {} not found", id)));
        }
        Ok(())
    }
}
