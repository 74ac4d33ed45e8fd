//! Repository layer for database operations

pub mod controles;
pub mod epis;
pub mod gestionnaires;
pub mod statuts;
pub mod types_epi;

use sqlx::{Pool, Postgres};

pub use epis::EpiStore;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub epis: epis::EpisRepository,
    pub types_epi: types_epi::TypesEpiRepository,
    pub controles: controles::ControlesRepository,
    pub gestionnaires: gestionnaires::GestionnairesRepository,
    pub statuts: statuts::StatutsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            epis: epis::EpisRepository::new(pool.clone()),
            types_epi: types_epi::TypesEpiRepository::new(pool.clone()),
            controles: controles::ControlesRepository::new(pool.clone()),
            gestionnaires: gestionnaires::GestionnairesRepository::new(pool.clone()),
            statuts: statuts::StatutsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database, used by the readiness check
    pub async fn ping(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
