//! Data models for GestEPI

pub mod controle;
pub mod epi;
pub mod gestionnaire;
pub mod statut;
pub mod type_epi;

// Re-export commonly used types
pub use controle::Controle;
pub use epi::{Epi, TypeEpiRef};
pub use gestionnaire::Gestionnaire;
pub use statut::StatutControle;
pub use type_epi::TypeEpi;
