//! GestEPI
//!
//! REST JSON server tracking personal protective equipment (EPI), their
//! periodic inspections, and the equipment due for inspection soon.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod inspection;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<services::Services>,
}
