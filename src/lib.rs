//! Bookly
//!
//! A small REST JSON API over an in-memory collection of books: list,
//! create, fetch, replace, merge-update and delete.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Build the state, seeding the book store when configured to
    pub fn new(config: AppConfig) -> Self {
        let repository = if config.store.seed {
            repository::Repository::seeded()
        } else {
            repository::Repository::new()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(services::Services::new(repository)),
        }
    }
}
