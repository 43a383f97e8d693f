//! Librarium Library Catalog Service
//!
//! A Rust REST service exposing CRUD operations on book records over HTTP,
//! backed by PostgreSQL. Every store operation runs inside a transaction
//! with guaranteed commit-or-rollback semantics (see `repository::tx`).

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
