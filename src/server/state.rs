//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through
//! Axum's state extraction. Both fields are cheap to clone: the database
//! connection is a pool handle and the setup code service shares its code
//! through an `Arc`.

use sea_orm::DatabaseConnection;

use super::service::setup_code::SetupCodeService;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// One-time code that lets the first user register as an approved admin.
    pub setup_code_service: SetupCodeService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, setup_code_service: SetupCodeService) -> Self {
        Self {
            db,
            setup_code_service,
        }
    }
}
