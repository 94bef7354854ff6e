// ============================================================================
// Employee Service Library
// ============================================================================
//
// CRUD HTTP service for employee records stored in a single SQLite table.
//
// Request flow: axum handler -> validator -> EmployeeRepository -> SQLite.

pub mod config;
pub mod connection;
pub mod core;
pub mod storage;
pub mod web;

// Re-export main types for convenience
pub use crate::config::ServiceConfig;
pub use crate::connection::StoreConfig;
pub use crate::core::{Employee, StoreError, ValidationError, validate_employee};
pub use crate::storage::{EmployeeRepository, SqliteEmployeeRepository};
pub use crate::web::{AppState, WebError, build_router};
