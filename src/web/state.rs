use std::sync::Arc;

use crate::storage::EmployeeRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn EmployeeRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }
}
