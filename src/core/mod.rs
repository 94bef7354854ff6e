pub mod error;
pub mod types;
pub mod validation;

pub use error::{Result, StoreError};
pub use types::Employee;
pub use validation::{ValidationError, validate_employee};
