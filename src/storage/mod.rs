pub mod repository;
pub mod sqlite;

pub use repository::EmployeeRepository;
pub use sqlite::SqliteEmployeeRepository;
