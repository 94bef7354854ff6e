pub mod config;
pub mod pool;

pub use config::StoreConfig;
pub use pool::connect;
