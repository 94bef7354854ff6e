use std::time::Duration;

/// URL of a private in-memory SQLite database.
pub const IN_MEMORY_URL: &str = "sqlite::memory:";

/// Store connection configuration
///
/// Wraps a SQLite connection URL with pool settings.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// SQLite connection URL, e.g. `sqlite://database.db?mode=rwc`
    pub url: String,

    /// Connection acquire timeout
    pub connect_timeout: Duration,

    /// Maximum number of connections in pool
    pub max_connections: u32,

    /// Minimum number of connections in pool
    pub min_connections: u32,

    /// Connection idle timeout
    pub idle_timeout: Option<Duration>,

    /// Maximum connection lifetime
    pub max_lifetime: Option<Duration>,
}

impl StoreConfig {
    /// Create a new configuration for the given URL
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            connect_timeout: Duration::from_secs(30),
            max_connections: 5,
            min_connections: 0,
            idle_timeout: Some(Duration::from_secs(600)), // 10 minutes
            max_lifetime: Some(Duration::from_secs(1800)), // 30 minutes
        }
    }

    /// Configuration for a private in-memory database.
    ///
    /// An in-memory database vanishes with its last connection, so the pool
    /// is pinned to one connection that never idles out or expires.
    pub fn in_memory() -> Self {
        Self {
            url: IN_MEMORY_URL.to_string(),
            max_connections: 1,
            min_connections: 1,
            idle_timeout: None,
            max_lifetime: None,
            ..Self::new(IN_MEMORY_URL)
        }
    }

    /// Set maximum connections
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set minimum connections
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.url.is_empty() {
            return Err("Database URL cannot be empty".to_string());
        }

        if !self.url.starts_with("sqlite:") {
            return Err("Database URL must start with 'sqlite:'".to_string());
        }

        if self.max_connections == 0 {
            return Err("max_connections must be > 0".to_string());
        }

        if self.connect_timeout.is_zero() {
            return Err("connect_timeout must be > 0".to_string());
        }

        if self.min_connections > self.max_connections {
            return Err("min_connections cannot exceed max_connections".to_string());
        }

        if self.is_in_memory() && self.max_connections > 1 {
            return Err("in-memory databases require max_connections = 1".to_string());
        }

        Ok(())
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::in_memory()
    }
}
