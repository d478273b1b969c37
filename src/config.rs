//! Configuration for txkv
//!
//! Centralized configuration with sensible defaults.

/// Configuration for a single store instance
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Label attached to every log event emitted by the store
    pub name: String,

    // -------------------------------------------------------------------------
    // Capacity Hints
    // -------------------------------------------------------------------------
    /// Capacity preallocated for the committed map
    pub initial_capacity: usize,

    /// Capacity reserved for the staging map at each begin
    pub staging_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "txkv".to_string(),
            initial_capacity: 0,
            staging_capacity: 0,
        }
    }
}

impl StoreConfig {
    /// Create a new config builder
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }
}

/// Builder for StoreConfig
#[derive(Default)]
pub struct StoreConfigBuilder {
    config: StoreConfig,
}

impl StoreConfigBuilder {
    /// Set the store name used in log events
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the committed map's initial capacity
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the capacity reserved for staged writes per transaction
    pub fn staging_capacity(mut self, capacity: usize) -> Self {
        self.config.staging_capacity = capacity;
        self
    }

    pub fn build(self) -> StoreConfig {
        self.config
    }
}
