//! Row builder configuration.
//!
//! Configuration may be built in code or loaded from TOML:
//!
//! ```toml
//! # Bytes reserved up front (default: derived from the schema)
//! initial_capacity = 4096
//!
//! # Largest STRING/VARBINARY payload accepted (default and ceiling: 2147483647)
//! max_value_len = 1048576
//! ```

use serde::{Deserialize, Serialize};

/// Capacity reserved when the schema's minimum row size is smaller.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Largest payload the 4-byte signed length prefix can describe.
pub const PROTOCOL_MAX_VALUE_LEN: usize = i32::MAX as usize;

fn default_max_value_len() -> usize {
    PROTOCOL_MAX_VALUE_LEN
}

/// Row builder configuration parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Bytes reserved in the buffer at construction.
    ///
    /// When unset, the schema's minimum row size is used, but never less
    /// than `DEFAULT_INITIAL_CAPACITY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_capacity: Option<usize>,

    /// Maximum STRING/VARBINARY payload length in bytes.
    #[serde(default = "default_max_value_len")]
    pub max_value_len: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            initial_capacity: None,
            max_value_len: PROTOCOL_MAX_VALUE_LEN,
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set initial buffer capacity (builder pattern).
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Set maximum variable-length payload (builder pattern).
    pub fn with_max_value_len(mut self, len: usize) -> Self {
        self.max_value_len = len;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_value_len > PROTOCOL_MAX_VALUE_LEN {
            return Err(ConfigError::MaxValueLenExceedsProtocol {
                max_value_len: self.max_value_len,
            });
        }
        Ok(())
    }

    /// Payload limit actually enforced, never above the protocol limit.
    pub fn effective_max_value_len(&self) -> usize {
        self.max_value_len.min(PROTOCOL_MAX_VALUE_LEN)
    }

    /// Parse and validate a TOML configuration.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: BuilderConfig =
            toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        tracing::debug!(
            initial_capacity = ?config.initial_capacity,
            max_value_len = config.max_value_len,
            "Loaded row builder config"
        );
        Ok(config)
    }

    /// Create a configuration for testing (small payload limit).
    pub fn for_testing() -> Self {
        BuilderConfig {
            initial_capacity: Some(64),
            max_value_len: 1024,
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Payload limit is larger than a signed 32-bit length can express.
    #[error("max_value_len {max_value_len} exceeds protocol limit of 2147483647")]
    MaxValueLenExceedsProtocol {
        /// Configured limit
        max_value_len: usize,
    },

    /// TOML could not be parsed.
    #[error("Failed to parse config: {0}")]
    Parse(String),
}
