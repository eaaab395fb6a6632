//! # Domain Configuration
//!
//! Tuning knobs for an [`ExecutionDomain`](crate::ExecutionDomain).
//! Loaded once at construction and validated before any thread spawns.

use crate::error::DomainError;

/// Configuration for an execution domain.
#[derive(Clone, Debug)]
pub struct DomainConfig {
    /// Number of reader worker threads. Reads may overlap up to this count.
    pub reader_threads: usize,
    /// Label attached to tracing events from this domain.
    pub label: String,
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            // Enough overlap to demonstrate parallel reads without
            // oversubscribing small machines.
            reader_threads: 4,
            label: "corral-domain".to_string(),
        }
    }
}

impl DomainConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::ZeroReaderThreads`] if `reader_threads` is 0.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.reader_threads == 0 {
            return Err(DomainError::ZeroReaderThreads);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DomainConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_readers_rejected() {
        let config = DomainConfig {
            reader_threads: 0,
            ..DomainConfig::default()
        };
        assert_eq!(config.validate(), Err(DomainError::ZeroReaderThreads));
    }
}
