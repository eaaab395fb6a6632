//! # Domain Error Types
//!
//! The domain introduces no user-visible errors at runtime: it purely
//! orders and serializes tasks. The only fallible path is configuration
//! validation at construction time.

use thiserror::Error;

/// Errors that can occur when constructing an execution domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configuration requested zero reader threads.
    #[error("domain requires at least one reader thread")]
    ZeroReaderThreads,
}
