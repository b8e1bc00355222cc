// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the livefeed workspace.
//!
//! The feed simulator performs no I/O, so the taxonomy is small: configuration
//! problems are reported synchronously at construction time, and a torn-down
//! feed refuses new subscribers.
//!
//! # Examples
//!
//! ```
//! use livefeed_core::{FeedError, Result};
//!
//! fn check_capacity(capacity: usize) -> Result<()> {
//!     if capacity == 0 {
//!         return Err(FeedError::invalid_config("capacity must be positive"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_capacity(0).is_err());
//! ```

/// Root error type for all livefeed operations.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The supplied configuration cannot be used.
    ///
    /// Raised when building a feed from a non-positive interval, a zero
    /// capacity, an all-zero kind distribution or an unparsable config document.
    #[error("Invalid configuration: {context}")]
    InvalidConfig {
        /// What was wrong with the configuration
        context: String,
    },

    /// The feed has been torn down and no longer accepts subscribers.
    #[error("Feed is closed")]
    Closed,
}

impl FeedError {
    /// Create an invalid-configuration error with the given context
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }

    /// Returns `true` for configuration errors.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidConfig { .. })
    }
}

/// Specialized `Result` type for livefeed operations.
pub type Result<T> = core::result::Result<T, FeedError>;

/// Extension trait to attach configuration context to foreign errors.
pub trait ResultExt<T> {
    /// Map any error into [`FeedError::InvalidConfig`] with the given context.
    ///
    /// # Errors
    ///
    /// Returns `FeedError::InvalidConfig` if `self` is an error.
    fn config_context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E> ResultExt<T> for core::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FeedError::invalid_config(format!("{}: {}", context.into(), e)))
    }
}
