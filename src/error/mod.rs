//! Error types for the removal tool.
//!
//! `AppError` is the top-level error returned while preparing a session (reading
//! configuration, prompting the user, building the HTTP client). Errors raised by the
//! Discord API clients are `ApiError`s; the removal engine never returns them directly
//! but converts them into a `RemovalStatus` according to the skip-on-failure policy.

pub mod api;
pub mod config;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError};

/// Top-level application error type.
///
/// Aggregates every error that can abort the process before or outside of the removal
/// loop. `main` prints it as a single `ERROR:` line and exits non-zero.
#[derive(Error, Debug)]
pub enum AppError {
    /// Invalid or missing configuration value.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or HTTP client error outside of the removal loop.
    ///
    /// Only raised while constructing the HTTP client; errors inside the loop are
    /// handled by the engine.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Failure reading a prompt answer from stdin or writing the prompt to stdout.
    #[error("Failed to read input: {0}")]
    IoErr(#[from] std::io::Error),
}
