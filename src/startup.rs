use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::error::api::ApiError;

/// Builds the HTTP client shared by the search and delete clients.
///
/// Redirects are disabled so the `Authorization` header is never forwarded to another
/// host, and every request is bounded by a timeout so a stalled connection surfaces as
/// a transport error instead of hanging the session.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured HTTP client
/// - `Err(ApiError::Transport)` - The TLS backend could not be initialized
pub fn setup_reqwest_client() -> Result<reqwest::Client, ApiError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("discord-rm/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Installs the global tracing subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise dependencies log at `warn` and this crate at
/// `level`.
///
/// # Arguments
/// - `level` - Log level for this crate, from `--debug`/`--verbose`
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,discord_rm={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
