//! Operator-facing logging setup.
//!
//! Diagnostics produced while resolving declarations are part of the session
//! output and are not routed through here. This only configures the
//! `tracing` subscriber that receives the resolver's structured events.

use std::io;

use libdecl_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter, e.g. `libdecl_resolver=debug`.
pub const LOG_ENV_VAR: &str = "LIBDECL_LOG";

/// Filter used when [`LOG_ENV_VAR`] is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from a raw directive string, or the default when `None`.
///
/// # Errors
///
/// Returns an error if the directives cannot be parsed.
pub fn filter_from(raw: Option<&str>) -> Result<EnvFilter> {
    match raw {
        Some(v) => EnvFilter::try_new(v).map_err(|e| {
            Error::new(ErrorKind::Internal(format!(
                "failed to parse ${LOG_ENV_VAR} as a filter: {e}"
            )))
        }),
        None => Ok(EnvFilter::new(DEFAULT_FILTER)),
    }
}

/// Installs a global subscriber writing to `writer`.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a global subscriber is
/// already installed.
pub fn init_logging_for_writer<W>(writer: W) -> Result<()>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let raw = std::env::var(LOG_ENV_VAR).ok();
    let filter = filter_from(raw.as_deref())?;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Internal(format!("failed to install logger: {e}"))))
}

/// Installs a global subscriber writing to stderr.
///
/// # Errors
///
/// See [`init_logging_for_writer`].
pub fn init_logging() -> Result<()> {
    init_logging_for_writer(io::stderr)
}
