//! Log subscriber for the `glaze` binary.
//!
//! Filter directives come from `GLAZE_LOG` (default `warn`). Setting
//! `GLAZE_LOG_FORMAT=json` switches to one JSON object per event. Logs go to
//! stderr so command output on stdout stays pipeable.

use std::io;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "GLAZE_LOG";
pub const LOG_FORMAT_ENV: &str = "GLAZE_LOG_FORMAT";
pub const DEFAULT_DIRECTIVES: &str = "warn";

/// Output shape of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (case-insensitive) means text.
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Build the filter, falling back to [`DEFAULT_DIRECTIVES`] when the
/// directives are missing or do not parse.
#[must_use]
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber. A second call is a no-op.
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();
    let format = LogFormat::from_env_value(std::env::var(LOG_FORMAT_ENV).ok().as_deref());
    let filter = env_filter(directives.as_deref());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false);
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if let Err(err) = result {
        tracing::debug!(%err, "log subscriber already installed");
    }
}
