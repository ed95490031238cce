use crate::config::TelemetryConfig;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Log targets owned by this workspace. A bare level such as `debug` applies to these only.
const WORKSPACE_TARGETS: [&str; 2] = ["talent_match", "talent_match_cli"];
/// Level applied to dependencies when the configured value is a bare level.
const DEPENDENCY_LEVEL: &str = "warn";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },
    #[error("unable to install tracing subscriber: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Install the global subscriber. Events go to stderr so command output on stdout stays
/// machine-readable. `RUST_LOG` wins over the configured level when it parses.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

fn build_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(filter_directives(&config.log_level)).map_err(|source| {
        TelemetryError::EnvFilter {
            value: config.log_level.clone(),
            source,
        }
    })
}

/// Expands a bare level into per-target directives. Anything that already names a target
/// or lists several directives is used as written.
fn filter_directives(log_level: &str) -> String {
    let log_level = log_level.trim();
    if log_level.contains('=') || log_level.contains(',') {
        return log_level.to_string();
    }

    let mut directives = DEPENDENCY_LEVEL.to_string();
    for target in WORKSPACE_TARGETS {
        directives.push_str(&format!(",{target}={log_level}"));
    }
    directives
}
