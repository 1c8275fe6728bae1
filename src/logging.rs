use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for an embedding application or test run
///
/// `level` is a tracing filter directive (`"debug"`, `"abacus=trace"`, ...);
/// `None` keeps the default of warnings only. When `log_json` is set, events
/// are emitted as JSON lines instead of the compact human format. Output goes
/// to stderr either way.
pub fn init_tracing(level: Option<&str>, log_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = level.unwrap_or("warn");

    // Support ABACUS_LOG environment variable override
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("ABACUS_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("abacus={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
