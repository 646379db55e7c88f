use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Verbose mode opens up this crate's
/// debug events; otherwise only warnings reach stderr, so piped output stays clean.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "innumerati=debug,warn"
    } else {
        "warn"
    }
}

/// Initialize structured logging on stderr; `RUST_LOG` takes precedence over `verbose`
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr = std::io::stderr();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(stderr.is_terminal())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!(verbose, "Logging initialized");
    Ok(())
}

/// Log a successful conversion
pub fn log_conversion(operation: &str, input: &str, output: &str) {
    tracing::debug!(
        operation = operation,
        input = input,
        output = output,
        "Conversion completed"
    );
}

/// Log a failed conversion; caller mistakes and internal faults log at different levels
pub fn log_conversion_failure(operation: &str, input: &str, error: &anyhow::Error) {
    let internal = error
        .downcast_ref::<crate::error::NumeralError>()
        .is_some_and(|e| !e.is_caller_error());
    if internal {
        tracing::error!(
            operation = operation,
            input = input,
            error = %error,
            "Conversion produced an inconsistent result"
        );
    } else {
        tracing::debug!(
            operation = operation,
            input = input,
            error = %error,
            "Conversion rejected input"
        );
    }
}

/// Log where settings were loaded from
pub fn log_settings_loaded(path: Option<&std::path::Path>) {
    match path {
        Some(path) => tracing::debug!(path = %path.display(), "Settings loaded"),
        None => tracing::debug!("No settings file found, using defaults"),
    }
}
