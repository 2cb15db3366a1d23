//! Tracing initialization and subscriber setup.

use crate::infrastructure::paths::expand_tilde;
use crate::Config;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events using `RUST_LOG` if set, else `config.trace_level`,
///    else `"info"`
/// 2. Formats them with `tracing-subscriber`'s `fmt` layer
/// 3. Writes to `config.log_file` (appending) or to stderr
///
/// # Initialization Behavior
///
/// - Creates the log file's parent directory if needed
/// - Falls back to stderr if the log file cannot be opened
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use blogview::observability::init_tracing;
/// use blogview::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    let log_file = config.log_file.as_deref().map(expand_tilde).and_then(|path| {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new().create(true).append(true).open(&path).ok()
    });

    let _ = match log_file {
        Some(file) => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .try_init(),
        None => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
    };
}
