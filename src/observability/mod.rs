//! Logging setup.
//!
//! The library only emits `tracing` events and spans; nothing is printed
//! unless the host installs a subscriber. [`init_tracing`] installs the
//! default one.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! Output goes to `log_file` when configured, stderr otherwise.

mod init;

pub use init::init_tracing;
