// src/log.rs
//
// Thin logging front-end. Call sites use the short macros below; events go
// through `tracing` so the binary (or any embedding app) decides where they end up.

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "cfb_scrape", $($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!(target: "cfb_scrape", $($arg)*)
    };
}

/// Warn-level logging. Used for every correction applied to caller input.
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!(target: "cfb_scrape", $($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!(target: "cfb_scrape", $($arg)*)
    };
}

/// Install a stderr subscriber. `RUST_LOG` wins over `verbosity` when set.
///
/// 0 → warn, 1 → info, 2+ → debug.
#[cfg(feature = "cli")]
pub fn init(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cfb_scrape={level}")));

    // A second init (tests, embedding) is not an error worth surfacing.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
