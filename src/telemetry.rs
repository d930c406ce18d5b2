//! Telemetry helpers for hosts embedding `timeseries-panel`.
//!
//! Tracing setup stays explicit and opt-in. Hosts either call one of the
//! initializers below or install their own `tracing` subscriber.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "timeseries_panel=info";

/// Initializes a compact `tracing` subscriber filtered by [`DEFAULT_TRACING_FILTER`].
///
/// See [`init_tracing_with_fallback_filter`] for the return value.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_TRACING_FILTER)
}

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Events go to stderr so stdout stays free for tool output.
/// `RUST_LOG` wins over `fallback_filter` when it is set and parses.
/// Returns `false` when the feature is disabled or the host already installed
/// a global subscriber.
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
