//! Opt-in log output for `linscale`.
//!
//! Scale calculation reports through `tracing` events only. Hosts that already
//! run a subscriber need nothing from this module.

/// Installs a compact stderr subscriber filtered by `RUST_LOG` (default `info`).
///
/// Only available with the `telemetry` feature; without it this is a no-op.
/// Returns whether a subscriber was installed by this call.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
