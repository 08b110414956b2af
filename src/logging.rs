// SPDX-License-Identifier: MPL-2.0
//! Optional log output for hosts.
//!
//! The library only emits `tracing` events. Applications that do not set up
//! their own subscriber can call [`init`] once at startup; output goes to
//! stderr, filtered by `RUST_LOG` (`warn` when unset).

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Does nothing if one is already set.
pub fn init() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_is_harmless() {
        init();
        init();
    }
}
