//! Logging setup built on `tracing`.
//!
//! Events go to stderr so a template printed on stdout can be piped as is. The filter comes
//! from `STACKFOLD_LOG` when set (any `EnvFilter` directive), otherwise from the verbosity
//! flag.

use crate::error::{Result, StackfoldError};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV_VAR: &str = "STACKFOLD_LOG";

/// Level used when `STACKFOLD_LOG` is unset.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn build_env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: bool, use_color: bool) -> Result<()> {
    Registry::default()
        .with(build_env_filter(verbose))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(use_color)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .map_err(|e| StackfoldError::Config(format!("Failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), "warn");
        assert_eq!(default_level(true), "debug");
    }
}
