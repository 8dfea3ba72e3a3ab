//! Structured logging support for axis operations
//!
//! With the `tracing` feature enabled every axis operation emits a debug event
//! carrying the library key, the planned permutation and the reshape target.
//! Without it the helpers compile to no-ops.
//!
//! # Example
//!
//! ```
//! use axial_exec::tracing_support::{init_tracing, TracingConfig, TracingFormat};
//!
//! let config = TracingConfig::from_env()
//!     .with_format(TracingFormat::Compact)
//!     .with_filter("axial_exec=debug");
//! init_tracing(config)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (e.g., `RUST_LOG=axial_exec=debug`)
//! - `AXIAL_LOG_FORMAT`: `json`, `compact` or `pretty` (default: `pretty`)

use anyhow::bail;
use axial_core::{Permutation, TargetShape};
use std::str::FromStr;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "axial_exec=info,warn";

/// Output format of the subscriber installed by [`init_tracing`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    #[default]
    Pretty,
    Json,
    /// One line per event
    Compact,
}

impl FromStr for TracingFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(TracingFormat::Pretty),
            "json" => Ok(TracingFormat::Json),
            "compact" => Ok(TracingFormat::Compact),
            other => bail!("Unknown log format `{}` (expected pretty, json or compact)", other),
        }
    }
}

/// Subscriber settings for [`init_tracing`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub format: TracingFormat,
    /// `EnvFilter` directive
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            format: TracingFormat::default(),
            filter: DEFAULT_FILTER.to_string(),
            with_ansi: true,
            with_target: true,
        }
    }
}

impl TracingConfig {
    /// Defaults overridden by `AXIAL_LOG_FORMAT` and `RUST_LOG`.
    ///
    /// An unrecognized `AXIAL_LOG_FORMAT` keeps the pretty format.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(format) = std::env::var("AXIAL_LOG_FORMAT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.format = format;
        }
        if let Ok(filter) = std::env::var("RUST_LOG") {
            config.filter = filter;
        }
        config
    }

    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.with_ansi = ansi;
        self
    }
}

/// Install the global subscriber described by `config`.
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already set.
#[cfg(feature = "tracing")]
pub fn init_tracing(config: TracingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;
    let layer = match config.format {
        TracingFormat::Pretty => fmt::layer()
            .pretty()
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
        TracingFormat::Json => fmt::layer().json().with_target(config.with_target).boxed(),
        TracingFormat::Compact => fmt::layer()
            .compact()
            .with_ansi(config.with_ansi)
            .with_target(config.with_target)
            .boxed(),
    };
    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()?;
    Ok(())
}

/// Without the `tracing` feature there is nothing to install.
#[cfg(not(feature = "tracing"))]
pub fn init_tracing(_config: TracingConfig) -> anyhow::Result<()> {
    Ok(())
}

/// Record a planned axis operation before its library calls are issued
#[cfg(feature = "tracing")]
pub fn record_plan(
    operation: &str,
    library: &str,
    permutation: Option<&Permutation>,
    target: Option<&TargetShape>,
) {
    let permutation = permutation.map(|p| p.to_string()).unwrap_or_default();
    let target = target.map(|t| t.to_string()).unwrap_or_default();
    tracing::debug!(
        operation = operation,
        library = library,
        permutation = permutation.as_str(),
        target = target.as_str(),
        "axis_plan"
    );
}

#[cfg(not(feature = "tracing"))]
pub fn record_plan(
    _operation: &str,
    _library: &str,
    _permutation: Option<&Permutation>,
    _target: Option<&TargetShape>,
) {
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "tracing")]
    use crate::ops::{pack_to_axis, swap_axis};
    #[cfg(feature = "tracing")]
    use crate::symbolic::{SymbolicBinding, SymbolicTensor};

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<TracingFormat>().unwrap(), TracingFormat::Json);
        assert_eq!(" compact ".parse::<TracingFormat>().unwrap(), TracingFormat::Compact);
        assert!("xml".parse::<TracingFormat>().is_err());
    }

    #[test]
    fn test_config_builders() {
        let config = TracingConfig::default()
            .with_format(TracingFormat::Json)
            .with_filter("axial_exec=trace")
            .with_ansi(false);

        assert_eq!(config.format, TracingFormat::Json);
        assert_eq!(config.filter, "axial_exec=trace");
        assert!(!config.with_ansi);
        assert!(config.with_target);
    }

    #[test]
    fn test_record_plan_without_subscriber() {
        let perm = Permutation::identity(2);
        record_plan("swap_axis", "ndarray", Some(&perm), None);
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_operations_emit_under_installed_subscriber() {
        let config = TracingConfig::default()
            .with_format(TracingFormat::Compact)
            .with_filter("axial_exec=debug")
            .with_ansi(false);
        init_tracing(config.clone()).unwrap();

        let x = SymbolicTensor::from_sizes("x", &[2, 3, 4]);
        let y = swap_axis(&x, 0, -1, &SymbolicBinding).unwrap();
        assert_eq!(y, SymbolicTensor::from_sizes("x", &[4, 3, 2]));
        let z = pack_to_axis(&x, 0, 1, &SymbolicBinding).unwrap();
        assert_eq!(z, SymbolicTensor::from_sizes("x", &[6, 4]));

        // A second global subscriber is refused
        assert!(init_tracing(config).is_err());
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn test_bad_filter_is_rejected() {
        let config = TracingConfig::default().with_filter("axial_exec=verbose");
        assert!(init_tracing(config).is_err());
    }
}
