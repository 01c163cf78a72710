//! rulepack core
//!
//! Data model and composer for shareable static-analysis rule
//! configurations: fragments, extends chains, per-file override blocks,
//! and the deterministic later-wins merge that flattens them into one
//! effective configuration.

pub mod config;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use config::{
    Configuration, Extend, Fragment, FragmentRegistry, InMemoryRegistry, OverrideBlock,
    RuleSetting, RuleTable, Severity, SharedConfig, compose,
};
pub use error::{ErrorKind, RulepackError};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rulepack=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
