//! rulepack presets
//!
//! The shareable rule data: `style`, `variables` and `imports` fragments,
//! and the `recommended` root configuration that composes them with the
//! externally published fragments it extends. Everything here is inert
//! literal data; the composition behavior lives in `rulepack-core`.

pub mod imports;
pub mod recommended;
pub mod style;
pub mod variables;

pub use recommended::config as recommended_config;
