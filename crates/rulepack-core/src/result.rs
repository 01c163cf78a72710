//! Result type alias for configuration composition

use crate::error::RulepackError;

/// Standard Result type for configuration composition
pub type Result<T> = std::result::Result<T, RulepackError>;
