//! Error types for configuration composition

use thiserror::Error;

/// Main error type for configuration composition
///
/// Every variant is fatal to the `compose` call that raised it: a partial
/// or best-effort configuration is never returned.
#[derive(Debug, Error)]
pub enum RulepackError {
    /// A fragment transitively extends itself
    #[error("cyclic extends chain: {chain}")]
    CyclicExtends { chain: String },

    /// A named extends entry is unknown to the fragment registry
    #[error("unresolved fragment reference '{name}' (extended by '{referrer}')")]
    UnresolvedReference { name: String, referrer: String },

    /// A rule setting value is not one of the recognized shapes
    #[error("malformed setting for rule '{rule}': {reason}")]
    MalformedRuleSetting { rule: String, reason: String },

    /// The same rule identifier appears twice in one authored table
    #[error("duplicate definition of rule '{rule}' within a single rule table")]
    DuplicateRuleDefinition { rule: String },

    /// An override block carries a glob pattern that does not compile
    #[error("malformed file pattern '{pattern}': {source}")]
    MalformedFilePattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    CyclicExtends,
    UnresolvedReference,
    MalformedRuleSetting,
    DuplicateRuleDefinition,
    MalformedFilePattern,
}

impl RulepackError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RulepackError::CyclicExtends { .. } => ErrorKind::CyclicExtends,
            RulepackError::UnresolvedReference { .. } => ErrorKind::UnresolvedReference,
            RulepackError::MalformedRuleSetting { .. } => ErrorKind::MalformedRuleSetting,
            RulepackError::DuplicateRuleDefinition { .. } => ErrorKind::DuplicateRuleDefinition,
            RulepackError::MalformedFilePattern { .. } => ErrorKind::MalformedFilePattern,
        }
    }

    /// Create a cyclic extends error from the chain of fragment names
    /// that forms the cycle, in the order they were visited.
    pub fn cyclic_extends<I, S>(chain: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let chain = chain
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");
        Self::CyclicExtends { chain }
    }

    /// Create an unresolved reference error
    pub fn unresolved_reference(name: impl Into<String>, referrer: impl Into<String>) -> Self {
        Self::UnresolvedReference {
            name: name.into(),
            referrer: referrer.into(),
        }
    }

    /// Create a malformed rule setting error
    pub fn malformed_rule_setting(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRuleSetting {
            rule: rule.into(),
            reason: reason.into(),
        }
    }

    /// Create a duplicate rule definition error
    pub fn duplicate_rule_definition(rule: impl Into<String>) -> Self {
        Self::DuplicateRuleDefinition { rule: rule.into() }
    }

    /// Create a malformed file pattern error
    pub fn malformed_file_pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::MalformedFilePattern {
            pattern: pattern.into(),
            source,
        }
    }
}
