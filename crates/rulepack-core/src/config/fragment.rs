//! Configuration fragments and override blocks

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::settings::RuleTable;

/// A named, composable bundle of rule settings and related metadata
///
/// Fragments are immutable literal data, fully defined at authoring time.
/// The composer flattens a fragment's `extends` chain into a single
/// fragment with no remaining inheritance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Fragment {
    /// Fragment name, used in error reporting and cycle detection
    pub name: String,

    /// Fragments to merge, in order, before this fragment's own settings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<Extend>,

    /// Plugin names referenced by this fragment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,

    /// Parser reference; the composer only records the name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Free-form parser settings (language version, source type, ...)
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parser_options: IndexMap<String, Value>,

    /// Named environment toggles
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub env: IndexMap<String, bool>,

    /// Free-form shared settings keyed by plugin namespace
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub settings: IndexMap<String, Value>,

    /// Rule settings declared by this fragment itself
    #[serde(default, skip_serializing_if = "RuleTable::is_empty")]
    pub rules: RuleTable,
}

impl Fragment {
    /// Create an empty fragment with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One entry of a fragment's `extends` list
///
/// Local fragments are carried inline; fragments published by external
/// plugins are referenced by name and resolved through a
/// [`FragmentRegistry`](super::registry::FragmentRegistry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum Extend {
    /// Reference to a registered fragment, e.g. `eslint:recommended`
    Named(String),
    /// A fragment carried inline
    Inline(Fragment),
}

impl Extend {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<Fragment> for Extend {
    fn from(fragment: Fragment) -> Self {
        Self::Inline(fragment)
    }
}

/// A rule-setting patch scoped to files matching the given glob patterns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverrideBlock {
    /// Glob patterns selecting the files this block applies to
    pub files: Vec<String>,

    /// Parser override for matching files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Parser settings; same-named keys replace base values wholesale
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parser_options: IndexMap<String, Value>,

    /// Rule settings that apply only to matching files
    #[serde(default, skip_serializing_if = "RuleTable::is_empty")]
    pub rules: RuleTable,
}

/// The authored root of a shareable configuration: a fragment plus its
/// per-file-pattern override blocks, in declared order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SharedConfig {
    #[serde(flatten)]
    pub fragment: Fragment,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<OverrideBlock>,
}

impl SharedConfig {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            fragment,
            overrides: Vec::new(),
        }
    }
}
