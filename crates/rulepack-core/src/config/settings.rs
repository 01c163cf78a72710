//! Rule settings and rule tables
//!
//! A rule setting is the value attached to one rule identifier: disabled,
//! enabled at a severity, or enabled at a severity with rule-specific
//! options. Option payloads are opaque to the composer; their shape belongs
//! to the rule that consumes them.

use std::borrow::Cow;

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::RulepackError;
use crate::result::Result;

/// Severity of an enabled rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Report a diagnostic without failing the run
    Warn,
    /// Report a diagnostic and fail the run
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

/// Setting attached to one rule identifier
///
/// Wire form mirrors the host ecosystem: a bare string (`"off"`, `"warn"`,
/// `"error"`) or an array whose first element is the severity and whose
/// remaining elements are opaque options, e.g. `["error", {"max": 4}]`.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleSetting {
    /// Rule is disabled
    Off,
    /// Rule is enabled at the given severity with default options
    Severity(Severity),
    /// Rule is enabled at the given severity with rule-specific options
    WithOptions(Severity, Vec<Value>),
}

impl RuleSetting {
    pub fn off() -> Self {
        Self::Off
    }

    pub fn warn() -> Self {
        Self::Severity(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::Severity(Severity::Error)
    }

    pub fn warn_with<I>(options: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::WithOptions(Severity::Warn, options.into_iter().collect())
    }

    pub fn error_with<I>(options: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Self::WithOptions(Severity::Error, options.into_iter().collect())
    }

    pub fn is_off(&self) -> bool {
        matches!(self, Self::Off)
    }

    /// Severity of the rule, or `None` when disabled
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Severity(severity) | Self::WithOptions(severity, _) => Some(*severity),
        }
    }

    /// Option payload, empty when the rule carries none
    pub fn options(&self) -> &[Value] {
        match self {
            Self::WithOptions(_, options) => options,
            _ => &[],
        }
    }

    /// Parse a setting from its wire form
    ///
    /// Accepts `"off"` / `"warn"` / `"error"`, or an array starting with one
    /// of those strings followed by opaque options. An `["off", ...]` array
    /// normalizes to [`RuleSetting::Off`]; options of a disabled rule are
    /// dead data. Anything else is a [`RulepackError::MalformedRuleSetting`].
    pub fn from_value(rule: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Self::from_keyword(rule, text, None),
            Value::Array(items) => {
                let Some(Value::String(text)) = items.first() else {
                    return Err(RulepackError::malformed_rule_setting(
                        rule,
                        format!("array form must start with a severity string, got {value}"),
                    ));
                };
                Self::from_keyword(rule, text, Some(items[1..].to_vec()))
            }
            other => Err(RulepackError::malformed_rule_setting(
                rule,
                format!("expected a severity string or an array, got {other}"),
            )),
        }
    }

    fn from_keyword(rule: &str, keyword: &str, options: Option<Vec<Value>>) -> Result<Self> {
        let severity = match keyword {
            "off" => return Ok(Self::Off),
            "warn" => Severity::Warn,
            "error" => Severity::Error,
            other => {
                return Err(RulepackError::malformed_rule_setting(
                    rule,
                    format!("unknown severity '{other}' (expected off, warn, or error)"),
                ));
            }
        };
        match options {
            Some(options) if !options.is_empty() => Ok(Self::WithOptions(severity, options)),
            _ => Ok(Self::Severity(severity)),
        }
    }
}

impl Serialize for RuleSetting {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Off => serializer.serialize_str("off"),
            Self::Severity(severity) => serializer.serialize_str(severity.as_str()),
            Self::WithOptions(severity, options) => {
                let mut seq = serializer.serialize_seq(Some(options.len() + 1))?;
                seq.serialize_element(severity.as_str())?;
                for option in options {
                    seq.serialize_element(option)?;
                }
                seq.end()
            }
        }
    }
}

impl JsonSchema for RuleSetting {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("RuleSetting")
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "array", "minItems": 1 }
            ]
        })
    }
}

/// Ordered mapping from rule identifier to [`RuleSetting`]
///
/// Keys are unique. Insertion order carries no merge semantics but is
/// preserved so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleTable(IndexMap<String, RuleSetting>);

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, rule: &str) -> Option<&RuleSetting> {
        self.0.get(rule)
    }

    pub fn contains(&self, rule: &str) -> bool {
        self.0.contains_key(rule)
    }

    /// Insert a setting, replacing any previous setting for the same rule
    ///
    /// This is the last-wins primitive used by merging. An existing key
    /// keeps its original position, so re-inserting never reorders a table.
    pub fn insert(&mut self, rule: impl Into<String>, setting: RuleSetting) -> Option<RuleSetting> {
        self.0.insert(rule.into(), setting)
    }

    /// Build a table from entries, rejecting duplicate rule identifiers
    ///
    /// Same-layer duplicates are an authoring error, not a merge case.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, RuleSetting)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (rule, setting) in entries {
            let rule = rule.into();
            if table.0.insert(rule.clone(), setting).is_some() {
                return Err(RulepackError::duplicate_rule_definition(rule));
            }
        }
        Ok(table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RuleSetting)> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl IntoIterator for RuleTable {
    type Item = (String, RuleSetting);
    type IntoIter = indexmap::map::IntoIter<String, RuleSetting>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = (&'a String, &'a RuleSetting);
    type IntoIter = indexmap::map::Iter<'a, String, RuleSetting>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for RuleTable {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RuleTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = IndexMap::<String, Value>::deserialize(deserializer)?;
        let mut table = Self::new();
        for (rule, value) in raw {
            let setting =
                RuleSetting::from_value(&rule, &value).map_err(serde::de::Error::custom)?;
            table.insert(rule, setting);
        }
        Ok(table)
    }
}

impl JsonSchema for RuleTable {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed("RuleTable")
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        IndexMap::<String, RuleSetting>::json_schema(generator)
    }
}

/// Build a [`RuleTable`] from literal entries.
///
/// Mirrors the literal-table shape of authored configuration data. Like an
/// object literal in the host ecosystem, a repeated key is last-wins; use
/// [`RuleTable::from_entries`] when duplicates must be rejected.
#[macro_export]
macro_rules! rule_table {
    () => {
        $crate::config::RuleTable::new()
    };
    ( $( $rule:expr => $setting:expr ),+ $(,)? ) => {{
        let mut table = $crate::config::RuleTable::new();
        $( table.insert($rule, $setting); )+
        table
    }};
}
