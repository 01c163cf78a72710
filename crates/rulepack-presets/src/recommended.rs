//! The recommended root configuration
//!
//! Pulls the local fragments together with the externally published ones
//! and scopes TypeScript/JavaScript differences through override blocks.
//! The named extends (`eslint:recommended`, the `plugin:` entries) are
//! resolved by the consuming process through its
//! [`FragmentRegistry`](rulepack_core::config::FragmentRegistry).

use indexmap::IndexMap;
use rulepack_core::config::{Extend, Fragment, OverrideBlock, RuleSetting as S, SharedConfig};
use rulepack_core::rule_table;
use serde_json::json;

use crate::{imports, style, variables};

/// Names of the externally published fragments the recommended
/// configuration extends, in declared order
pub const EXTERNAL_EXTENDS: &[&str] = &[
    "eslint:recommended",
    "plugin:import/errors",
    "plugin:import/typescript",
    "plugin:import/warnings",
    "plugin:@typescript-eslint/recommended",
];

/// The recommended shareable configuration
pub fn config() -> SharedConfig {
    let mut extends: Vec<Extend> = EXTERNAL_EXTENDS
        .iter()
        .map(|name| Extend::named(*name))
        .collect();
    extends.extend([
        style::fragment().into(),
        variables::fragment().into(),
        imports::fragment().into(),
    ]);

    SharedConfig {
        fragment: Fragment {
            name: "rulepack/recommended".to_string(),
            extends,
            parser: Some("@typescript-eslint/parser".to_string()),
            parser_options: IndexMap::from([
                ("ecmaVersion".to_string(), json!(2020)),
                ("sourceType".to_string(), json!("module")),
            ]),
            plugins: vec!["@typescript-eslint".to_string(), "import".to_string()],
            ..Fragment::default()
        },
        overrides: vec![
            OverrideBlock {
                files: vec!["*.js".to_string()],
                parser: Some("babel-eslint".to_string()),
                rules: rule_table! {
                    "@typescript-eslint/explicit-function-return-type" => S::off(),
                    "@typescript-eslint/no-var-requires" => S::off(),
                },
                ..OverrideBlock::default()
            },
            OverrideBlock {
                files: vec!["*.ts".to_string(), "*.tsx".to_string()],
                rules: rule_table! {
                    "import/default" => S::off(),
                    "import/named" => S::off(),
                },
                ..OverrideBlock::default()
            },
        ],
    }
}
