//! Shareable lint-configuration model and composer
//!
//! A configuration is authored as named fragments: bundles of rule
//! settings, plugin references, parser options, environment toggles and
//! plugin-namespaced settings. Fragments inherit from other fragments
//! through an ordered `extends` list, and a root configuration adds
//! override blocks that re-specify a subset of settings for files matching
//! glob patterns.
//!
//! Composition is explicit: the caller builds the root [`SharedConfig`]
//! (and a [`FragmentRegistry`] for any named extends) and passes both to
//! [`compose`], which flattens the `extends` chain depth-first,
//! left-to-right with later-wins precedence and validates the override
//! patterns. The resulting [`Configuration`] hands out one effective
//! [`Fragment`] per analyzed file via
//! [`resolve_for_file`](Configuration::resolve_for_file).
//!
//! ```
//! use rulepack_core::config::{
//!     Fragment, InMemoryRegistry, OverrideBlock, RuleSetting, SharedConfig, compose,
//! };
//! use rulepack_core::rule_table;
//!
//! let style = Fragment {
//!     name: "style".to_string(),
//!     rules: rule_table! { "no-plusplus" => RuleSetting::error() },
//!     ..Fragment::default()
//! };
//! let root = SharedConfig {
//!     fragment: Fragment {
//!         name: "root".to_string(),
//!         extends: vec![style.into()],
//!         ..Fragment::default()
//!     },
//!     overrides: vec![OverrideBlock {
//!         files: vec!["*.ts".to_string()],
//!         rules: rule_table! { "no-plusplus" => RuleSetting::off() },
//!         ..OverrideBlock::default()
//!     }],
//! };
//!
//! let config = compose(&root, &InMemoryRegistry::new())?;
//! assert!(config.resolve_for_file("src/x.ts").rules.get("no-plusplus").unwrap().is_off());
//! assert!(!config.resolve_for_file("src/x.js").rules.get("no-plusplus").unwrap().is_off());
//! # Ok::<(), rulepack_core::RulepackError>(())
//! ```

mod compose;
mod fragment;
mod merge;
mod overrides;
mod registry;
mod settings;

pub use compose::compose;
pub use fragment::{Extend, Fragment, OverrideBlock, SharedConfig};
pub use overrides::Configuration;
pub use registry::{FragmentRegistry, InMemoryRegistry};
pub use settings::{RuleSetting, RuleTable, Severity};
