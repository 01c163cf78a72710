//! Composed configurations and per-file resolution
//!
//! Override blocks are matched against candidate file paths with the glob
//! conventions of the host ecosystem: a pattern containing `/` is matched
//! against the whole path with literal separators (`*` stays inside one
//! segment, `**` crosses segments), while a bare pattern such as `*.ts`
//! matches the final path component.

use glob::{MatchOptions, Pattern};

use crate::error::RulepackError;
use crate::result::Result;

use super::fragment::{Fragment, OverrideBlock};

/// The effective configuration: a fully flattened base fragment plus the
/// authored override blocks with their glob patterns pre-compiled
///
/// Derived once per consuming process by [`compose`](super::compose::compose)
/// and never mutated afterward, so it may be read concurrently without
/// synchronization.
#[derive(Debug, Clone)]
pub struct Configuration {
    base: Fragment,
    overrides: Vec<CompiledOverride>,
}

impl Configuration {
    pub(crate) fn new(base: Fragment, overrides: Vec<CompiledOverride>) -> Self {
        Self { base, overrides }
    }

    /// The flattened base fragment, with no remaining `extends`
    pub fn base(&self) -> &Fragment {
        &self.base
    }

    /// The override blocks, in declared order
    pub fn overrides(&self) -> impl Iterator<Item = &OverrideBlock> {
        self.overrides.iter().map(|compiled| &compiled.block)
    }

    /// Compute the effective fragment for one file path
    ///
    /// Matching blocks are applied in declared order, each later match
    /// overwriting same-keyed entries from the base or from earlier
    /// matches; declared order is the only tie-break, never pattern
    /// specificity. A path matching no block yields the base unchanged.
    /// The configuration itself is never mutated.
    pub fn resolve_for_file(&self, file_path: &str) -> Fragment {
        let mut effective = self.base.clone();
        for compiled in &self.overrides {
            if compiled.matches(file_path) {
                tracing::trace!(
                    path = file_path,
                    patterns = ?compiled.block.files,
                    "applying override block"
                );
                effective.merge_override(&compiled.block);
            }
        }
        effective
    }
}

/// An override block with its file patterns compiled
///
/// Patterns are compiled during composition so that resolution is
/// infallible: a malformed pattern fails the whole `compose` call instead
/// of surfacing mid-run on a per-file basis.
#[derive(Debug, Clone)]
pub(crate) struct CompiledOverride {
    pub(crate) block: OverrideBlock,
    patterns: Vec<Pattern>,
}

const PATH_MATCH: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

impl CompiledOverride {
    pub(crate) fn compile(block: &OverrideBlock) -> Result<Self> {
        let patterns = block
            .files
            .iter()
            .map(|raw| {
                Pattern::new(raw)
                    .map_err(|source| RulepackError::malformed_file_pattern(raw, source))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            block: block.clone(),
            patterns,
        })
    }

    pub(crate) fn matches(&self, file_path: &str) -> bool {
        let file_name = file_path.rsplit('/').next().unwrap_or(file_path);
        self.block
            .files
            .iter()
            .zip(&self.patterns)
            .any(|(raw, pattern)| {
                if raw.contains('/') {
                    pattern.matches_with(file_path, PATH_MATCH)
                } else {
                    pattern.matches(file_name)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::RuleSetting;
    use crate::rule_table;

    fn base_with(rules: crate::config::RuleTable) -> Fragment {
        Fragment {
            name: "base".to_string(),
            rules,
            ..Fragment::default()
        }
    }

    fn compiled(block: OverrideBlock) -> CompiledOverride {
        CompiledOverride::compile(&block).unwrap()
    }

    #[test]
    fn test_override_precedence_for_matching_file() {
        let config = Configuration::new(
            base_with(rule_table! { "no-plusplus" => RuleSetting::error() }),
            vec![compiled(OverrideBlock {
                files: vec!["*.ts".to_string()],
                rules: rule_table! { "no-plusplus" => RuleSetting::off() },
                ..OverrideBlock::default()
            })],
        );

        let ts = config.resolve_for_file("src/x.ts");
        assert!(ts.rules.get("no-plusplus").unwrap().is_off());

        let js = config.resolve_for_file("src/x.js");
        assert_eq!(js.rules.get("no-plusplus"), Some(&RuleSetting::error()));
    }

    #[test]
    fn test_no_match_yields_base_unchanged() {
        let config = Configuration::new(
            base_with(rule_table! { "semi" => RuleSetting::error() }),
            vec![compiled(OverrideBlock {
                files: vec!["*.tsx".to_string()],
                rules: rule_table! { "semi" => RuleSetting::off() },
                ..OverrideBlock::default()
            })],
        );

        assert_eq!(config.resolve_for_file("lib/a.js"), *config.base());
    }

    #[test]
    fn test_last_declared_match_wins() {
        let config = Configuration::new(
            base_with(crate::config::RuleTable::new()),
            vec![
                compiled(OverrideBlock {
                    files: vec!["*.ts".to_string()],
                    rules: rule_table! { "r" => RuleSetting::warn() },
                    ..OverrideBlock::default()
                }),
                compiled(OverrideBlock {
                    files: vec!["*.ts".to_string()],
                    rules: rule_table! { "r" => RuleSetting::error() },
                    ..OverrideBlock::default()
                }),
            ],
        );

        let effective = config.resolve_for_file("src/x.ts");
        assert_eq!(effective.rules.get("r"), Some(&RuleSetting::error()));
    }

    #[test]
    fn test_resolution_never_mutates_configuration() {
        let config = Configuration::new(
            base_with(rule_table! { "no-shadow" => RuleSetting::error() }),
            vec![compiled(OverrideBlock {
                files: vec!["*.ts".to_string()],
                rules: rule_table! { "no-shadow" => RuleSetting::off() },
                ..OverrideBlock::default()
            })],
        );
        let before = config.base.clone();

        let ts = config.resolve_for_file("a.ts");
        let js = config.resolve_for_file("a.js");

        assert_eq!(config.base, before);
        assert!(ts.rules.get("no-shadow").unwrap().is_off());
        assert_eq!(js.rules.get("no-shadow"), Some(&RuleSetting::error()));
    }

    #[test]
    fn test_bare_pattern_matches_file_name_in_any_directory() {
        let block = compiled(OverrideBlock {
            files: vec!["*.js".to_string()],
            ..OverrideBlock::default()
        });

        assert!(block.matches("index.js"));
        assert!(block.matches("deeply/nested/dir/index.js"));
        assert!(!block.matches("index.ts"));
    }

    #[test]
    fn test_slashed_pattern_matches_whole_path() {
        let block = compiled(OverrideBlock {
            files: vec!["src/*.ts".to_string()],
            ..OverrideBlock::default()
        });

        assert!(block.matches("src/main.ts"));
        // `*` must not cross a path separator
        assert!(!block.matches("src/nested/main.ts"));
        assert!(!block.matches("lib/main.ts"));
    }

    #[test]
    fn test_double_star_crosses_segments() {
        let block = compiled(OverrideBlock {
            files: vec!["tests/**/*.ts".to_string()],
            ..OverrideBlock::default()
        });

        assert!(block.matches("tests/unit/compose.ts"));
        assert!(block.matches("tests/unit/deep/compose.ts"));
        assert!(!block.matches("src/compose.ts"));
    }

    #[test]
    fn test_any_pattern_in_block_suffices() {
        let block = compiled(OverrideBlock {
            files: vec!["*.ts".to_string(), "*.tsx".to_string()],
            ..OverrideBlock::default()
        });

        assert!(block.matches("a.ts"));
        assert!(block.matches("a.tsx"));
        assert!(!block.matches("a.js"));
    }
}
