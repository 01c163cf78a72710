//! End-to-end composition tests over the real preset data
//!
//! These tests exercise the full pipeline: preset fragments, a registry
//! for the externally published extends, composition, and per-file
//! resolution through the override blocks.

use rulepack_core::config::{
    Fragment, InMemoryRegistry, OverrideBlock, RuleSetting, SharedConfig, compose,
};
use rulepack_core::rule_table;
use rulepack_presets::{imports, recommended, style, variables};
use serde_json::json;

/// Registry with one stub fragment per external extends entry
fn external_registry() -> InMemoryRegistry {
    let mut registry = InMemoryRegistry::new();
    for name in recommended::EXTERNAL_EXTENDS {
        registry.register(Fragment::named(*name));
    }
    registry
}

#[test]
fn style_and_imports_rules_both_survive_with_js_override() {
    let root = SharedConfig {
        fragment: Fragment {
            name: "root".to_string(),
            extends: vec![style::fragment().into(), imports::fragment().into()],
            ..Fragment::default()
        },
        overrides: vec![OverrideBlock {
            files: vec!["*.js".to_string()],
            rules: rule_table! {
                "@typescript-eslint/no-var-requires" => RuleSetting::off(),
            },
            ..OverrideBlock::default()
        }],
    };

    let config = compose(&root, &InMemoryRegistry::new()).unwrap();

    // The fragments define disjoint rule identifiers, so the base carries
    // every rule from both, unmodified.
    let expected = style::fragment().rules.len() + imports::fragment().rules.len();
    assert_eq!(config.base().rules.len(), expected);

    let ts = config.resolve_for_file("lib/a.ts");
    assert_eq!(ts.rules.len(), expected);
    for (rule, setting) in &config.base().rules {
        assert_eq!(ts.rules.get(rule), Some(setting));
    }

    let js = config.resolve_for_file("lib/a.js");
    assert_eq!(js.rules.len(), expected + 1);
    assert!(
        js.rules
            .get("@typescript-eslint/no-var-requires")
            .unwrap()
            .is_off()
    );
}

#[test]
fn recommended_config_composes_against_a_registry() {
    let config = compose(&recommended::config(), &external_registry()).unwrap();
    let base = config.base();

    assert!(base.extends.is_empty());
    assert_eq!(base.parser.as_deref(), Some("@typescript-eslint/parser"));
    // The root's own parserOptions outrank the imports fragment's
    assert_eq!(base.parser_options.get("ecmaVersion"), Some(&json!(2020)));
    assert_eq!(base.parser_options.get("sourceType"), Some(&json!("module")));
    // Plugin union across the imports fragment and the root itself
    assert_eq!(base.plugins, ["import", "@typescript-eslint"]);
    assert_eq!(base.env.get("es6"), Some(&true));

    // Rules from all three local fragments are present
    assert!(base.rules.contains("semi"));
    assert!(base.rules.contains("no-shadow"));
    assert!(base.rules.contains("import/order"));
    // Override blocks survive composition in declared order
    let patterns: Vec<_> = config.overrides().map(|block| block.files.clone()).collect();
    assert_eq!(patterns, [vec!["*.js".to_string()], vec!["*.ts".to_string(), "*.tsx".to_string()]]);
    let expected = style::fragment().rules.len()
        + variables::fragment().rules.len()
        + imports::fragment().rules.len();
    assert_eq!(base.rules.len(), expected);
}

#[test]
fn recommended_config_fails_without_the_external_fragments() {
    let err = compose(&recommended::config(), &InMemoryRegistry::new()).unwrap_err();
    assert_eq!(err.kind(), rulepack_core::ErrorKind::UnresolvedReference);
    assert!(err.to_string().contains("eslint:recommended"));
}

#[test]
fn typescript_files_relax_import_resolution_rules() {
    let config = compose(&recommended::config(), &external_registry()).unwrap();

    for path in ["src/app.ts", "src/view.tsx"] {
        let effective = config.resolve_for_file(path);
        assert!(effective.rules.get("import/default").unwrap().is_off());
        assert!(effective.rules.get("import/named").unwrap().is_off());
        // Parser override only applies to *.js files
        assert_eq!(effective.parser.as_deref(), Some("@typescript-eslint/parser"));
    }
}

#[test]
fn javascript_files_get_babel_parser_and_relaxed_typescript_rules() {
    let config = compose(&recommended::config(), &external_registry()).unwrap();

    let effective = config.resolve_for_file("scripts/build.js");
    assert_eq!(effective.parser.as_deref(), Some("babel-eslint"));
    assert!(
        effective
            .rules
            .get("@typescript-eslint/no-var-requires")
            .unwrap()
            .is_off()
    );
    // Import resolution stays strict outside TypeScript
    assert_eq!(
        effective.rules.get("import/named"),
        Some(&RuleSetting::error())
    );
}

#[test]
fn resolution_leaves_the_configuration_untouched() {
    let config = compose(&recommended::config(), &external_registry()).unwrap();
    let before = serde_json::to_value(config.base()).unwrap();

    let _ts = config.resolve_for_file("a.ts");
    let _js = config.resolve_for_file("a.js");

    assert_eq!(serde_json::to_value(config.base()).unwrap(), before);
}

#[test]
fn composition_of_presets_is_deterministic() {
    let first = compose(&recommended::config(), &external_registry()).unwrap();
    let second = compose(&recommended::config(), &external_registry()).unwrap();

    assert_eq!(first.base(), second.base());
    assert_eq!(
        serde_json::to_string(first.base()).unwrap(),
        serde_json::to_string(second.base()).unwrap()
    );
}

#[test]
fn preset_fragments_have_disjoint_rule_tables() {
    let style = style::fragment();
    let variables = variables::fragment();
    let imports = imports::fragment();

    for (rule, _) in &variables.rules {
        assert!(!style.rules.contains(rule), "{rule} defined twice");
    }
    for (rule, _) in &imports.rules {
        assert!(!style.rules.contains(rule), "{rule} defined twice");
        assert!(!variables.rules.contains(rule), "{rule} defined twice");
    }
}
