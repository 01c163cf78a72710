//! Module import and export hygiene rules
//!
//! Carries the `import` plugin reference and the resolver settings the
//! plugin's rules consult, alongside the rule table itself.

use indexmap::IndexMap;
use rulepack_core::config::{Fragment, RuleSetting as S};
use rulepack_core::rule_table;
use serde_json::json;

/// Import analysis rules plus the resolver settings they rely on
pub fn fragment() -> Fragment {
    Fragment {
        name: "imports".to_string(),
        env: IndexMap::from([("es6".to_string(), true)]),
        parser_options: IndexMap::from([
            ("ecmaVersion".to_string(), json!(6)),
            ("sourceType".to_string(), json!("module")),
        ]),
        plugins: vec!["import".to_string()],
        settings: IndexMap::from([
            (
                "import/resolver".to_string(),
                json!({
                    "node": {
                        "extensions": [".mjs", ".js", ".json"],
                    },
                }),
            ),
            (
                "import/extensions".to_string(),
                json!([".js", ".mjs", ".jsx"]),
            ),
            ("import/core-modules".to_string(), json!([])),
            (
                "import/ignore".to_string(),
                json!(["node_modules", "\\.(coffee|scss|css|less|hbs|svg|json)$"]),
            ),
        ]),
        rules: rule_table! {
            // Static analysis
            "import/no-unresolved" => S::error_with([json!({
                "commonjs": true,
                "caseSensitive": true,
            })]),
            "import/named" => S::error(),
            "import/default" => S::error(),
            "import/namespace" => S::error(),

            // Helpful warnings
            "import/export" => S::error(),
            "import/no-named-as-default" => S::error(),
            "import/no-named-as-default-member" => S::error(),
            "import/no-deprecated" => S::error(),
            "import/no-extraneous-dependencies" => S::error_with([json!({
                "devDependencies": [
                    "test/**",
                    "tests/**",
                    "spec/**",
                    "**/__tests__/**",
                    "**/__mocks__/**",
                    "test.{js,jsx}",
                    "test-*.{js,jsx}",
                    "**/*{.,_}{test,spec}.{js,jsx}",
                    "**/jest.config.js",
                    "**/jest.setup.js",
                    "**/vue.config.js",
                    "**/webpack.config.js",
                    "**/webpack.config.*.js",
                    "**/rollup.config.js",
                    "**/rollup.config.*.js",
                    "**/gulpfile.js",
                    "**/gulpfile.*.js",
                    "**/Gruntfile{,.js}",
                    "**/protractor.conf.js",
                    "**/protractor.conf.*.js",
                    "**/karma.conf.js",
                ],
                "optionalDependencies": false,
            })]),
            "import/no-mutable-exports" => S::error(),

            // Module systems
            "import/no-commonjs" => S::off(),
            "import/no-amd" => S::error(),
            "import/no-nodejs-modules" => S::off(),

            // Style guide
            "import/first" => S::error(),
            "import/no-duplicates" => S::error(),
            "import/no-namespace" => S::off(),
            "import/extensions" => S::error_with([
                json!("ignorePackages"),
                json!({
                    "js": "never",
                    "mjs": "never",
                    "jsx": "never",
                    "ts": "never",
                    "tsx": "never",
                }),
            ]),
            "import/order" => S::error_with([json!({
                "groups": [[
                    "builtin",
                    "external",
                    "internal",
                    "parent",
                    "sibling",
                    "index",
                ]],
                "newlines-between": "always",
                "alphabetize": {
                    "order": "asc",
                    "caseInsensitive": true,
                },
            })]),
            "import/newline-after-import" => S::error(),
            "import/prefer-default-export" => S::error(),
            "import/no-restricted-paths" => S::off(),
            "import/max-dependencies" => S::off(),
            "import/no-absolute-path" => S::error(),
            "import/no-dynamic-require" => S::error(),
            "import/no-internal-modules" => S::off(),
            "import/unambiguous" => S::off(),
            "import/no-webpack-loader-syntax" => S::error(),
            "import/no-unassigned-import" => S::off(),
            "import/no-named-default" => S::error(),
            "import/no-anonymous-default-export" => S::off(),
            "import/exports-last" => S::off(),
            "import/group-exports" => S::off(),
            "import/no-default-export" => S::off(),
            "import/no-named-export" => S::off(),
            "import/no-self-import" => S::error(),
            // Unlimited depth; JSON has no Infinity, null means no cap
            "import/no-cycle" => S::error_with([json!({ "maxDepth": null })]),
            "import/no-useless-path-segments" => S::error_with([json!({
                "commonjs": true,
            })]),
            "import/dynamic-import-chunkname" => S::off(),
            "import/no-relative-parent-imports" => S::error(),
            "import/no-unused-modules" => S::off(),
        },
        ..Fragment::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imports_fragment_shape() {
        let fragment = fragment();
        assert_eq!(fragment.name, "imports");
        assert_eq!(fragment.plugins, ["import"]);
        assert_eq!(fragment.env.get("es6"), Some(&true));
        assert_eq!(fragment.parser_options.get("sourceType"), Some(&json!("module")));
        assert_eq!(fragment.settings.len(), 4);
        assert_eq!(fragment.rules.len(), 40);
    }

    #[test]
    fn test_resolver_settings() {
        let fragment = fragment();
        let resolver = fragment.settings.get("import/resolver").unwrap();
        assert_eq!(resolver["node"]["extensions"], json!([".mjs", ".js", ".json"]));
    }

    #[test]
    fn test_spot_check_settings() {
        let fragment = fragment();
        assert_eq!(fragment.rules.get("import/named"), Some(&S::error()));
        assert!(fragment.rules.get("import/no-commonjs").unwrap().is_off());
        assert_eq!(
            fragment.rules.get("import/extensions").unwrap().options().first(),
            Some(&json!("ignorePackages"))
        );
    }
}
