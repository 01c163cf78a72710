//! Formatting and naming conventions

use rulepack_core::config::{Fragment, RuleSetting as S};
use rulepack_core::rule_table;
use serde_json::json;

/// Stylistic rules: brace placement, spacing, quoting, identifier and
/// line-length conventions
pub fn fragment() -> Fragment {
    Fragment {
        name: "style".to_string(),
        rules: rule_table! {
            "array-bracket-newline" => S::off(),
            "array-element-newline" => S::error_with([json!("consistent")]),
            "array-bracket-spacing" => S::error_with([json!("always")]),
            "block-spacing" => S::error_with([json!("always")]),
            "brace-style" => S::error_with([
                json!("stroustrup"),
                json!({ "allowSingleLine": false }),
            ]),
            "camelcase" => S::error_with([json!({
                "properties": "never",
                "ignoreDestructuring": false,
            })]),
            "capitalized-comments" => S::off(),
            "comma-dangle" => S::error_with([json!({
                "arrays": "always-multiline",
                "objects": "always-multiline",
                "imports": "always-multiline",
                "exports": "always-multiline",
                "functions": "always-multiline",
            })]),
            "comma-spacing" => S::error_with([json!({
                "before": false,
                "after": true,
            })]),
            "comma-style" => S::error_with([
                json!("last"),
                json!({
                    "exceptions": {
                        "ArrayExpression": false,
                        "ArrayPattern": false,
                        "ArrowFunctionExpression": false,
                        "CallExpression": false,
                        "FunctionDeclaration": false,
                        "FunctionExpression": false,
                        "ImportDeclaration": false,
                        "ObjectExpression": false,
                        "ObjectPattern": false,
                        "VariableDeclaration": false,
                        "NewExpression": false,
                    },
                }),
            ]),
            "computed-property-spacing" => S::error_with([json!("never")]),
            "consistent-this" => S::off(),
            "eol-last" => S::error_with([json!("always")]),
            "function-call-argument-newline" => S::error_with([json!("consistent")]),
            "func-call-spacing" => S::error_with([json!("never")]),
            "func-name-matching" => S::off(),
            "func-names" => S::warn(),
            "func-style" => S::error_with([
                json!("declaration"),
                json!({ "allowArrowFunctions": true }),
            ]),
            "function-paren-newline" => S::error_with([json!("consistent")]),
            "id-blacklist" => S::off(),
            "id-length" => S::error_with([json!({
                "min": 2,
                "properties": "always",
            })]),
            "id-match" => S::off(),
            "implicit-arrow-linebreak" => S::error_with([json!("beside")]),
            "indent" => S::error_with([
                json!(4),
                json!({
                    "SwitchCase": 1,
                    "VariableDeclarator": 1,
                    "outerIIFEBody": 1,
                    "FunctionDeclaration": {
                        "parameters": 1,
                        "body": 1,
                    },
                    "FunctionExpression": {
                        "parameters": 1,
                        "body": 1,
                    },
                    "CallExpression": {
                        "arguments": 1,
                    },
                    "ArrayExpression": 1,
                    "ObjectExpression": 1,
                    "ImportDeclaration": 1,
                    "flatTernaryExpressions": false,
                    "ignoredNodes": [
                        "JSXElement",
                        "JSXElement > *",
                        "JSXAttribute",
                        "JSXIdentifier",
                        "JSXNamespacedName",
                        "JSXMemberExpression",
                        "JSXSpreadAttribute",
                        "JSXExpressionContainer",
                        "JSXOpeningElement",
                        "JSXClosingElement",
                        "JSXText",
                        "JSXEmptyExpression",
                        "JSXSpreadChild",
                    ],
                    "ignoreComments": false,
                }),
            ]),
            "jsx-quotes" => S::error_with([json!("prefer-double")]),
            "key-spacing" => S::error_with([json!({
                "beforeColon": false,
                "afterColon": true,
            })]),
            "keyword-spacing" => S::error_with([json!({
                "before": true,
                "after": true,
                "overrides": {
                    "return": { "after": true },
                    "throw": { "after": true },
                    "case": { "after": true },
                },
            })]),
            "line-comment-position" => S::off(),
            "linebreak-style" => S::error_with([json!("unix")]),
            "lines-between-class-members" => S::error_with([
                json!("always"),
                json!({ "exceptAfterSingleLine": false }),
            ]),
            "lines-around-comment" => S::off(),
            "lines-around-directive" => S::error_with([json!({
                "before": "always",
                "after": "always",
            })]),
            "max-depth" => S::error_with([json!(4)]),
            "max-len" => S::error_with([json!({
                "code": 100,
                "tabWidth": 4,
                "ignoreUrls": true,
                "ignoreComments": false,
                "ignoreRegExpLiterals": true,
                "ignoreStrings": true,
                "ignoreTemplateLiterals": true,
            })]),
            "max-lines" => S::off(),
            "max-lines-per-function" => S::error_with([json!({
                "max": 50,
                "skipBlankLines": true,
                "skipComments": true,
                "IIFEs": true,
            })]),
            "max-nested-callbacks" => S::error_with([json!(6)]),
            "max-params" => S::off(),
            "max-statements" => S::off(),
            "max-statements-per-line" => S::off(),
            "multiline-comment-style" => S::off(),
            "multiline-ternary" => S::off(),
            "new-cap" => S::error_with([json!({
                "newIsCap": true,
                "newIsCapExceptions": [],
                "capIsNew": false,
                "capIsNewExceptions": [
                    "Immutable.Map",
                    "Immutable.Set",
                    "Immutable.List",
                ],
            })]),
            "new-parens" => S::error(),
            "newline-after-var" => S::off(),
            "newline-before-return" => S::error(),
            "newline-per-chained-call" => S::error_with([json!({
                "ignoreChainWithDepth": 4,
            })]),
            "no-array-constructor" => S::error(),
            "no-bitwise" => S::error(),
            "no-continue" => S::error(),
            "no-inline-comments" => S::off(),
            "no-lonely-if" => S::error(),
            "no-mixed-operators" => S::error_with([json!({
                "groups": [
                    ["%", "**"],
                    ["%", "+"],
                    ["%", "-"],
                    ["%", "*"],
                    ["%", "/"],
                    ["/", "*"],
                    ["&", "|", "<<", ">>", ">>>"],
                    ["==", "!=", "===", "!=="],
                    ["&&", "||"],
                ],
                "allowSamePrecedence": false,
            })]),
            "no-mixed-spaces-and-tabs" => S::error(),
            "no-multi-assign" => S::error(),
            "no-multiple-empty-lines" => S::error_with([json!({
                "max": 2,
                "maxBOF": 1,
                "maxEOF": 0,
            })]),
            "no-negated-condition" => S::off(),
            "no-nested-ternary" => S::error(),
            "no-new-object" => S::error(),
            "no-plusplus" => S::error(),
            "no-restricted-syntax" => S::error_with([
                json!({
                    "selector": "ForInStatement",
                    "message": "for..in loops iterate over the entire prototype chain, which is virtually never what you want. Use Object.{keys,values,entries}, and iterate over the resulting array.",
                }),
                json!({
                    "selector": "ForOfStatement",
                    "message": "iterators/generators require regenerator-runtime, which is too heavyweight for this guide to allow them. Separately, loops should be avoided in favor of array iterations.",
                }),
                json!({
                    "selector": "LabeledStatement",
                    "message": "Labels are a form of GOTO; using them makes code confusing and hard to maintain and understand.",
                }),
                json!({
                    "selector": "WithStatement",
                    "message": "`with` is disallowed in strict mode because it makes code impossible to predict and optimize.",
                }),
            ]),
            "no-spaced-func" => S::error(),
            "no-tabs" => S::error(),
            "no-ternary" => S::off(),
            "no-trailing-spaces" => S::error_with([json!({
                "skipBlankLines": false,
                "ignoreComments": false,
            })]),
            "no-underscore-dangle" => S::error_with([json!({
                "allow": [],
                "allowAfterThis": false,
                "allowAfterSuper": false,
                "enforceInMethodNames": true,
            })]),
            "no-unneeded-ternary" => S::error_with([json!({
                "defaultAssignment": false,
            })]),
            "no-whitespace-before-property" => S::error(),
            "nonblock-statement-body-position" => S::error_with([
                json!("beside"),
                json!({ "overrides": {} }),
            ]),
            "object-curly-spacing" => S::error_with([json!("always")]),
            "object-curly-newline" => S::error_with([json!({
                "ObjectExpression": {
                    "minProperties": 4,
                    "multiline": true,
                    "consistent": true,
                },
                "ObjectPattern": {
                    "minProperties": 4,
                    "multiline": true,
                    "consistent": true,
                },
                "ImportDeclaration": {
                    "minProperties": 4,
                    "multiline": true,
                    "consistent": true,
                },
                "ExportDeclaration": {
                    "minProperties": 4,
                    "multiline": true,
                    "consistent": true,
                },
            })]),
            "object-property-newline" => S::error_with([json!({
                "allowAllPropertiesOnSameLine": true,
            })]),
            "one-var" => S::error_with([json!("never")]),
            "one-var-declaration-per-line" => S::error_with([json!("always")]),
            "operator-assignment" => S::error_with([json!("always")]),
            "operator-linebreak" => S::error_with([
                json!("before"),
                json!({ "overrides": { "=": "none" } }),
            ]),
            "padded-blocks" => S::error_with([
                json!({
                    "blocks": "never",
                    "classes": "never",
                    "switches": "never",
                }),
                json!({ "allowSingleLineBlocks": true }),
            ]),
            "padding-line-between-statements" => S::off(),
            "prefer-exponentiation-operator" => S::error(),
            "prefer-object-spread" => S::error(),
            "quote-props" => S::error_with([
                json!("as-needed"),
                json!({
                    "keywords": false,
                    "unnecessary": true,
                    "numbers": false,
                }),
            ]),
            "quotes" => S::error_with([
                json!("single"),
                json!({ "avoidEscape": true }),
            ]),
            "require-jsdoc" => S::off(),
            "semi" => S::error_with([json!("always")]),
            "semi-spacing" => S::error_with([json!({
                "before": false,
                "after": true,
            })]),
            "semi-style" => S::error_with([json!("last")]),
            "sort-keys" => S::off(),
            "sort-vars" => S::off(),
            "space-before-blocks" => S::error(),
            "space-before-function-paren" => S::error_with([json!({
                "anonymous": "always",
                "named": "never",
                "asyncArrow": "always",
            })]),
            "space-in-parens" => S::error_with([json!("never")]),
            "space-infix-ops" => S::error(),
            "space-unary-ops" => S::error_with([json!({
                "words": true,
                "nonwords": false,
                "overrides": {},
            })]),
            "spaced-comment" => S::error_with([
                json!("always"),
                json!({
                    "line": {
                        "exceptions": ["-", "+"],
                        "markers": ["=", "!"],
                    },
                    "block": {
                        "exceptions": ["-", "+"],
                        "markers": ["=", "!", ":", "::"],
                        "balanced": true,
                    },
                }),
            ]),
            "switch-colon-spacing" => S::error_with([json!({
                "after": true,
                "before": false,
            })]),
            "template-tag-spacing" => S::error_with([json!("never")]),
            "unicode-bom" => S::error_with([json!("never")]),
            "wrap-regex" => S::off(),
        },
        ..Fragment::default()
    }
}
