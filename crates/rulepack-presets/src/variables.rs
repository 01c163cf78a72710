//! Variable declaration and usage rules

use rulepack_core::config::{Fragment, RuleSetting as S};
use rulepack_core::rule_table;
use serde_json::json;

/// Browser globals that shadow common identifiers (`name`, `event`,
/// `status`, ...) and are virtually always used by accident. Referencing
/// one without an explicit `window.` qualifier is an error.
pub const CONFUSING_BROWSER_GLOBALS: &[&str] = &[
    "addEventListener",
    "blur",
    "close",
    "closed",
    "confirm",
    "defaultStatus",
    "defaultstatus",
    "event",
    "external",
    "find",
    "focus",
    "frameElement",
    "frames",
    "history",
    "innerHeight",
    "innerWidth",
    "length",
    "location",
    "locationbar",
    "menubar",
    "moveBy",
    "moveTo",
    "name",
    "onblur",
    "onerror",
    "onfocus",
    "onload",
    "onresize",
    "onunload",
    "open",
    "opener",
    "opera",
    "outerHeight",
    "outerWidth",
    "pageXOffset",
    "pageYOffset",
    "parent",
    "print",
    "removeEventListener",
    "resizeBy",
    "resizeTo",
    "screen",
    "screenLeft",
    "screenTop",
    "screenX",
    "screenY",
    "scroll",
    "scrollbars",
    "scrollBy",
    "scrollTo",
    "scrollX",
    "scrollY",
    "self",
    "status",
    "statusbar",
    "stop",
    "toolbar",
    "top",
];

/// Rules guarding variable declaration, shadowing and use
pub fn fragment() -> Fragment {
    let restricted_globals = ["isFinite", "isNaN"]
        .into_iter()
        .chain(CONFUSING_BROWSER_GLOBALS.iter().copied())
        .map(|global| json!(global));

    Fragment {
        name: "variables".to_string(),
        rules: rule_table! {
            "init-declarations" => S::off(),
            "no-catch-shadow" => S::off(),
            "no-delete-var" => S::error(),
            "no-label-var" => S::error(),
            "no-restricted-globals" => S::error_with(restricted_globals),
            "no-shadow" => S::error(),
            "no-shadow-restricted-names" => S::error(),
            "no-undef" => S::error(),
            "no-undef-init" => S::error(),
            "no-undefined" => S::error(),
            "no-unused-vars" => S::error_with([json!({
                "vars": "all",
                "args": "after-used",
                "ignoreRestSiblings": true,
            })]),
            "no-use-before-define" => S::error_with([json!({
                "functions": true,
                "classes": true,
                "variables": true,
            })]),
        },
        ..Fragment::default()
    }
}
