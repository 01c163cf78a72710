//! Configuration composition
//!
//! [`compose`] flattens an authored [`SharedConfig`] into a
//! [`Configuration`]: the `extends` chain is merged depth-first,
//! left-to-right, with the fragment's own settings applied as the final,
//! highest-priority layer. Composition is a pure function of its inputs;
//! the same graph in the same declared order always produces a structurally
//! identical result, and all failures surface here rather than during
//! per-file resolution.

use std::collections::HashMap;

use crate::error::RulepackError;
use crate::result::Result;

use super::fragment::{Extend, Fragment, SharedConfig};
use super::overrides::{CompiledOverride, Configuration};
use super::registry::FragmentRegistry;

/// Compose a shared configuration into its effective form
///
/// Fails with [`RulepackError::CyclicExtends`] when a fragment transitively
/// extends itself, [`RulepackError::UnresolvedReference`] when a named
/// extends entry is unknown to the registry, and
/// [`RulepackError::MalformedFilePattern`] when an override block carries a
/// glob pattern that does not compile.
pub fn compose(root: &SharedConfig, registry: &dyn FragmentRegistry) -> Result<Configuration> {
    tracing::debug!(fragment = %root.fragment.name, "composing configuration");

    let mut state = ComposeState {
        registry,
        flattened: HashMap::new(),
        visiting: Vec::new(),
    };
    let base = state.flatten(&root.fragment)?;

    let overrides = root
        .overrides
        .iter()
        .map(CompiledOverride::compile)
        .collect::<Result<Vec<_>>>()?;

    Ok(Configuration::new(base, overrides))
}

/// Per-call composition state: the registry, a cache of already-flattened
/// named fragments, and the stack of named references currently being
/// resolved (for cycle detection)
struct ComposeState<'r> {
    registry: &'r dyn FragmentRegistry,
    flattened: HashMap<String, Fragment>,
    visiting: Vec<String>,
}

impl<'r> ComposeState<'r> {
    /// Flatten one fragment: merge its `extends` entries in declared order,
    /// then apply the fragment's own fields as the final layer
    fn flatten(&mut self, fragment: &Fragment) -> Result<Fragment> {
        let mut merged = Fragment::named(&fragment.name);

        for extend in &fragment.extends {
            let layer = match extend {
                Extend::Inline(inner) => self.flatten(inner)?,
                Extend::Named(name) => self.flatten_named(name, &fragment.name)?,
            };
            merged.merge_layer(layer);
        }

        merged.merge_layer(fragment.own_layer());
        Ok(merged)
    }

    /// Resolve and flatten a named reference, memoizing the result
    ///
    /// Inline extends form a finite tree and cannot cycle; only named
    /// references can, so the visiting stack tracks names alone.
    fn flatten_named(&mut self, name: &str, referrer: &str) -> Result<Fragment> {
        if let Some(cached) = self.flattened.get(name) {
            tracing::trace!(fragment = name, "extends cache hit");
            return Ok(cached.clone());
        }

        if let Some(start) = self.visiting.iter().position(|visited| visited == name) {
            let chain = self
                .visiting[start..]
                .iter()
                .map(String::as_str)
                .chain(std::iter::once(name));
            return Err(RulepackError::cyclic_extends(chain));
        }

        let registry = self.registry;
        let fragment = registry
            .get(name)
            .ok_or_else(|| RulepackError::unresolved_reference(name, referrer))?;

        self.visiting.push(name.to_string());
        let flattened = self.flatten(fragment)?;
        self.visiting.pop();

        self.flattened.insert(name.to_string(), flattened.clone());
        Ok(flattened)
    }
}
