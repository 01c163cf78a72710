//! Later-wins merge operations
//!
//! The merge algebra shared by `extends` flattening and override
//! application: plugin names are unioned, every mapping is a shallow
//! key-wise overwrite where the later-processed layer wins, and a rule
//! setting always replaces its predecessor wholesale (options are never
//! partially merged).

use super::fragment::{Fragment, OverrideBlock};

impl Fragment {
    /// Merge a later layer into this fragment (later wins)
    ///
    /// The layer's `extends` must already be flattened; only its literal
    /// fields participate.
    pub(crate) fn merge_layer(&mut self, layer: Fragment) {
        // Set union, preserving first-seen order for determinism
        for plugin in layer.plugins {
            if !self.plugins.contains(&plugin) {
                self.plugins.push(plugin);
            }
        }

        if layer.parser.is_some() {
            self.parser = layer.parser;
        }

        // Shallow key-wise overwrite; nested values are replaced wholesale.
        // An existing key keeps its original position in the map.
        for (key, value) in layer.parser_options {
            self.parser_options.insert(key, value);
        }
        for (key, value) in layer.env {
            self.env.insert(key, value);
        }
        for (key, value) in layer.settings {
            self.settings.insert(key, value);
        }

        for (rule, setting) in layer.rules {
            self.rules.insert(rule, setting);
        }
    }

    /// This fragment's own literal fields as a mergeable layer, with the
    /// `extends` list stripped
    pub(crate) fn own_layer(&self) -> Fragment {
        Fragment {
            name: self.name.clone(),
            extends: Vec::new(),
            plugins: self.plugins.clone(),
            parser: self.parser.clone(),
            parser_options: self.parser_options.clone(),
            env: self.env.clone(),
            settings: self.settings.clone(),
            rules: self.rules.clone(),
        }
    }

    /// Merge a matching override block into this fragment (later wins)
    pub(crate) fn merge_override(&mut self, block: &OverrideBlock) {
        if block.parser.is_some() {
            self.parser = block.parser.clone();
        }
        for (key, value) in &block.parser_options {
            self.parser_options.insert(key.clone(), value.clone());
        }
        for (rule, setting) in &block.rules {
            self.rules.insert(rule.clone(), setting.clone());
        }
    }
}
