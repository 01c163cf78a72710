//! Fragment registries
//!
//! Named `extends` entries (e.g. `eslint:recommended`) are resolved through
//! a registry supplied by the assembling process. The composer never reaches
//! into ambient state: the caller builds the registry and passes it in.

use indexmap::IndexMap;

use super::fragment::Fragment;

/// Resolves fragment names to fragments during composition
pub trait FragmentRegistry {
    /// Look up a fragment by name; `None` means the reference is unresolved
    fn get(&self, name: &str) -> Option<&Fragment>;
}

/// Insertion-ordered, in-memory registry
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    fragments: IndexMap<String, Fragment>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fragment under its own name, replacing any previous
    /// fragment with the same name
    pub fn register(&mut self, fragment: Fragment) {
        self.fragments.insert(fragment.name.clone(), fragment);
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, fragment: Fragment) -> Self {
        self.register(fragment);
        self
    }

    /// Names of the registered fragments, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl FragmentRegistry for InMemoryRegistry {
    fn get(&self, name: &str) -> Option<&Fragment> {
        self.fragments.get(name)
    }
}
