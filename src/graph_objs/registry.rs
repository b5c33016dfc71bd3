//! Variant registry
//!
//! Maps lower-cased type names to graph object variants. The registry is
//! immutable once built; [`Registry::global`] hands out a process-wide instance
//! built on first use, and callers that want their own can build one with
//! [`Registry::new`].

use std::collections::HashMap;
use std::sync::OnceLock;

use super::types::ObjType;
use super::GraphObject;

/// Lookup table from type name to graph object variant
#[derive(Debug, Clone)]
pub struct Registry {
    variants: HashMap<String, ObjType>,
}

impl Registry {
    /// Build a registry holding every known variant
    pub fn new() -> Self {
        let variants = ObjType::ALL
            .iter()
            .map(|t| (t.name().to_lowercase(), *t))
            .collect();
        Self { variants }
    }

    /// Shared registry, built once
    pub fn global() -> &'static Registry {
        static REGISTRY: OnceLock<Registry> = OnceLock::new();
        REGISTRY.get_or_init(Registry::new)
    }

    /// Resolve a type name, ignoring case
    pub fn resolve(&self, type_name: &str) -> Option<ObjType> {
        self.variants.get(&type_name.to_lowercase()).copied()
    }

    /// Resolve a type name and construct an empty instance of it
    pub fn construct(&self, type_name: &str) -> Option<GraphObject> {
        self.resolve(type_name).map(ObjType::empty)
    }

    /// Number of registered variants
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.variants.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
