//! Environment lookup abstraction injected into the resolver.

use std::collections::HashMap;

/// Read-only lookup of environment variables by name.
pub trait Environment {
    /// The value of `key`, or `None` when unset.
    fn get(&self, key: &str) -> Option<String>;
}

/// The live process environment. Each lookup re-reads the current snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        // Unset and non-unicode values are both treated as absent.
        std::env::var(key).ok()
    }
}

/// An in-memory environment backed by an owned map.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// An empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the environment for chaining.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
