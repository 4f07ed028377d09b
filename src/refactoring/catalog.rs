//! # Refactor Registry
//!
//! Name-keyed storage of refactor providers, iterable in registration order.
//!
//! A registry is an ordinary value owned by the host. It is populated during
//! startup through `&mut self` and then only read (`&self`) by dispatchers,
//! so no locking is involved.

use super::types::{Refactor, RefactorInfo};
use crate::errors::RefactorError;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of refactor providers keyed by name
#[derive(Default, Clone)]
pub struct RefactorRegistry {
    /// Insertion-ordered map of provider name to provider
    refactors: IndexMap<String, Arc<dyn Refactor>>,
}

impl RefactorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its name.
    ///
    /// A provider already registered under the same name is replaced. The
    /// name keeps its original position in registration order.
    pub fn register<R: Refactor + 'static>(&mut self, refactor: R) {
        self.register_arc(Arc::new(refactor));
    }

    /// Register a shared provider. Same overwrite semantics as [`register`](Self::register).
    pub fn register_arc(&mut self, refactor: Arc<dyn Refactor>) {
        let name = refactor.name().to_string();
        if let Some(previous) = self.refactors.insert(name.clone(), refactor) {
            warn!(
                "Refactor '{}' was already registered ({}); replacing it",
                name,
                previous.description()
            );
        } else {
            debug!("Registered refactor '{}'", name);
        }
    }

    /// Register a provider, failing if its name is already taken. The
    /// registry is left unchanged on error.
    pub fn try_register<R: Refactor + 'static>(
        &mut self,
        refactor: R,
    ) -> Result<(), RefactorError> {
        self.try_register_arc(Arc::new(refactor))
    }

    pub fn try_register_arc(&mut self, refactor: Arc<dyn Refactor>) -> Result<(), RefactorError> {
        match self.refactors.entry(refactor.name().to_string()) {
            Entry::Occupied(entry) => Err(RefactorError::DuplicateRefactor(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!("Registered refactor '{}'", entry.key());
                entry.insert(refactor);
                Ok(())
            }
        }
    }

    /// Look up a provider by exact name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Refactor>> {
        self.refactors.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.refactors.contains_key(name)
    }

    /// Providers in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Refactor>> {
        self.refactors.values()
    }

    /// Registered names in registration order
    pub fn names(&self) -> Vec<String> {
        self.refactors.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.refactors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refactors.is_empty()
    }

    /// Name and description of every provider, in registration order
    pub fn list_refactors(&self) -> Vec<RefactorInfo> {
        self.iter()
            .map(|refactor| RefactorInfo {
                name: refactor.name().to_string(),
                description: refactor.description().to_string(),
            })
            .collect()
    }

    /// Get a summary of the registry for display
    pub fn summary(&self) -> String {
        let mut summary = format!("Refactor Registry: {} refactors\n", self.refactors.len());
        for (name, refactor) in &self.refactors {
            summary.push_str(&format!("  - {} ({})\n", name, refactor.description()));
        }
        summary
    }
}

impl fmt::Debug for RefactorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefactorRegistry")
            .field("refactors", &self.refactors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<R: Refactor + 'static> Extend<R> for RefactorRegistry {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for refactor in iter {
            self.register(refactor);
        }
    }
}

impl FromIterator<Arc<dyn Refactor>> for RefactorRegistry {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Refactor>>>(iter: I) -> Self {
        let mut registry = Self::new();
        for refactor in iter {
            registry.register_arc(refactor);
        }
        registry
    }
}
