//! Process-wide address hierarchy cache.
//!
//! The hierarchy is loaded on first access and then shared read-only behind an `Arc`. A reload
//! builds a complete new hierarchy and swaps the `Arc`; readers that already hold the previous
//! one keep using it until they drop it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use api_shared::AddressHierarchyRes;

use super::{dispatch, Hierarchy, Selection};
use crate::CoreConfig;

#[derive(Debug, Clone)]
struct Loaded {
    hierarchy: Arc<Hierarchy>,
    modified: Option<SystemTime>,
}

/// Lazily loaded, copy-on-write holder of the address hierarchy.
#[derive(Debug)]
pub struct HierarchyStore {
    source: PathBuf,
    reload_on_change: bool,
    slot: RwLock<Option<Loaded>>,
}

fn source_modified(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

impl HierarchyStore {
    /// Creates a store for `source`. Nothing is read until the first lookup.
    pub fn new(source: PathBuf, reload_on_change: bool) -> Self {
        Self {
            source,
            reload_on_change,
            slot: RwLock::new(None),
        }
    }

    pub fn from_config(cfg: &CoreConfig) -> Self {
        Self::new(
            cfg.address_hierarchy_file().to_path_buf(),
            cfg.reload_on_change(),
        )
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    fn is_current(&self, loaded: &Loaded) -> bool {
        !self.reload_on_change || loaded.modified == source_modified(&self.source)
    }

    /// Returns the current hierarchy, loading it on first use.
    ///
    /// With reload-on-change enabled, a source file whose modification time differs from the
    /// one seen at the last load is reloaded first.
    pub fn hierarchy(&self) -> Arc<Hierarchy> {
        {
            let slot = self.slot.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(loaded) = slot.as_ref().filter(|l| self.is_current(l)) {
                return loaded.hierarchy.clone();
            }
        }

        // Parse without holding the lock so readers of a current hierarchy never wait on I/O.
        let loaded = self.load();

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have swapped in a current hierarchy while we were parsing.
        if let Some(current) = slot.as_ref().filter(|l| self.is_current(l)) {
            return current.hierarchy.clone();
        }

        let hierarchy = loaded.hierarchy.clone();
        *slot = Some(loaded);
        hierarchy
    }

    /// Rebuild the hierarchy from the source file and swap it in.
    pub fn reload(&self) -> Arc<Hierarchy> {
        let loaded = self.load();
        let hierarchy = loaded.hierarchy.clone();
        *self.slot.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded);
        hierarchy
    }

    fn load(&self) -> Loaded {
        // Read the timestamp first so a write racing the parse triggers another reload.
        let modified = source_modified(&self.source);
        Loaded {
            hierarchy: Arc::new(Hierarchy::load_or_empty(&self.source)),
            modified,
        }
    }

    /// Answer a drill-down query against the current hierarchy.
    pub fn handle(
        &self,
        state: Option<&str>,
        township: Option<&str>,
        selection: Option<&Selection>,
    ) -> AddressHierarchyRes {
        dispatch::handle(&self.hierarchy(), state, township, selection)
    }
}
