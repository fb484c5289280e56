//! Resource Manager - handle-based tracking of GPU resource lifetimes
//!
//! Resources are registered once and referred to by [`Handle`]s afterwards.
//! Each entry carries a reference count:
//!
//! - `register` stores a resource with one reference;
//! - `acquire` / `release` add and remove references;
//! - a resource whose count reaches zero is *garbage*: it is no longer
//!   reachable through `get`, and the next `garbage_collect` drops it.
//!
//! Dropping is deferred to `garbage_collect` so that GL objects are deleted
//! at a point the caller chooses (typically between frames), never from
//! inside a release call made mid-frame.
//!
//! Handles are generational. A handle whose resource has been collected
//! stays invalid even after its slot is reused.

use std::fmt;

use thiserror::Error;

use crate::foundation::collections::{DefaultKey, Handle, HandleMap};

/// Resource Manager errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    /// Handle never existed here or its resource was collected
    #[error("Invalid or stale handle: {0:?}")]
    InvalidHandle(DefaultKey),

    /// All references were already released
    #[error("Resource {0:?} has no references left")]
    AlreadyReleased(DefaultKey),
}

struct Entry<T> {
    resource: T,
    ref_count: usize,
}

/// Registry of one resource type
pub struct ResourceManager<T> {
    name: &'static str,
    entries: HandleMap<Entry<T>>,
}

impl<T> ResourceManager<T> {
    /// Create an empty manager; `name` only appears in log output
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HandleMap::new(),
        }
    }

    /// Take ownership of a resource and hand out its first reference
    pub fn register(&mut self, resource: T) -> Handle<T> {
        let key = self.entries.insert(Entry {
            resource,
            ref_count: 1,
        });
        log::debug!("Registered {} resource {:?} ({} live)", self.name, key, self.len());
        Handle::new(key)
    }

    /// Borrow a live resource
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.entries
            .get(handle.key())
            .filter(|entry| entry.ref_count > 0)
            .map(|entry| &entry.resource)
    }

    /// Mutably borrow a live resource
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.entries
            .get_mut(handle.key())
            .filter(|entry| entry.ref_count > 0)
            .map(|entry| &mut entry.resource)
    }

    /// Whether the handle refers to a live resource
    pub fn contains(&self, handle: Handle<T>) -> bool {
        self.get(handle).is_some()
    }

    /// Current reference count, `None` for stale handles
    pub fn ref_count(&self, handle: Handle<T>) -> Option<usize> {
        self.entries.get(handle.key()).map(|entry| entry.ref_count)
    }

    /// Add a reference; returns the new count
    pub fn acquire(&mut self, handle: Handle<T>) -> Result<usize, ResourceError> {
        let entry = self
            .entries
            .get_mut(handle.key())
            .ok_or(ResourceError::InvalidHandle(handle.key()))?;

        if entry.ref_count == 0 {
            return Err(ResourceError::AlreadyReleased(handle.key()));
        }

        entry.ref_count += 1;
        Ok(entry.ref_count)
    }

    /// Drop a reference; returns the remaining count
    ///
    /// At zero the resource becomes garbage but is not dropped until
    /// [`garbage_collect`](Self::garbage_collect).
    pub fn release(&mut self, handle: Handle<T>) -> Result<usize, ResourceError> {
        let entry = self
            .entries
            .get_mut(handle.key())
            .ok_or(ResourceError::InvalidHandle(handle.key()))?;

        if entry.ref_count == 0 {
            return Err(ResourceError::AlreadyReleased(handle.key()));
        }

        entry.ref_count -= 1;
        if entry.ref_count == 0 {
            log::trace!("{} resource {:?} marked for collection", self.name, handle.key());
        }
        Ok(entry.ref_count)
    }

    /// Drop every resource without references; returns how many were freed
    pub fn garbage_collect(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.ref_count > 0);
        let freed = before - self.entries.len();

        if freed > 0 {
            log::debug!(
                "Collected {} {} resource(s), {} remaining",
                freed,
                self.name,
                self.entries.len()
            );
        }
        freed
    }

    /// Number of live resources
    pub fn len(&self) -> usize {
        self.entries.values().filter(|entry| entry.ref_count > 0).count()
    }

    /// Whether no live resources remain
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of released resources waiting for collection
    pub fn pending_garbage(&self) -> usize {
        self.entries.len() - self.len()
    }

    /// Iterate over live resources
    pub fn iter(&self) -> impl Iterator<Item = (Handle<T>, &T)> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.ref_count > 0)
            .map(|(key, entry)| (Handle::new(key), &entry.resource))
    }

    /// Drop every resource regardless of reference counts
    ///
    /// Used at shutdown, before the GL context goes away.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            log::info!("Releasing all {} {} resource(s)", self.entries.len(), self.name);
        }
        self.entries.clear();
    }
}

impl<T> fmt::Debug for ResourceManager<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceManager")
            .field("name", &self.name)
            .field("live", &self.len())
            .field("pending_garbage", &self.pending_garbage())
            .finish()
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
