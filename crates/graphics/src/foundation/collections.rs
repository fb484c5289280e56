//! Specialized collection types

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use slotmap::{DefaultKey, SlotMap};

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<DefaultKey, T>;

/// Typed handle for type-safe resource references
///
/// Handles are generational: once the slot they point at is freed, lookups
/// with the old handle fail even if the slot is reused.
pub struct Handle<T> {
    key: DefaultKey,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Handle<T> {
    /// Create a new typed handle from a key
    pub const fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying key
    pub const fn key(&self) -> DefaultKey {
        self.key
    }
}

// Manual impls: derives would needlessly require `T: Clone`, `T: Eq`, ...
impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for Handle<T> {}

impl<T> Hash for Handle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.key).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct NotClone;

    #[test]
    fn test_handle_is_copy_without_bounds() {
        let mut map: HandleMap<NotClone> = HandleMap::new();
        let handle = Handle::<NotClone>::new(map.insert(NotClone));
        let copy = handle;

        assert_eq!(handle, copy);
        assert!(map.contains_key(copy.key()));
    }

    #[test]
    fn test_handles_hash_by_key() {
        let mut map: HandleMap<u32> = HandleMap::new();
        let a = Handle::<u32>::new(map.insert(1));
        let b = Handle::<u32>::new(map.insert(2));

        let set: HashSet<_> = [a, b, a].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
