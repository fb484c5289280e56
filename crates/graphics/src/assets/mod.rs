//! Resource management
//!
//! [`ResourceManagers`] owns one [`ResourceManager`] per resource type. GPU
//! resources are created by the render layer and handed to the matching
//! manager, which from then on controls when they are dropped.

pub mod resource_manager;

pub use resource_manager::{ResourceError, ResourceManager};

use crate::render::{GlContext, Mesh};

/// Per-type resource managers for one GL context
pub struct ResourceManagers<C: GlContext> {
    /// Mesh resources
    pub meshes: ResourceManager<Mesh<C>>,
}

impl<C: GlContext> ResourceManagers<C> {
    /// Create empty managers
    pub fn new() -> Self {
        Self {
            meshes: ResourceManager::new("mesh"),
        }
    }

    /// Collect garbage in every manager; returns the total freed
    pub fn garbage_collect(&mut self) -> usize {
        self.meshes.garbage_collect()
    }

    /// Drop every resource in every manager
    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}

impl<C: GlContext> Default for ResourceManagers<C> {
    fn default() -> Self {
        Self::new()
    }
}
