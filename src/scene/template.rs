use super::node::SceneNode;
use crate::math::transform::Transform;

/// Owns a loaded asset and stamps out independent instances of it.
///
/// Each instance carries its own transform; nothing is shared with the
/// template after [`ObjectTemplate::instantiate`] returns.
#[derive(Debug, Clone)]
pub struct ObjectTemplate {
    prototype: SceneNode,
    instances_created: usize,
}

impl ObjectTemplate {
    pub fn new(prototype: SceneNode) -> Self {
        Self {
            prototype,
            instances_created: 0,
        }
    }

    /// Produce a fresh instance placed at `transform`
    pub fn instantiate(&mut self, transform: Transform) -> SceneNode {
        self.instances_created += 1;
        let mut node = self.prototype.clone();
        node.name = format!("{} ({})", self.prototype.name, self.instances_created);
        node.transform = transform;
        node
    }

    pub fn prototype(&self) -> &SceneNode {
        &self.prototype
    }

    pub fn instances_created(&self) -> usize {
        self.instances_created
    }
}
