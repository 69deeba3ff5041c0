use cgmath::Vector3;

use super::mesh::Mesh;
use crate::math::{bounds::Aabb, transform::Transform};

/// A loaded asset in the scene: named meshes sharing one transform
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub meshes: Vec<Mesh>,
    pub transform: Transform,
    pub casts_shadow: bool,
    pub visible: bool,
}

impl SceneNode {
    /// Create a node with identity transformation
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.into(),
            meshes,
            transform: Transform::identity(),
            casts_shadow: false,
            visible: true,
        }
    }

    /// Bounds of all meshes in node-local space; `None` for a node without vertices
    pub fn local_bounds(&self) -> Option<Aabb> {
        self.meshes
            .iter()
            .filter_map(Mesh::local_bounds)
            .reduce(|acc, b| acc.union(&b))
    }

    /// World-space bounds under the node's current transform
    pub fn world_bounds(&self) -> Option<Aabb> {
        self.bounds_at(&self.transform)
    }

    /// World-space bounds the node would have under `transform`.
    /// Recomputed from geometry on every call.
    pub fn bounds_at(&self, transform: &Transform) -> Option<Aabb> {
        self.local_bounds()
            .map(|local| local.transform(&transform.to_matrix()))
    }

    /// World-space bounds of a single mesh under the node's transform
    pub fn mesh_world_bounds(&self, index: usize) -> Option<Aabb> {
        self.meshes
            .get(index)
            .and_then(Mesh::local_bounds)
            .map(|local| local.transform(&self.transform.to_matrix()))
    }

    /// Shift the node so its bounding-box center sits at the origin, then pin
    /// its vertical position to `floor_y`
    pub fn center_on_floor(&mut self, floor_y: f32) {
        if let Some(bounds) = self.world_bounds() {
            let center = bounds.center();
            self.transform.position -= center;
        }
        self.transform.position.y = floor_y;
    }

    pub fn position(&self) -> Vector3<f32> {
        self.transform.position
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.transform.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::Rad;

    fn crate_box() -> SceneNode {
        let bounds = Aabb::new(Vector3::new(1.0, 2.0, 1.0), Vector3::new(3.0, 4.0, 2.0));
        SceneNode::new("crate", vec![Mesh::cuboid("crate", bounds)])
    }

    #[test]
    fn test_bounds_follow_proposed_transform() {
        let node = crate_box();
        let proposed = Transform::from_position(Vector3::new(10.0, 0.0, 0.0));
        let bounds = node.bounds_at(&proposed).unwrap();
        assert_eq!(bounds.min.x, 11.0);
        assert_eq!(bounds.max.x, 13.0);
        // the node itself did not move
        assert_eq!(node.world_bounds().unwrap().min.x, 1.0);
    }

    #[test]
    fn test_center_on_floor() {
        let mut node = crate_box();
        node.center_on_floor(0.0);
        assert_eq!(node.position(), Vector3::new(-2.0, 0.0, -1.5));
        let bounds = node.world_bounds().unwrap();
        assert_eq!(bounds.center().x, 0.0);
        assert_eq!(bounds.center().z, 0.0);
    }

    #[test]
    fn test_rotation_widens_bounds() {
        let node = SceneNode::new(
            "plank",
            vec![Mesh::cuboid(
                "plank",
                Aabb::from_center_size(Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 0.2, 0.2)),
            )],
        );
        let mut turned = Transform::identity();
        turned.set_yaw(Rad(std::f32::consts::FRAC_PI_2));
        let bounds = node.bounds_at(&turned).unwrap();
        assert!((bounds.size().z - 2.0).abs() < 1e-5);
        assert!((bounds.size().x - 0.2).abs() < 1e-5);
    }
}
