use log::{debug, info};

use crate::constants::{FLOOR_PATTERN, OBSTACLE_PATTERN, WALL_PATTERN};
use crate::math::bounds::{Aabb, RoomLimits};
use crate::scene::SceneNode;

/// Name fragments that identify room surfaces (case-insensitive containment)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceNaming {
    pub wall: String,
    pub floor: String,
    pub obstacle: String,
}

impl Default for SurfaceNaming {
    fn default() -> Self {
        Self {
            wall: WALL_PATTERN.to_string(),
            floor: FLOOR_PATTERN.to_string(),
            obstacle: OBSTACLE_PATTERN.to_string(),
        }
    }
}

/// A static obstacle found in the room
#[derive(Debug, Clone, PartialEq)]
pub struct StaticObstacle {
    pub name: String,
    pub bounds: Aabb,
}

/// Room geometry classified once at load time
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLayout {
    pub room: SceneNode,
    pub limits: RoomLimits,
    /// Indices into `room.meshes`
    pub walls: Vec<usize>,
    pub floors: Vec<usize>,
    pub obstacles: Vec<StaticObstacle>,
}

impl RoomLayout {
    /// Classify the room's meshes. A mesh matching several patterns is
    /// recorded under each of them.
    pub fn discover(room: SceneNode, naming: &SurfaceNaming, limits: RoomLimits) -> Self {
        let mut walls = Vec::new();
        let mut floors = Vec::new();
        let mut obstacles = Vec::new();

        for (index, mesh) in room.meshes.iter().enumerate() {
            if mesh.name_contains(&naming.wall) {
                walls.push(index);
            }
            if mesh.name_contains(&naming.floor) {
                floors.push(index);
            }
            if mesh.name_contains(&naming.obstacle) {
                match room.mesh_world_bounds(index) {
                    Some(bounds) => obstacles.push(StaticObstacle {
                        name: mesh.name.clone(),
                        bounds,
                    }),
                    None => debug!("obstacle '{}' has no vertices, skipped", mesh.name),
                }
            }
        }

        info!(
            "room '{}': {} walls, {} floors, {} obstacles",
            room.name,
            walls.len(),
            floors.len(),
            obstacles.len()
        );

        Self {
            room,
            limits,
            walls,
            floors,
            obstacles,
        }
    }

    /// A room with limits and no geometry
    pub fn empty(limits: RoomLimits) -> Self {
        Self::discover(SceneNode::new("room", Vec::new()), &SurfaceNaming::default(), limits)
    }

    pub fn obstacle_bounds(&self) -> impl Iterator<Item = &Aabb> {
        self.obstacles.iter().map(|o| &o.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Mesh;
    use cgmath::Vector3;

    fn cube(name: &str, center: [f32; 3]) -> Mesh {
        Mesh::cuboid(
            name,
            Aabb::from_center_size(Vector3::from(center), Vector3::new(1.0, 1.0, 1.0)),
        )
    }

    #[test]
    fn test_discovery_by_name_containment() {
        let room = SceneNode::new(
            "room",
            vec![
                cube("Wall_North", [0.0, 1.0, -3.5]),
                cube("wall_south", [0.0, 1.0, 3.5]),
                cube("Floor", [0.0, -0.5, 0.0]),
                cube("sofa_OBSTACLE", [2.0, 0.5, 2.0]),
                cube("lamp", [0.0, 2.0, 0.0]),
            ],
        );
        let layout = RoomLayout::discover(room, &SurfaceNaming::default(), RoomLimits::default());

        assert_eq!(layout.walls, vec![0, 1]);
        assert_eq!(layout.floors, vec![2]);
        assert_eq!(layout.obstacles.len(), 1);
        assert_eq!(layout.obstacles[0].name, "sofa_OBSTACLE");
        assert_eq!(layout.obstacles[0].bounds.center(), Vector3::new(2.0, 0.5, 2.0));
    }

    #[test]
    fn test_obstacle_bounds_use_room_transform() {
        let mut room = SceneNode::new("room", vec![cube("obstacle_table", [0.0, 0.0, 0.0])]);
        room.transform.position = Vector3::new(1.0, 0.0, 0.0);
        let layout = RoomLayout::discover(room, &SurfaceNaming::default(), RoomLimits::default());
        assert_eq!(layout.obstacles[0].bounds.min.x, 0.5);
    }
}
