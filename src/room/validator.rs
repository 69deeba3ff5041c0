use std::fmt;

use super::layout::RoomLayout;
use crate::math::bounds::{Aabb, HorizontalAxis};
use crate::math::transform::Transform;
use crate::scene::SceneNode;

/// Why a proposed transform was refused
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The bounding box crosses the room rectangle on this axis
    OutsideRoom { axis: HorizontalAxis },
    /// The bounding box overlaps a static obstacle
    Obstacle { index: usize, name: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OutsideRoom { axis } => write!(f, "outside the room on the {} axis", axis),
            Violation::Obstacle { name, .. } => write!(f, "collides with '{}'", name),
        }
    }
}

/// Outcome of validating one proposed transform
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accept,
    Reject(Violation),
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

/// Checks proposed transforms against the room rectangle and static obstacles
#[derive(Debug, Clone, Copy)]
pub struct ConstraintValidator<'a> {
    layout: &'a RoomLayout,
}

impl<'a> ConstraintValidator<'a> {
    pub fn new(layout: &'a RoomLayout) -> Self {
        Self { layout }
    }

    /// Validate `object` as if it had transform `proposed`.
    /// The bounding box is rebuilt from geometry on every call.
    pub fn validate(&self, object: &SceneNode, proposed: &Transform) -> Verdict {
        match object.bounds_at(proposed) {
            Some(bounds) => self.validate_bounds(&bounds),
            // Nothing to collide with
            None => Verdict::Accept,
        }
    }

    /// Room limits first, then obstacles in discovery order
    pub fn validate_bounds(&self, bounds: &Aabb) -> Verdict {
        if let Some(axis) = self.layout.limits.crossing_axis(bounds) {
            return Verdict::Reject(Violation::OutsideRoom { axis });
        }

        self.layout
            .obstacles
            .iter()
            .enumerate()
            .find(|(_, obstacle)| obstacle.bounds.intersects(bounds))
            .map_or(Verdict::Accept, |(index, obstacle)| {
                Verdict::Reject(Violation::Obstacle {
                    index,
                    name: obstacle.name.clone(),
                })
            })
    }
}
