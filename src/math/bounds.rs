use cgmath::{Matrix4, Vector3, Vector4, Zero};
use std::fmt;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Vector3<f32>,
    /// Maximum corner of the bounding box
    pub max: Vector3<f32>,
}

impl Aabb {
    /// Create a new AABB
    pub fn new(min: Vector3<f32>, max: Vector3<f32>) -> Self {
        Self { min, max }
    }

    /// Box of the given full size centred on `center`
    pub fn from_center_size(center: Vector3<f32>, size: Vector3<f32>) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Create AABB from a set of vertices
    pub fn from_vertices(vertices: &[[f32; 3]]) -> Self {
        if vertices.is_empty() {
            return Self::new(Vector3::zero(), Vector3::zero());
        }

        let mut min = Vector3::new(vertices[0][0], vertices[0][1], vertices[0][2]);
        let mut max = min;

        for vertex in vertices.iter().skip(1) {
            let v = Vector3::new(vertex[0], vertex[1], vertex[2]);
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }

        Self::new(min, max)
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Aabb) -> Self {
        Self::new(
            Vector3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            Vector3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        )
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    /// True when the interiors overlap on every axis.
    /// Boxes that only share a face, edge or corner do not intersect.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Apply a transformation matrix to the AABB
    pub fn transform(&self, matrix: &Matrix4<f32>) -> Self {
        // Transform all 8 corners of the AABB and compute new bounds
        let corners = [
            Vector3::new(self.min.x, self.min.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.min.z),
            Vector3::new(self.min.x, self.max.y, self.min.z),
            Vector3::new(self.min.x, self.min.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.min.z),
            Vector3::new(self.max.x, self.min.y, self.max.z),
            Vector3::new(self.min.x, self.max.y, self.max.z),
            Vector3::new(self.max.x, self.max.y, self.max.z),
        ];

        let mut transformed_corners = [[0.0f32; 3]; 8];
        for (out, corner) in transformed_corners.iter_mut().zip(corners.iter()) {
            let transformed = matrix * Vector4::new(corner.x, corner.y, corner.z, 1.0);
            *out = [
                transformed.x / transformed.w,
                transformed.y / transformed.w,
                transformed.z / transformed.w,
            ];
        }

        Self::from_vertices(&transformed_corners)
    }
}

/// One of the two horizontal axes of the placement plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAxis {
    X,
    Z,
}

impl fmt::Display for HorizontalAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizontalAxis::X => write!(f, "x"),
            HorizontalAxis::Z => write!(f, "z"),
        }
    }
}

/// Legal placement rectangle on the horizontal (x/z) plane, constant for a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomLimits {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl RoomLimits {
    pub fn new(min_x: f32, max_x: f32, min_z: f32, max_z: f32) -> Self {
        Self {
            min_x,
            max_x,
            min_z,
            max_z,
        }
    }

    /// Rectangle centred on the origin
    pub fn symmetric(half_x: f32, half_z: f32) -> Self {
        Self::new(-half_x, half_x, -half_z, half_z)
    }

    /// First horizontal axis on which `bounds` crosses the rectangle, if any.
    /// Each axis is checked independently; touching a limit is allowed.
    pub fn crossing_axis(&self, bounds: &Aabb) -> Option<HorizontalAxis> {
        if bounds.min.x < self.min_x || bounds.max.x > self.max_x {
            return Some(HorizontalAxis::X);
        }
        if bounds.min.z < self.min_z || bounds.max.z > self.max_z {
            return Some(HorizontalAxis::Z);
        }
        None
    }

    pub fn contains(&self, bounds: &Aabb) -> bool {
        self.crossing_axis(bounds).is_none()
    }
}

impl Default for RoomLimits {
    fn default() -> Self {
        Self::symmetric(
            crate::constants::ROOM_HALF_EXTENT_X,
            crate::constants::ROOM_HALF_EXTENT_Z,
        )
    }
}
