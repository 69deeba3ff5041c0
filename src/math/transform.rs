use cgmath::{Euler, Matrix4, Quaternion, Rad, Vector3, Zero};

/// Position, rotation and scale of a scene node.
///
/// The AR variant only ever touches the yaw (`rotation.y`); the room variant
/// keeps full Euler angles even though its gizmo only exposes the vertical ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
    pub scale: Vector3<f32>,
}

impl Transform {
    /// Identity transform
    pub fn identity() -> Self {
        Self {
            position: Vector3::zero(),
            rotation: Euler::new(Rad(0.0), Rad(0.0), Rad(0.0)),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }

    /// Identity rotation and scale at `position`
    pub fn from_position(position: Vector3<f32>) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Rotation around the vertical axis
    pub fn yaw(&self) -> Rad<f32> {
        self.rotation.y
    }

    pub fn set_yaw(&mut self, yaw: Rad<f32>) {
        self.rotation.y = yaw;
    }

    /// Scale along x, used as the uniform scale by the pinch gesture
    pub fn uniform_scale(&self) -> f32 {
        self.scale.x
    }

    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vector3::new(scale, scale, scale);
    }

    /// Compose the model matrix. Order matters: T * R * S
    pub fn to_matrix(&self) -> Matrix4<f32> {
        let t = Matrix4::from_translation(self.position);
        let r = Matrix4::from(Quaternion::from(self.rotation));
        let s = Matrix4::from_nonuniform_scale(self.scale.x, self.scale.y, self.scale.z);
        t * r * s
    }

    /// Position and rotation only; see [`PoseSnapshot`]
    pub fn pose(&self) -> PoseSnapshot {
        PoseSnapshot {
            position: self.position,
            rotation: self.rotation,
        }
    }

    /// Overwrite position and rotation from a snapshot, leaving scale untouched
    pub fn apply_pose(&mut self, pose: &PoseSnapshot) {
        self.position = pose.position;
        self.rotation = pose.rotation;
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// The part of a transform the room variant validates and restores.
/// Scale is not manipulated there, so it is not part of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoseSnapshot {
    pub position: Vector3<f32>,
    pub rotation: Euler<Rad<f32>>,
}
