//! Hit-test types and the platform seams that produce them.

use cgmath::{Matrix4, Vector3};
use futures::channel::oneshot;

use crate::error::PlacementError;

/// A surface pose returned by the platform's hit test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitPose {
    pub matrix: Matrix4<f32>,
}

impl HitPose {
    pub fn new(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }

    /// Pose with identity orientation at `position`
    pub fn at(position: Vector3<f32>) -> Self {
        Self::new(Matrix4::from_translation(position))
    }

    pub fn position(&self) -> Vector3<f32> {
        self.matrix.w.truncate()
    }
}

/// Which kind of hit-test source is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTestSourceKind {
    /// Rays cast from the centre of the viewer; drives the reticle
    Viewer,
    /// Rays cast from screen touches; drives drag-to-move
    TransientInput,
}

/// Identifies one session; grants tagged with an older generation are stale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionGeneration(pub u64);

/// What the platform hands back when a request is granted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrantedSource {
    pub kind: HitTestSourceKind,
    /// Platform handle for later hit-test queries
    pub handle: u64,
    /// Generation the request was made under, echoed back by the platform
    pub generation: SessionGeneration,
}

/// Pending grant: resolves once, or is cancelled if the sender is dropped
pub type GrantReceiver = oneshot::Receiver<Result<GrantedSource, PlacementError>>;

/// Platform side of hit-test source negotiation
pub trait HitTestBackend {
    /// Ask for a hit-test source. The answer arrives asynchronously.
    fn request_hit_test_source(
        &mut self,
        kind: HitTestSourceKind,
        generation: SessionGeneration,
    ) -> GrantReceiver;

    /// Whether the platform can hit-test from transient (touch) input
    fn supports_transient_input(&self) -> bool;
}

/// Per-frame hit-test results
pub trait XrFrame {
    fn hit_pose(&self, source: &GrantedSource) -> Option<HitPose>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_pose_position_is_translation() {
        let pose = HitPose::at(Vector3::new(1.0, -0.5, 2.0));
        assert_eq!(pose.position(), Vector3::new(1.0, -0.5, 2.0));
    }
}
