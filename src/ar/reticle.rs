use cgmath::{Matrix4, SquareMatrix, Vector3};

use super::hit::HitPose;

/// The candidate placement marker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reticle {
    pub matrix: Matrix4<f32>,
    pub visible: bool,
}

impl Reticle {
    pub fn hidden() -> Self {
        Self {
            matrix: Matrix4::identity(),
            visible: false,
        }
    }

    pub fn position(&self) -> Vector3<f32> {
        self.matrix.w.truncate()
    }
}

impl Default for Reticle {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Keeps the reticle on the latest surface hit, hiding it while the hit is
/// too close to the object that is already placed.
#[derive(Debug, Clone)]
pub struct ReticleController {
    threshold: f32,
    reticle: Reticle,
}

impl ReticleController {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            reticle: Reticle::hidden(),
        }
    }

    pub fn reticle(&self) -> &Reticle {
        &self.reticle
    }

    pub fn is_visible(&self) -> bool {
        self.reticle.visible
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Feed this frame's hit pose and the placed object's position, if any.
    pub fn update(&mut self, hit: Option<&HitPose>, placed: Option<Vector3<f32>>) -> &Reticle {
        let Some(hit) = hit else {
            self.reticle.visible = false;
            return &self.reticle;
        };

        // Matrix first, then the distance test reads the fresh position
        self.reticle.matrix = hit.matrix;
        self.reticle.visible = match placed {
            None => true,
            Some(object) => planar_distance(self.reticle.position(), object) > self.threshold,
        };

        &self.reticle
    }

    pub fn hide(&mut self) {
        self.reticle.visible = false;
    }
}

/// Distance on the horizontal (x/z) plane
pub fn planar_distance(a: Vector3<f32>, b: Vector3<f32>) -> f32 {
    (a.x - b.x).hypot(a.z - b.z)
}
