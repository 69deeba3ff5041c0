use cgmath::{
    perspective, EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3, Vector4,
};

/// A 3D ray for intersection testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point in world space
    pub origin: Vector3<f32>,
    /// Ray direction (normalized)
    pub direction: Vector3<f32>,
}

impl Ray {
    pub fn new(origin: Vector3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vector3<f32> {
        self.origin + self.direction * t
    }

    /// Where the ray meets the plane `y = height`, if it does so in front of the origin
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<Vector3<f32>> {
        if self.direction.y.abs() < f32::EPSILON {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        if t < 0.0 {
            None
        } else {
            Some(self.point_at(t))
        }
    }
}

/// Y-up perspective camera looking at the room or the simulated floor
#[derive(Debug, Clone, Copy)]
pub struct ViewCamera {
    pub eye: Vector3<f32>,
    pub target: Vector3<f32>,
    pub up: Vector3<f32>,
    pub aspect: f32,
    pub fovy: Rad<f32>,
    pub znear: f32,
    pub zfar: f32,
}

impl ViewCamera {
    pub fn new(eye: Vector3<f32>, target: Vector3<f32>, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vector3::unit_y(),
            aspect,
            fovy: Rad(std::f32::consts::PI / 4.0),
            znear: 0.1,
            zfar: 100.0,
        }
    }

    pub fn resize_projection(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    pub fn view_projection(&self) -> Matrix4<f32> {
        let view = Matrix4::look_at_rh(
            Point3::from_vec(self.eye),
            Point3::from_vec(self.target),
            self.up,
        );
        perspective(self.fovy, self.aspect, self.znear, self.zfar) * view
    }

    /// Convert screen coordinates to a world-space ray
    pub fn screen_to_ray(&self, screen_pos: (f32, f32), screen_size: (f32, f32)) -> Ray {
        let (x, y) = screen_pos;
        let (width, height) = screen_size;

        // Normalized device coordinates, y flipped
        let ndc_x = (2.0 * x) / width.max(1.0) - 1.0;
        let ndc_y = 1.0 - (2.0 * y) / height.max(1.0);

        let inv_view_proj = self
            .view_projection()
            .invert()
            .unwrap_or_else(Matrix4::identity);

        let near = unproject(&inv_view_proj, Vector4::new(ndc_x, ndc_y, -1.0, 1.0));
        let far = unproject(&inv_view_proj, Vector4::new(ndc_x, ndc_y, 1.0, 1.0));

        Ray::new(near, far - near)
    }
}

fn unproject(inv_view_proj: &Matrix4<f32>, ndc: Vector4<f32>) -> Vector3<f32> {
    let world = inv_view_proj * ndc;
    Vector3::new(world.x / world.w, world.y / world.w, world.z / world.w)
}
