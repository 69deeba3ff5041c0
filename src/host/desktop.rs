//! Desktop stand-in for an AR platform.
//!
//! The "real world" is the floor plane `y = 0` seen through a [`ViewCamera`].
//! The viewer hit test follows the cursor, the transient-input hit test follows
//! the pressed pointer, and both carry a little random jitter to mimic
//! tracking noise. Source grants resolve on the frame after they are requested.

use cgmath::Vector3;
use futures::channel::oneshot;
use log::{debug, trace};
use rand::Rng;

use super::camera::ViewCamera;
use crate::ar::{
    GrantReceiver, GrantedSource, HitPose, HitTestBackend, HitTestSourceKind, SessionGeneration,
    XrFrame,
};
use crate::constants::FLOOR_Y;
use crate::error::PlacementError;

type GrantSender = oneshot::Sender<Result<GrantedSource, PlacementError>>;

pub struct DesktopSurface {
    camera: ViewCamera,
    screen_size: (f32, f32),
    aim: Option<(f32, f32)>,
    pointer: Option<(f32, f32)>,
    /// Max jitter (m) added to each hit on x and z
    jitter: f32,
    supports_transient: bool,
    pending: Vec<(GrantSender, GrantedSource)>,
    next_handle: u64,
}

impl DesktopSurface {
    pub fn new(camera: ViewCamera, width: u32, height: u32) -> Self {
        Self {
            camera,
            screen_size: (width as f32, height as f32),
            aim: None,
            pointer: None,
            jitter: 0.002,
            supports_transient: true,
            pending: Vec::new(),
            next_handle: 1,
        }
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    pub fn with_transient_input(mut self, supported: bool) -> Self {
        self.supports_transient = supported;
        self
    }

    pub fn camera(&self) -> &ViewCamera {
        &self.camera
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.screen_size = (width as f32, height as f32);
        self.camera.resize_projection(width, height);
    }

    /// Where the viewer is pointing
    pub fn set_aim(&mut self, aim: Option<(f32, f32)>) {
        self.aim = aim;
    }

    /// Position of the pressed pointer, if any
    pub fn set_pointer(&mut self, pointer: Option<(f32, f32)>) {
        self.pointer = pointer;
    }

    /// Resolve grants requested since the previous frame
    pub fn begin_frame(&mut self) {
        for (sender, source) in self.pending.drain(..) {
            if sender.send(Ok(source)).is_err() {
                debug!("{:?} grant dropped: session already gone", source.kind);
            }
        }
    }

    fn floor_hit(&self, screen: (f32, f32)) -> Option<HitPose> {
        let ray = self.camera.screen_to_ray(screen, self.screen_size);
        let mut point = ray.intersect_horizontal_plane(FLOOR_Y)?;
        if self.jitter > 0.0 {
            let mut rng = rand::rng();
            point += Vector3::new(
                rng.random_range(-self.jitter..=self.jitter),
                0.0,
                rng.random_range(-self.jitter..=self.jitter),
            );
        }
        Some(HitPose::at(point))
    }
}

impl HitTestBackend for DesktopSurface {
    fn request_hit_test_source(
        &mut self,
        kind: HitTestSourceKind,
        generation: SessionGeneration,
    ) -> GrantReceiver {
        let (sender, receiver) = oneshot::channel();
        let source = GrantedSource {
            kind,
            handle: self.next_handle,
            generation,
        };
        self.next_handle += 1;
        debug!("{:?} hit-test source requested for {:?}", kind, generation);
        self.pending.push((sender, source));
        receiver
    }

    fn supports_transient_input(&self) -> bool {
        self.supports_transient
    }
}

impl XrFrame for DesktopSurface {
    fn hit_pose(&self, source: &GrantedSource) -> Option<HitPose> {
        let screen = match source.kind {
            HitTestSourceKind::Viewer => self.aim,
            HitTestSourceKind::TransientInput => self.pointer,
        }?;
        let hit = self.floor_hit(screen);
        trace!("{:?} hit at {:?}", source.kind, hit.map(|h| h.position()));
        hit
    }
}
