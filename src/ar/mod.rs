//! # Augmented-Reality Placement
//!
//! Per-frame pipeline for the AR variant:
//!
//! ```text
//! touch events ─► TouchTracker ─► GestureRecognizer ─┐
//!                                                    ├─► PlacementMachine ─► object transform
//! XrFrame ─► viewer hit ─► ReticleController ─ select┘
//!        └─► transient hit (single-finger drag) ──────► drag_to
//! ```
//!
//! [`ArSession`] is the only stateful entry point. Hosts feed it touch events
//! whenever they arrive, call [`ArSession::frame`] once per animation frame
//! and forward explicit confirmations through [`ArSession::select`].
//! Nothing in here blocks; a pending hit-test grant just means the reticle
//! stays hidden for that frame.

pub mod hit;
pub mod placement;
pub mod reticle;
pub mod session;

use std::time::Instant;

use log::{error, info};

pub use hit::{
    GrantReceiver, GrantedSource, HitPose, HitTestBackend, HitTestSourceKind, SessionGeneration,
    XrFrame,
};
pub use placement::{IgnoreReason, PlacementMachine, PlacementState, SelectOutcome};
pub use reticle::{Reticle, ReticleController};
pub use session::{GrantSlot, SessionLifecycle, SessionPhase, SessionState};

use crate::config::ArConfig;
use crate::error::Result;
use crate::gesture::{GestureEvent, GestureRecognizer, TouchEvent, TouchTracker};
use crate::math::transform::Transform;
use crate::scene::{LoadedAsset, ObjectTemplate, SceneNode};

/// What one frame did, for the renderer and for tests
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub phase: SessionPhase,
    pub reticle: Reticle,
    pub gesture: Option<GestureEvent>,
    /// Placed object's transform after this frame
    pub object: Option<Transform>,
    /// The object followed a transient-input hit this frame
    pub dragged: bool,
}

/// Context object for one AR experience
pub struct ArSession {
    config: ArConfig,
    touches: TouchTracker,
    recognizer: GestureRecognizer,
    reticle: ReticleController,
    lifecycle: SessionLifecycle,
    placement: PlacementMachine,
}

impl ArSession {
    pub fn new(config: ArConfig) -> Self {
        Self {
            touches: TouchTracker::new(),
            recognizer: GestureRecognizer::new(config.gesture.clone()),
            reticle: ReticleController::new(config.reticle_threshold),
            lifecycle: SessionLifecycle::new(config.transient_drag),
            placement: PlacementMachine::new(config.anchor_policy),
            config,
        }
    }

    pub fn config(&self) -> &ArConfig {
        &self.config
    }

    /// Accept the result of loading the object template.
    ///
    /// A failure is logged once and handed back to the host; the session
    /// keeps running with nothing to place.
    pub fn set_template(&mut self, asset: Result<LoadedAsset>) -> Result<()> {
        match asset {
            Ok(LoadedAsset {
                mut root,
                casts_shadow,
            }) => {
                root.casts_shadow = casts_shadow;
                info!("template '{}' ready ({} meshes)", root.name, root.meshes.len());
                self.placement.set_template(ObjectTemplate::new(root));
                Ok(())
            }
            Err(e) => {
                error!("failed to load placement object: {}", e);
                Err(e)
            }
        }
    }

    pub fn begin_session(&mut self, backend: &mut dyn HitTestBackend) -> SessionGeneration {
        self.lifecycle.begin(backend)
    }

    /// End the XR session. Hit-test sources and gesture history are dropped;
    /// a placed object stays where it is.
    pub fn end_session(&mut self) {
        self.lifecycle.end();
        self.touches.clear();
        self.recognizer.reset();
        self.reticle.hide();
    }

    /// Queue a raw touch event; it is applied at the start of the next frame
    pub fn touch(&mut self, event: TouchEvent) {
        self.touches.queue(event);
    }

    /// Run one frame
    pub fn frame(&mut self, xr: &dyn XrFrame, now: Instant) -> FrameReport {
        self.lifecycle.poll();

        let active = self.touches.flush();
        let gesture = self
            .recognizer
            .update(active, &self.placement.object_transform(), now);
        if let Some(event) = &gesture {
            self.placement.apply_gesture(event);
        }

        // The object moves first so the reticle is judged against where it ends up
        let mut dragged = false;
        if self.config.transient_drag && self.recognizer.is_single_finger_drag() {
            if let Some(pose) = self
                .lifecycle
                .transient_source()
                .and_then(|source| xr.hit_pose(source))
            {
                dragged = self.placement.drag_to(&pose);
            }
        }

        let hit = self
            .lifecycle
            .viewer_source()
            .and_then(|source| xr.hit_pose(source));
        self.reticle
            .update(hit.as_ref(), self.placement.object_position());

        FrameReport {
            phase: self.lifecycle.phase(),
            reticle: *self.reticle.reticle(),
            gesture,
            object: self.placement.object().map(|node| node.transform),
            dragged,
        }
    }

    /// Explicit user confirmation (tap / select)
    pub fn select(&mut self, now: Instant) -> SelectOutcome {
        let dragging = self.recognizer.is_dragging(now);
        self.placement.select(self.reticle.reticle(), dragging)
    }

    pub fn phase(&self) -> SessionPhase {
        self.lifecycle.phase()
    }

    pub fn reticle(&self) -> &Reticle {
        self.reticle.reticle()
    }

    pub fn placement(&self) -> &PlacementState {
        self.placement.state()
    }

    pub fn object(&self) -> Option<&SceneNode> {
        self.placement.object()
    }

    pub fn is_dragging(&self, now: Instant) -> bool {
        self.recognizer.is_dragging(now)
    }

    pub fn has_template(&self) -> bool {
        self.placement.has_template()
    }
}

impl Default for ArSession {
    fn default() -> Self {
        Self::new(ArConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanPolicy;
    use crate::error::PlacementError;
    use crate::scene::Mesh;
    use cgmath::Vector3;
    use futures::channel::oneshot;
    use std::cell::Cell;
    use std::time::Duration;

    /// Backend that grants every request immediately
    struct InstantBackend {
        transient: bool,
    }

    impl HitTestBackend for InstantBackend {
        fn request_hit_test_source(
            &mut self,
            kind: HitTestSourceKind,
            generation: SessionGeneration,
        ) -> GrantReceiver {
            let (tx, rx) = oneshot::channel();
            let handle = match kind {
                HitTestSourceKind::Viewer => 1,
                HitTestSourceKind::TransientInput => 2,
            };
            let _ = tx.send(Ok(GrantedSource {
                kind,
                handle,
                generation,
            }));
            rx
        }

        fn supports_transient_input(&self) -> bool {
            self.transient
        }
    }

    /// Frame answering viewer and transient queries with fixed poses
    struct FixedFrame {
        viewer: Cell<Option<HitPose>>,
        transient: Option<HitPose>,
    }

    impl FixedFrame {
        fn viewer_at(x: f32, z: f32) -> Self {
            Self {
                viewer: Cell::new(Some(HitPose::at(Vector3::new(x, 0.0, z)))),
                transient: None,
            }
        }
    }

    impl XrFrame for FixedFrame {
        fn hit_pose(&self, source: &GrantedSource) -> Option<HitPose> {
            match source.kind {
                HitTestSourceKind::Viewer => self.viewer.get(),
                HitTestSourceKind::TransientInput => self.transient,
            }
        }
    }

    fn chair() -> LoadedAsset {
        LoadedAsset {
            root: SceneNode::new(
                "chair",
                vec![Mesh::cuboid(
                    "seat",
                    crate::math::Aabb::from_center_size(
                        Vector3::new(0.0, 0.5, 0.0),
                        Vector3::new(0.4, 1.0, 0.4),
                    ),
                )],
            ),
            casts_shadow: true,
        }
    }

    fn presenting(config: ArConfig) -> ArSession {
        let mut session = ArSession::new(config);
        session.set_template(Ok(chair())).unwrap();
        session.begin_session(&mut InstantBackend { transient: true });
        session
    }

    #[test]
    fn test_reticle_hidden_until_grant_polled() {
        let mut session = ArSession::default();
        let frame = FixedFrame::viewer_at(0.0, 0.0);
        let now = Instant::now();

        assert_eq!(session.frame(&frame, now).phase, SessionPhase::NoSession);
        assert!(!session.reticle().visible);

        session.begin_session(&mut InstantBackend { transient: false });
        assert_eq!(session.phase(), SessionPhase::AwaitingHitTestSource);
        let report = session.frame(&frame, now);
        assert_eq!(report.phase, SessionPhase::HitTestActive);
        assert!(report.reticle.visible);
    }

    #[test]
    fn test_failed_template_leaves_nothing_to_place() {
        let mut session = ArSession::default();
        let result = session.set_template(Err(PlacementError::asset_load("missing.obj", "not found")));
        assert!(result.is_err());
        session.begin_session(&mut InstantBackend { transient: false });
        let now = Instant::now();
        session.frame(&FixedFrame::viewer_at(0.0, 0.0), now);

        assert_eq!(
            session.select(now),
            SelectOutcome::Ignored(IgnoreReason::NoTemplate)
        );
        assert_eq!(session.placement(), &PlacementState::Unplaced);
    }

    #[test]
    fn test_tap_places_and_pinch_scales() {
        let mut session = presenting(ArConfig::rotate_on_pan());
        let now = Instant::now();
        session.frame(&FixedFrame::viewer_at(0.0, -1.0), now);
        assert!(matches!(session.select(now), SelectOutcome::Placed(_)));
        assert!(session.object().is_some_and(|node| node.casts_shadow));

        session.touch(TouchEvent::start(1, 100.0, 100.0));
        session.touch(TouchEvent::start(2, 200.0, 100.0));
        let report = session.frame(&FixedFrame::viewer_at(0.0, -1.0), now);
        assert_eq!(report.gesture, Some(GestureEvent::DragStart));

        session.touch(TouchEvent::moved(2, 300.0, 100.0));
        let report = session.frame(&FixedFrame::viewer_at(0.0, -1.0), now);
        let scale = report.object.map(|t| t.uniform_scale());
        assert_eq!(scale, Some(2.0));
    }

    #[test]
    fn test_select_inside_release_cooldown_is_ignored() {
        let mut session = presenting(ArConfig::rotate_on_pan());
        let start = Instant::now();
        let far = FixedFrame::viewer_at(2.0, 2.0);
        session.frame(&far, start);
        session.select(start);

        session.touch(TouchEvent::start(1, 100.0, 100.0));
        session.touch(TouchEvent::start(2, 200.0, 100.0));
        session.frame(&far, start);
        session.touch(TouchEvent::end(1, 100.0, 100.0));
        session.touch(TouchEvent::end(2, 200.0, 100.0));
        let report = session.frame(&FixedFrame::viewer_at(-2.0, -2.0), start);
        assert_eq!(report.gesture, Some(GestureEvent::DragEnd));
        assert!(report.reticle.visible);

        let tap = start + Duration::from_millis(30);
        assert_eq!(session.select(tap), SelectOutcome::Ignored(IgnoreReason::Dragging));
        assert_eq!(
            session.object().map(SceneNode::position),
            Some(Vector3::new(2.0, 0.0, 2.0))
        );

        let later = start + Duration::from_millis(150);
        assert!(matches!(session.select(later), SelectOutcome::Reanchored(_)));
    }

    #[test]
    fn test_transient_drag_moves_object() {
        let config = ArConfig::drag_to_move();
        assert_eq!(config.gesture.pan_policy, PanPolicy::Ignore);
        let mut session = presenting(config);
        let now = Instant::now();
        session.frame(&FixedFrame::viewer_at(0.0, -1.0), now);
        session.select(now);

        let dragging = FixedFrame {
            viewer: Cell::new(None),
            transient: Some(HitPose::at(Vector3::new(0.5, 0.0, -1.5))),
        };
        session.touch(TouchEvent::start(1, 100.0, 100.0));
        session.frame(&dragging, now);
        session.touch(TouchEvent::moved(1, 150.0, 100.0));
        let report = session.frame(&dragging, now);

        assert!(report.dragged);
        assert_eq!(
            report.object.map(|t| t.position),
            Some(Vector3::new(0.5, 0.0, -1.5))
        );
        assert_eq!(report.object.map(|t| t.yaw()), Some(cgmath::Rad(0.0)));
    }

    #[test]
    fn test_reticle_hides_on_the_frame_the_object_is_dragged_under_it() {
        let mut session = presenting(ArConfig::drag_to_move());
        let now = Instant::now();
        session.frame(&FixedFrame::viewer_at(0.0, -1.0), now);
        session.select(now);

        let target = HitPose::at(Vector3::new(2.0, 0.0, -1.0));
        let dragging = FixedFrame {
            viewer: Cell::new(Some(target)),
            transient: Some(target),
        };
        session.touch(TouchEvent::start(1, 100.0, 100.0));
        let report = session.frame(&dragging, now);
        assert!(!report.dragged);
        assert!(report.reticle.visible);

        session.touch(TouchEvent::moved(1, 150.0, 100.0));
        let report = session.frame(&dragging, now);
        assert!(report.dragged);
        assert_eq!(
            report.object.map(|t| t.position),
            Some(Vector3::new(2.0, 0.0, -1.0))
        );
        assert!(!report.reticle.visible);
    }

    #[test]
    fn test_end_session_clears_sources_but_keeps_object() {
        let mut session = presenting(ArConfig::default());
        let now = Instant::now();
        let frame = FixedFrame::viewer_at(1.0, 1.0);
        session.frame(&frame, now);
        session.select(now);

        session.end_session();
        let report = session.frame(&frame, now);
        assert_eq!(report.phase, SessionPhase::NoSession);
        assert!(!report.reticle.visible);
        assert!(report.object.is_some());
    }
}
