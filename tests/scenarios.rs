//! End-to-end scenarios for both deployment variants, driven only through the
//! public API.

use std::cell::Cell;
use std::time::{Duration, Instant};

use cgmath::Vector3;
use futures::channel::oneshot;

use stagehand::ar::{
    ArSession, GrantReceiver, GrantedSource, HitPose, HitTestBackend, HitTestSourceKind,
    IgnoreReason, SelectOutcome, SessionGeneration, SessionPhase, XrFrame,
};
use stagehand::config::{ArConfig, RoomConfig};
use stagehand::gesture::TouchEvent;
use stagehand::host::{DesktopSurface, ViewCamera};
use stagehand::math::{Aabb, HorizontalAxis, RoomLimits};
use stagehand::room::{DragOutcome, GizmoDrag, RoomConfigurator, Violation};
use stagehand::scene::{AssetProvider, InMemoryAssets, LoadedAsset, Mesh, SceneNode};

/// Grants every source immediately
struct ImmediateBackend;

impl HitTestBackend for ImmediateBackend {
    fn request_hit_test_source(
        &mut self,
        kind: HitTestSourceKind,
        generation: SessionGeneration,
    ) -> GrantReceiver {
        let (tx, rx) = oneshot::channel();
        let _ = tx.send(Ok(GrantedSource {
            kind,
            handle: 1,
            generation,
        }));
        rx
    }

    fn supports_transient_input(&self) -> bool {
        false
    }
}

/// Viewer hit at a position the test moves between frames
struct ScriptedFrame {
    hit: Cell<Vector3<f32>>,
}

impl ScriptedFrame {
    fn at(x: f32, z: f32) -> Self {
        Self {
            hit: Cell::new(Vector3::new(x, 0.0, z)),
        }
    }

    fn move_to(&self, x: f32, z: f32) {
        self.hit.set(Vector3::new(x, 0.0, z));
    }
}

impl XrFrame for ScriptedFrame {
    fn hit_pose(&self, source: &GrantedSource) -> Option<HitPose> {
        match source.kind {
            HitTestSourceKind::Viewer => Some(HitPose::at(self.hit.get())),
            HitTestSourceKind::TransientInput => None,
        }
    }
}

fn box_node(name: &str, half_width: f32) -> SceneNode {
    SceneNode::new(
        name,
        vec![Mesh::cuboid(
            name,
            Aabb::new(
                Vector3::new(-half_width, -0.5, -half_width),
                Vector3::new(half_width, 0.5, half_width),
            ),
        )],
    )
}

#[test]
fn test_room_scenario_accepts_then_snaps_back() {
    let mut assets = InMemoryAssets::new().with("models/crate.obj", box_node("crate", 0.2));
    let mut room = RoomConfigurator::new(
        RoomConfig::default().with_limits(RoomLimits::symmetric(3.25, 3.25)),
    );
    room.load_object(assets.load_object("models/crate.obj".as_ref()))
        .unwrap();

    let start = room.object().unwrap().transform.position;
    assert_eq!(start, Vector3::new(0.0, 0.0, 0.0));

    // max x = 3.2, inside
    assert_eq!(
        room.on_gizmo_drag(GizmoDrag::Translate(Vector3::new(3.0, 0.0, 0.0))),
        DragOutcome::Accepted
    );
    assert_eq!(room.object().unwrap().transform.position.x, 3.0);
    assert_eq!(room.last_known_good().unwrap().position.x, 3.0);

    // max x = 3.5, outside
    assert_eq!(
        room.on_gizmo_drag(GizmoDrag::Translate(Vector3::new(0.3, 0.0, 0.0))),
        DragOutcome::Reverted(Violation::OutsideRoom {
            axis: HorizontalAxis::X
        })
    );
    assert_eq!(room.object().unwrap().transform.position.x, 3.0);
    assert_eq!(room.accepted_updates(), 1);
    assert_eq!(room.reverted_updates(), 1);
}

#[test]
fn test_room_missing_asset_is_not_fatal() {
    let mut assets = InMemoryAssets::new();
    let mut room = RoomConfigurator::new(RoomConfig::default());
    assert!(room.load_object(assets.load_object("nope.obj".as_ref())).is_err());
    assert_eq!(
        room.on_gizmo_drag(GizmoDrag::Translate(Vector3::new(1.0, 0.0, 0.0))),
        DragOutcome::NoObject
    );
}

#[test]
fn test_ar_scenario_reticle_visibility() {
    let mut session = ArSession::new(ArConfig::default());
    session
        .set_template(Ok(LoadedAsset {
            root: box_node("chair", 0.2),
            casts_shadow: true,
        }))
        .unwrap();
    session.begin_session(&mut ImmediateBackend);

    let now = Instant::now();
    let frame = ScriptedFrame::at(0.0, -1.0);

    // nothing placed: visible every frame wherever the hit lands
    for (x, z) in [(0.0, -1.0), (0.1, -1.0), (1.0, -2.0), (0.0, -1.0)] {
        frame.move_to(x, z);
        let report = session.frame(&frame, now);
        assert_eq!(report.phase, SessionPhase::HitTestActive);
        assert!(report.reticle.visible);
    }

    assert_eq!(
        session.select(now),
        SelectOutcome::Placed(Vector3::new(0.0, 0.0, -1.0))
    );

    frame.move_to(0.3, -1.0);
    assert!(!session.frame(&frame, now).reticle.visible);

    frame.move_to(0.8, -1.0);
    assert!(session.frame(&frame, now).reticle.visible);
}

#[test]
fn test_ar_drag_then_tap_does_not_reanchor() {
    let mut session = ArSession::new(ArConfig::default());
    session
        .set_template(Ok(LoadedAsset {
            root: box_node("chair", 0.2),
            casts_shadow: false,
        }))
        .unwrap();
    session.begin_session(&mut ImmediateBackend);

    let start = Instant::now();
    let frame = ScriptedFrame::at(0.0, -1.0);
    session.frame(&frame, start);
    session.select(start);

    // two-finger twist, then release with the reticle pointing elsewhere
    session.touch(TouchEvent::start(1, 100.0, 300.0));
    session.touch(TouchEvent::start(2, 300.0, 300.0));
    session.frame(&frame, start);
    session.touch(TouchEvent::moved(2, 300.0, 400.0));
    session.frame(&frame, start);
    session.touch(TouchEvent::end(1, 100.0, 300.0));
    session.touch(TouchEvent::end(2, 300.0, 400.0));
    frame.move_to(2.0, -2.0);
    let released = start + Duration::from_millis(16);
    session.frame(&frame, released);

    // synthetic tap right after the release
    assert_eq!(
        session.select(released + Duration::from_millis(20)),
        SelectOutcome::Ignored(IgnoreReason::Dragging)
    );
    assert_eq!(
        session.object().map(SceneNode::position),
        Some(Vector3::new(0.0, 0.0, -1.0))
    );
}

#[test]
fn test_ar_on_desktop_surface() {
    let camera = ViewCamera::new(
        Vector3::new(0.0, 3.0, 3.0),
        Vector3::new(0.0, 0.0, 0.0),
        1.0,
    );
    let mut surface = DesktopSurface::new(camera, 600, 600).with_jitter(0.0);
    let mut session = ArSession::new(ArConfig::default());
    session
        .set_template(Ok(LoadedAsset {
            root: box_node("chair", 0.2),
            casts_shadow: false,
        }))
        .unwrap();

    session.begin_session(&mut surface);
    surface.set_aim(Some((300.0, 300.0)));
    let now = Instant::now();

    // grant is still in flight on the first frame
    let report = session.frame(&surface, now);
    assert_eq!(report.phase, SessionPhase::AwaitingHitTestSource);
    assert!(!report.reticle.visible);
    assert_eq!(
        session.select(now),
        SelectOutcome::Ignored(IgnoreReason::ReticleHidden)
    );

    surface.begin_frame();
    let report = session.frame(&surface, now);
    assert_eq!(report.phase, SessionPhase::HitTestActive);
    assert!(report.reticle.visible);
    assert!(matches!(session.select(now), SelectOutcome::Placed(_)));
}
