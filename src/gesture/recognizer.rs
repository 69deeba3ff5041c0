use std::time::Instant;

use cgmath::Rad;
use log::debug;

use super::touch::TouchPoint;
use crate::config::{GestureConfig, PanPolicy};
use crate::constants::MIN_PINCH_DISTANCE_PX;
use crate::math::transform::Transform;

/// Gesture produced by one frame of touch input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// A one-finger drag passed the slop threshold, or a two-finger gesture began
    DragStart,
    /// Horizontal one-finger motion, already converted to a yaw delta
    Pan {
        delta_x: f32,
        rotation_delta: Rad<f32>,
    },
    /// Two-finger pinch/twist relative to the start of the gesture
    PinchRotate {
        scale_factor: f32,
        angle_delta: Rad<f32>,
        /// Uniform scale to apply, already clamped to the configured band
        scale: f32,
        /// Absolute yaw to apply
        rotation_y: Rad<f32>,
    },
    /// All fingers lifted after a drag
    DragEnd,
}

/// Values captured once when a two-finger gesture starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSnapshot {
    pub ids: (u64, u64),
    pub initial_distance: f32,
    pub initial_angle: f32,
    pub initial_scale: f32,
    pub initial_rotation: Rad<f32>,
}

/// Recognizer state. Each variant is exclusive, so a one-finger drag and a
/// pinch can never be active at the same time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    /// One finger down, not yet moved past the drag slop
    Pressed {
        origin: TouchPoint,
        previous: TouchPoint,
    },
    /// One finger dragging
    Panning { previous: TouchPoint },
    /// Two (or more) fingers down; only the first two are tracked
    Pinching {
        snapshot: PinchSnapshot,
        touch_count: usize,
    },
    /// Fingers lifted; still reported as dragging until `until`
    Settling { until: Instant },
}

/// Turns per-frame touch sets into gesture events.
///
/// Keeps only the previous sample (or the pinch snapshot) between frames and
/// never looks at the scene; the current object transform is passed in so a
/// pinch can record its starting scale and yaw.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    state: GestureState,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// True while a drag is in progress or its release cool-down has not elapsed
    pub fn is_dragging(&self, now: Instant) -> bool {
        match self.state {
            GestureState::Panning { .. } | GestureState::Pinching { .. } => true,
            GestureState::Settling { until } => now < until,
            GestureState::Idle | GestureState::Pressed { .. } => false,
        }
    }

    /// True only while exactly one finger is dragging
    pub fn is_single_finger_drag(&self) -> bool {
        matches!(self.state, GestureState::Panning { .. })
    }

    /// Drop all retained history
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Consume this frame's active touches and produce at most one gesture.
    ///
    /// `object` is the manipulable object's current transform (identity when
    /// nothing is placed); it is only read when a pinch snapshot is taken.
    pub fn update(
        &mut self,
        touches: &[TouchPoint],
        object: &Transform,
        now: Instant,
    ) -> Option<GestureEvent> {
        match touches {
            [] => self.release(now),
            [touch] => self.one_finger(*touch),
            [a, b, ..] => self.two_fingers(*a, *b, touches.len(), object),
        }
    }

    fn release(&mut self, now: Instant) -> Option<GestureEvent> {
        match self.state {
            GestureState::Panning { .. } | GestureState::Pinching { .. } => {
                self.state = GestureState::Settling {
                    until: now + self.config.release_cooldown,
                };
                debug!("gesture released, settling for {:?}", self.config.release_cooldown);
                Some(GestureEvent::DragEnd)
            }
            GestureState::Settling { until } if now >= until => {
                self.state = GestureState::Idle;
                None
            }
            GestureState::Pressed { .. } => {
                self.state = GestureState::Idle;
                None
            }
            _ => None,
        }
    }

    fn one_finger(&mut self, touch: TouchPoint) -> Option<GestureEvent> {
        match self.state {
            GestureState::Pressed { origin, .. } if origin.id == touch.id => {
                if origin.distance_to(&touch) > self.config.drag_slop {
                    // Motion inside the slop is reported by the next pan delta
                    self.state = GestureState::Panning { previous: origin };
                    debug!("one-finger drag started (touch {})", touch.id);
                    Some(GestureEvent::DragStart)
                } else {
                    self.state = GestureState::Pressed {
                        origin,
                        previous: touch,
                    };
                    None
                }
            }
            GestureState::Panning { previous } if previous.id == touch.id => {
                self.state = GestureState::Panning { previous: touch };
                let delta_x = touch.x - previous.x;
                match self.config.pan_policy {
                    PanPolicy::RotateY if delta_x != 0.0 => Some(GestureEvent::Pan {
                        delta_x,
                        rotation_delta: Rad(delta_x * self.config.pan_sensitivity),
                    }),
                    _ => None,
                }
            }
            // A finger was lifted from a pinch (or swapped mid-drag): keep
            // dragging but start a fresh one-finger history.
            GestureState::Pinching { .. } | GestureState::Panning { .. } => {
                self.state = GestureState::Panning { previous: touch };
                None
            }
            GestureState::Idle | GestureState::Settling { .. } | GestureState::Pressed { .. } => {
                self.state = GestureState::Pressed {
                    origin: touch,
                    previous: touch,
                };
                None
            }
        }
    }

    fn two_fingers(
        &mut self,
        a: TouchPoint,
        b: TouchPoint,
        touch_count: usize,
        object: &Transform,
    ) -> Option<GestureEvent> {
        if let GestureState::Pinching {
            snapshot,
            touch_count: seeded_count,
        } = self.state
        {
            if seeded_count == touch_count && snapshot.ids == (a.id, b.id) {
                return Some(self.pinch(&snapshot, a, b));
            }
        }

        let was_dragging = matches!(
            self.state,
            GestureState::Panning { .. } | GestureState::Pinching { .. }
        );

        let initial_distance = a.distance_to(&b);
        if initial_distance < MIN_PINCH_DISTANCE_PX {
            // Cannot divide by this distance later; retry next frame
            if was_dragging {
                self.state = GestureState::Panning { previous: a };
            }
            return None;
        }

        let snapshot = PinchSnapshot {
            ids: (a.id, b.id),
            initial_distance,
            initial_angle: a.angle_to(&b),
            initial_scale: object.uniform_scale(),
            initial_rotation: object.yaw(),
        };
        debug!(
            "pinch snapshot: distance {:.1}px, scale {:.3}, yaw {:.3}rad",
            snapshot.initial_distance, snapshot.initial_scale, snapshot.initial_rotation.0
        );
        self.state = GestureState::Pinching {
            snapshot,
            touch_count,
        };

        if was_dragging {
            None
        } else {
            Some(GestureEvent::DragStart)
        }
    }

    fn pinch(&self, snapshot: &PinchSnapshot, a: TouchPoint, b: TouchPoint) -> GestureEvent {
        let scale_factor = a.distance_to(&b) / snapshot.initial_distance;
        let angle_delta = Rad(a.angle_to(&b) - snapshot.initial_angle);

        GestureEvent::PinchRotate {
            scale_factor,
            angle_delta,
            scale: self.config.clamp_scale(snapshot.initial_scale * scale_factor),
            // Inverted so a clockwise twist on screen turns the object the same way
            rotation_y: snapshot.initial_rotation - angle_delta,
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::time::Duration;

    fn pair(distance: f32) -> [TouchPoint; 2] {
        [
            TouchPoint::new(1, 100.0, 100.0),
            TouchPoint::new(2, 100.0 + distance, 100.0),
        ]
    }

    fn scale_of(event: Option<GestureEvent>) -> f32 {
        match event {
            Some(GestureEvent::PinchRotate { scale, .. }) => scale,
            other => panic!("expected a pinch, got {:?}", other),
        }
    }

    #[test]
    fn test_first_two_finger_frame_only_snapshots() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        let event = recognizer.update(&pair(100.0), &Transform::identity(), now);
        assert_eq!(event, Some(GestureEvent::DragStart));
        assert!(matches!(recognizer.state(), GestureState::Pinching { .. }));
        assert!(recognizer.is_dragging(now));
    }

    #[test]
    fn test_snapshot_taken_once_per_gesture() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        let mut object = Transform::identity();
        object.set_uniform_scale(0.5);

        recognizer.update(&pair(100.0), &object, now);

        // Apply each result to the object like the session does; the reference
        // must stay the first frame's distance and scale.
        for (distance, expected) in [(200.0, 1.0), (300.0, 1.5), (150.0, 0.75)] {
            let scale = scale_of(recognizer.update(&pair(distance), &object, now));
            assert!((scale - expected).abs() < 1e-5, "distance {distance}");
            object.set_uniform_scale(scale);
        }
    }

    #[test]
    fn test_scale_is_clamped_for_any_factor() {
        let mut rng = rand::rng();
        let now = Instant::now();
        for _ in 0..200 {
            let mut recognizer = GestureRecognizer::default();
            let mut object = Transform::identity();
            let initial_scale: f32 = rng.random_range(0.1..5.0);
            object.set_uniform_scale(initial_scale);
            recognizer.update(&pair(50.0), &object, now);

            let distance: f32 = rng.random_range(1.0..2000.0);
            let scale = scale_of(recognizer.update(&pair(distance), &object, now));
            let expected = (initial_scale * distance / 50.0).clamp(0.1, 5.0);
            assert!((0.1..=5.0).contains(&scale));
            assert!((scale - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pinch_with_reversed_band_still_clamps() {
        let config = GestureConfig {
            min_scale: 5.0,
            max_scale: 0.1,
            ..GestureConfig::default()
        };
        let mut recognizer = GestureRecognizer::new(config);
        let now = Instant::now();
        let object = Transform::identity();

        recognizer.update(&pair(100.0), &object, now);
        let scale = scale_of(recognizer.update(&pair(10_000.0), &object, now));
        assert_eq!(scale, 5.0);
    }

    #[test]
    fn test_twist_inverts_rotation() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        let mut object = Transform::identity();
        object.set_yaw(Rad(0.25));

        recognizer.update(&pair(100.0), &object, now);
        // second finger swings to straight below the first: +90 degrees on screen
        let twisted = [
            TouchPoint::new(1, 100.0, 100.0),
            TouchPoint::new(2, 100.0, 200.0),
        ];
        match recognizer.update(&twisted, &object, now) {
            Some(GestureEvent::PinchRotate {
                angle_delta,
                rotation_y,
                scale_factor,
                ..
            }) => {
                assert!((angle_delta.0 - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
                assert!((rotation_y.0 - (0.25 - std::f32::consts::FRAC_PI_2)).abs() < 1e-5);
                assert!((scale_factor - 1.0).abs() < 1e-5);
            }
            other => panic!("expected a pinch, got {:?}", other),
        }
    }

    #[test]
    fn test_touch_count_change_discards_snapshot() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        let object = Transform::identity();

        recognizer.update(&pair(100.0), &object, now);
        // third finger lands: re-seed at the current distance, no pinch this frame
        let three = [
            TouchPoint::new(1, 100.0, 100.0),
            TouchPoint::new(2, 300.0, 100.0),
            TouchPoint::new(3, 0.0, 0.0),
        ];
        assert_eq!(recognizer.update(&three, &object, now), None);
        let scale = scale_of(recognizer.update(&three, &object, now));
        assert!((scale - 1.0).abs() < 1e-5);

        // down to one finger and back to two: snapshot is taken again
        recognizer.update(&[TouchPoint::new(1, 100.0, 100.0)], &object, now);
        assert!(recognizer.is_single_finger_drag());
        assert_eq!(recognizer.update(&pair(400.0), &object, now), None);
        let scale = scale_of(recognizer.update(&pair(800.0), &object, now));
        assert!((scale - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_pan_respects_slop_and_policy() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        let object = Transform::identity();

        recognizer.update(&[TouchPoint::new(1, 0.0, 0.0)], &object, now);
        // within the slop: still a press, not a drag
        assert_eq!(recognizer.update(&[TouchPoint::new(1, 4.0, 0.0)], &object, now), None);
        assert!(!recognizer.is_dragging(now));

        assert_eq!(
            recognizer.update(&[TouchPoint::new(1, 20.0, 0.0)], &object, now),
            Some(GestureEvent::DragStart)
        );
        match recognizer.update(&[TouchPoint::new(1, 50.0, 0.0)], &object, now) {
            Some(GestureEvent::Pan { delta_x, rotation_delta }) => {
                assert_eq!(delta_x, 50.0);
                assert!((rotation_delta.0 - 0.5).abs() < 1e-6);
            }
            other => panic!("expected a pan, got {:?}", other),
        }

        let mut two_finger_only =
            GestureRecognizer::new(GestureConfig::default().with_pan_policy(PanPolicy::Ignore));
        two_finger_only.update(&[TouchPoint::new(1, 0.0, 0.0)], &object, now);
        two_finger_only.update(&[TouchPoint::new(1, 20.0, 0.0)], &object, now);
        assert_eq!(
            two_finger_only.update(&[TouchPoint::new(1, 50.0, 0.0)], &object, now),
            None
        );
        assert!(two_finger_only.is_dragging(now));
    }

    #[test]
    fn test_pan_keeps_motion_across_slop() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        let mut object = Transform::identity();

        for x in [0.0, 100.0, 110.0, 95.0] {
            if let Some(GestureEvent::Pan { rotation_delta, .. }) =
                recognizer.update(&[TouchPoint::new(1, x, 0.0)], &object, now)
            {
                object.set_yaw(object.yaw() + rotation_delta);
            }
        }

        let expected = 95.0 * recognizer.config().pan_sensitivity;
        assert!((object.yaw().0 - expected).abs() < 1e-5);
    }

    #[test]
    fn test_release_cooldown() {
        let mut recognizer = GestureRecognizer::default();
        let start = Instant::now();
        let object = Transform::identity();

        recognizer.update(&pair(100.0), &object, start);
        assert_eq!(recognizer.update(&[], &object, start), Some(GestureEvent::DragEnd));

        assert!(recognizer.is_dragging(start + Duration::from_millis(50)));
        assert!(!recognizer.is_dragging(start + Duration::from_millis(100)));

        recognizer.update(&[], &object, start + Duration::from_millis(120));
        assert_eq!(recognizer.state(), &GestureState::Idle);
    }

    #[test]
    fn test_plain_tap_never_counts_as_drag() {
        let mut recognizer = GestureRecognizer::default();
        let now = Instant::now();
        let object = Transform::identity();

        recognizer.update(&[TouchPoint::new(1, 10.0, 10.0)], &object, now);
        assert_eq!(recognizer.update(&[], &object, now), None);
        assert!(!recognizer.is_dragging(now));
    }
}
