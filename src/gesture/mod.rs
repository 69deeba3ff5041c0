//! # Gesture Recognition
//!
//! Converts raw multi-touch input into manipulation gestures.
//!
//! 1. **Touch tracking** ([`TouchTracker`]) - host callbacks queue start/move/end
//!    events; the frame flushes them into the set of active contacts
//! 2. **Recognition** ([`GestureRecognizer`]) - one finger pans (yaw), two
//!    fingers pinch (uniform scale) and twist (yaw), with a short cool-down
//!    after release so trailing tap events are not read as placements
//!
//! The recognizer is a pure function of the touch history plus the object's
//! transform at the moment a pinch begins; it never touches the scene.

pub mod recognizer;
pub mod touch;

pub use recognizer::{GestureEvent, GestureRecognizer, GestureState, PinchSnapshot};
pub use touch::{TouchEvent, TouchPhase, TouchPoint, TouchTracker};
