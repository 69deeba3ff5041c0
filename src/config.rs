//! # Engine Configuration
//!
//! Typed configuration for both deployment variants. Every struct has a
//! [`Default`] built from [`crate::constants`] plus `with_*` builder methods,
//! so hosts only spell out what differs from the stock deployment.
//!
//! ```rust
//! use stagehand::config::{ArConfig, PanPolicy};
//!
//! let config = ArConfig::drag_to_move().with_reticle_threshold(0.6);
//! assert_eq!(config.gesture.pan_policy, PanPolicy::Ignore);
//! ```

use std::time::Duration;

use crate::constants::{
    DRAG_SLOP_PX, MAX_SCALE, MIN_SCALE, PAN_SENSITIVITY, RELEASE_COOLDOWN, RETICLE_HIDE_DISTANCE,
};
use crate::math::bounds::RoomLimits;
use crate::room::layout::SurfaceNaming;

/// What a single-finger horizontal drag does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPolicy {
    /// Rotate the object around the vertical axis
    RotateY,
    /// Produce no gesture; only two-finger input manipulates the object
    Ignore,
}

/// What a `select` does once an object is already placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorPolicy {
    /// Move the existing object to the reticle
    Reanchor,
    /// Ignore further selects; the first placement is final
    PlaceOnce,
}

/// Gesture recognizer tuning
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    pub pan_policy: PanPolicy,
    /// Radians of yaw per pixel of horizontal single-finger motion
    pub pan_sensitivity: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// How long the recognizer keeps reporting "dragging" after release
    pub release_cooldown: Duration,
    /// Pixels a single finger must travel before it counts as a drag
    pub drag_slop: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_policy: PanPolicy::RotateY,
            pan_sensitivity: PAN_SENSITIVITY,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            release_cooldown: RELEASE_COOLDOWN,
            drag_slop: DRAG_SLOP_PX,
        }
    }
}

impl GestureConfig {
    pub fn with_pan_policy(mut self, pan_policy: PanPolicy) -> Self {
        self.pan_policy = pan_policy;
        self
    }

    pub fn with_pan_sensitivity(mut self, sensitivity: f32) -> Self {
        self.pan_sensitivity = sensitivity;
        self
    }

    /// Set the scale band; the bounds are swapped if given in the wrong order
    pub fn with_scale_band(mut self, min: f32, max: f32) -> Self {
        self.min_scale = min.min(max);
        self.max_scale = max.max(min);
        self
    }

    pub fn with_release_cooldown(mut self, cooldown: Duration) -> Self {
        self.release_cooldown = cooldown;
        self
    }

    pub fn with_drag_slop(mut self, slop: f32) -> Self {
        self.drag_slop = slop.max(0.0);
        self
    }

    /// Clamp a scale into the configured band, whichever way round its ends
    /// were assigned
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        let low = self.min_scale.min(self.max_scale);
        let high = self.min_scale.max(self.max_scale);
        scale.max(low).min(high)
    }
}

/// Augmented-reality variant configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ArConfig {
    pub gesture: GestureConfig,
    /// Planar distance (m) within which the reticle is hidden near the placed object
    pub reticle_threshold: f32,
    pub anchor_policy: AnchorPolicy,
    /// Request a transient-input hit-test source and let single-finger drags move the object
    pub transient_drag: bool,
}

impl Default for ArConfig {
    fn default() -> Self {
        Self::rotate_on_pan()
    }
}

impl ArConfig {
    /// Deployment where one finger spins the object and two fingers pinch/twist
    pub fn rotate_on_pan() -> Self {
        Self {
            gesture: GestureConfig::default(),
            reticle_threshold: RETICLE_HIDE_DISTANCE,
            anchor_policy: AnchorPolicy::Reanchor,
            transient_drag: false,
        }
    }

    /// Deployment where one finger drags the object across surfaces and only
    /// two-finger input rotates/scales it
    pub fn drag_to_move() -> Self {
        Self {
            gesture: GestureConfig::default().with_pan_policy(PanPolicy::Ignore),
            reticle_threshold: RETICLE_HIDE_DISTANCE,
            anchor_policy: AnchorPolicy::Reanchor,
            transient_drag: true,
        }
    }

    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    pub fn with_reticle_threshold(mut self, threshold: f32) -> Self {
        self.reticle_threshold = threshold.max(0.0);
        self
    }

    pub fn with_anchor_policy(mut self, policy: AnchorPolicy) -> Self {
        self.anchor_policy = policy;
        self
    }

    pub fn with_transient_drag(mut self, enabled: bool) -> Self {
        self.transient_drag = enabled;
        self
    }
}

/// Room-configurator variant configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RoomConfig {
    pub limits: RoomLimits,
    pub naming: SurfaceNaming,
    /// Ordered, pre-loaded wall textures selectable by index
    pub wall_textures: Vec<String>,
    /// Ordered, pre-loaded floor textures selectable by index
    pub floor_textures: Vec<String>,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            limits: RoomLimits::default(),
            naming: SurfaceNaming::default(),
            wall_textures: vec![
                "textures/wall_plaster.png".to_string(),
                "textures/wall_brick.png".to_string(),
                "textures/wall_wood.png".to_string(),
            ],
            floor_textures: vec![
                "textures/floor_oak.png".to_string(),
                "textures/floor_tile.png".to_string(),
                "textures/floor_carpet.png".to_string(),
            ],
        }
    }
}

impl RoomConfig {
    pub fn with_limits(mut self, limits: RoomLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_naming(mut self, naming: SurfaceNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_wall_textures(mut self, textures: Vec<String>) -> Self {
        self.wall_textures = textures;
        self
    }

    pub fn with_floor_textures(mut self, textures: Vec<String>) -> Self {
        self.floor_textures = textures;
        self
    }
}
