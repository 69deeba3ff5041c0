// Shared tuning constants for the gesture, reticle and room subsystems.

use std::time::Duration;

// Scale band enforced by the pinch recognizer
pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;

// Single-finger pan: radians of yaw per horizontal pixel
pub const PAN_SENSITIVITY: f32 = 0.01;

// A one-finger touch only counts as a drag once it has travelled this far (px)
pub const DRAG_SLOP_PX: f32 = 8.0;

// Absorbs the synthetic select/tap some platforms emit right after a release
pub const RELEASE_COOLDOWN: Duration = Duration::from_millis(100);

// Reticle is hidden while the hit pose is within this planar distance (m) of the placed object
pub const RETICLE_HIDE_DISTANCE: f32 = 0.5;

// Two touch points closer than this (px) cannot seed a pinch
pub const MIN_PINCH_DISTANCE_PX: f32 = 1.0;

// Default legal placement rectangle of the configurator room (m)
pub const ROOM_HALF_EXTENT_X: f32 = 3.25;
pub const ROOM_HALF_EXTENT_Z: f32 = 3.25;

// Height of the floor plane objects are pinned to
pub const FLOOR_Y: f32 = 0.0;

// Startup defaults
pub const DEFAULT_MODEL: &str = "chair";
pub const DEFAULT_ASSET_DIR: &str = "assets";
pub const DEFAULT_ROOM_PATH: &str = "assets/room.obj";
pub const MODEL_EXTENSION: &str = "obj";

// Surface naming convention inside the room asset
pub const WALL_PATTERN: &str = "wall";
pub const FLOOR_PATTERN: &str = "floor";
pub const OBSTACLE_PATTERN: &str = "obstacle";
