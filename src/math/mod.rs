//! # Spatial Math
//!
//! Transforms and axis-aligned bounding volumes shared by both variants.
//! Bounding volumes are always derived on demand from a transform; nothing in
//! this module caches them.

pub mod bounds;
pub mod transform;

pub use bounds::{Aabb, HorizontalAxis, RoomLimits};
pub use transform::{PoseSnapshot, Transform};
