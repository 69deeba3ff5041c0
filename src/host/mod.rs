//! # Desktop Host
//!
//! Glue that runs the engine in a desktop window: maps winit input to touch
//! events, simulates an AR platform on a floor plane and hands each frame to a
//! renderer.
//!
//! - [`ViewCamera`] / [`Ray`] - screen-to-world ray casting
//! - [`touch_input`] - winit touch and left-mouse mapping
//! - [`DesktopSurface`] - [`HitTestBackend`](crate::ar::HitTestBackend) and
//!   [`XrFrame`](crate::ar::XrFrame) over the floor plane
//! - [`FrameRenderer`] - renderer seam, with [`LogRenderer`]

pub mod camera;
pub mod desktop;
pub mod render;
pub mod touch_input;

pub use camera::{Ray, ViewCamera};
pub use desktop::DesktopSurface;
pub use render::{FrameRenderer, FrameView, LogRenderer};
pub use touch_input::{MouseTouch, MOUSE_TOUCH_ID};
