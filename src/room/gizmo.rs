//! Drag gizmo attached to the configurator object.
//!
//! The gizmo only decides which axes the user can grab. Every drag still goes
//! through the same validation regardless of mode.

use std::fmt;

use cgmath::{Rad, Vector3};

use crate::math::transform::Transform;

/// Which handles the gizmo shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GizmoMode {
    /// Arrows on the two horizontal axes
    #[default]
    Translate,
    /// Ring around the vertical axis
    Rotate,
}

impl fmt::Display for GizmoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GizmoMode::Translate => write!(f, "translate"),
            GizmoMode::Rotate => write!(f, "rotate"),
        }
    }
}

/// Per-axis handle visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisVisibility {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl AxisVisibility {
    pub fn for_mode(mode: GizmoMode) -> Self {
        match mode {
            GizmoMode::Translate => Self {
                x: true,
                y: false,
                z: true,
            },
            GizmoMode::Rotate => Self {
                x: false,
                y: true,
                z: false,
            },
        }
    }
}

/// One incremental drag update reported by the gizmo
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GizmoDrag {
    Translate(Vector3<f32>),
    /// Rotation about the vertical axis
    Rotate(Rad<f32>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGizmo {
    mode: GizmoMode,
    axes: AxisVisibility,
}

impl DragGizmo {
    pub fn new(mode: GizmoMode) -> Self {
        Self {
            mode,
            axes: AxisVisibility::for_mode(mode),
        }
    }

    pub fn mode(&self) -> GizmoMode {
        self.mode
    }

    pub fn axes(&self) -> AxisVisibility {
        self.axes
    }

    pub fn set_mode(&mut self, mode: GizmoMode) {
        self.mode = mode;
        self.axes = AxisVisibility::for_mode(mode);
    }

    /// Apply `drag` to `current`, dropping any component on a hidden axis
    pub fn propose(&self, current: &Transform, drag: GizmoDrag) -> Transform {
        let mut proposed = *current;
        match drag {
            GizmoDrag::Translate(delta) => {
                proposed.position += Vector3::new(
                    if self.axes.x { delta.x } else { 0.0 },
                    if self.axes.y { delta.y } else { 0.0 },
                    if self.axes.z { delta.z } else { 0.0 },
                );
            }
            GizmoDrag::Rotate(angle) if self.axes.y => {
                proposed.set_yaw(current.yaw() + angle);
            }
            GizmoDrag::Rotate(_) => {}
        }
        proposed
    }
}

impl Default for DragGizmo {
    fn default() -> Self {
        Self::new(GizmoMode::default())
    }
}
