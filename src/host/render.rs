use log::trace;

use crate::ar::Reticle;
use crate::error::Result;
use crate::room::AxisVisibility;
use crate::scene::SceneNode;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameView<'a> {
    /// Fixed room geometry (configurator only)
    pub room: Option<&'a SceneNode>,
    /// The manipulable object, once it exists
    pub object: Option<&'a SceneNode>,
    /// AR reticle; drawn only when visible
    pub reticle: Option<&'a Reticle>,
    /// Gizmo handles to show around the object
    pub gizmo: Option<AxisVisibility>,
}

/// Renderer seam. The engine hands over a [`FrameView`] once per frame.
pub trait FrameRenderer {
    fn render(&mut self, view: &FrameView<'_>) -> Result<()>;
}

/// Renderer that only logs what it would draw
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameRenderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) -> Result<()> {
        self.frames += 1;

        if let Some(object) = view.object {
            let t = &object.transform;
            trace!(
                "frame {}: '{}' at ({:.3}, {:.3}, {:.3}) yaw {:.3} scale {:.3}",
                self.frames,
                object.name,
                t.position.x,
                t.position.y,
                t.position.z,
                t.yaw().0,
                t.uniform_scale()
            );
        }
        if let Some(reticle) = view.reticle.filter(|r| r.visible) {
            let p = reticle.position();
            trace!("frame {}: reticle at ({:.3}, {:.3}, {:.3})", self.frames, p.x, p.y, p.z);
        }
        if let Some(axes) = view.gizmo {
            trace!("frame {}: gizmo axes {:?}", self.frames, axes);
        }
        Ok(())
    }
}
