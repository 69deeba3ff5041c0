use std::fmt;

use cgmath::Vector3;
use log::{debug, info};

use super::hit::HitPose;
use super::reticle::Reticle;
use crate::config::AnchorPolicy;
use crate::gesture::GestureEvent;
use crate::math::transform::Transform;
use crate::scene::{ObjectTemplate, SceneNode};

/// Lifecycle of the single manipulable object
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementState {
    Unplaced,
    Placed(SceneNode),
}

/// Why a select did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Dragging,
    ReticleHidden,
    NoTemplate,
    AlreadyPlaced,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            IgnoreReason::Dragging => "a drag is in progress",
            IgnoreReason::ReticleHidden => "the reticle is hidden",
            IgnoreReason::NoTemplate => "no object is loaded",
            IgnoreReason::AlreadyPlaced => "the object is already placed",
        };
        f.write_str(reason)
    }
}

/// Result of a select event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectOutcome {
    Placed(Vector3<f32>),
    Reanchored(Vector3<f32>),
    Ignored(IgnoreReason),
}

/// Unplaced -> Placed on select, manipulation while placed.
#[derive(Debug, Clone)]
pub struct PlacementMachine {
    state: PlacementState,
    template: Option<ObjectTemplate>,
    policy: AnchorPolicy,
}

impl PlacementMachine {
    pub fn new(policy: AnchorPolicy) -> Self {
        Self {
            state: PlacementState::Unplaced,
            template: None,
            policy,
        }
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    pub fn set_template(&mut self, template: ObjectTemplate) {
        self.template = Some(template);
    }

    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }

    pub fn object(&self) -> Option<&SceneNode> {
        match &self.state {
            PlacementState::Placed(node) => Some(node),
            PlacementState::Unplaced => None,
        }
    }

    pub fn object_position(&self) -> Option<Vector3<f32>> {
        self.object().map(SceneNode::position)
    }

    /// Transform the recognizer reads; identity while unplaced
    pub fn object_transform(&self) -> Transform {
        self.object()
            .map(|node| node.transform)
            .unwrap_or_else(Transform::identity)
    }

    pub fn select(&mut self, reticle: &Reticle, dragging: bool) -> SelectOutcome {
        if dragging {
            return ignored(IgnoreReason::Dragging);
        }
        if !reticle.visible {
            return ignored(IgnoreReason::ReticleHidden);
        }
        let Some(template) = self.template.as_mut() else {
            return ignored(IgnoreReason::NoTemplate);
        };

        let target = reticle.position();
        match &mut self.state {
            PlacementState::Unplaced => {
                let mut transform = template.prototype().transform;
                transform.position = target;
                let node = template.instantiate(transform);
                info!("placed '{}' at {:?}", node.name, target);
                self.state = PlacementState::Placed(node);
                SelectOutcome::Placed(target)
            }
            PlacementState::Placed(node) => match self.policy {
                AnchorPolicy::Reanchor => {
                    node.set_position(target);
                    info!("re-anchored '{}' at {:?}", node.name, target);
                    SelectOutcome::Reanchored(target)
                }
                AnchorPolicy::PlaceOnce => ignored(IgnoreReason::AlreadyPlaced),
            },
        }
    }

    /// Apply a gesture to the placed object. Returns false when nothing was changed.
    pub fn apply_gesture(&mut self, event: &GestureEvent) -> bool {
        let PlacementState::Placed(node) = &mut self.state else {
            return false;
        };

        match *event {
            GestureEvent::Pan { rotation_delta, .. } => {
                let yaw = node.transform.yaw() + rotation_delta;
                node.transform.set_yaw(yaw);
                true
            }
            GestureEvent::PinchRotate {
                scale, rotation_y, ..
            } => {
                node.transform.set_uniform_scale(scale);
                node.transform.set_yaw(rotation_y);
                true
            }
            GestureEvent::DragStart | GestureEvent::DragEnd => false,
        }
    }

    /// Move the placed object straight onto a hit pose
    pub fn drag_to(&mut self, hit: &HitPose) -> bool {
        match &mut self.state {
            PlacementState::Placed(node) => {
                node.set_position(hit.position());
                true
            }
            PlacementState::Unplaced => false,
        }
    }
}

fn ignored(reason: IgnoreReason) -> SelectOutcome {
    debug!("select ignored: {}", reason);
    SelectOutcome::Ignored(reason)
}

impl Default for PlacementMachine {
    fn default() -> Self {
        Self::new(AnchorPolicy::Reanchor)
    }
}
