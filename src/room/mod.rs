//! # Room Configurator
//!
//! Fixed virtual room with one object the user drags around with a gizmo.
//! Every drag update runs propose → validate → commit/restore synchronously:
//!
//! 1. The gizmo turns a drag into a proposed [`Transform`]
//! 2. [`ConstraintValidator`] rebuilds the object's bounds at that transform and
//!    checks the room rectangle and every static obstacle
//! 3. [`TransformCommitter`] either records the pose as last-known-good or
//!    snaps the object back to the previous one
//!
//! A rejected frame is corrected before the next render, so the user sees a
//! snap-back rather than a hard stop.
//!
//! ## Usage
//!
//! ```no_run
//! use stagehand::config::RoomConfig;
//! use stagehand::room::{GizmoDrag, RoomConfigurator};
//! use stagehand::scene::{AssetProvider, ObjAssetProvider};
//! use cgmath::Vector3;
//! use std::path::Path;
//!
//! let mut provider = ObjAssetProvider::new();
//! let mut room = RoomConfigurator::new(RoomConfig::default());
//! room.load_room(provider.load_room(Path::new("assets/room.obj"))).ok();
//! room.load_object(provider.load_object(Path::new("assets/chair.obj"))).ok();
//! let outcome = room.on_gizmo_drag(GizmoDrag::Translate(Vector3::new(0.5, 0.0, 0.0)));
//! println!("{:?}", outcome);
//! ```

pub mod committer;
pub mod gizmo;
pub mod layout;
pub mod textures;
pub mod validator;

use log::{debug, error, info, warn};

pub use committer::TransformCommitter;
pub use gizmo::{AxisVisibility, DragGizmo, GizmoDrag, GizmoMode};
pub use layout::{RoomLayout, StaticObstacle, SurfaceNaming};
pub use textures::TexturePalette;
pub use validator::{ConstraintValidator, Verdict, Violation};

use crate::config::RoomConfig;
use crate::constants::FLOOR_Y;
use crate::error::{PlacementError, Result};
use crate::math::transform::Transform;
use crate::scene::{LoadedAsset, SceneNode};

/// Result of one gizmo update
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    Accepted,
    /// The object was put back to its last-known-good pose
    Reverted(Violation),
    NoObject,
}

/// The object currently in the room, with its gizmo and last-known-good pose
#[derive(Debug, Clone)]
struct Attached {
    node: SceneNode,
    gizmo: DragGizmo,
    committer: TransformCommitter,
}

/// Context object for the room-configurator variant
#[derive(Debug)]
pub struct RoomConfigurator {
    config: RoomConfig,
    layout: RoomLayout,
    object: Option<Attached>,
    gizmo_mode: GizmoMode,
    walls: TexturePalette,
    floors: TexturePalette,
    wall_texture: Option<usize>,
    floor_texture: Option<usize>,
    accepted: u64,
    reverted: u64,
}

impl RoomConfigurator {
    pub fn new(config: RoomConfig) -> Self {
        Self {
            layout: RoomLayout::empty(config.limits),
            object: None,
            gizmo_mode: GizmoMode::default(),
            walls: TexturePalette::new("wall", config.wall_textures.clone()),
            floors: TexturePalette::new("floor", config.floor_textures.clone()),
            wall_texture: None,
            floor_texture: None,
            accepted: 0,
            reverted: 0,
            config,
        }
    }

    /// Install the room and discover its walls, floors and obstacles.
    /// On failure the previous layout is kept.
    pub fn load_room(&mut self, room: Result<SceneNode>) -> Result<()> {
        match room {
            Ok(room) => {
                self.layout = RoomLayout::discover(room, &self.config.naming, self.config.limits);
                Ok(())
            }
            Err(e) => {
                error!("failed to load room: {}", e);
                Err(e)
            }
        }
    }

    /// Center the object on the floor, attach the gizmo and take the initial
    /// pose as last-known-good. On failure the room stays empty.
    ///
    /// The object is placed once; a second call is refused and leaves the
    /// attached object untouched.
    pub fn load_object(&mut self, asset: Result<LoadedAsset>) -> Result<()> {
        if let Some(attached) = &self.object {
            let e = PlacementError::ObjectAlreadyAttached {
                name: attached.node.name.clone(),
            };
            warn!("{}", e);
            return Err(e);
        }

        let LoadedAsset {
            mut root,
            casts_shadow,
        } = match asset {
            Ok(asset) => asset,
            Err(e) => {
                error!("failed to load configurator object: {}", e);
                return Err(e);
            }
        };

        root.casts_shadow = casts_shadow;
        root.center_on_floor(FLOOR_Y);

        let verdict = ConstraintValidator::new(&self.layout).validate(&root, &root.transform);
        if let Verdict::Reject(violation) = &verdict {
            // Still the starting point for snap-back
            debug!("initial placement of '{}' is {}", root.name, violation);
        }

        info!(
            "'{}' attached at {:?} in {} mode",
            root.name, root.transform.position, self.gizmo_mode
        );
        self.object = Some(Attached {
            committer: TransformCommitter::new(&root.transform),
            gizmo: DragGizmo::new(self.gizmo_mode),
            node: root,
        });
        Ok(())
    }

    pub fn set_gizmo_mode(&mut self, mode: GizmoMode) {
        if self.gizmo_mode != mode {
            debug!("gizmo mode -> {}", mode);
        }
        self.gizmo_mode = mode;
        if let Some(attached) = &mut self.object {
            attached.gizmo.set_mode(mode);
        }
    }

    pub fn gizmo_mode(&self) -> GizmoMode {
        self.gizmo_mode
    }

    pub fn axis_visibility(&self) -> AxisVisibility {
        AxisVisibility::for_mode(self.gizmo_mode)
    }

    /// Handle one incremental gizmo drag
    pub fn on_gizmo_drag(&mut self, drag: GizmoDrag) -> DragOutcome {
        let Some(attached) = &self.object else {
            return DragOutcome::NoObject;
        };
        let proposed = attached.gizmo.propose(&attached.node.transform, drag);
        self.on_transform_changed(proposed)
    }

    /// Validate a transform the gizmo has already written to the object,
    /// then commit it or snap back.
    pub fn on_transform_changed(&mut self, proposed: Transform) -> DragOutcome {
        let Some(attached) = &mut self.object else {
            return DragOutcome::NoObject;
        };

        attached.node.transform = proposed;
        let verdict =
            ConstraintValidator::new(&self.layout).validate(&attached.node, &attached.node.transform);

        match verdict {
            Verdict::Accept => {
                attached.committer.commit(&attached.node.transform);
                self.accepted += 1;
                DragOutcome::Accepted
            }
            Verdict::Reject(violation) => {
                debug!("move rejected: {}", violation);
                attached.committer.restore(&mut attached.node.transform);
                self.reverted += 1;
                DragOutcome::Reverted(violation)
            }
        }
    }

    /// Assign wall texture `index` to every wall mesh. Out of range is a no-op.
    pub fn update_wall_texture(&mut self, index: usize) -> bool {
        let Some(index) = self.walls.select(index) else {
            return false;
        };
        apply_texture(&mut self.layout.room, &self.layout.walls, index);
        self.wall_texture = Some(index);
        true
    }

    /// Assign floor texture `index` to every floor mesh. Out of range is a no-op.
    pub fn update_floor_texture(&mut self, index: usize) -> bool {
        let Some(index) = self.floors.select(index) else {
            return false;
        };
        apply_texture(&mut self.layout.room, &self.layout.floors, index);
        self.floor_texture = Some(index);
        true
    }

    pub fn wall_texture(&self) -> Option<&str> {
        self.wall_texture.and_then(|i| self.walls.get(i))
    }

    pub fn floor_texture(&self) -> Option<&str> {
        self.floor_texture.and_then(|i| self.floors.get(i))
    }

    pub fn object(&self) -> Option<&SceneNode> {
        self.object.as_ref().map(|attached| &attached.node)
    }

    pub fn last_known_good(&self) -> Option<&crate::math::PoseSnapshot> {
        self.object
            .as_ref()
            .map(|attached| attached.committer.last_known_good())
    }

    pub fn layout(&self) -> &RoomLayout {
        &self.layout
    }

    /// Number of accepted gizmo updates
    pub fn accepted_updates(&self) -> u64 {
        self.accepted
    }

    /// Number of gizmo updates that snapped back
    pub fn reverted_updates(&self) -> u64 {
        self.reverted
    }
}

fn apply_texture(room: &mut SceneNode, meshes: &[usize], texture: usize) {
    for &index in meshes {
        if let Some(mesh) = room.meshes.get_mut(index) {
            mesh.texture = Some(texture);
        }
    }
}
