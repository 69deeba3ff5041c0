//! # Stagehand Prelude
//!
//! Commonly used types for both deployment variants in one import.
//!
//! ```no_run
//! use stagehand::prelude::*;
//!
//! let mut room = RoomConfigurator::new(RoomConfig::default());
//! let mut provider = ObjAssetProvider::new();
//! if let Err(e) = room.load_object(provider.load_object(std::path::Path::new("assets/chair.obj"))) {
//!     eprintln!("{e}");
//! }
//! room.set_gizmo_mode(GizmoMode::Rotate);
//! ```

// Context objects
pub use crate::ar::{ArSession, FrameReport, SelectOutcome};
pub use crate::room::{DragOutcome, GizmoDrag, GizmoMode, RoomConfigurator, Violation};

// Platform seams
pub use crate::ar::{HitPose, HitTestBackend, XrFrame};
pub use crate::host::{FrameRenderer, FrameView};
pub use crate::scene::{AssetProvider, InMemoryAssets, LoadedAsset, ObjAssetProvider};

// Configuration and input
pub use crate::config::{AnchorPolicy, ArConfig, GestureConfig, PanPolicy, RoomConfig};
pub use crate::gesture::{GestureEvent, TouchEvent};

// Math and errors
pub use crate::error::{PlacementError, Result};
pub use crate::math::{Aabb, RoomLimits, Transform};
pub use cgmath::{Rad, Vector3};
