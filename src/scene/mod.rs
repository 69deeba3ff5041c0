//! # Scene Module
//!
//! The minimal scene model the placement engine needs: named meshes grouped
//! into nodes, a template factory for the manipulable object, and the asset
//! provider seam that fills them.
//!
//! ## Key Components
//!
//! - [`Mesh`] - Named static geometry (vertex positions + triangle indices)
//! - [`SceneNode`] - A loaded asset with its own [`Transform`](crate::math::Transform)
//! - [`ObjectTemplate`] - Clones independent instances on placement
//! - [`AssetProvider`] - Loads objects and rooms; [`ObjAssetProvider`] reads OBJ files
//!
//! ## Usage
//!
//! ```no_run
//! use stagehand::scene::{AssetProvider, ObjAssetProvider, ObjectTemplate};
//! use std::path::Path;
//!
//! let mut provider = ObjAssetProvider::new();
//! match provider.load_object(Path::new("assets/chair.obj")) {
//!     Ok(asset) => {
//!         let template = ObjectTemplate::new(asset.root);
//!         println!("ready: {}", template.prototype().name);
//!     }
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

pub mod loader;
pub mod mesh;
pub mod node;
pub mod template;

// Re-export main types
pub use loader::{AssetProvider, InMemoryAssets, LoadedAsset, ObjAssetProvider};
pub use mesh::Mesh;
pub use node::SceneNode;
pub use template::ObjectTemplate;
