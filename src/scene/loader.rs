//! Asset providers.
//!
//! The engine never loads files itself; it asks an [`AssetProvider`] for a
//! [`SceneNode`] and reacts to failure by leaving the object unplaced.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::{mesh::Mesh, node::SceneNode};
use crate::error::{PlacementError, Result};

/// A loaded manipulable object
#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub root: SceneNode,
    pub casts_shadow: bool,
}

/// Source of object and room geometry
pub trait AssetProvider {
    /// Load the manipulable object at `path`
    fn load_object(&mut self, path: &Path) -> Result<LoadedAsset>;

    /// Load the fixed room (configurator variant). Wall, floor and obstacle
    /// parts are identified later by mesh name.
    fn load_room(&mut self, path: &Path) -> Result<SceneNode>;
}

/// Loads Wavefront OBJ files through `tobj`, one [`Mesh`] per OBJ model
pub struct ObjAssetProvider {
    cast_shadows: bool,
}

impl ObjAssetProvider {
    pub fn new() -> Self {
        Self { cast_shadows: true }
    }

    /// Whether loaded objects should be flagged as shadow casters
    pub fn with_shadows(mut self, cast_shadows: bool) -> Self {
        self.cast_shadows = cast_shadows;
        self
    }

    fn load_node(&self, path: &Path) -> Result<SceneNode> {
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|e| PlacementError::asset_load(path, e))?;

        if models.is_empty() {
            return Err(PlacementError::asset_load(path, "file contains no geometry"));
        }

        let meshes: Vec<Mesh> = models
            .into_iter()
            .enumerate()
            .map(|(i, model)| {
                let name = if model.name.is_empty() {
                    format!("mesh_{}", i)
                } else {
                    model.name
                };
                Mesh::new(name, model.mesh.positions, model.mesh.indices)
            })
            .collect();

        for mesh in &meshes {
            debug!(
                "loaded mesh `{}`: {} vertices, {} triangles",
                mesh.name,
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "object".to_string());

        Ok(SceneNode::new(name, meshes))
    }
}

impl Default for ObjAssetProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetProvider for ObjAssetProvider {
    fn load_object(&mut self, path: &Path) -> Result<LoadedAsset> {
        let mut root = self.load_node(path)?;
        root.casts_shadow = self.cast_shadows;
        info!("loaded object `{}` from {}", root.name, path.display());
        Ok(LoadedAsset {
            root,
            casts_shadow: self.cast_shadows,
        })
    }

    fn load_room(&mut self, path: &Path) -> Result<SceneNode> {
        let room = self.load_node(path)?;
        info!(
            "loaded room `{}` with {} meshes from {}",
            room.name,
            room.meshes.len(),
            path.display()
        );
        Ok(room)
    }
}

/// Serves pre-built nodes by path
#[derive(Default)]
pub struct InMemoryAssets {
    nodes: HashMap<PathBuf, SceneNode>,
}

impl InMemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, node: SceneNode) {
        self.nodes.insert(path.into(), node);
    }

    pub fn with(mut self, path: impl Into<PathBuf>, node: SceneNode) -> Self {
        self.insert(path, node);
        self
    }

    fn get(&self, path: &Path) -> Result<SceneNode> {
        self.nodes
            .get(path)
            .cloned()
            .ok_or_else(|| PlacementError::asset_load(path, "no asset registered at this path"))
    }
}

impl AssetProvider for InMemoryAssets {
    fn load_object(&mut self, path: &Path) -> Result<LoadedAsset> {
        let root = self.get(path)?;
        Ok(LoadedAsset {
            casts_shadow: root.casts_shadow,
            root,
        })
    }

    fn load_room(&mut self, path: &Path) -> Result<SceneNode> {
        self.get(path)
    }
}
