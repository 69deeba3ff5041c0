use crate::math::bounds::Aabb;

/// Static geometry of one named part of a loaded asset.
///
/// Only vertex positions are kept; shading data belongs to the external
/// renderer. `texture` is the index into the surface's texture palette
/// (walls and floors of the room variant), `None` for untextured parts.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub name: String,
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    pub texture: Option<usize>,
}

impl Mesh {
    /// Build a mesh from the flat `[x, y, z, x, y, z, ...]` layout OBJ loaders produce
    pub fn new(name: impl Into<String>, positions: Vec<f32>, indices: Vec<u32>) -> Self {
        let positions = positions
            .chunks_exact(3)
            .map(|p| [p[0], p[1], p[2]])
            .collect();

        Self {
            name: name.into(),
            positions,
            indices,
            texture: None,
        }
    }

    /// Axis-aligned box mesh, handy for rooms, furniture and tests
    pub fn cuboid(name: impl Into<String>, bounds: Aabb) -> Self {
        let (lo, hi) = (bounds.min, bounds.max);
        let positions = vec![
            [lo.x, lo.y, lo.z],
            [hi.x, lo.y, lo.z],
            [hi.x, hi.y, lo.z],
            [lo.x, hi.y, lo.z],
            [lo.x, lo.y, hi.z],
            [hi.x, lo.y, hi.z],
            [hi.x, hi.y, hi.z],
            [lo.x, hi.y, hi.z],
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 2, 1, 0, 3, 2, // back
            4, 5, 6, 4, 6, 7, // front
            0, 1, 5, 0, 5, 4, // bottom
            3, 6, 2, 3, 7, 6, // top
            0, 4, 7, 0, 7, 3, // left
            1, 2, 6, 1, 6, 5, // right
        ];

        Self {
            name: name.into(),
            positions,
            indices,
            texture: None,
        }
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bounds in the mesh's own (node-local) space
    pub fn local_bounds(&self) -> Option<Aabb> {
        if self.positions.is_empty() {
            None
        } else {
            Some(Aabb::from_vertices(&self.positions))
        }
    }

    /// Case-insensitive name containment, the room asset's tagging convention
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }
}
