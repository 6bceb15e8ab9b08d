//! Polygonal mesh data stored on mesh objects.
//!
//! Meshes are kept in authoring form: shared vertex positions plus polygons
//! of any arity (triangles, quads, ngons). Triangulation only happens on a
//! [`MeshEdit`](crate::geometry::MeshEdit) handle during export, so the
//! document keeps the polygon structure the author built.

/// A single polygon referencing vertex positions by index
///
/// Carries optional per-corner UV coordinates from the mesh's active UV
/// layer. When present, `uv` has one entry per entry in `vertices`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub vertices: Vec<u32>,
    pub uv: Option<Vec<[f32; 2]>>,
}

impl Polygon {
    /// Creates a polygon without UV coordinates
    pub fn new(vertices: Vec<u32>) -> Self {
        Self { vertices, uv: None }
    }

    /// Builder pattern: attach per-corner UV coordinates
    pub fn with_uv(mut self, uv: Vec<[f32; 2]>) -> Self {
        debug_assert_eq!(uv.len(), self.vertices.len());
        self.uv = Some(uv);
        self
    }

    /// Number of corners in this polygon
    pub fn arity(&self) -> usize {
        self.vertices.len()
    }
}

/// Mesh geometry in authoring form
///
/// Vertex positions are object-local; the owning object's world matrix is
/// applied at export time.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (x, y, z), object-local
    pub positions: Vec<[f32; 3]>,
    /// Polygons referencing `positions` by index
    pub polygons: Vec<Polygon>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            polygons: Vec::new(),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of polygons in this mesh
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Number of triangles this mesh yields once fan-triangulated
    pub fn triangle_count(&self) -> usize {
        self.polygons
            .iter()
            .map(|p| p.arity().saturating_sub(2))
            .sum()
    }

    /// Whether any polygon carries UV coordinates (an active UV layer)
    pub fn has_uv_layer(&self) -> bool {
        self.polygons.iter().any(|p| p.uv.is_some())
    }
}
