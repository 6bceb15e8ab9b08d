//! Temporary mesh-editing handle
//!
//! [`MeshEdit`] gives callers a scratch copy of a mesh they can run edits
//! on without touching the document. The exporter opens one per mesh,
//! triangulates, reads the result, and the handle is released when it goes
//! out of scope.

use crate::document::mesh::{MeshData, Polygon};

/// An in-memory editing handle over a copy of a mesh
///
/// Edits never write back to the source mesh; call [`MeshEdit::into_mesh`]
/// to take the edited geometry out of the handle.
pub struct MeshEdit {
    positions: Vec<[f32; 3]>,
    polygons: Vec<Polygon>,
}

impl MeshEdit {
    /// Opens an editing handle on a copy of the given mesh
    pub fn from_mesh(mesh: &MeshData) -> Self {
        Self {
            positions: mesh.positions.clone(),
            polygons: mesh.polygons.clone(),
        }
    }

    /// Splits every polygon with more than three corners into triangles
    ///
    /// Quads and ngons are fan-split around their first corner; per-corner
    /// UVs are carried onto the resulting triangles. Polygons with fewer
    /// than three corners cannot form a face and are dropped.
    pub fn triangulate(&mut self) {
        let polygons = std::mem::take(&mut self.polygons);

        for polygon in polygons {
            if polygon.arity() < 3 {
                continue;
            }
            if polygon.arity() == 3 {
                self.polygons.push(polygon);
                continue;
            }

            for i in 1..polygon.vertices.len() - 1 {
                let vertices = vec![
                    polygon.vertices[0],
                    polygon.vertices[i],
                    polygon.vertices[i + 1],
                ];
                let uv = polygon
                    .uv
                    .as_ref()
                    .map(|uv| vec![uv[0], uv[i], uv[i + 1]]);
                self.polygons.push(Polygon { vertices, uv });
            }
        }
    }

    /// Consumes the handle and returns the edited mesh
    pub fn into_mesh(self) -> MeshData {
        MeshData {
            positions: self.positions,
            polygons: self.polygons,
        }
    }
}
