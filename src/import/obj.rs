use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use crate::document::{Document, Material, Object, ObjectData, Texture};
use crate::document::mesh::{MeshData, Polygon};

/// Errors raised while importing model files into a document
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to load OBJ file {path:?}")]
    Load {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },
}

/// Loads a 3D object file into the document with automatic material extraction
///
/// Loads both geometry and materials from the OBJ/MTL files and assigns
/// materials to objects based on the material IDs in the OBJ file. Faces are
/// loaded untriangulated so the polygon structure survives into the
/// document; triangulation happens at export time.
///
/// Returns the number of objects added.
pub fn import_obj(document: &mut Document, path: impl AsRef<Path>) -> Result<usize, ImportError> {
    let path = path.as_ref();
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: false,
            single_index: false,
            ..Default::default()
        },
    )
    .map_err(|source| ImportError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let materials = materials.unwrap_or_else(|_| {
        warn!("no MTL file found for {:?}, importing without materials", path);
        Vec::new()
    });

    // Load materials from the MTL file into the material library
    let mut material_names = Vec::with_capacity(materials.len());
    for (i, mtl) in materials.iter().enumerate() {
        let material_name = if mtl.name.is_empty() {
            format!("material_{}", i)
        } else {
            mtl.name.clone()
        };
        material_names.push(material_name.clone());

        // Skip if material already exists
        if document.materials.contains(&material_name) {
            continue;
        }

        let diffuse = mtl.diffuse.unwrap_or([0.8, 0.8, 0.8]);
        let specular = mtl.specular.unwrap_or([0.0, 0.0, 0.0]);
        // MTL has no diffuse intensity; Ks magnitude stands in for the
        // specular one
        let mut material = Material::new(&material_name, diffuse, 0.8).with_specular(
            (specular[0] + specular[1] + specular[2]) / 3.0,
            mtl.shininess.unwrap_or(32.0),
        );

        if let Some(texture_path) = &mtl.diffuse_texture {
            material = material.with_texture(Texture::image(texture_path));
        }

        document.materials.add_material(material);
    }

    let mut added = 0;
    for (i, model) in models.iter().enumerate() {
        let mesh = convert_mesh(&model.mesh);
        debug!(
            "imported model {:?}: {} vertices, {} polygons",
            model.name,
            mesh.vertex_count(),
            mesh.polygon_count()
        );

        let desired_name = if model.name.is_empty() {
            format!("object_{}", i)
        } else {
            model.name.clone()
        };
        let name = document.ensure_unique_name(&desired_name);

        let mut object = Object::new(&name, ObjectData::Mesh(mesh));
        if let Some(material_id) = model.mesh.material_id {
            if material_id < material_names.len() {
                object.set_material(&material_names[material_id]);
            }
        }

        document.add_object(object);
        added += 1;
    }

    info!("imported {} objects from {:?}", added, path);
    Ok(added)
}

/// Rebuilds polygonal mesh data from a tobj mesh
fn convert_mesh(mesh: &tobj::Mesh) -> MeshData {
    let mut data = MeshData::new();

    for position in mesh.positions.chunks_exact(3) {
        data.positions.push([position[0], position[1], position[2]]);
    }

    // With triangulation disabled, indices are grouped per face by
    // face_arities; an empty arity list means plain triangles
    let arities: Vec<usize> = if mesh.face_arities.is_empty() {
        vec![3; mesh.indices.len() / 3]
    } else {
        mesh.face_arities.iter().map(|&a| a as usize).collect()
    };

    let has_uv = !mesh.texcoords.is_empty() && mesh.texcoord_indices.len() == mesh.indices.len();

    let mut cursor = 0;
    for arity in arities {
        let mut polygon = Polygon::new(mesh.indices[cursor..cursor + arity].to_vec());

        if has_uv {
            let uv = mesh.texcoord_indices[cursor..cursor + arity]
                .iter()
                .map(|&ti| {
                    let t = ti as usize * 2;
                    [mesh.texcoords[t], mesh.texcoords[t + 1]]
                })
                .collect();
            polygon = polygon.with_uv(uv);
        }

        data.polygons.push(polygon);
        cursor += arity;
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_temp_obj(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("haar_{}_{}.obj", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn quad_faces_survive_import() {
        let path = write_temp_obj(
            "quad",
            "o Quad\n\
             v 0.0 0.0 0.0\n\
             v 1.0 0.0 0.0\n\
             v 1.0 1.0 0.0\n\
             v 0.0 1.0 0.0\n\
             vt 0.0 0.0\n\
             vt 1.0 0.0\n\
             vt 1.0 1.0\n\
             vt 0.0 1.0\n\
             f 1/1 2/2 3/3 4/4\n",
        );

        let mut document = Document::new("import_test");
        let added = import_obj(&mut document, &path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(added, 1);
        let object = document.get_object(0).unwrap();
        let ObjectData::Mesh(mesh) = &object.data else {
            panic!("expected a mesh object");
        };
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.polygon_count(), 1);
        assert_eq!(mesh.polygons[0].arity(), 4);
        assert_eq!(
            mesh.polygons[0].uv,
            Some(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
        );
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut document = Document::new("import_test");
        let result = import_obj(&mut document, "/nonexistent/missing.obj");
        assert!(matches!(result, Err(ImportError::Load { .. })));
    }
}
