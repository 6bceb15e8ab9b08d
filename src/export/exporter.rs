//! The export procedure
//!
//! One pass over the document's objects, in order: meshes are triangulated
//! through a [`MeshEdit`] handle and flattened into the shared vertex/face
//! arrays, cameras overwrite the scene's view transform (last one wins),
//! lamps become point lights, and metaball ball elements become spheres.
//! The result is written in one shot as pretty-printed JSON to
//! `<directory>/<name>.scene`.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use cgmath::{EuclideanSpace, Point3, Transform};
use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::document::mesh::MeshData;
use crate::document::object::{MetaData, MetaElementKind};
use crate::document::{Document, LampData, Material, Object, ObjectData, Texture};
use crate::geometry::MeshEdit;

use super::scene_file::{
    FaceRecord, LampRecord, MaterialRecord, SceneFile, SphereRecord, WorldRecord,
};

/// Errors raised while exporting a document
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("object {object:?} references unknown material {material:?}")]
    UnknownMaterial { object: String, material: String },
    #[error("failed to encode scene JSON")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write scene file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Builds the `.scene` structure for a document
///
/// The document is not modified; triangulation happens on per-mesh editing
/// handles. Objects hidden from render contribute nothing.
pub fn export_document(document: &Document) -> Result<SceneFile, ExportError> {
    let mut scene = SceneFile::new();

    for object in &document.objects {
        if object.hide_render {
            debug!("skipping {:?}: hidden from render", object.name);
            continue;
        }
        debug!("exporting {} object {:?}", object.data.kind(), object.name);

        match &object.data {
            ObjectData::Mesh(mesh) => export_mesh(&mut scene, document, object, mesh)?,
            ObjectData::Camera => export_camera(&mut scene, object),
            ObjectData::Lamp(lamp) => export_lamp(&mut scene, object, lamp),
            ObjectData::Meta(meta) => export_meta(&mut scene, document, object, meta)?,
        }
    }

    scene.world = document.world.as_ref().map(|world| WorldRecord {
        ambient_color: world.ambient_color,
        horizon_color: world.horizon_color,
        ambient_factor: world.ambient_factor,
    });

    info!(
        "exported scene {:?}: {} vertices, {} faces, {} materials, {} spheres, {} lamps",
        document.name,
        scene.vertices.len(),
        scene.faces.len(),
        scene.materials.len(),
        scene.spheres.len(),
        scene.lamps.len()
    );

    Ok(scene)
}

/// Exports a document and writes it to `<directory>/<name>.scene`
///
/// Returns the path written. The file is created in one shot; a failed
/// export leaves no partial output behind only because nothing is written
/// until the whole scene structure has been built.
pub fn write_scene(document: &Document) -> Result<PathBuf, ExportError> {
    let scene = export_document(document)?;
    let path = document.scene_path();

    let file = File::create(&path).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_pretty(&scene, &mut writer)?;
    writer.flush().map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;

    info!("wrote scene file {:?}", path);
    Ok(path)
}

/// Renders a scene structure as the pretty-printed JSON the file contains
pub fn scene_json(scene: &SceneFile) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_pretty(scene, &mut buffer)?;
    Ok(String::from_utf8(buffer).expect("serde_json emits UTF-8"))
}

// The renderer side expects 4-space indentation
fn write_pretty<W: Write>(scene: &SceneFile, writer: W) -> Result<(), ExportError> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    scene.serialize(&mut serializer)?;
    Ok(())
}

fn export_mesh(
    scene: &mut SceneFile,
    document: &Document,
    object: &Object,
    mesh: &MeshData,
) -> Result<(), ExportError> {
    let mut edit = MeshEdit::from_mesh(mesh);
    edit.triangulate();
    let mesh = edit.into_mesh();

    let base_vertex_index = scene.vertices.len() as u32;
    let material = append_active_material(scene, document, object)?;

    for position in &mesh.positions {
        let world = object
            .transform
            .transform_point(Point3::new(position[0], position[1], position[2]));
        scene.vertices.push([world.x, world.y, world.z]);
    }

    for polygon in &mesh.polygons {
        scene.faces.push(FaceRecord {
            vertices: [
                polygon.vertices[0] + base_vertex_index,
                polygon.vertices[1] + base_vertex_index,
                polygon.vertices[2] + base_vertex_index,
            ],
            material,
            uv: polygon.uv.as_ref().map(|uv| [uv[0], uv[1], uv[2]]),
        });
    }

    Ok(())
}

// Last camera wins: overwrite, not merge
fn export_camera(scene: &mut SceneFile, object: &Object) {
    let m = &object.transform;
    scene.transform = Some([
        [m.x.x, m.y.x, m.z.x],
        [m.x.y, m.y.y, m.z.y],
        [m.x.z, m.y.z, m.z.z],
    ]);
    scene.translate = Some([m.w.x, m.w.y, m.w.z]);
}

fn export_lamp(scene: &mut SceneFile, object: &Object, lamp: &LampData) {
    let m = &object.transform;
    scene.lamps.push(LampRecord {
        pos: [m.w.x, m.w.y, m.w.z],
        intensity: lamp.energy,
        distance: lamp.distance,
    });
}

fn export_meta(
    scene: &mut SceneFile,
    document: &Document,
    object: &Object,
    meta: &MetaData,
) -> Result<(), ExportError> {
    let material = append_active_material(scene, document, object)?;

    for element in &meta.elements {
        // Only ball elements map onto renderer spheres
        if element.kind != MetaElementKind::Ball {
            debug!(
                "skipping non-ball element of {:?} ({:?})",
                object.name, element.kind
            );
            continue;
        }

        let center = object
            .transform
            .transform_point(Point3::from_vec(element.position));
        scene.spheres.push(SphereRecord {
            center: [center.x, center.y, center.z],
            radius: element.radius / 2.0,
            material,
        });
    }

    Ok(())
}

/// Appends the object's active material record, if the object has one
///
/// Every object gets its own record; shared materials are duplicated per
/// object rather than deduplicated. A material id that does not resolve in
/// the document's library aborts the export.
fn append_active_material(
    scene: &mut SceneFile,
    document: &Document,
    object: &Object,
) -> Result<Option<usize>, ExportError> {
    let Some(id) = &object.material else {
        return Ok(None);
    };

    let material =
        document
            .materials
            .get_material(id)
            .ok_or_else(|| ExportError::UnknownMaterial {
                object: object.name.clone(),
                material: id.clone(),
            })?;

    scene.materials.push(material_record(material));
    Ok(Some(scene.materials.len() - 1))
}

fn material_record(material: &Material) -> MaterialRecord {
    // Only image textures reach the renderer; a missing or procedural
    // texture leaves the image fields null
    let (image_path, scale_x, scale_y) = match &material.texture {
        Some(Texture::Image {
            path,
            scale_x,
            scale_y,
        }) => (
            Some(path.to_string_lossy().into_owned()),
            Some(*scale_x),
            Some(*scale_y),
        ),
        _ => (None, None, None),
    };

    MaterialRecord {
        diffusive_color: material.diffuse_color,
        diffusive_factor: material.diffuse_intensity,
        specular_factor: material.specular_intensity,
        specular_hardness: material.specular_hardness,
        reflection_factor: material.reflection_factor,
        image_path,
        scale_x,
        scale_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::material::ProceduralKind;
    use crate::document::object::MetaElement;
    use crate::document::{MetaData, World};
    use crate::geometry::{generate_cube, generate_plane};
    use cgmath::{Deg, Vector3};
    use std::fs;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    fn lamp(name: &str, position: Vector3<f32>, energy: f32, distance: f32) -> Object {
        let mut object = Object::new(name, ObjectData::Lamp(LampData::new(energy, distance)));
        object.set_translation(position);
        object
    }

    #[test]
    fn cube_flattens_to_faces_with_valid_indices() {
        let mut document = Document::new("cube_test");
        document.add_object(Object::new("Cube", ObjectData::Mesh(generate_cube())));

        let scene = export_document(&document).unwrap();
        assert_eq!(scene.vertices.len(), 8);
        // 6 quads triangulate to 12 faces
        assert_eq!(scene.faces.len(), 12);
        for face in &scene.faces {
            assert!(face
                .vertices
                .iter()
                .all(|&v| (v as usize) < scene.vertices.len()));
            assert!(face.material.is_none());
            assert!(face.uv.is_some());
        }
    }

    #[test]
    fn vertices_are_world_space() {
        let mut document = Document::new("transform_test");
        let object = document.add_object(Object::new("Cube", ObjectData::Mesh(generate_cube())));
        object.set_translation(Vector3::new(10.0, 0.0, 0.0));

        let scene = export_document(&document).unwrap();
        for vertex in &scene.vertices {
            assert!(vertex[0] >= 9.5 && vertex[0] <= 10.5);
        }
    }

    #[test]
    fn second_mesh_offsets_its_face_indices() {
        let mut document = Document::new("offset_test");
        document.add_object(Object::new("A", ObjectData::Mesh(generate_plane(1.0, 1.0, 1, 1))));
        document.add_object(Object::new("B", ObjectData::Mesh(generate_plane(1.0, 1.0, 1, 1))));

        let scene = export_document(&document).unwrap();
        assert_eq!(scene.vertices.len(), 8);
        assert_eq!(scene.faces.len(), 4);
        // faces of B start past A's vertices
        assert!(scene.faces[2].vertices.iter().all(|&v| v >= 4));
        assert!(scene.faces[3].vertices.iter().all(|&v| v >= 4));
    }

    #[test]
    fn materials_are_appended_per_object() {
        let mut document = Document::new("material_test");
        document.add_material("steel", [0.6, 0.6, 0.65], 0.7);
        document.add_object(
            Object::new("A", ObjectData::Mesh(generate_cube())).with_material("steel"),
        );
        document.add_object(
            Object::new("B", ObjectData::Mesh(generate_cube())).with_material("steel"),
        );

        let scene = export_document(&document).unwrap();
        // no dedup: one record per object
        assert_eq!(scene.materials.len(), 2);
        assert_eq!(scene.faces[0].material, Some(0));
        assert_eq!(scene.faces[12].material, Some(1));
    }

    #[test]
    fn unknown_material_aborts_the_export() {
        let mut document = Document::new("dangling_test");
        document.add_object(
            Object::new("Cube", ObjectData::Mesh(generate_cube())).with_material("missing"),
        );

        let result = export_document(&document);
        assert!(matches!(
            result,
            Err(ExportError::UnknownMaterial { .. })
        ));
    }

    #[test]
    fn image_texture_fields_export_and_procedural_degrade_to_null() {
        let mut document = Document::new("texture_test");
        document.add_material("brick", [0.7, 0.3, 0.2], 0.9).texture =
            Some(Texture::Image {
                path: "textures/brick.png".into(),
                scale_x: 2.0,
                scale_y: 3.0,
            });
        document.add_material("fog", [0.9, 0.9, 0.9], 0.5).texture =
            Some(Texture::Procedural {
                kind: ProceduralKind::Clouds,
            });
        document.add_object(
            Object::new("A", ObjectData::Mesh(generate_cube())).with_material("brick"),
        );
        document.add_object(
            Object::new("B", ObjectData::Mesh(generate_cube())).with_material("fog"),
        );

        let scene = export_document(&document).unwrap();
        assert_eq!(
            scene.materials[0].image_path.as_deref(),
            Some("textures/brick.png")
        );
        assert_eq!(scene.materials[0].scale_x, Some(2.0));
        assert_eq!(scene.materials[0].scale_y, Some(3.0));
        assert!(scene.materials[1].image_path.is_none());
        assert!(scene.materials[1].scale_x.is_none());
        assert!(scene.materials[1].scale_y.is_none());
    }

    #[test]
    fn last_camera_wins() {
        let mut document = Document::new("camera_test");
        let first = document.add_object(Object::new("Camera", ObjectData::Camera));
        first.set_translation(Vector3::new(1.0, 2.0, 3.0));
        let second = document.add_object(Object::new("Camera (1)", ObjectData::Camera));
        second.set_translation(Vector3::new(4.0, 5.0, 6.0));

        let scene = export_document(&document).unwrap();
        assert_eq!(scene.translate, Some([4.0, 5.0, 6.0]));
    }

    #[test]
    fn camera_transform_holds_rotation_rows() {
        let mut document = Document::new("camera_rows_test");
        let camera = document.add_object(Object::new("Camera", ObjectData::Camera));
        camera.rotate_z(Deg(90.0));

        let scene = export_document(&document).unwrap();
        let rows = scene.transform.unwrap();
        // rotating 90 degrees about Z sends the X row to -Y
        assert!(close(rows[0][0], 0.0) && close(rows[0][1], -1.0) && close(rows[0][2], 0.0));
        assert!(close(rows[1][0], 1.0) && close(rows[1][1], 0.0) && close(rows[1][2], 0.0));
        assert!(close(rows[2][2], 1.0));
    }

    #[test]
    fn no_camera_leaves_view_fields_unset() {
        let mut document = Document::new("no_camera_test");
        document.add_object(lamp("Lamp", Vector3::new(0.0, 0.0, 5.0), 1.0, 25.0));

        let scene = export_document(&document).unwrap();
        assert!(scene.transform.is_none());
        assert!(scene.translate.is_none());
    }

    #[test]
    fn lamps_export_position_energy_and_distance() {
        let mut document = Document::new("lamp_test");
        document.add_object(lamp("Key", Vector3::new(2.0, -1.0, 4.0), 1.5, 30.0));

        let scene = export_document(&document).unwrap();
        assert_eq!(scene.lamps.len(), 1);
        assert_eq!(scene.lamps[0].pos, [2.0, -1.0, 4.0]);
        assert_eq!(scene.lamps[0].intensity, 1.5);
        assert_eq!(scene.lamps[0].distance, 30.0);
    }

    #[test]
    fn metaball_balls_export_at_half_radius() {
        let mut document = Document::new("meta_test");
        document.add_material("glass", [0.9, 0.9, 1.0], 0.3);
        let meta = MetaData::new()
            .with_element(MetaElement::ball(Vector3::new(0.0, 0.0, 1.0), 3.0))
            .with_element(MetaElement {
                kind: MetaElementKind::Capsule,
                position: Vector3::new(1.0, 0.0, 0.0),
                radius: 2.0,
            });
        let object = document
            .add_object(Object::new("Meta", ObjectData::Meta(meta)).with_material("glass"));
        object.set_translation(Vector3::new(5.0, 0.0, 0.0));

        let scene = export_document(&document).unwrap();
        // the capsule element contributes nothing
        assert_eq!(scene.spheres.len(), 1);
        assert_eq!(scene.spheres[0].center, [5.0, 0.0, 1.0]);
        assert_eq!(scene.spheres[0].radius, 1.5);
        assert_eq!(scene.spheres[0].material, Some(0));
        assert_eq!(scene.materials.len(), 1);
    }

    #[test]
    fn hidden_objects_contribute_nothing() {
        let mut document = Document::new("hidden_test");
        document.add_material("red", [1.0, 0.0, 0.0], 0.8);
        document.add_object(
            Object::new("Cube", ObjectData::Mesh(generate_cube()))
                .with_material("red")
                .with_hide_render(true),
        );
        document.add_object(
            lamp("Lamp", Vector3::new(0.0, 0.0, 5.0), 1.0, 25.0).with_hide_render(true),
        );
        document.add_object(
            Object::new(
                "Meta",
                ObjectData::Meta(
                    MetaData::new().with_element(MetaElement::ball(Vector3::new(0.0, 0.0, 0.0), 1.0)),
                ),
            )
            .with_hide_render(true),
        );

        let scene = export_document(&document).unwrap();
        assert!(scene.vertices.is_empty());
        assert!(scene.faces.is_empty());
        assert!(scene.materials.is_empty());
        assert!(scene.spheres.is_empty());
        assert!(scene.lamps.is_empty());
    }

    #[test]
    fn world_exports_when_present_and_nulls_when_absent() {
        let mut document = Document::new("world_test");
        let scene = export_document(&document).unwrap();
        assert!(scene.world.is_none());

        document.world = Some(
            World::default()
                .with_horizon(0.2, 0.4, 0.8)
                .with_ambient(0.1, 0.1, 0.1),
        );
        let scene = export_document(&document).unwrap();
        let world = scene.world.unwrap();
        assert_eq!(world.horizon_color, [0.2, 0.4, 0.8]);
        assert_eq!(world.ambient_color, [0.1, 0.1, 0.1]);
        assert_eq!(world.ambient_factor, 1.0);
    }

    #[test]
    fn scene_json_uses_four_space_indent() {
        let mut document = Document::new("indent_test");
        document.add_object(lamp("Lamp", Vector3::new(0.0, 0.0, 5.0), 1.0, 25.0));

        let scene = export_document(&document).unwrap();
        let json = scene_json(&scene).unwrap();
        assert!(json.starts_with("{\n    \"vertices\""));
        assert!(json.contains("\n        {"));
    }

    #[test]
    fn write_scene_lands_next_to_the_document() {
        let directory =
            std::env::temp_dir().join(format!("haar_write_test_{}", std::process::id()));
        fs::create_dir_all(&directory).unwrap();

        let mut document = Document::new("room").with_directory(&directory);
        document.add_object(Object::new("Cube", ObjectData::Mesh(generate_cube())));
        document.world = Some(World::default());

        let path = write_scene(&document).unwrap();
        assert_eq!(path, directory.join("room.scene"));

        let contents = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(value["faces"].as_array().unwrap().len(), 12);
        assert!(value["world"].is_object());

        fs::remove_dir_all(&directory).unwrap();
    }
}
