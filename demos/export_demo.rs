//! # Haar Export Demo
//!
//! This is the "Hello World" example for the Haar scene exporter.
//!
//! ## What this example shows:
//! - How to author a document with primitives, materials, and lights
//! - How to place a camera and world settings
//! - How to write the `.scene` file the renderer consumes
//!
//! ## Usage:
//! ```bash
//! cargo run --example export_demo
//! ```
//!
//! The export lands in the current directory as `demo.scene`. Run with
//! `RUST_LOG=debug` to watch the per-object export log.

use haar::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut document = Document::new("demo");

    // Materials first so objects can reference them by name
    document.add_material("floor", [0.9, 0.9, 0.9], 0.8);
    document
        .add_material("brick", [0.7, 0.3, 0.2], 0.9)
        .texture = Some(Texture::image("textures/brick.png"));
    document.add_material("chrome", [0.8, 0.8, 0.9], 0.4).reflection_factor = 0.8;

    // A ground plane and a couple of cubes
    document.add_object(
        Object::new("Floor", ObjectData::Mesh(generate_plane(20.0, 20.0, 1, 1)))
            .with_material("floor"),
    );

    let cube = document.add_object(
        Object::new("Cube", ObjectData::Mesh(generate_cube())).with_material("brick"),
    );
    cube.set_translation(Vector3::new(-1.5, 0.0, 0.5));

    let tall = document.add_object(
        Object::new("Tower", ObjectData::Mesh(generate_cube())).with_material("brick"),
    );
    tall.set_transform_trs(Vector3::new(1.5, 1.0, 1.0), Deg(30.0), 2.0);

    // A metaball blob rendered as spheres
    let blob = document.add_object(
        Object::new(
            "Blob",
            ObjectData::Meta(
                MetaData::new()
                    .with_element(MetaElement::ball(Vector3::new(0.0, 0.0, 0.0), 1.0))
                    .with_element(MetaElement::ball(Vector3::new(0.6, 0.0, 0.3), 0.7)),
            ),
        )
        .with_material("chrome"),
    );
    blob.set_translation(Vector3::new(0.0, -2.0, 1.0));

    // Key light and a dimmer fill
    let key = document.add_object(Object::new(
        "Key",
        ObjectData::Lamp(LampData::new(1.0, 30.0)),
    ));
    key.set_translation(Vector3::new(4.0, -4.0, 6.0));

    let fill = document.add_object(Object::new(
        "Fill",
        ObjectData::Lamp(LampData::new(0.4, 15.0)),
    ));
    fill.set_translation(Vector3::new(-5.0, 2.0, 3.0));

    // Camera looking down into the scene
    let camera = document.add_object(Object::new("Camera", ObjectData::Camera));
    camera.set_translation(Vector3::new(6.0, -6.0, 4.0));
    camera.rotate_z(Deg(45.0));
    camera.rotate_x(Deg(60.0));

    document.world = Some(
        World::default()
            .with_horizon(0.05, 0.15, 0.35)
            .with_ambient(0.1, 0.1, 0.1),
    );

    let stats = document.statistics();
    println!(
        "document: {} objects, {} materials, {} polygons",
        stats.object_count, stats.material_count, stats.total_polygons
    );

    let path = write_scene(&document)?;
    println!("wrote {}", path.display());

    Ok(())
}
