//! # OBJ to Scene Conversion
//!
//! Imports a Wavefront OBJ file (with its MTL materials, when present)
//! into a document and exports it as a `.scene` file next to the source.
//!
//! ## Usage:
//! ```bash
//! cargo run --example obj_export -- path/to/model.obj
//! ```

use std::path::Path;

use anyhow::Context;
use haar::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: obj_export <model.obj>")?;
    let path = Path::new(&path);

    // Name the document after the model so the export lands next to it
    let mut document = Document::from_project_path(path);
    let added = import_obj(&mut document, path)
        .with_context(|| format!("importing {}", path.display()))?;
    println!("imported {} objects from {}", added, path.display());

    // A default light and camera so the scene renders standalone
    let lamp = document.add_object(Object::new(
        "Lamp",
        ObjectData::Lamp(LampData::new(1.0, 30.0)),
    ));
    lamp.set_translation(Vector3::new(4.0, -4.0, 6.0));

    let camera = document.add_object(Object::new("Camera", ObjectData::Camera));
    camera.set_translation(Vector3::new(0.0, -8.0, 2.0));
    camera.rotate_x(Deg(80.0));

    document.world = Some(World::default());

    let scene_path = write_scene(&document)?;
    println!("wrote {}", scene_path.display());

    Ok(())
}
