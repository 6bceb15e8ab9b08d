//! # Haar Prelude
//!
//! This module provides a convenient way to import commonly used types
//! from the Haar library. It's designed to reduce boilerplate imports in
//! typical authoring and export programs.
//!
//! ## Usage
//!
//! ```rust
//! use haar::prelude::*;
//! ```
//!
//! This brings all essential types into scope, allowing you to write:
//!
//! ```no_run
//! use haar::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut document = Document::new("demo");
//!     document.add_material("red", [1.0, 0.2, 0.2], 0.9);
//!     document.add_object(
//!         Object::new("Cube", ObjectData::Mesh(generate_cube())).with_material("red"),
//!     );
//!     let path = write_scene(&document)?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```

// Re-export the document model
pub use crate::document::{
    Document, LampData, Material, MaterialLibrary, MeshData, MetaData, MetaElement,
    MetaElementKind, Object, ObjectData, Polygon, Texture, World,
};

// Re-export geometry helpers
pub use crate::geometry::{generate_cube, generate_plane, generate_sphere, MeshEdit};

// Re-export import and export entry points
pub use crate::export::{export_document, scene_json, write_scene, ExportError, SceneFile};
pub use crate::import::{import_obj, ImportError};

// Re-export common external dependencies
pub use cgmath::{Deg, Matrix4, Vector3};
