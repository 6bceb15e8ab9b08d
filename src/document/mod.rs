//! # Scene Document Module
//!
//! This module provides the in-memory scene graph that exports are read
//! from: a flat list of typed objects (meshes, cameras, lamps, metaballs)
//! plus centralized materials and optional world settings.
//!
//! ## Key Components
//!
//! - [`Document`] - The document container managing objects, materials, and world settings
//! - [`Object`] - Individual scene objects with a typed payload and a world transform
//! - [`MeshData`] - Polygonal mesh geometry with optional per-corner UVs
//! - [`Material`] / [`MaterialLibrary`] - Renderer surface properties, referenced by id
//! - [`World`] - Global horizon/ambient lighting settings
//!
//! ## Usage
//!
//! ```
//! use haar::document::{Document, Object, ObjectData};
//! use haar::geometry::generate_cube;
//!
//! let mut document = Document::new("demo");
//! document.add_material("red", [1.0, 0.2, 0.2], 0.9);
//! document.add_object(
//!     Object::new("Cube", ObjectData::Mesh(generate_cube())).with_material("red"),
//! );
//! ```

pub mod document;
pub mod material;
pub mod mesh;
pub mod object;
pub mod world;

// Re-export main types
pub use document::{Document, DocumentStatistics};
pub use material::{Material, MaterialId, MaterialLibrary, ProceduralKind, Texture};
pub use mesh::{MeshData, Polygon};
pub use object::{LampData, MetaData, MetaElement, MetaElementKind, Object, ObjectData};
pub use world::World;
