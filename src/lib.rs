// src/lib.rs
//! Haar Scene Exporter
//!
//! A scene assembly and export library: author a scene document (meshes,
//! cameras, lamps, metaballs, materials, world settings) and serialize it
//! to the `.scene` JSON format consumed by external ray-tracing renderers.

pub mod document;
pub mod export;
pub mod geometry;
pub mod import;
pub mod prelude;

// Re-export main types for convenience
pub use document::Document;
pub use export::{export_document, write_scene};

/// Creates an empty document with the given project name
pub fn document(name: &str) -> Document {
    Document::new(name)
}
