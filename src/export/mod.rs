//! # Scene Export Module
//!
//! Serializes a [`Document`](crate::document::Document) to the `.scene`
//! JSON format consumed by the target renderer.
//!
//! ## Key Components
//!
//! - [`export_document`] - Builds the [`SceneFile`] structure for a document
//! - [`write_scene`] - Exports and writes `<directory>/<name>.scene`
//! - [`SceneFile`] and its records - The wire format, field for field
//!
//! ## Usage
//!
//! ```no_run
//! use haar::document::Document;
//! use haar::export::write_scene;
//!
//! let document = Document::new("room");
//! let path = write_scene(&document)?;
//! println!("wrote {}", path.display());
//! # Ok::<(), haar::export::ExportError>(())
//! ```

pub mod exporter;
pub mod scene_file;

// Re-export main types
pub use exporter::{export_document, scene_json, write_scene, ExportError};
pub use scene_file::{
    FaceRecord, LampRecord, MaterialRecord, SceneFile, SphereRecord, WorldRecord,
};
