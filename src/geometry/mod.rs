//! # Geometry Module
//!
//! Mesh editing and procedural shape generation for the document model.
//!
//! ## Key Components
//!
//! - [`MeshEdit`] - Temporary mesh-editing handle; owns the triangulation
//!   the exporter relies on
//! - Primitive generators ([`generate_cube`], [`generate_plane`],
//!   [`generate_sphere`]) for authoring documents without model files
//!
//! ## Usage
//!
//! ```
//! use haar::geometry::{generate_cube, MeshEdit};
//!
//! let cube = generate_cube();
//! let mut edit = MeshEdit::from_mesh(&cube);
//! edit.triangulate();
//! let triangles = edit.into_mesh();
//! assert_eq!(triangles.polygon_count(), 12);
//! ```

pub mod edit;
pub mod primitives;

pub use edit::MeshEdit;
pub use primitives::{generate_cube, generate_plane, generate_sphere};
