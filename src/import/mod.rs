//! # Model Import Module
//!
//! Loads external model files into the document model. Only Wavefront
//! OBJ/MTL is supported; faces keep their authored polygon structure and
//! materials land in the document's material library.

pub mod obj;

pub use obj::{import_obj, ImportError};
