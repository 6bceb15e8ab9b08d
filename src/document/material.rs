//! Material system for the scene document
//!
//! Provides material definitions and centralized storage. Materials are
//! stored in a MaterialLibrary and objects reference them by id. The field
//! set mirrors what the target renderer understands: a diffuse color with
//! intensity, Phong-style specular settings, a mirror reflection factor,
//! and an optional texture slot.

use std::collections::HashMap;
use std::path::PathBuf;

/// Material ID for referencing materials
pub type MaterialId = String;

/// Procedural texture kinds
///
/// The renderer only consumes image textures; procedural kinds exist so a
/// material can carry one without the export path treating it as an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProceduralKind {
    Clouds,
    Marble,
    Noise,
}

/// Texture slot of a material
#[derive(Debug, Clone, PartialEq)]
pub enum Texture {
    /// Image texture with a file path and per-axis UV scale
    Image {
        path: PathBuf,
        scale_x: f32,
        scale_y: f32,
    },
    /// Procedural texture; carries no image path
    Procedural { kind: ProceduralKind },
}

impl Texture {
    /// Creates an image texture with unit UV scale
    pub fn image(path: impl Into<PathBuf>) -> Self {
        Texture::Image {
            path: path.into(),
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

/// Material definition with the renderer's surface properties
#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    /// Diffuse RGB color
    pub diffuse_color: [f32; 3],
    /// Diffuse intensity (0.0-1.0)
    pub diffuse_intensity: f32,
    /// Specular intensity (0.0-1.0)
    pub specular_intensity: f32,
    /// Phong specular hardness
    pub specular_hardness: f32,
    /// Mirror reflection factor (0.0-1.0)
    pub reflection_factor: f32,
    /// Active texture slot, if any
    pub texture: Option<Texture>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: "Material".to_string(),
            diffuse_color: [0.8, 0.8, 0.8],
            diffuse_intensity: 0.8,
            specular_intensity: 0.5,
            specular_hardness: 50.0,
            reflection_factor: 0.0,
            texture: None,
        }
    }
}

impl Material {
    /// Creates a new material with the given diffuse color
    ///
    /// # Arguments
    /// * `name` - Unique name for this material
    /// * `diffuse_color` - RGB diffuse color
    /// * `diffuse_intensity` - Diffuse intensity (0.0 = black, 1.0 = full color)
    pub fn new(name: &str, diffuse_color: [f32; 3], diffuse_intensity: f32) -> Self {
        Self {
            name: name.to_string(),
            diffuse_color,
            diffuse_intensity: diffuse_intensity.clamp(0.0, 1.0),
            ..Default::default()
        }
    }

    /// Builder pattern: Set specular intensity and hardness
    pub fn with_specular(mut self, intensity: f32, hardness: f32) -> Self {
        self.specular_intensity = intensity.clamp(0.0, 1.0);
        self.specular_hardness = hardness;
        self
    }

    /// Builder pattern: Set mirror reflection factor
    pub fn with_reflection(mut self, factor: f32) -> Self {
        self.reflection_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Builder pattern: Set the active texture slot
    pub fn with_texture(mut self, texture: Texture) -> Self {
        self.texture = Some(texture);
        self
    }
}

/// Centralized storage for all materials in a document
///
/// Objects reference materials by id rather than storing material data
/// directly. Unlike a render engine there is no default-material fallback:
/// an object either names a material that exists or has none, and the
/// exporter treats a dangling reference as a hard error.
#[derive(Debug, Default)]
pub struct MaterialLibrary {
    materials: HashMap<MaterialId, Material>,
}

impl MaterialLibrary {
    /// Creates a new empty material library
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Adds a material to the library, keyed by its name
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.name.clone(), material);
    }

    /// Gets a material by ID
    pub fn get_material(&self, id: &str) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Gets a mutable material by ID
    pub fn get_material_mut(&mut self, id: &str) -> Option<&mut Material> {
        self.materials.get_mut(id)
    }

    /// Whether a material with the given id exists
    pub fn contains(&self, id: &str) -> bool {
        self.materials.contains_key(id)
    }

    /// Lists all material IDs
    pub fn list_materials(&self) -> Vec<&MaterialId> {
        self.materials.keys().collect()
    }

    /// Number of materials in the library
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get_material() {
        let mut library = MaterialLibrary::new();
        library.add_material(Material::new("red", [1.0, 0.0, 0.0], 0.9));

        let red = library.get_material("red").unwrap();
        assert_eq!(red.diffuse_color, [1.0, 0.0, 0.0]);
        assert_eq!(red.diffuse_intensity, 0.9);
        assert!(library.get_material("blue").is_none());
    }

    #[test]
    fn builder_clamps_factors() {
        let material = Material::new("shiny", [1.0, 1.0, 1.0], 2.0)
            .with_specular(1.5, 80.0)
            .with_reflection(-0.5);
        assert_eq!(material.diffuse_intensity, 1.0);
        assert_eq!(material.specular_intensity, 1.0);
        assert_eq!(material.reflection_factor, 0.0);
    }
}
