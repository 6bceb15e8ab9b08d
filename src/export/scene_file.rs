//! Wire structs for the `.scene` file format
//!
//! The shapes here match the renderer's loader field for field: camelCase
//! keys, a `mSpheres` array for metaball spheres, and nullable
//! material/texture fields. Indices in `faces` reference `vertices`;
//! `material` indices reference `materials`.

use serde::{Deserialize, Serialize};

/// One triangulated face: three vertex indices, an optional material
/// index, and optional per-corner UV coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    pub vertices: [u32; 3],
    pub material: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uv: Option<[[f32; 2]; 3]>,
}

/// Surface properties of one exported material
///
/// `image_path`, `scale_x` and `scale_y` are only set for image textures;
/// anything else leaves them null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialRecord {
    pub diffusive_color: [f32; 3],
    pub diffusive_factor: f32,
    pub specular_factor: f32,
    pub specular_hardness: f32,
    pub reflection_factor: f32,
    pub image_path: Option<String>,
    pub scale_x: Option<f32>,
    pub scale_y: Option<f32>,
}

/// One metaball ball exported as a sphere
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SphereRecord {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: Option<usize>,
}

/// One lamp exported as a point light
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampRecord {
    pub pos: [f32; 3],
    pub intensity: f32,
    pub distance: f32,
}

/// Global world lighting settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldRecord {
    pub ambient_color: [f32; 3],
    pub horizon_color: [f32; 3],
    pub ambient_factor: f32,
}

/// The complete `.scene` document
///
/// `transform`/`translate` hold the last camera's orientation rows and
/// position; they are omitted entirely when the scene has no camera.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<FaceRecord>,
    pub materials: Vec<MaterialRecord>,
    #[serde(rename = "mSpheres")]
    pub spheres: Vec<SphereRecord>,
    pub lamps: Vec<LampRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<[[f32; 3]; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate: Option<[f32; 3]>,
    pub world: Option<WorldRecord>,
}

impl SceneFile {
    /// Creates an empty scene with no camera and no world
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_match_the_renderer() {
        let mut scene = SceneFile::new();
        scene.spheres.push(SphereRecord {
            center: [0.0, 1.0, 2.0],
            radius: 0.5,
            material: None,
        });
        scene.materials.push(MaterialRecord {
            diffusive_color: [1.0, 0.0, 0.0],
            diffusive_factor: 0.8,
            specular_factor: 0.5,
            specular_hardness: 50.0,
            reflection_factor: 0.0,
            image_path: None,
            scale_x: None,
            scale_y: None,
        });

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&scene).unwrap()).unwrap();
        assert!(value.get("mSpheres").is_some());
        assert!(value.get("spheres").is_none());
        assert!(value["materials"][0].get("diffusiveColor").is_some());
        assert!(value["materials"][0].get("imagePath").is_some());
        assert!(value["materials"][0]["scaleX"].is_null());
        // no camera seen: the keys stay out of the file entirely
        assert!(value.get("transform").is_none());
        assert!(value.get("translate").is_none());
        assert!(value["world"].is_null());
    }

    #[test]
    fn faces_round_trip() {
        let face = FaceRecord {
            vertices: [0, 1, 2],
            material: Some(0),
            uv: Some([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0]]),
        };
        let parsed: FaceRecord =
            serde_json::from_str(&serde_json::to_string(&face).unwrap()).unwrap();
        assert_eq!(parsed, face);
    }
}
