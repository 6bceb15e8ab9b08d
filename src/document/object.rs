use cgmath::{Deg, Matrix4, SquareMatrix, Vector3};

use super::material::MaterialId;
use super::mesh::MeshData;

/// Point-light settings carried by lamp objects
#[derive(Debug, Clone, Copy)]
pub struct LampData {
    /// Light energy (intensity at unit distance)
    pub energy: f32,
    /// Falloff distance
    pub distance: f32,
}

impl LampData {
    pub fn new(energy: f32, distance: f32) -> Self {
        Self { energy, distance }
    }
}

/// Element shape of a metaball object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaElementKind {
    Ball,
    Capsule,
    Ellipsoid,
}

/// One implicit-surface element of a metaball object
#[derive(Debug, Clone, Copy)]
pub struct MetaElement {
    pub kind: MetaElementKind,
    /// Element position, object-local
    pub position: Vector3<f32>,
    pub radius: f32,
}

impl MetaElement {
    /// Creates a ball element at the given object-local position
    pub fn ball(position: Vector3<f32>, radius: f32) -> Self {
        Self {
            kind: MetaElementKind::Ball,
            position,
            radius,
        }
    }
}

/// Metaball data: a list of implicit-surface elements
#[derive(Debug, Clone, Default)]
pub struct MetaData {
    pub elements: Vec<MetaElement>,
}

impl MetaData {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Builder pattern: append an element
    pub fn with_element(mut self, element: MetaElement) -> Self {
        self.elements.push(element);
        self
    }
}

/// Per-type payload of a scene object
#[derive(Debug, Clone)]
pub enum ObjectData {
    Mesh(MeshData),
    Camera,
    Lamp(LampData),
    Meta(MetaData),
}

impl ObjectData {
    /// Short type tag used in logs and statistics
    pub fn kind(&self) -> &'static str {
        match self {
            ObjectData::Mesh(_) => "mesh",
            ObjectData::Camera => "camera",
            ObjectData::Lamp(_) => "lamp",
            ObjectData::Meta(_) => "meta",
        }
    }
}

/// A single object in the document: a typed payload plus a world transform
///
/// The transform is a full 4x4 world matrix; export reads its rotation rows
/// and translation column directly.
#[derive(Debug, Clone)]
pub struct Object {
    pub name: String,
    pub data: ObjectData,
    pub transform: Matrix4<f32>, // cgmath 4x4 transformation matrix
    /// Excluded from export when set (hidden from the renderer)
    pub hide_render: bool,
    /// Active material, resolved against the document's material library
    pub material: Option<MaterialId>,
}

impl Object {
    /// Create a new Object with identity transformation
    pub fn new(name: &str, data: ObjectData) -> Self {
        Self {
            name: name.to_string(),
            data,
            transform: Matrix4::identity(),
            hide_render: false,
            material: None,
        }
    }

    /// Builder pattern: assign the active material by id
    pub fn with_material(mut self, material: &str) -> Self {
        self.material = Some(material.to_string());
        self
    }

    /// Builder pattern: hide this object from the renderer
    pub fn with_hide_render(mut self, hide: bool) -> Self {
        self.hide_render = hide;
        self
    }

    /// Assign the active material by id
    pub fn set_material(&mut self, material: &str) {
        self.material = Some(material.to_string());
    }

    /// Set translation
    pub fn set_translation(&mut self, translation: Vector3<f32>) {
        self.transform = Matrix4::from_translation(translation);
    }

    /// Apply translation (multiplies with existing transform)
    pub fn translate(&mut self, translation: Vector3<f32>) {
        self.transform = self.transform * Matrix4::from_translation(translation);
    }

    /// Set uniform scale
    pub fn set_scale(&mut self, scale: f32) {
        self.transform = Matrix4::from_scale(scale);
    }

    /// Set non-uniform scale
    pub fn set_scale_xyz(&mut self, scale: Vector3<f32>) {
        self.transform = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    }

    /// Apply rotation around X axis
    pub fn rotate_x(&mut self, angle: Deg<f32>) {
        self.transform = self.transform * Matrix4::from_angle_x(angle);
    }

    /// Apply rotation around Y axis
    pub fn rotate_y(&mut self, angle: Deg<f32>) {
        self.transform = self.transform * Matrix4::from_angle_y(angle);
    }

    /// Apply rotation around Z axis
    pub fn rotate_z(&mut self, angle: Deg<f32>) {
        self.transform = self.transform * Matrix4::from_angle_z(angle);
    }

    /// Create a complete transform from translation, rotation, and scale
    pub fn set_transform_trs(
        &mut self,
        translation: Vector3<f32>,
        rotation_z: Deg<f32>,
        scale: f32,
    ) {
        let t = Matrix4::from_translation(translation);
        let r = Matrix4::from_angle_z(rotation_z);
        let s = Matrix4::from_scale(scale);
        self.transform = t * r * s; // Order matters: T * R * S
    }

    /// Reset to identity matrix
    pub fn reset_transform(&mut self) {
        self.transform = Matrix4::identity();
    }
}
