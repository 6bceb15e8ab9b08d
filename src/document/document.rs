use std::path::{Path, PathBuf};

use super::material::{Material, MaterialLibrary};
use super::object::{Object, ObjectData};
use super::world::World;

/// The scene document: objects, materials, and world settings
///
/// This is the in-memory scene graph the exporter reads. The document also
/// knows where it lives on disk so the export target path can be derived
/// from it.
pub struct Document {
    /// Project name; the export file is named `<name>.scene`
    pub name: String,
    /// Directory the document (and its export) lives in
    pub directory: PathBuf,
    pub objects: Vec<Object>,
    pub materials: MaterialLibrary, // Centralized material storage
    /// Global world settings, if any
    pub world: Option<World>,
}

impl Document {
    /// Creates a new empty document rooted in the current directory
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            directory: PathBuf::from("."),
            objects: Vec::new(),
            materials: MaterialLibrary::new(),
            world: None,
        }
    }

    /// Creates a document named after a project file
    ///
    /// The name is the file stem and the directory is the file's parent, so
    /// an export lands next to the project file, e.g. `scenes/room.obj`
    /// exports to `scenes/room.scene`.
    pub fn from_project_path(path: &Path) -> Self {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "untitled".to_string());
        let directory = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            directory,
            ..Self::new(&name)
        }
    }

    /// Builder pattern: set the directory exports are written to
    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Path the exporter writes to: `<directory>/<name>.scene`
    pub fn scene_path(&self) -> PathBuf {
        self.directory.join(format!("{}.scene", self.name))
    }

    /// Adds an object to the document and returns a mutable reference to it
    pub fn add_object(&mut self, object: Object) -> &mut Object {
        self.objects.push(object);
        self.objects.last_mut().unwrap()
    }

    /// Creates a new material and adds it to the material library
    ///
    /// # Arguments
    /// * `name` - Unique name for the material
    /// * `diffuse_color` - RGB diffuse color
    /// * `diffuse_intensity` - Diffuse intensity (0.0-1.0)
    ///
    /// # Returns
    /// Mutable reference to the created material
    pub fn add_material(
        &mut self,
        name: &str,
        diffuse_color: [f32; 3],
        diffuse_intensity: f32,
    ) -> &mut Material {
        let material = Material::new(name, diffuse_color, diffuse_intensity);
        self.materials.add_material(material);
        self.materials.get_material_mut(name).unwrap()
    }

    /// Gets immutable reference to an object by index
    pub fn get_object(&self, index: usize) -> Option<&Object> {
        self.objects.get(index)
    }

    /// Gets mutable reference to an object by index
    pub fn get_object_mut(&mut self, index: usize) -> Option<&mut Object> {
        self.objects.get_mut(index)
    }

    /// Gets the total number of objects
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Gets all object names for display
    pub fn object_names(&self) -> Vec<String> {
        self.objects.iter().map(|obj| obj.name.clone()).collect()
    }

    /// Gets statistics about the document
    pub fn statistics(&self) -> DocumentStatistics {
        let mut stats = DocumentStatistics {
            object_count: self.objects.len(),
            material_count: self.materials.len(),
            ..DocumentStatistics::default()
        };

        for object in &self.objects {
            match &object.data {
                ObjectData::Mesh(mesh) => {
                    stats.mesh_count += 1;
                    stats.total_vertices += mesh.vertex_count();
                    stats.total_polygons += mesh.polygon_count();
                }
                ObjectData::Camera => stats.camera_count += 1,
                ObjectData::Lamp(_) => stats.lamp_count += 1,
                ObjectData::Meta(meta) => {
                    stats.meta_count += 1;
                    stats.meta_element_count += meta.elements.len();
                }
            }
        }

        stats
    }

    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self.objects.iter().any(|obj| obj.name == test_name) {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }
}

/// Document statistics for debugging and display
#[derive(Debug, Default)]
pub struct DocumentStatistics {
    pub object_count: usize,
    pub material_count: usize,
    pub mesh_count: usize,
    pub camera_count: usize,
    pub lamp_count: usize,
    pub meta_count: usize,
    pub meta_element_count: usize,
    pub total_vertices: usize,
    pub total_polygons: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::mesh::{MeshData, Polygon};
    use crate::document::object::LampData;

    #[test]
    fn scene_path_is_name_next_to_directory() {
        let document = Document::new("room").with_directory("/tmp/projects");
        assert_eq!(
            document.scene_path(),
            PathBuf::from("/tmp/projects/room.scene")
        );
    }

    #[test]
    fn from_project_path_strips_extension() {
        let document = Document::from_project_path(Path::new("scenes/room.obj"));
        assert_eq!(document.name, "room");
        assert_eq!(document.scene_path(), PathBuf::from("scenes/room.scene"));

        let bare = Document::from_project_path(Path::new("room.obj"));
        assert_eq!(bare.scene_path(), PathBuf::from("./room.scene"));
    }

    #[test]
    fn unique_names_get_suffixed() {
        let mut document = Document::new("test");
        document.add_object(Object::new("Cube", ObjectData::Camera));
        assert_eq!(document.ensure_unique_name("Cube"), "Cube (1)");
        assert_eq!(document.ensure_unique_name("Lamp"), "Lamp");
    }

    #[test]
    fn statistics_count_per_type() {
        let mut document = Document::new("test");
        let mut mesh = MeshData::new();
        mesh.positions = vec![[0.0; 3]; 4];
        mesh.polygons.push(Polygon::new(vec![0, 1, 2, 3]));
        document.add_object(Object::new("Plane", ObjectData::Mesh(mesh)));
        document.add_object(Object::new("Lamp", ObjectData::Lamp(LampData::new(1.0, 30.0))));
        document.add_object(Object::new("Camera", ObjectData::Camera));

        let stats = document.statistics();
        assert_eq!(stats.object_count, 3);
        assert_eq!(stats.mesh_count, 1);
        assert_eq!(stats.lamp_count, 1);
        assert_eq!(stats.camera_count, 1);
        assert_eq!(stats.total_vertices, 4);
        assert_eq!(stats.total_polygons, 1);
    }
}
