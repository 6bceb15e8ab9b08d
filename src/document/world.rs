/// Global world settings: background and ambient lighting
///
/// Optional on the document; a document without a world exports `world: null`
/// and the renderer falls back to its own defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    /// Background color where rays escape the scene
    pub horizon_color: [f32; 3],
    /// Ambient light color
    pub ambient_color: [f32; 3],
    /// Ambient occlusion strength
    pub ambient_factor: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            horizon_color: [0.3, 0.3, 0.3],
            ambient_color: [0.0, 0.0, 0.0],
            ambient_factor: 1.0,
        }
    }
}

impl World {
    pub fn new(horizon_color: [f32; 3], ambient_color: [f32; 3], ambient_factor: f32) -> Self {
        Self {
            horizon_color,
            ambient_color,
            ambient_factor,
        }
    }

    /// Builder pattern: Set the horizon color
    pub fn with_horizon(mut self, r: f32, g: f32, b: f32) -> Self {
        self.horizon_color = [r, g, b];
        self
    }

    /// Builder pattern: Set the ambient color
    pub fn with_ambient(mut self, r: f32, g: f32, b: f32) -> Self {
        self.ambient_color = [r, g, b];
        self
    }
}
