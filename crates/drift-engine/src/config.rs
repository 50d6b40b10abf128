use serde::Deserialize;

/// Viewports narrower than this get the sparse/large-point preset.
pub const NARROW_VIEWPORT_PX: f32 = 768.0;

/// Configuration for the particle field, fixed at initialization.
/// Derived from viewport width (denser/smaller points on desktop,
/// sparser/larger on narrow viewports), optionally adjusted by
/// host-supplied JSON overrides.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles in the field.
    pub particle_count: usize,
    /// Point size in world units.
    pub particle_size: f32,
    /// Horizontal spread of the field in world units.
    pub terrain_width: f32,
    /// Near bound of the drift interval (toward the viewer).
    pub z_near: f32,
    /// Far bound of the drift interval.
    pub z_far: f32,
    /// Constant forward drift per frame.
    pub base_speed: f32,
    /// Time multiplier for the traveling wave.
    pub wave_speed: f32,
    /// Pointer offset (px) to rotation target (rad) factor.
    pub pointer_sensitivity: f32,
    /// Scroll delta (px) to drift-speed contribution factor.
    pub scroll_sensitivity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 2000,
            particle_size: 0.035,
            terrain_width: 50.0,
            z_near: 10.0,
            z_far: -70.0,
            base_speed: 0.02,
            wave_speed: 0.5,
            pointer_sensitivity: 0.0005,
            scroll_sensitivity: 0.005,
        }
    }
}

impl FieldConfig {
    /// Derive a config from the viewport width.
    pub fn for_viewport(viewport_width: f32) -> Self {
        Self {
            particle_count: if viewport_width < NARROW_VIEWPORT_PX {
                800
            } else {
                2000
            },
            particle_size: Self::particle_size_for(viewport_width),
            ..Self::default()
        }
    }

    /// Point size for a viewport width. Recomputed on resize; the rest of
    /// the config stays fixed for the life of the field.
    pub fn particle_size_for(viewport_width: f32) -> f32 {
        if viewport_width < NARROW_VIEWPORT_PX {
            0.05
        } else {
            0.035
        }
    }

    /// Width of the drift interval particles cycle through.
    pub fn interval(&self) -> f32 {
        self.z_near - self.z_far
    }

    /// Apply host-supplied overrides; absent keys keep derived values.
    pub fn with_overrides(mut self, overrides: &FieldOverrides) -> Self {
        if let Some(v) = overrides.particle_count {
            self.particle_count = v;
        }
        if let Some(v) = overrides.particle_size {
            self.particle_size = v;
        }
        if let Some(v) = overrides.terrain_width {
            self.terrain_width = v;
        }
        if let Some(v) = overrides.base_speed {
            self.base_speed = v;
        }
        if let Some(v) = overrides.wave_speed {
            self.wave_speed = v;
        }
        if let Some(v) = overrides.pointer_sensitivity {
            self.pointer_sensitivity = v;
        }
        if let Some(v) = overrides.scroll_sensitivity {
            self.scroll_sensitivity = v;
        }
        self
    }
}

/// Partial config overrides supplied by the host as JSON.
/// Keys mirror the JS-side option names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldOverrides {
    pub particle_count: Option<usize>,
    pub particle_size: Option<f32>,
    pub terrain_width: Option<f32>,
    pub base_speed: Option<f32>,
    pub wave_speed: Option<f32>,
    pub pointer_sensitivity: Option<f32>,
    pub scroll_sensitivity: Option<f32>,
}

impl FieldOverrides {
    /// Parse overrides from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
