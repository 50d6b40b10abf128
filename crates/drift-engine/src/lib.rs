pub mod config;
pub mod core;
pub mod field;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use config::{FieldConfig, FieldOverrides, NARROW_VIEWPORT_PX};
pub use crate::core::rng::Rng;
pub use crate::core::time::{Clock, FrameStats};
pub use field::palette::{Theme, FOG_DENSITY};
pub use field::ParticleField;
pub use input::queue::{InputEvent, InputQueue};
pub use input::signals::{ControlSignals, SCROLL_SPEED_LIMIT};
pub use renderer::camera::{model_matrix, Camera, CameraUniform};
pub use systems::drift;
