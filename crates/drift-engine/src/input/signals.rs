use crate::config::FieldConfig;
use crate::input::queue::InputEvent;

/// Maximum magnitude of the scroll-speed contribution.
pub const SCROLL_SPEED_LIMIT: f32 = 0.5;

/// Smoothed control signals derived from pointer and scroll input,
/// consumed by the frame updater.
///
/// A small explicit struct passed by reference into the updater each
/// tick. Handlers write the latest values; the updater reads them on the
/// next frame. Staleness within one frame is acceptable.
pub struct ControlSignals {
    /// Pointer offset from viewport center, in pixels.
    pub pointer_x: f32,
    pub pointer_y: f32,
    /// Accumulated scroll-speed contribution, clamped to
    /// [-SCROLL_SPEED_LIMIT, SCROLL_SPEED_LIMIT] and decayed by the
    /// updater each frame.
    pub scroll_speed: f32,
    last_scroll_y: f32,
    half_width: f32,
    half_height: f32,
}

impl ControlSignals {
    pub fn new(viewport_width: f32, viewport_height: f32, scroll_y: f32) -> Self {
        Self {
            pointer_x: 0.0,
            pointer_y: 0.0,
            scroll_speed: 0.0,
            last_scroll_y: scroll_y,
            half_width: viewport_width / 2.0,
            half_height: viewport_height / 2.0,
        }
    }

    /// Fold one raw input event into the signals.
    pub fn apply(&mut self, event: &InputEvent, config: &FieldConfig) {
        match *event {
            InputEvent::PointerMove { x, y } => {
                self.pointer_x = x - self.half_width;
                self.pointer_y = y - self.half_height;
            }
            InputEvent::Scroll { y } => {
                let delta = y - self.last_scroll_y;
                self.scroll_speed = (self.scroll_speed + delta * config.scroll_sensitivity)
                    .clamp(-SCROLL_SPEED_LIMIT, SCROLL_SPEED_LIMIT);
                self.last_scroll_y = y;
            }
            InputEvent::Resize { width, height } => {
                self.half_width = width / 2.0;
                self.half_height = height / 2.0;
            }
        }
    }
}
