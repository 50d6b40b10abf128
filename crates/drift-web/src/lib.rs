//! WASM bridge for the drift backdrop.
//!
//! The host page forwards DOM events (`pointer_moved`, `scrolled`,
//! `resized`) and drives `tick` from its requestAnimationFrame loop;
//! everything else lives in `drift-engine`.

pub mod runner;
pub mod shaders;
pub mod surface;

pub use runner::BackdropRunner;

use wasm_bindgen::prelude::*;

use drift_engine::{FieldConfig, FieldOverrides, InputEvent, Theme};
use surface::Surface;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}

/// Per-tick diagnostics handed back to the host page.
#[wasm_bindgen]
pub struct TickStats {
    pub fps: u32,
    pub elapsed: f32,
    pub particle_count: u32,
}

/// The animated particle backdrop.
#[wasm_bindgen]
pub struct Backdrop {
    runner: BackdropRunner,
    surface: Option<Surface>,
}

#[wasm_bindgen]
impl Backdrop {
    /// Mount the backdrop into the container element.
    ///
    /// `config_json` may carry overrides for the viewport-derived config
    /// (empty string for none; malformed JSON is logged and ignored).
    /// A missing container is a no-op mount: the simulation still runs,
    /// nothing is drawn.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        theme: &str,
        config_json: &str,
        seed: u32,
    ) -> Result<Backdrop, JsValue> {
        let window = web_sys::window().ok_or("failed to get window")?;
        let viewport_width = window.inner_width()?.as_f64().unwrap_or(0.0) as f32;
        let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0) as f32;
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;

        let theme = Theme::parse(theme);
        let mut config = FieldConfig::for_viewport(viewport_width);
        if !config_json.is_empty() {
            match FieldOverrides::from_json(config_json) {
                Ok(overrides) => config = config.with_overrides(&overrides),
                Err(err) => log::warn!("ignoring malformed config: {err}"),
            }
        }

        let runner = BackdropRunner::new(
            config,
            theme,
            viewport_width,
            viewport_height,
            scroll_y,
            seed as u64,
        );
        let surface = Surface::mount(&window, container_id, runner.field())?;
        if let Some(surface) = &surface {
            surface.resize(&window, viewport_width, viewport_height);
        }

        log::info!(
            "backdrop initialized: {} particles, {} theme",
            runner.field().len(),
            runner.theme().as_str()
        );
        Ok(Backdrop { runner, surface })
    }

    /// Advance one frame and draw. `now_ms` is the host's
    /// requestAnimationFrame timestamp.
    pub fn tick(&mut self, now_ms: f64) -> TickStats {
        let stats = self.runner.tick(now_ms);
        if let Some(surface) = &self.surface {
            surface.draw(
                self.runner.camera(),
                self.runner.field(),
                self.runner.config().particle_size,
            );
        }
        TickStats {
            fps: stats.fps,
            elapsed: stats.elapsed,
            particle_count: stats.particle_count,
        }
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.runner.push_input(InputEvent::PointerMove { x, y });
    }

    pub fn scrolled(&mut self, y: f32) {
        self.runner.push_input(InputEvent::Scroll { y });
    }

    pub fn resized(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.runner.push_input(InputEvent::Resize { width, height });
        if let Some(surface) = &self.surface {
            let window = web_sys::window().ok_or("failed to get window")?;
            surface.resize(&window, width, height);
        }
        Ok(())
    }

    /// Swap themes: rebuilds the particle field with the new palette and
    /// resets the surface clear color. Old colors are discarded, not
    /// blended.
    pub fn set_theme(&mut self, theme: &str) {
        self.runner.set_theme(Theme::parse(theme));
        if let Some(surface) = &self.surface {
            surface.rebuild(self.runner.field());
        }
        log::info!("theme switched to {}", self.runner.theme().as_str());
    }

    /// Release GPU buffers and detach the canvas. Safe to call more than
    /// once; dropping the backdrop disposes too.
    pub fn dispose(&mut self) {
        if let Some(surface) = self.surface.take() {
            surface.dispose();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn particle_count(&self) -> u32 {
        self.runner.field().len() as u32
    }

    pub fn fps(&self) -> u32 {
        self.runner.fps()
    }

    pub fn theme(&self) -> String {
        self.runner.theme().as_str().into()
    }
}

impl Drop for Backdrop {
    fn drop(&mut self) {
        self.dispose();
    }
}
