use drift_engine::{
    drift, Camera, Clock, ControlSignals, FieldConfig, FrameStats, InputEvent, InputQueue,
    ParticleField, Rng, Theme,
};

/// Wires the simulation loop: input queue, control signals, particle
/// field, clock, and camera.
///
/// Holds engine state only — no browser types — so the whole loop runs
/// under plain `cargo test`. `Backdrop` in lib.rs pairs a runner with
/// the WebGL surface.
pub struct BackdropRunner {
    config: FieldConfig,
    field: ParticleField,
    signals: ControlSignals,
    input: InputQueue,
    clock: Clock,
    camera: Camera,
    rng: Rng,
}

impl BackdropRunner {
    pub fn new(
        config: FieldConfig,
        theme: Theme,
        viewport_width: f32,
        viewport_height: f32,
        scroll_y: f32,
        seed: u64,
    ) -> Self {
        let mut rng = Rng::new(seed);
        let field = ParticleField::generate(&config, theme, &mut rng);
        Self {
            field,
            signals: ControlSignals::new(viewport_width, viewport_height, scroll_y),
            input: InputQueue::new(),
            clock: Clock::new(),
            camera: Camera::new(viewport_width, viewport_height),
            config,
            rng,
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: fold pending input into the control signals, then
    /// advance the field. `now_ms` is the host's frame timestamp.
    pub fn tick(&mut self, now_ms: f64) -> FrameStats {
        for event in self.input.iter() {
            if let InputEvent::Resize { width, height } = event {
                self.camera.resize(*width, *height);
                // Point size follows the viewport class; everything else
                // in the config stays fixed for the life of the field.
                self.config.particle_size = FieldConfig::particle_size_for(*width);
            }
            self.signals.apply(event, &self.config);
        }
        self.input.clear();

        let elapsed = self.clock.tick(now_ms);
        drift::step(&mut self.field, &mut self.signals, &self.config, elapsed);

        FrameStats {
            fps: self.clock.fps(),
            elapsed,
            particle_count: self.field.len() as u32,
        }
    }

    /// Rebuild the field with the new theme's palette. Colors are frozen
    /// at creation, so a theme change is a full reinitialization; the
    /// persistent RNG stream keeps rebuilds deterministic per seed.
    pub fn set_theme(&mut self, theme: Theme) {
        self.field = ParticleField::generate(&self.config, theme, &mut self.rng);
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn theme(&self) -> Theme {
        self.field.theme()
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> BackdropRunner {
        let config = FieldConfig {
            particle_count: 50,
            ..FieldConfig::default()
        };
        BackdropRunner::new(config, Theme::Dark, 1920.0, 1080.0, 0.0, 42)
    }

    #[test]
    fn tick_reports_stats() {
        let mut r = runner();
        let stats = r.tick(0.0);
        assert_eq!(stats.particle_count, 50);
        assert_eq!(stats.elapsed, 0.0);
        let stats = r.tick(2000.0);
        assert!((stats.elapsed - 2.0).abs() < 1e-6);
    }

    #[test]
    fn pointer_input_tilts_the_field() {
        let mut r = runner();
        r.push_input(InputEvent::PointerMove { x: 1920.0, y: 0.0 });
        for frame in 0..50 {
            r.tick(frame as f64 * 16.0);
        }
        let rotation = r.field().rotation();
        assert!(rotation.z > 0.0, "roll should follow pointer: {:?}", rotation);
        assert!(rotation.x < 0.0, "pitch should follow pointer: {:?}", rotation);
    }

    #[test]
    fn resize_updates_camera_and_point_size() {
        let mut r = runner();
        assert_eq!(r.config().particle_size, 0.035);
        r.push_input(InputEvent::Resize {
            width: 390.0,
            height: 844.0,
        });
        r.tick(0.0);
        assert_eq!(r.config().particle_size, 0.05);
        assert!((r.camera().aspect - 390.0 / 844.0).abs() < 1e-6);
        // Resize never reallocates particles
        assert_eq!(r.field().len(), 50);
    }

    #[test]
    fn theme_switch_rebuilds_palette() {
        let mut r = runner();
        let dark_colors = r.field().colors().to_vec();
        r.set_theme(Theme::Light);
        assert_eq!(r.theme(), Theme::Light);
        assert_eq!(r.field().len(), 50);
        assert_ne!(r.field().colors(), &dark_colors[..]);
    }

    #[test]
    fn same_seed_and_inputs_are_deterministic() {
        let mut a = runner();
        let mut b = runner();
        for frame in 0..100 {
            let now = frame as f64 * 16.0;
            if frame == 10 {
                a.push_input(InputEvent::Scroll { y: 300.0 });
                b.push_input(InputEvent::Scroll { y: 300.0 });
            }
            a.tick(now);
            b.tick(now);
        }
        assert_eq!(a.field().positions(), b.field().positions());
    }
}
