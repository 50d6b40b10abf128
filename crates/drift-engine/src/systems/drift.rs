//! Per-frame field update: forward drift, wraparound, traveling wave,
//! rotation easing.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::input::signals::ControlSignals;

/// Geometric decay applied to the scroll contribution each frame.
pub const SCROLL_DECAY: f32 = 0.95;
/// Blend factor easing the field rotation toward its pointer target.
pub const ROTATION_BLEND: f32 = 0.05;
/// Constant autonomous yaw per frame.
pub const AUTO_YAW: f32 = 0.001;

const WAVE_X_FREQ: f32 = 0.5;
const WAVE_Z_FREQ: f32 = 0.3;
const WAVE_AMPLITUDE: f32 = 0.5;

/// Advance the field by one frame.
///
/// `elapsed` is seconds since mount. O(particle count), allocation-free,
/// and deterministic given the same signal history and elapsed times.
/// Only y and z mutate; x and colors are fixed at creation.
pub fn step(
    field: &mut ParticleField,
    signals: &mut ControlSignals,
    config: &FieldConfig,
    elapsed: f32,
) {
    // Momentum bleed-off, then the effective forward speed.
    signals.scroll_speed *= SCROLL_DECAY;
    let speed = config.base_speed + signals.scroll_speed;

    let target_pitch = signals.pointer_y * config.pointer_sensitivity;
    let target_roll = signals.pointer_x * config.pointer_sensitivity;
    let rotation = field.rotation_mut();
    rotation.y += AUTO_YAW;
    rotation.x += (target_pitch - rotation.x) * ROTATION_BLEND;
    rotation.z += (target_roll - rotation.z) * ROTATION_BLEND;

    let interval = config.interval();
    let phase = elapsed * config.wave_speed;

    let (positions, base_heights) = field.wave_buffers_mut();
    for (p, &base) in positions.chunks_exact_mut(3).zip(base_heights.iter()) {
        p[2] += speed;
        // Modular wraparound keeps z inside the drift interval without
        // destroying the particle.
        if p[2] > config.z_near {
            p[2] -= interval;
        } else if p[2] < config.z_far {
            p[2] += interval;
        }

        // Two sinusoids over x and the new z produce the traveling-wave
        // terrain without storing any velocity state.
        p[1] = base
            + (p[0] * WAVE_X_FREQ + phase).sin() * WAVE_AMPLITUDE
            + (p[2] * WAVE_Z_FREQ + phase).cos() * WAVE_AMPLITUDE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;
    use crate::field::palette::Theme;

    fn fixture(count: usize) -> (ParticleField, ControlSignals, FieldConfig) {
        let config = FieldConfig {
            particle_count: count,
            ..FieldConfig::default()
        };
        let field = ParticleField::generate(&config, Theme::Dark, &mut Rng::new(42));
        let signals = ControlSignals::new(1920.0, 1080.0, 0.0);
        (field, signals, config)
    }

    #[test]
    fn depth_stays_in_interval_over_many_frames() {
        let (mut field, mut signals, config) = fixture(100);
        for frame in 0..1000 {
            step(&mut field, &mut signals, &config, frame as f32 / 60.0);
        }
        for i in 0..field.len() {
            let z = field.position(i)[2];
            assert!(
                z >= config.z_far && z <= config.z_near,
                "particle {} escaped: z={}",
                i,
                z
            );
        }
    }

    #[test]
    fn x_and_colors_never_change() {
        let (mut field, mut signals, config) = fixture(100);
        let initial_x: Vec<f32> = (0..field.len()).map(|i| field.position(i)[0]).collect();
        let initial_colors = field.colors().to_vec();
        for frame in 0..1000 {
            step(&mut field, &mut signals, &config, frame as f32 / 60.0);
        }
        let final_x: Vec<f32> = (0..field.len()).map(|i| field.position(i)[0]).collect();
        assert_eq!(initial_x, final_x);
        assert_eq!(initial_colors, field.colors());
    }

    #[test]
    fn particle_count_is_invariant() {
        let (mut field, mut signals, config) = fixture(100);
        for frame in 0..100 {
            step(&mut field, &mut signals, &config, frame as f32 / 60.0);
        }
        assert_eq!(field.len(), 100);
        assert_eq!(field.positions().len(), 300);
    }

    #[test]
    fn wraparound_is_exact() {
        let (mut field, mut signals, config) = fixture(10);
        // Park a particle just shy of the near bound so the next step wraps it
        let gap = 0.005;
        field.wave_buffers_mut().0[2] = config.z_near - gap;
        step(&mut field, &mut signals, &config, 0.0);
        let z = field.position(0)[2];
        // Exits past z_near by (base_speed - gap), re-enters at z_far
        // offset by the same amount
        let expected = config.z_far + (config.base_speed - gap);
        assert!((z - expected).abs() < 1e-4, "z={} expected={}", z, expected);
    }

    #[test]
    fn updates_are_deterministic() {
        let (mut a, mut sa, config) = fixture(50);
        let (mut b, mut sb, _) = fixture(50);
        for frame in 0..200 {
            let t = frame as f32 / 60.0;
            step(&mut a, &mut sa, &config, t);
            step(&mut b, &mut sb, &config, t);
        }
        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.rotation(), b.rotation());
    }

    #[test]
    fn scroll_speed_decays_toward_zero() {
        let (mut field, mut signals, config) = fixture(10);
        signals.scroll_speed = 0.5;
        for frame in 0..400 {
            step(&mut field, &mut signals, &config, frame as f32 / 60.0);
        }
        assert!(signals.scroll_speed.abs() < 1e-4);
    }

    #[test]
    fn rotation_eases_toward_pointer_target() {
        let (mut field, mut signals, config) = fixture(10);
        signals.pointer_x = 400.0;
        signals.pointer_y = -200.0;
        let target_pitch = signals.pointer_y * config.pointer_sensitivity;
        let target_roll = signals.pointer_x * config.pointer_sensitivity;
        for frame in 0..500 {
            step(&mut field, &mut signals, &config, frame as f32 / 60.0);
        }
        let rotation = field.rotation();
        assert!((rotation.x - target_pitch).abs() < 1e-4);
        assert!((rotation.z - target_roll).abs() < 1e-4);
    }

    #[test]
    fn yaw_advances_every_frame() {
        let (mut field, mut signals, config) = fixture(10);
        for frame in 0..100 {
            step(&mut field, &mut signals, &config, frame as f32 / 60.0);
        }
        assert!((field.rotation().y - 100.0 * AUTO_YAW).abs() < 1e-5);
    }

    #[test]
    fn wave_displaces_height_around_base() {
        let (mut field, mut signals, config) = fixture(100);
        step(&mut field, &mut signals, &config, 1.25);
        for (i, &base) in field.base_heights().iter().enumerate() {
            let y = field.position(i)[1];
            // Two half-unit sinusoids bound the displacement
            assert!((y - base).abs() <= 2.0 * 0.5 + 1e-5);
        }
    }
}
