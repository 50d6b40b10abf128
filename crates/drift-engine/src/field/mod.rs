//! Particle field state: flat position/color buffers plus the
//! whole-field orientation.

pub mod palette;

use glam::Vec3;

use crate::config::FieldConfig;
use crate::core::rng::Rng;
use palette::Theme;

/// The authoritative particle buffers.
///
/// Arena-style flat arrays, xyz/rgb interleaved with stride 3; no
/// per-particle heap objects. Positions mutate every frame, colors are
/// frozen at creation, `base_heights` holds each particle's wave rest
/// height. Particles are recycled via wraparound, never destroyed.
pub struct ParticleField {
    positions: Vec<f32>,
    colors: Vec<f32>,
    base_heights: Vec<f32>,
    rotation: Vec3,
    theme: Theme,
}

impl ParticleField {
    /// Jitter band applied to base height and depth placement.
    const PLACEMENT_JITTER: f32 = 2.0;

    /// Generate a field of `config.particle_count` particles.
    ///
    /// x is uniform across the terrain width, base height sits in a small
    /// band around zero, and z is spread linearly across the drift
    /// interval by particle index (plus jitter) so particles are not
    /// bunched at one depth.
    pub fn generate(config: &FieldConfig, theme: Theme, rng: &mut Rng) -> Self {
        let count = config.particle_count;
        let mut positions = Vec::with_capacity(count * 3);
        let mut colors = Vec::with_capacity(count * 3);
        let mut base_heights = Vec::with_capacity(count);

        let half_jitter = Self::PLACEMENT_JITTER / 2.0;
        for i in 0..count {
            let x = rng.next_range(-config.terrain_width / 2.0, config.terrain_width / 2.0);
            let y = rng.next_range(-half_jitter, half_jitter);
            let z = config.z_far
                + (i as f32 / count as f32) * config.interval()
                + rng.next_range(-half_jitter, half_jitter);

            positions.extend_from_slice(&[x, y, z]);
            base_heights.push(y);
            colors.extend_from_slice(&theme.pick_color(rng.next_f32()));
        }

        Self {
            positions,
            colors,
            base_heights,
            rotation: Vec3::ZERO,
            theme,
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.base_heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base_heights.is_empty()
    }

    /// Flat xyz buffer, stride 3.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat rgb buffer, stride 3. Frozen at creation.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Per-particle wave rest heights.
    pub fn base_heights(&self) -> &[f32] {
        &self.base_heights
    }

    /// Whole-field orientation, eased toward pointer targets each frame.
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Theme the palette was drawn from.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Position of particle `i` (for inspection and tests).
    pub fn position(&self, i: usize) -> [f32; 3] {
        let base = i * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    /// Mutable positions alongside the read-only rest heights, for the
    /// frame updater's wave pass.
    pub(crate) fn wave_buffers_mut(&mut self) -> (&mut [f32], &[f32]) {
        (&mut self.positions, &self.base_heights)
    }

    pub(crate) fn rotation_mut(&mut self) -> &mut Vec3 {
        &mut self.rotation
    }
}
