//! Theme-keyed particle palettes.
//!
//! Colors are drawn once at field creation and frozen; a theme change
//! rebuilds the whole field rather than patching colors in place.

/// Exponential-squared fog density blending distant particles into the
/// background color.
pub const FOG_DENSITY: f32 = 0.03;

/// Active visual theme of the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Parse the host's theme string. Unknown values fall back to Dark.
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => Theme::Light,
            "dark" => Theme::Dark,
            other => {
                log::warn!("unknown theme {:?}, falling back to dark", other);
                Theme::Dark
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Page background, doubling as the fog color.
    pub fn background(&self) -> [f32; 3] {
        match self {
            Theme::Dark => hex_rgb(0x0d1117),
            Theme::Light => hex_rgb(0xF9FBFA),
        }
    }

    /// Point opacity. Slightly lower in light mode to keep contrast
    /// against the white page.
    pub fn point_opacity(&self) -> f32 {
        match self {
            Theme::Dark => 0.8,
            Theme::Light => 0.7,
        }
    }

    /// Dark mode draws additively for a glow effect; additive blending
    /// washes out to white on a light background, so light mode uses
    /// normal alpha blending.
    pub fn additive_blending(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Pick a particle color from the theme palette given a uniform draw
    /// in [0, 1). Five equal buckets per theme: neon hues in the dark,
    /// saturated brand hues in the light.
    pub fn pick_color(&self, choice: f32) -> [f32; 3] {
        match self {
            Theme::Dark => {
                if choice > 0.8 {
                    hsl_to_rgb(0.6, 0.9, 0.7) // bright blue
                } else if choice > 0.6 {
                    hsl_to_rgb(0.8, 0.9, 0.7) // bright purple
                } else if choice > 0.4 {
                    hsl_to_rgb(0.9, 0.9, 0.7) // magenta
                } else if choice > 0.2 {
                    hsl_to_rgb(0.5, 0.9, 0.7) // cyan
                } else {
                    hsl_to_rgb(0.1, 0.9, 0.8) // gold
                }
            }
            Theme::Light => {
                if choice > 0.8 {
                    hex_rgb(0x00ED64) // green
                } else if choice > 0.6 {
                    hex_rgb(0x001E2B) // dark slate
                } else if choice > 0.4 {
                    hex_rgb(0x3D4F58) // slate
                } else if choice > 0.2 {
                    hex_rgb(0x2563EB) // royal blue
                } else {
                    hex_rgb(0x7C3AED) // deep purple
                }
            }
        }
    }
}

/// Expand a 0xRRGGBB color to normalized RGB.
fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

/// HSL to RGB, all components in [0, 1].
fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
