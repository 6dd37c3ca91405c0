// Parameters for the silk shader background.

use glam::Vec3;

/// Uniform inputs to the silk pattern, fixed per instance at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SilkParams {
    pub color: Vec3,
    pub speed: f32,
    pub scale: f32,
    pub rotation: f32,
    pub noise_intensity: f32,
    pub opacity: f32,
}

impl Default for SilkParams {
    fn default() -> Self {
        Self {
            color: hex_to_rgb(DEFAULT_COLOR_HEX).unwrap_or(Vec3::splat(0.5)),
            speed: 5.0,
            scale: 1.0,
            rotation: 0.0,
            noise_intensity: 1.5,
            opacity: 0.4,
        }
    }
}

pub const DEFAULT_COLOR_HEX: &str = "#8B6F47";

/// Shader time units advanced per real second; matches a 0.01 step per frame
/// at 60 fps.
pub const TIME_RATE: f32 = 0.6;

/// Parse `#RRGGBB` (leading `#` optional) into normalized RGB.
pub fn hex_to_rgb(hex: &str) -> Option<Vec3> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some(Vec3::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
