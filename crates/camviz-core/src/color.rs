//! Colors as consumed by the plotting backend.

use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::CamvizError;

/// An RGB color with components in `[0, 1]`.
///
/// Serialized as the CSS-style string `rgb(r, g, b)` with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color(pub Vec3);

impl Color {
    pub const BLACK: Self = Self(Vec3::ZERO);
    pub const WHITE: Self = Self(Vec3::ONE);

    /// Creates a color from float components in `[0, 1]`.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self(Vec3::new(r, g, b))
    }

    /// Creates a color from 8-bit components.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self(Vec3::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ))
    }

    /// Returns the 8-bit components, clamping out-of-range values.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(self) -> [u8; 3] {
        let c = (self.0.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        [c.x as u8, c.y as u8, c.z as u8]
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "rgb({r}, {g}, {b})")
    }
}

impl FromStr for Color {
    type Err = CamvizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CamvizError::InvalidInput(format!("not an rgb() color: '{s}'"));
        let inner = s
            .trim()
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;
        let components = inner
            .split(',')
            .map(|c| c.trim().parse::<u8>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| invalid())?;
        match components[..] {
            [r, g, b] => Ok(Self::from_rgb8(r, g, b)),
            _ => Err(invalid()),
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = CamvizError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Color assigned to one camera's frustum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CameraColor {
    /// Every edge drawn in a single color.
    Solid(Color),
    /// Edges fade from the first color at their start to the second at their end.
    TwoTone(Color, Color),
}

impl CameraColor {
    /// Colors of the start and end vertex of an edge.
    pub fn endpoints(&self) -> [Color; 2] {
        match *self {
            Self::Solid(c) => [c, c],
            Self::TwoTone(a, b) => [a, b],
        }
    }
}

impl From<Color> for CameraColor {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl From<Vec3> for CameraColor {
    fn from(color: Vec3) -> Self {
        Self::Solid(Color(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Color::from_rgb8(255, 102, 0).to_string(), "rgb(255, 102, 0)");
        assert_eq!(Color::new(2.0, -1.0, 0.5).to_string(), "rgb(255, 0, 128)");
    }

    #[test]
    fn test_parse() {
        let c: Color = "rgb(0, 51, 255)".parse().unwrap();
        assert_eq!(c.to_rgb8(), [0, 51, 255]);
        let c: Color = " rgb(10,20,30) ".parse().unwrap();
        assert_eq!(c.to_rgb8(), [10, 20, 30]);

        assert!("rgb(1, 2)".parse::<Color>().is_err());
        assert!("rgb(1, 2, 300)".parse::<Color>().is_err());
        assert!("#ff0000".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Color::from_rgb8(1, 2, 3)).unwrap();
        assert_eq!(json, "\"rgb(1, 2, 3)\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_rgb8(), [1, 2, 3]);
    }

    #[test]
    fn test_camera_color_endpoints() {
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        assert_eq!(CameraColor::Solid(red).endpoints(), [red, red]);
        assert_eq!(CameraColor::TwoTone(red, blue).endpoints(), [red, blue]);
    }
}
