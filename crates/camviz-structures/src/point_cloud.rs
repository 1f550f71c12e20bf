//! Point clouds shown alongside the cameras.

use std::path::Path;

use camviz_core::{CamvizError, Color, PointTrace, Result};
use glam::Vec3;

use crate::ply;
use crate::surface_mesh::{extension, shift_and_scale};

/// An immutable point cloud with optional per-point colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
    colors: Option<Vec<Color>>,
    point_size: f32,
}

impl PointCloud {
    /// Creates an uncolored point cloud.
    pub fn new(points: Vec<Vec3>) -> Self {
        Self {
            points,
            colors: None,
            point_size: 1.5,
        }
    }

    /// Attaches one color per point.
    pub fn with_colors(mut self, colors: Vec<Color>) -> Result<Self> {
        if colors.len() != self.points.len() {
            return Err(CamvizError::SizeMismatch {
                expected: self.points.len(),
                actual: colors.len(),
            });
        }
        self.colors = Some(colors);
        Ok(self)
    }

    /// Sets the marker size.
    #[must_use]
    pub fn with_point_size(mut self, size: f32) -> Self {
        self.point_size = size;
        self
    }

    /// Loads a point cloud from a `.ply` file or a `.json` array of `[x, y, z]` triples.
    ///
    /// Returns `Ok(None)` when `path` does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("point cloud file {} not found, skipping", path.display());
            return Ok(None);
        }
        let cloud = match extension(path).as_deref() {
            Some("ply") => Self::load_ply(path)?,
            Some("json") => Self::load_json(path)?,
            _ => return Err(CamvizError::load(path, "unsupported point cloud format")),
        };
        log::info!(
            "loaded point cloud {} ({} points)",
            path.display(),
            cloud.num_points()
        );
        Ok(Some(cloud))
    }

    fn load_json(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let triples: Vec<[f32; 3]> =
            serde_json::from_str(&text).map_err(|e| CamvizError::load(path, e))?;
        Ok(Self::new(triples.into_iter().map(Vec3::from).collect()))
    }

    fn load_ply(path: &Path) -> Result<Self> {
        let ply = ply::read_ply(path)?;
        let points = ply::vertex_positions(&ply, path)?;

        // Colors are optional; take them only when every vertex has all three channels.
        let colors = ply.payload.get("vertex").and_then(|vertices| {
            vertices
                .iter()
                .map(|v| {
                    let channel = |name: &str| v.get(name).and_then(ply::color_channel);
                    Some(Color::from_rgb8(
                        channel("red")?,
                        channel("green")?,
                        channel("blue")?,
                    ))
                })
                .collect::<Option<Vec<_>>>()
        });

        let cloud = Self::new(points);
        match colors {
            Some(colors) if !colors.is_empty() => cloud.with_colors(colors),
            _ => Ok(cloud),
        }
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Returns the per-point colors, if any.
    #[must_use]
    pub fn colors(&self) -> Option<&[Color]> {
        self.colors.as_deref()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    /// Builds the point trace, with points shifted along Z then uniformly scaled.
    #[must_use]
    pub fn to_trace(&self, z_shift: f32, scale: f32) -> PointTrace {
        PointTrace {
            name: "point cloud".to_string(),
            points: shift_and_scale(&self.points, z_shift, scale),
            colors: self.colors.clone(),
            size: self.point_size,
            show_legend: false,
        }
    }
}
