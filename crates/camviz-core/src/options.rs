//! Configuration options for scene rendering.

use serde::{Deserialize, Serialize};

use crate::error::{CamvizError, Result};

/// Field of view applied to the camera frustums, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldOfView {
    /// One value shared by every camera.
    Uniform(f32),
    /// One value per camera, in camera order.
    ///
    /// A single-element list is treated like [`FieldOfView::Uniform`].
    PerCamera(Vec<f32>),
}

impl FieldOfView {
    /// Resolves the field of view for camera `index` out of `num_cameras`.
    pub fn for_camera(&self, index: usize, num_cameras: usize) -> Result<f32> {
        match self {
            Self::Uniform(fov) => Ok(*fov),
            Self::PerCamera(values) if values.len() == 1 => Ok(values[0]),
            Self::PerCamera(values) if values.len() == num_cameras => Ok(values[index]),
            Self::PerCamera(values) => Err(CamvizError::InvalidInput(format!(
                "{} field-of-view values given for {num_cameras} cameras",
                values.len()
            ))),
        }
    }
}

impl Default for FieldOfView {
    fn default() -> Self {
        Self::Uniform(50.0)
    }
}

impl From<f32> for FieldOfView {
    fn from(fov: f32) -> Self {
        Self::Uniform(fov)
    }
}

impl From<Vec<f32>> for FieldOfView {
    fn from(values: Vec<f32>) -> Self {
        Self::PerCamera(values)
    }
}

/// Options controlling how a scene is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Pixel height of the output figure.
    pub height: u32,

    /// Stroke width of the frustum edges.
    pub line_width: f32,

    /// Local Z offset of image planes before they are placed on the frustum.
    pub base_radius: f32,

    /// Field of view of the frustums, in degrees.
    pub fov_degrees: FieldOfView,

    /// Z translation applied to the mesh and point cloud.
    pub mesh_z_shift: f32,

    /// Uniform scale applied to the mesh and point cloud after the shift.
    pub mesh_scale: f32,

    /// Whether the axis background planes are drawn.
    pub show_background: bool,

    /// Whether the axis grid is drawn.
    pub show_grid: bool,

    /// Whether the axis tick labels are drawn.
    pub show_tick_labels: bool,

    /// Swap the displayed Y and Z axis titles. Coordinates are untouched.
    pub y_up: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            height: 720,
            line_width: 10.0,
            base_radius: 0.0,
            fov_degrees: FieldOfView::default(),
            mesh_z_shift: 0.0,
            mesh_scale: 1.0,
            show_background: false,
            show_grid: false,
            show_tick_labels: false,
            y_up: false,
        }
    }
}

impl RenderOptions {
    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        log::debug!("loaded render options: {options:?}");
        Ok(options)
    }

    /// Sets the field of view.
    #[must_use]
    pub fn with_fov(mut self, fov: impl Into<FieldOfView>) -> Self {
        self.fov_degrees = fov.into();
        self
    }

    /// Sets whether the displayed Y and Z axis titles are swapped.
    #[must_use]
    pub fn with_y_up(mut self, y_up: bool) -> Self {
        self.y_up = y_up;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.height, 720);
        assert_eq!(options.line_width, 10.0);
        assert_eq!(options.fov_degrees, FieldOfView::Uniform(50.0));
        assert_eq!(options.mesh_scale, 1.0);
        assert!(!options.y_up);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options = RenderOptions::from_json_str(r#"{ "height": 480, "y_up": true }"#).unwrap();
        assert_eq!(options.height, 480);
        assert!(options.y_up);
        assert_eq!(options.line_width, 10.0);
        assert_eq!(options.fov_degrees, FieldOfView::Uniform(50.0));
    }

    #[test]
    fn test_fov_json_forms() {
        let options = RenderOptions::from_json_str(r#"{ "fov_degrees": 40.0 }"#).unwrap();
        assert_eq!(options.fov_degrees, FieldOfView::Uniform(40.0));

        let options = RenderOptions::from_json_str(r#"{ "fov_degrees": [30.0, 60.0] }"#).unwrap();
        assert_eq!(options.fov_degrees, FieldOfView::PerCamera(vec![30.0, 60.0]));
    }

    #[test]
    fn test_fov_for_camera() {
        let fov = FieldOfView::Uniform(45.0);
        assert_eq!(fov.for_camera(3, 5).unwrap(), 45.0);

        let fov = FieldOfView::PerCamera(vec![20.0]);
        assert_eq!(fov.for_camera(2, 4).unwrap(), 20.0);

        let fov = FieldOfView::PerCamera(vec![20.0, 30.0, 40.0]);
        assert_eq!(fov.for_camera(1, 3).unwrap(), 30.0);
        assert!(matches!(
            fov.for_camera(0, 2),
            Err(CamvizError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            RenderOptions::from_json_str("{ not json"),
            Err(CamvizError::Json(_))
        ));
    }
}
