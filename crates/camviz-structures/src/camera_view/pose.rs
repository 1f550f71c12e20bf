//! Camera-to-world poses.

use camviz_core::{CamvizError, Result};
use glam::{Mat3, Mat4, Vec3, Vec4};

/// Tolerance used when checking that a rotation is orthonormal.
pub const ORTHONORMAL_TOLERANCE: f32 = 1e-3;

/// A rigid camera-to-world transform.
///
/// The upper-left 3x3 block holds the camera axes in world space, the
/// translation column holds the camera position. Rotations are expected to be
/// orthonormal; [`CameraPose::validate`] checks this.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose(Mat4);

impl CameraPose {
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    /// Wraps a camera-to-world matrix.
    pub fn new(camera_to_world: Mat4) -> Self {
        Self(camera_to_world)
    }

    /// Builds a pose from a row-major 4x4 matrix, the layout poses are usually written in.
    pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self(Mat4::from_cols_array_2d(&rows).transpose())
    }

    /// Builds a pose from a rotation and a camera position.
    pub fn from_rotation_translation(rotation: Mat3, position: Vec3) -> Self {
        Self(Mat4::from_cols(
            rotation.x_axis.extend(0.0),
            rotation.y_axis.extend(0.0),
            rotation.z_axis.extend(0.0),
            position.extend(1.0),
        ))
    }

    /// Builds a pose for a camera at `position` whose -Z axis points at `target`.
    pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Self {
        let back = (position - target).normalize();
        let right = up.cross(back).normalize();
        let true_up = back.cross(right);
        Self::from_rotation_translation(Mat3::from_cols(right, true_up, back), position)
    }

    /// Returns the camera-to-world matrix.
    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// Returns the rotation block.
    pub fn rotation(&self) -> Mat3 {
        Mat3::from_mat4(self.0)
    }

    /// Returns the camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.0.w_axis.truncate()
    }

    /// Maps a camera-local point to world space.
    pub fn transform_point(&self, local: Vec3) -> Vec3 {
        self.rotation() * local + self.position()
    }

    /// Checks that the pose is a finite rigid transform with an orthonormal,
    /// right-handed rotation.
    pub fn validate(&self) -> Result<()> {
        if !self.0.is_finite() {
            return Err(CamvizError::GeometryPrecondition(
                "pose contains non-finite values".to_string(),
            ));
        }
        if self.0.row(3) != Vec4::W {
            return Err(CamvizError::GeometryPrecondition(format!(
                "pose bottom row must be [0, 0, 0, 1], got {}",
                self.0.row(3)
            )));
        }
        let rotation = self.rotation();
        let gram = rotation.transpose() * rotation;
        if !gram.abs_diff_eq(Mat3::IDENTITY, ORTHONORMAL_TOLERANCE) {
            return Err(CamvizError::GeometryPrecondition(
                "rotation is not orthonormal".to_string(),
            ));
        }
        if (rotation.determinant() - 1.0).abs() > ORTHONORMAL_TOLERANCE {
            return Err(CamvizError::GeometryPrecondition(
                "rotation is a reflection".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Mat4> for CameraPose {
    fn from(m: Mat4) -> Self {
        Self(m)
    }
}
