//! Camera frustum geometry.

use camviz_core::{CamvizError, Result};
use glam::Vec3;

use super::CameraPose;

/// A camera frustum: apex plus the four far-plane corners.
///
/// Points are ordered `[apex, top_right, top_left, bottom_left, bottom_right]`
/// in camera terms. Corners lie at distance `zoom` from the apex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    points: [Vec3; 5],
}

impl Frustum {
    /// Index of the apex.
    pub const APEX: usize = 0;

    /// Wireframe edges: apex to every corner, then around the far plane.
    pub const EDGES: [(usize, usize); 8] = [
        (0, 1),
        (0, 2),
        (0, 3),
        (0, 4),
        (1, 2),
        (2, 3),
        (3, 4),
        (4, 1),
    ];

    /// Returns all five points, apex first.
    pub fn points(&self) -> &[Vec3; 5] {
        &self.points
    }

    /// Returns point `i` (0 = apex, 1..=4 = corners).
    pub fn point(&self, i: usize) -> Vec3 {
        self.points[i]
    }

    /// Returns the camera position.
    pub fn apex(&self) -> Vec3 {
        self.points[Self::APEX]
    }

    /// Returns the four far-plane corners.
    pub fn corners(&self) -> &[Vec3] {
        &self.points[1..]
    }

    /// Distance between the two top corners.
    pub fn far_plane_width(&self) -> f32 {
        self.points[1].distance(self.points[2])
    }

    /// Iterates the wireframe edges as point pairs, in [`Frustum::EDGES`] order.
    pub fn edges(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        Self::EDGES
            .iter()
            .map(|&(a, b)| (self.points[a], self.points[b]))
    }
}

/// Computes the frustum of a camera.
///
/// Corner directions are built at unit depth along the camera's -Z axis with
/// half-extent `tan(fov / 2)`, rotated into world space, then normalized and
/// scaled by `zoom`. The frustum size therefore depends on `zoom` only; `fov`
/// only changes its opening angle.
///
/// # Errors
///
/// Returns [`CamvizError::GeometryPrecondition`] unless `0 < fov_degrees < 180`,
/// `zoom > 0`, and the pose rotation is orthonormal.
pub fn compute_frustum(pose: &CameraPose, fov_degrees: f32, zoom: f32) -> Result<Frustum> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(CamvizError::GeometryPrecondition(format!(
            "field of view must be in (0, 180) degrees, got {fov_degrees}"
        )));
    }
    if !(zoom > 0.0 && zoom.is_finite()) {
        return Err(CamvizError::GeometryPrecondition(format!(
            "zoom must be positive, got {zoom}"
        )));
    }
    pose.validate()?;

    let t = (fov_degrees.to_radians() / 2.0).tan();
    let rotation = pose.rotation();
    let position = pose.position();

    let corner = |x: f32, y: f32| position + (rotation * Vec3::new(x, y, -1.0)).normalize() * zoom;

    Ok(Frustum {
        points: [
            position,
            corner(t, t),
            corner(-t, t),
            corner(-t, -t),
            corner(t, -t),
        ],
    })
}
