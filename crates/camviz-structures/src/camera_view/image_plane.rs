//! Textured image planes placed on a camera frustum.

use camviz_core::{Lighting, SurfaceTrace};
use camviz_render::EncodedImage;
use glam::Vec3;

use super::{CameraPose, Frustum};

/// Evenly spaced samples from `start` to `end`, both included.
fn linspace(start: f32, end: f32, n: usize) -> impl Iterator<Item = f32> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f32
    } else {
        0.0
    };
    (0..n).map(move |i| start + step * i as f32)
}

/// Builds the surface showing `image` on the far plane of `frustum`.
///
/// The grid is laid out in the camera's local XY plane at local Z
/// `base_radius`, as wide as the frustum's far plane, with image row 0 on top
/// and the image aspect ratio preserved. After moving it to world space, the
/// whole grid is shifted so that pixel (0, 0) sits exactly on frustum corner 2.
pub fn build_image_plane(
    pose: &CameraPose,
    frustum: &Frustum,
    image: &EncodedImage,
    base_radius: f32,
) -> SurfaceTrace {
    let rows = image.indexed.height() as usize;
    let cols = image.indexed.width() as usize;
    let half_width = frustum.far_plane_width() / 2.0;
    let aspect = rows as f32 / cols as f32;

    let xs: Vec<f32> = linspace(-half_width, half_width, cols).collect();
    let mut points = Vec::with_capacity(rows * cols);
    for y in linspace(half_width, -half_width, rows) {
        for &x in &xs {
            points.push(pose.transform_point(Vec3::new(x, y * aspect, base_radius)));
        }
    }

    if let Some(&origin) = points.first() {
        let offset = frustum.point(2) - origin;
        for p in &mut points {
            *p += offset;
        }
    }

    SurfaceTrace {
        rows,
        cols,
        points,
        surface_color: image.indexed.indices().to_vec(),
        cmin: 0.0,
        cmax: 255.0,
        colorscale: image.colorscale.clone(),
        show_scale: false,
        lighting: Lighting::FLAT,
        show_legend: false,
    }
}
