//! Scene assembly from camera entries and optional geometry.

use std::path::Path;

use camviz_core::{
    CameraColor, CamvizError, LineTrace, RenderOptions, Result, Scene, TextPosition, TextTrace,
};
use camviz_render::build_layout;
use camviz_structures::{
    build_image_plane, compute_frustum, CameraEntry, CameraPose, Frustum, PointCloud,
    TriangleMesh,
};
use glam::Vec3;
use image::RgbImage;

/// Vertical distance between a camera and its label.
const LABEL_OFFSET: f32 = 0.05;

/// Builds scenes showing a set of cameras, optionally with a mesh and a point cloud.
///
/// Cameras are drawn in insertion order. Each one contributes, in this order:
/// its image plane (if it has an image), the eight frustum edges, and a text
/// label at the camera position.
#[derive(Debug, Clone)]
pub struct SceneComposer {
    cameras: Vec<CameraEntry>,
    mesh: Option<TriangleMesh>,
    point_cloud: Option<PointCloud>,
    camera_x: f32,
    scene: Option<Scene>,
}

impl SceneComposer {
    /// Creates a composer for `cameras`.
    pub fn new(cameras: Vec<CameraEntry>) -> Self {
        Self {
            cameras,
            mesh: None,
            point_cloud: None,
            camera_x: 1.0,
            scene: None,
        }
    }

    /// Creates a composer from per-camera lists that must all have the same length.
    ///
    /// `images`, when given, holds one optional image per camera; present
    /// images are encoded immediately.
    pub fn from_parallel(
        poses: Vec<CameraPose>,
        legends: Vec<String>,
        colors: Vec<CameraColor>,
        images: Option<Vec<Option<RgbImage>>>,
    ) -> Result<Self> {
        let n = poses.len();
        let mut lengths = vec![("legends", legends.len()), ("colors", colors.len())];
        if let Some(images) = &images {
            lengths.push(("images", images.len()));
        }
        if let Some((name, len)) = lengths.into_iter().find(|&(_, len)| len != n) {
            return Err(CamvizError::InvalidInput(format!(
                "{n} poses but {len} {name}"
            )));
        }

        let mut images = images.map(Vec::into_iter);
        let cameras = poses
            .into_iter()
            .zip(legends)
            .zip(colors)
            .map(|((pose, legend), color)| {
                let entry = CameraEntry::new(pose, legend, color);
                match images.as_mut().and_then(Iterator::next).flatten() {
                    Some(image) => entry.with_image(image),
                    None => Ok(entry),
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(cameras))
    }

    /// Loads a mesh to show with the cameras. A missing file is skipped.
    pub fn with_mesh_path(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.mesh = TriangleMesh::load(path)?;
        Ok(self)
    }

    /// Loads a point cloud to show with the cameras. A missing file is skipped.
    pub fn with_point_cloud_path(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.point_cloud = PointCloud::load(path)?;
        Ok(self)
    }

    /// Shows `mesh` with the cameras.
    #[must_use]
    pub fn with_mesh(mut self, mesh: TriangleMesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    /// Shows `point_cloud` with the cameras.
    #[must_use]
    pub fn with_point_cloud(mut self, point_cloud: PointCloud) -> Self {
        self.point_cloud = Some(point_cloud);
        self
    }

    /// Sets the frustum scale factor (distance from apex to corners).
    ///
    /// Defaults to 1.0, the unit frustum. Any other value enlarges or shrinks
    /// every frustum and the image plane drawn on it.
    #[must_use]
    pub fn with_camera_x(mut self, camera_x: f32) -> Self {
        self.camera_x = camera_x;
        self
    }

    /// Returns the cameras.
    pub fn cameras(&self) -> &[CameraEntry] {
        &self.cameras
    }

    /// Returns the loaded mesh, if any.
    pub fn mesh(&self) -> Option<&TriangleMesh> {
        self.mesh.as_ref()
    }

    /// Returns the loaded point cloud, if any.
    pub fn point_cloud(&self) -> Option<&PointCloud> {
        self.point_cloud.as_ref()
    }

    /// Returns the frustum scale factor.
    pub fn camera_x(&self) -> f32 {
        self.camera_x
    }

    /// Returns the scene produced by the last call to [`SceneComposer::render`].
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Builds the scene and keeps it as the current scene.
    pub fn render(&mut self, scene_bounds: f32, options: &RenderOptions) -> Result<&Scene> {
        let scene = self.compose(scene_bounds, options)?;
        Ok(self.scene.insert(scene))
    }

    /// Builds the scene for axes spanning `[-scene_bounds, scene_bounds]`.
    pub fn compose(&self, scene_bounds: f32, options: &RenderOptions) -> Result<Scene> {
        if !(scene_bounds > 0.0 && scene_bounds.is_finite()) {
            return Err(CamvizError::InvalidInput(format!(
                "scene bounds must be positive, got {scene_bounds}"
            )));
        }

        let mut scene = Scene::new(build_layout(scene_bounds, options));
        let num_cameras = self.cameras.len();

        for (i, camera) in self.cameras.iter().enumerate() {
            let fov = options.fov_degrees.for_camera(i, num_cameras)?;
            let frustum = compute_frustum(camera.pose(), fov, self.camera_x)?;
            log::debug!(
                "camera {i} '{}': fov {fov}, apex {}",
                camera.legend(),
                frustum.apex()
            );

            if let Some(image) = camera.image() {
                scene.push(build_image_plane(
                    camera.pose(),
                    &frustum,
                    image.encoded(),
                    options.base_radius,
                ));
            }
            push_wireframe(&mut scene, &frustum, camera.color(), options.line_width);
            scene.push(label(&frustum, camera.legend()));
        }

        if let Some(mesh) = &self.mesh {
            scene.push(mesh.to_trace(options.mesh_z_shift, options.mesh_scale));
        }
        if let Some(point_cloud) = &self.point_cloud {
            scene.push(point_cloud.to_trace(options.mesh_z_shift, options.mesh_scale));
        }

        log::info!(
            "composed scene: {num_cameras} cameras, {} traces",
            scene.traces.len()
        );
        Ok(scene)
    }
}

/// One line trace per frustum edge.
fn push_wireframe(scene: &mut Scene, frustum: &Frustum, color: CameraColor, width: f32) {
    let colors = color.endpoints();
    for (start, end) in frustum.edges() {
        scene.push(LineTrace {
            points: [start, end],
            colors,
            width,
            show_legend: false,
        });
    }
}

/// Label just above the camera, or just below it for cameras under the XY plane.
fn label(frustum: &Frustum, text: &str) -> TextTrace {
    let apex = frustum.apex();
    let (dz, text_position) = if apex.z < 0.0 {
        (-LABEL_OFFSET, TextPosition::BottomCenter)
    } else {
        (LABEL_OFFSET, TextPosition::TopCenter)
    };
    TextTrace {
        position: apex + Vec3::new(0.0, 0.0, dz),
        text: text.to_string(),
        text_position,
        show_legend: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camviz_core::Color;

    #[test]
    fn test_label_above_and_below() {
        let above = compute_frustum(
            &CameraPose::look_at(Vec3::new(0.0, 1.0, 2.0), Vec3::ZERO, Vec3::Z),
            50.0,
            1.0,
        )
        .unwrap();
        let t = label(&above, "up");
        assert_eq!(t.text_position, TextPosition::TopCenter);
        assert!((t.position.z - 2.05).abs() < 1e-6);

        let below = compute_frustum(
            &CameraPose::look_at(Vec3::new(0.0, 1.0, -2.0), Vec3::ZERO, Vec3::Z),
            50.0,
            1.0,
        )
        .unwrap();
        let t = label(&below, "down");
        assert_eq!(t.text_position, TextPosition::BottomCenter);
        assert!((t.position.z + 2.05).abs() < 1e-6);
        assert_eq!(t.text, "down");
    }

    #[test]
    fn test_wireframe_colors() {
        let frustum = compute_frustum(&CameraPose::IDENTITY, 50.0, 1.0).unwrap();
        let red = Color::new(1.0, 0.0, 0.0);
        let blue = Color::new(0.0, 0.0, 1.0);
        let mut scene = Scene::new(build_layout(1.0, &RenderOptions::default()));
        push_wireframe(&mut scene, &frustum, CameraColor::TwoTone(red, blue), 4.0);

        assert_eq!(scene.count_lines(), 8);
        for line in scene.lines() {
            assert_eq!(line.colors, [red, blue]);
            assert_eq!(line.width, 4.0);
            assert!(!line.show_legend);
        }
    }

    #[test]
    fn test_default_camera_x_is_unit_frustum() {
        let camera = CameraEntry::new(CameraPose::IDENTITY, "c", Color::BLACK);
        let composer = SceneComposer::new(vec![camera]);
        assert_eq!(composer.camera_x(), 1.0);
        let scene = composer.compose(3.0, &RenderOptions::default()).unwrap();
        let first = scene.lines().next().unwrap();
        assert!((first.points[1].length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_camera_x_scales_frustum() {
        let camera = CameraEntry::new(CameraPose::IDENTITY, "c", Color::BLACK);
        let scene = SceneComposer::new(vec![camera])
            .with_camera_x(2.0)
            .compose(3.0, &RenderOptions::default())
            .unwrap();
        let first = scene.lines().next().unwrap();
        assert!((first.points[1].length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_scene_bounds() {
        let composer = SceneComposer::new(Vec::new());
        for bounds in [0.0, -1.0, f32::NAN] {
            assert!(matches!(
                composer.compose(bounds, &RenderOptions::default()),
                Err(CamvizError::InvalidInput(_))
            ));
        }
    }
}
