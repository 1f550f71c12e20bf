//! Figure layout shared by every scene.

use camviz_core::{
    AspectMode, Axis, Layout, Legend, Margin, RenderOptions, SceneLayout, ViewCamera, XAnchor,
    YAnchor,
};
use glam::Vec3;

/// Default eye position of the viewer camera: oblique, slightly above the XY plane.
pub const DEFAULT_EYE: Vec3 = Vec3::new(1.5, 1.5, 1.0);

/// Builds the layout for a scene spanning `[-scene_bounds, scene_bounds]` on every axis.
///
/// With `y_up`, only the displayed Y and Z titles are swapped.
pub fn build_layout(scene_bounds: f32, options: &RenderOptions) -> Layout {
    let (y_title, z_title) = if options.y_up { ("Z", "Y") } else { ("Y", "Z") };
    let axis = |title: &str| Axis {
        title: title.to_string(),
        range: [-scene_bounds, scene_bounds],
        show_tick_labels: options.show_tick_labels,
        show_grid: options.show_grid,
        show_background: options.show_background,
        zero_line: false,
        show_spikes: false,
        show_line: false,
        show_ticks: false,
    };

    Layout {
        height: options.height,
        autosize: true,
        hover: false,
        margin: Margin::default(),
        show_legend: true,
        legend: Legend {
            x: 0.99,
            y: 0.01,
            x_anchor: XAnchor::Right,
            y_anchor: YAnchor::Bottom,
        },
        scene: SceneLayout {
            aspect_mode: AspectMode::Manual,
            aspect_ratio: Vec3::ONE,
            camera: ViewCamera {
                eye: DEFAULT_EYE,
                center: Vec3::ZERO,
                up: Vec3::Z,
            },
            x_axis: axis("X"),
            y_axis: axis(y_title),
            z_axis: axis(z_title),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = build_layout(2.5, &RenderOptions::default());
        assert_eq!(layout.height, 720);
        assert_eq!(layout.scene.x_axis.title, "X");
        assert_eq!(layout.scene.y_axis.title, "Y");
        assert_eq!(layout.scene.z_axis.title, "Z");
        for axis in [&layout.scene.x_axis, &layout.scene.y_axis, &layout.scene.z_axis] {
            assert_eq!(axis.range, [-2.5, 2.5]);
            assert!(!axis.show_grid);
            assert!(!axis.zero_line);
        }
        assert_eq!(layout.scene.aspect_ratio, Vec3::ONE);
        assert_eq!(layout.scene.camera.up, Vec3::Z);
        assert_eq!(layout.legend.x_anchor, XAnchor::Right);
        assert_eq!(layout.legend.y_anchor, YAnchor::Bottom);
    }

    #[test]
    fn test_y_up_swaps_titles_only() {
        let options = RenderOptions::default().with_y_up(true);
        let layout = build_layout(1.0, &options);
        assert_eq!(layout.scene.x_axis.title, "X");
        assert_eq!(layout.scene.y_axis.title, "Z");
        assert_eq!(layout.scene.z_axis.title, "Y");
        assert_eq!(layout.scene.y_axis.range, [-1.0, 1.0]);
    }

    #[test]
    fn test_axis_chrome_follows_options() {
        let options = RenderOptions {
            show_grid: true,
            show_background: true,
            show_tick_labels: true,
            ..RenderOptions::default()
        };
        let layout = build_layout(1.0, &options);
        assert!(layout.scene.z_axis.show_grid);
        assert!(layout.scene.z_axis.show_background);
        assert!(layout.scene.z_axis.show_tick_labels);
        assert!(!layout.scene.z_axis.show_ticks);
    }
}
