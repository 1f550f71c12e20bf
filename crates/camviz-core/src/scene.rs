//! Renderer-agnostic scene description.
//!
//! A [`Scene`] is a flat list of typed draw primitives ([`Trace`]) plus one
//! [`Layout`]. It is the only artifact handed to the plotting backend; the
//! backend decides how to draw each trace kind.
//!
//! The JSON form is one-way: colors are written as 8-bit `rgb(r, g, b)`
//! strings, so it is not read back into a [`Scene`].

use glam::Vec3;
use serde::Serialize;

use crate::color::Color;
use crate::error::Result;

/// A complete scene: traces in draw order plus a shared layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub traces: Vec<Trace>,
    pub layout: Layout,
}

impl Scene {
    /// Creates an empty scene with the given layout.
    pub fn new(layout: Layout) -> Self {
        Self {
            traces: Vec::new(),
            layout,
        }
    }

    /// Appends a trace.
    pub fn push(&mut self, trace: impl Into<Trace>) {
        self.traces.push(trace.into());
    }

    /// Iterates the line-segment traces.
    pub fn lines(&self) -> impl Iterator<Item = &LineTrace> {
        self.traces.iter().filter_map(|t| match t {
            Trace::Lines(l) => Some(l),
            _ => None,
        })
    }

    /// Iterates the surface traces.
    pub fn surfaces(&self) -> impl Iterator<Item = &SurfaceTrace> {
        self.traces.iter().filter_map(|t| match t {
            Trace::Surface(s) => Some(s),
            _ => None,
        })
    }

    /// Iterates the text traces.
    pub fn texts(&self) -> impl Iterator<Item = &TextTrace> {
        self.traces.iter().filter_map(|t| match t {
            Trace::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn count_lines(&self) -> usize {
        self.lines().count()
    }

    pub fn count_surfaces(&self) -> usize {
        self.surfaces().count()
    }

    pub fn count_text(&self) -> usize {
        self.texts().count()
    }

    pub fn count_meshes(&self) -> usize {
        self.traces
            .iter()
            .filter(|t| matches!(t, Trace::Mesh(_)))
            .count()
    }

    pub fn count_points(&self) -> usize {
        self.traces
            .iter()
            .filter(|t| matches!(t, Trace::Points(_)))
            .count()
    }

    /// Serializes the scene for hand-off to a plotting backend.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One draw primitive.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trace {
    Lines(LineTrace),
    Surface(SurfaceTrace),
    Text(TextTrace),
    Mesh(MeshTrace),
    Points(PointTrace),
}

impl Trace {
    /// Whether this trace gets an entry in the legend.
    pub fn show_legend(&self) -> bool {
        match self {
            Self::Lines(t) => t.show_legend,
            Self::Surface(t) => t.show_legend,
            Self::Text(t) => t.show_legend,
            Self::Mesh(t) => t.show_legend,
            Self::Points(t) => t.show_legend,
        }
    }
}

/// A single line segment with per-endpoint colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineTrace {
    pub points: [Vec3; 2],
    pub colors: [Color; 2],
    pub width: f32,
    pub show_legend: bool,
}

/// Lighting coefficients for shaded surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lighting {
    pub diffuse: f32,
    pub ambient: f32,
    pub fresnel: f32,
    pub roughness: f32,
    pub specular: f32,
}

impl Lighting {
    /// Lighting that shows surface colors as-is, without shading.
    pub const FLAT: Self = Self {
        diffuse: 1.0,
        ambient: 1.0,
        fresnel: 1.0,
        roughness: 1.0,
        specular: 0.0,
    };
}

/// Maps normalized scalar values to colors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Colorscale(pub Vec<(f32, Color)>);

impl Colorscale {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn stops(&self) -> &[(f32, Color)] {
        &self.0
    }
}

/// A colored surface sampled on a regular `rows x cols` grid.
///
/// Grid data is stored row-major: the point of row `r`, column `c` is at
/// index `r * cols + c`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceTrace {
    pub rows: usize,
    pub cols: usize,
    pub points: Vec<Vec3>,
    /// Scalar per grid point, mapped through `colorscale` over `[cmin, cmax]`.
    pub surface_color: Vec<u8>,
    pub cmin: f32,
    pub cmax: f32,
    pub colorscale: Colorscale,
    pub show_scale: bool,
    pub lighting: Lighting,
    pub show_legend: bool,
}

impl SurfaceTrace {
    /// Grid point at (`row`, `col`).
    pub fn point(&self, row: usize, col: usize) -> Vec3 {
        self.points[row * self.cols + col]
    }
}

/// Where a text label sits relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextPosition {
    #[serde(rename = "top center")]
    TopCenter,
    #[serde(rename = "bottom center")]
    BottomCenter,
}

/// A text label in 3D.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextTrace {
    pub position: Vec3,
    pub text: String,
    pub text_position: TextPosition,
    pub show_legend: bool,
}

/// A triangle mesh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshTrace {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub faces: Vec<[u32; 3]>,
    pub color: Color,
    pub show_legend: bool,
}

/// A set of markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointTrace {
    pub name: String,
    pub points: Vec<Vec3>,
    /// Per-point colors; the backend default is used when absent.
    pub colors: Option<Vec<Color>>,
    pub size: f32,
    pub show_legend: bool,
}

macro_rules! impl_into_trace {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Trace {
                fn from(t: $ty) -> Self {
                    Self::$variant(t)
                }
            }
        )*
    };
}

impl_into_trace!(
    LineTrace => Lines,
    SurfaceTrace => Surface,
    TextTrace => Text,
    MeshTrace => Mesh,
    PointTrace => Points,
);

/// Figure margins, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub b: u32,
    pub t: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum XAnchor {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YAnchor {
    Top,
    Middle,
    Bottom,
}

/// Placement of the legend box in normalized figure coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    pub x: f32,
    pub y: f32,
    pub x_anchor: XAnchor,
    pub y_anchor: YAnchor,
}

/// Viewpoint of the interactive viewer camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewCamera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

/// Display settings of one scene axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: String,
    pub range: [f32; 2],
    pub show_tick_labels: bool,
    pub show_grid: bool,
    pub show_background: bool,
    pub zero_line: bool,
    pub show_spikes: bool,
    pub show_line: bool,
    pub show_ticks: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Auto,
    Cube,
    Data,
    Manual,
}

/// The 3D viewport: aspect, viewer camera and axes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLayout {
    pub aspect_mode: AspectMode,
    pub aspect_ratio: Vec3,
    pub camera: ViewCamera,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub z_axis: Axis,
}

/// Figure-level layout shared by all traces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub height: u32,
    pub autosize: bool,
    pub hover: bool,
    pub margin: Margin,
    pub show_legend: bool,
    pub legend: Legend,
    pub scene: SceneLayout,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(title: &str) -> Axis {
        Axis {
            title: title.to_string(),
            range: [-1.0, 1.0],
            show_tick_labels: false,
            show_grid: false,
            show_background: false,
            zero_line: false,
            show_spikes: false,
            show_line: false,
            show_ticks: false,
        }
    }

    fn layout() -> Layout {
        Layout {
            height: 480,
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
                    eye: Vec3::new(1.5, 1.5, 1.0),
                    center: Vec3::ZERO,
                    up: Vec3::Z,
                },
                x_axis: axis("X"),
                y_axis: axis("Y"),
                z_axis: axis("Z"),
            },
        }
    }

    #[test]
    fn test_counts() {
        let mut scene = Scene::new(layout());
        scene.push(LineTrace {
            points: [Vec3::ZERO, Vec3::X],
            colors: [Color::BLACK; 2],
            width: 2.0,
            show_legend: false,
        });
        scene.push(TextTrace {
            position: Vec3::Z,
            text: "cam".to_string(),
            text_position: TextPosition::TopCenter,
            show_legend: false,
        });
        scene.push(PointTrace {
            name: "points".to_string(),
            points: vec![Vec3::ONE],
            colors: None,
            size: 1.0,
            show_legend: true,
        });

        assert_eq!(scene.count_lines(), 1);
        assert_eq!(scene.count_text(), 1);
        assert_eq!(scene.count_points(), 1);
        assert_eq!(scene.count_surfaces(), 0);
        assert_eq!(scene.count_meshes(), 0);
        assert!(scene.traces[2].show_legend());
    }

    #[test]
    fn test_json_shape() {
        let mut scene = Scene::new(layout());
        scene.push(TextTrace {
            position: Vec3::new(0.0, 0.0, 1.05),
            text: "front".to_string(),
            text_position: TextPosition::BottomCenter,
            show_legend: false,
        });

        let value: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        assert_eq!(value["traces"][0]["type"], "text");
        assert_eq!(value["traces"][0]["text_position"], "bottom center");
        assert_eq!(value["layout"]["legend"]["x_anchor"], "right");
        assert_eq!(value["layout"]["scene"]["aspect_mode"], "manual");
    }

    #[test]
    fn test_line_trace_json_quantizes_colors() {
        let mut scene = Scene::new(layout());
        scene.push(LineTrace {
            points: [Vec3::new(0.25, -1.5, 3.0), Vec3::X],
            colors: [Color::new(0.8, 0.1, 0.1), Color::new(0.0, 0.5, 1.0)],
            width: 10.0,
            show_legend: true,
        });

        let value: serde_json::Value = serde_json::from_str(&scene.to_json().unwrap()).unwrap();
        let line = &value["traces"][0];
        assert_eq!(line["type"], "lines");
        assert_eq!(line["points"][0], serde_json::json!([0.25, -1.5, 3.0]));
        assert_eq!(line["colors"][0], "rgb(204, 26, 26)");
        assert_eq!(line["colors"][1], "rgb(0, 128, 255)");
        assert_eq!(line["width"], 10.0);
        assert_eq!(line["show_legend"], true);

        // The 8-bit strings parse back, but only to the nearest 8-bit color.
        let back: Color = line["colors"][0].as_str().unwrap().parse().unwrap();
        assert_eq!(back.to_rgb8(), [204, 26, 26]);
        assert_ne!(back, Color::new(0.8, 0.1, 0.1));
    }

    #[test]
    fn test_surface_grid_indexing() {
        let surface = SurfaceTrace {
            rows: 2,
            cols: 3,
            points: (0..6).map(|i| Vec3::splat(i as f32)).collect(),
            surface_color: vec![0; 6],
            cmin: 0.0,
            cmax: 255.0,
            colorscale: Colorscale(vec![(0.0, Color::BLACK), (1.0, Color::WHITE)]),
            show_scale: false,
            lighting: Lighting::FLAT,
            show_legend: false,
        };
        assert_eq!(surface.point(0, 0), Vec3::splat(0.0));
        assert_eq!(surface.point(1, 2), Vec3::splat(5.0));
        assert_eq!(surface.colorscale.len(), 2);
    }
}
