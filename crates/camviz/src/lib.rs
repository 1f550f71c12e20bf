//! camviz: camera pose visualization as a renderer-agnostic 3D scene.
//!
//! camviz turns a list of camera poses into a scene description: one frustum
//! wireframe and label per camera, an optional image plane on each frustum,
//! and an optional mesh and point cloud. The resulting [`Scene`] is handed to
//! a plotting backend, which owns all drawing and interaction.
//!
//! # Quick Start
//!
//! ```no_run
//! use camviz::*;
//!
//! fn main() -> Result<()> {
//!     let cameras = vec![
//!         CameraEntry::new(
//!             CameraPose::look_at(Vec3::new(0.0, -2.0, 1.0), Vec3::ZERO, Vec3::Z),
//!             "input",
//!             Color::new(0.9, 0.2, 0.2),
//!         ),
//!         CameraEntry::new(
//!             CameraPose::look_at(Vec3::new(2.0, 0.0, 1.0), Vec3::ZERO, Vec3::Z),
//!             "novel view",
//!             Color::new(0.2, 0.4, 0.9),
//!         ),
//!     ];
//!
//!     let mut composer = SceneComposer::new(cameras).with_mesh_path("object.obj")?;
//!     let scene = composer.render(3.0, &RenderOptions::default())?;
//!     println!("{}", scene.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! # Scene contents
//!
//! Per camera, in order:
//! - a [`SurfaceTrace`] showing the camera image, when one is attached
//! - eight [`LineTrace`]s, one per [`Frustum::EDGES`] entry
//! - a [`TextTrace`] with the camera legend
//!
//! followed by the mesh ([`MeshTrace`]) and point cloud ([`PointTrace`]).

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod composer;

pub use composer::SceneComposer;

// Re-export core types
pub use camviz_core::{
    error::{CamvizError, Result},
    options::{FieldOfView, RenderOptions},
    scene::{
        Axis, Colorscale, Layout, Legend, Lighting, LineTrace, MeshTrace, PointTrace, Scene,
        SurfaceTrace, TextPosition, TextTrace, Trace, ViewCamera,
    },
    CameraColor, Color, Mat3, Mat4, Vec3,
};

// Re-export render helpers
pub use camviz_render::{
    build_layout, encode, EncodedImage, ImageEncoder, IndexedImage, WebPaletteEncoder,
};

// Re-export structures
pub use camviz_structures::{
    build_image_plane, compute_frustum, CameraEntry, CameraImage, CameraPose, Frustum,
    PointCloud, TriangleMesh,
};

pub use image::RgbImage;
