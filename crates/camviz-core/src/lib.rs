//! Core types for camviz.
//!
//! This crate provides the vocabulary shared by the rest of the workspace:
//! - [`CamvizError`] and the [`Result`] alias
//! - [`RenderOptions`], the configuration bundle for scene assembly
//! - [`Scene`] and its traces, the description handed to a plotting backend
//! - [`Color`] and [`CameraColor`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Options and axis structs legitimately have many boolean flags
#![allow(clippy::struct_excessive_bools)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod error;
pub mod options;
pub mod scene;

pub use color::{CameraColor, Color};
pub use error::{CamvizError, Result};
pub use options::{FieldOfView, RenderOptions};
pub use scene::{
    AspectMode, Axis, Colorscale, Layout, Legend, Lighting, LineTrace, Margin, MeshTrace,
    PointTrace, Scene, SceneLayout, SurfaceTrace, TextPosition, TextTrace, Trace, ViewCamera,
    XAnchor, YAnchor,
};

// Re-export glam types for convenience
pub use glam::{Mat3, Mat4, Vec3};
