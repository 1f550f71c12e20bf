//! Structure implementations for camviz.
//!
//! This crate provides the geometric building blocks of a scene:
//! - Camera entries and poses, with frustum and image-plane geometry
//! - Triangle meshes (OBJ, PLY)
//! - Point clouds (PLY, JSON)

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod camera_view;
pub mod point_cloud;
pub mod surface_mesh;

mod ply;

pub use camera_view::{
    build_image_plane, compute_frustum, CameraEntry, CameraImage, CameraPose, Frustum,
};
pub use point_cloud::PointCloud;
pub use surface_mesh::{shift_and_scale, TriangleMesh};
