//! Render-facing helpers for camviz.
//!
//! - [`palette`]: web palette quantization of RGB images for textured surfaces
//! - [`layout`]: the figure layout (axes, viewer camera, legend) shared by all scenes

// Graphics code intentionally uses casts for indices and colors
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]

pub mod layout;
pub mod palette;

pub use layout::{build_layout, DEFAULT_EYE};
pub use palette::{
    encode, web_palette, web_palette_index, EncodedImage, ImageEncoder, IndexedImage,
    WebPaletteEncoder, PALETTE_SIZE,
};
