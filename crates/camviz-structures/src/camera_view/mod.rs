//! Camera entries: pose, label, color, and an optional image.

mod frustum;
mod image_plane;
mod pose;

pub use frustum::*;
pub use image_plane::*;
pub use pose::*;

use camviz_core::{CameraColor, CamvizError, Result};
use camviz_render::{EncodedImage, ImageEncoder, WebPaletteEncoder};
use image::RgbImage;

/// A raw RGB image together with its palette encoding.
///
/// The encoding is computed once, when the image is attached.
#[derive(Debug, Clone)]
pub struct CameraImage {
    raw: RgbImage,
    encoded: EncodedImage,
}

impl CameraImage {
    /// Encodes `raw` with `encoder`.
    ///
    /// Returns an error for images with no pixels.
    pub fn new(raw: RgbImage, encoder: &dyn ImageEncoder) -> Result<Self> {
        if raw.width() == 0 || raw.height() == 0 {
            return Err(CamvizError::InvalidInput(format!(
                "camera image must not be empty, got {}x{}",
                raw.width(),
                raw.height()
            )));
        }
        let encoded = encoder.encode(&raw);
        Ok(Self { raw, encoded })
    }

    /// Builds an image from a row-major `height x width x 3` byte buffer.
    pub fn from_raw(
        width: u32,
        height: u32,
        bytes: Vec<u8>,
        encoder: &dyn ImageEncoder,
    ) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        let actual = bytes.len();
        let raw = RgbImage::from_raw(width, height, bytes)
            .filter(|_| actual == expected)
            .ok_or(CamvizError::SizeMismatch { expected, actual })?;
        Self::new(raw, encoder)
    }

    /// Returns the original image.
    #[must_use]
    pub fn raw(&self) -> &RgbImage {
        &self.raw
    }

    /// Returns the palette encoding.
    #[must_use]
    pub fn encoded(&self) -> &EncodedImage {
        &self.encoded
    }
}

/// One visualized camera.
#[derive(Debug, Clone)]
pub struct CameraEntry {
    pose: CameraPose,
    legend: String,
    color: CameraColor,
    image: Option<CameraImage>,
}

impl CameraEntry {
    /// Creates a camera entry without an image.
    pub fn new(pose: CameraPose, legend: impl Into<String>, color: impl Into<CameraColor>) -> Self {
        Self {
            pose,
            legend: legend.into(),
            color: color.into(),
            image: None,
        }
    }

    /// Attaches an image, encoded with the web palette.
    pub fn with_image(self, image: RgbImage) -> Result<Self> {
        self.with_image_encoded_by(image, &WebPaletteEncoder)
    }

    /// Attaches an image, encoded with `encoder`.
    pub fn with_image_encoded_by(
        mut self,
        image: RgbImage,
        encoder: &dyn ImageEncoder,
    ) -> Result<Self> {
        self.image = Some(CameraImage::new(image, encoder)?);
        Ok(self)
    }

    /// Gets the camera pose.
    #[must_use]
    pub fn pose(&self) -> &CameraPose {
        &self.pose
    }

    /// Gets the label shown next to the camera.
    #[must_use]
    pub fn legend(&self) -> &str {
        &self.legend
    }

    /// Gets the frustum color.
    #[must_use]
    pub fn color(&self) -> CameraColor {
        self.color
    }

    /// Gets the attached image, if any.
    #[must_use]
    pub fn image(&self) -> Option<&CameraImage> {
        self.image.as_ref()
    }
}
