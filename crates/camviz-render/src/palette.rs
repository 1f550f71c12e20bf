//! Palette encoding of RGB images.
//!
//! Plotting backends typically color a surface by a scalar per vertex. To show
//! a photo on a surface, the photo is reduced to indices into a fixed 256-entry
//! palette, and the palette is passed along as a colorscale over `[0, 255]`.

use camviz_core::{Color, Colorscale};
use image::RgbImage;

/// Number of entries in an indexed palette.
pub const PALETTE_SIZE: usize = 256;

/// First palette slot of the 6x6x6 web color cube; slots before it are black.
const WEB_CUBE_OFFSET: usize = 10;

/// Channel step between adjacent web cube levels (0, 51, ..., 255).
const WEB_LEVEL_STEP: u8 = 51;

/// An image whose pixels are palette indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl IndexedImage {
    /// Returns the image width.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major palette indices, row 0 first.
    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Palette index of pixel (`x`, `y`), with `y = 0` the top row.
    #[must_use]
    pub fn index(&self, x: u32, y: u32) -> u8 {
        self.indices[(y * self.width + x) as usize]
    }
}

/// Result of encoding an RGB image: indices plus the colorscale to decode them.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedImage {
    pub indexed: IndexedImage,
    pub colorscale: Colorscale,
}

/// Reduces RGB rasters to a palette image plus a colorscale.
pub trait ImageEncoder {
    /// Encodes `image`. Must be deterministic.
    fn encode(&self, image: &RgbImage) -> EncodedImage;
}

/// The standard "web-safe" palette encoder, without dithering.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPaletteEncoder;

impl ImageEncoder for WebPaletteEncoder {
    fn encode(&self, image: &RgbImage) -> EncodedImage {
        let indices = image
            .pixels()
            .map(|p| web_palette_index(p.0))
            .collect::<Vec<_>>();
        log::debug!(
            "encoded {}x{} image to web palette",
            image.width(),
            image.height()
        );
        EncodedImage {
            indexed: IndexedImage {
                width: image.width(),
                height: image.height(),
                indices,
            },
            colorscale: colorscale(&web_palette()),
        }
    }
}

/// Encodes `image` with the [`WebPaletteEncoder`].
#[must_use]
pub fn encode(image: &RgbImage) -> EncodedImage {
    WebPaletteEncoder.encode(image)
}

/// Returns the 256-entry web palette.
///
/// Entries 0-9 are black, entries 10-225 hold the 6x6x6 cube over the levels
/// `0, 51, 102, 153, 204, 255` with red varying fastest, and the remaining
/// entries are black.
#[must_use]
pub fn web_palette() -> [[u8; 3]; PALETTE_SIZE] {
    let mut palette = [[0u8; 3]; PALETTE_SIZE];
    let mut i = WEB_CUBE_OFFSET;
    for b in 0..6u8 {
        for g in 0..6u8 {
            for r in 0..6u8 {
                palette[i] = [r * WEB_LEVEL_STEP, g * WEB_LEVEL_STEP, b * WEB_LEVEL_STEP];
                i += 1;
            }
        }
    }
    palette
}

/// Index of the web palette entry nearest to `rgb`.
///
/// The cube is axis-aligned, so the nearest entry is found per channel.
/// Black always maps into the cube (index 10), never to the black padding
/// entries 0-9; the displayed color is the same.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn web_palette_index(rgb: [u8; 3]) -> u8 {
    let level = |v: u8| (u16::from(v) + 25) / u16::from(WEB_LEVEL_STEP);
    let [r, g, b] = rgb.map(level);
    // At most 10 + 5 + 30 + 180 = 225.
    (WEB_CUBE_OFFSET as u16 + r + 6 * g + 36 * b) as u8
}

/// Builds the colorscale mapping `i / 255` to palette entry `i`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn colorscale(palette: &[[u8; 3]; PALETTE_SIZE]) -> Colorscale {
    let last = (PALETTE_SIZE - 1) as f32;
    Colorscale(
        palette
            .iter()
            .enumerate()
            .map(|(i, &[r, g, b])| (i as f32 / last, Color::from_rgb8(r, g, b)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use proptest::prelude::*;

    fn gradient(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 37 % 256) as u8, (y * 53 % 256) as u8, ((x + y) * 11 % 256) as u8])
        })
    }

    #[test]
    fn test_palette_layout() {
        let palette = web_palette();
        assert!(palette[..10].iter().all(|c| *c == [0, 0, 0]));
        assert_eq!(palette[10], [0, 0, 0]);
        assert_eq!(palette[11], [51, 0, 0]);
        assert_eq!(palette[16], [0, 51, 0]);
        assert_eq!(palette[46], [0, 0, 51]);
        assert_eq!(palette[225], [255, 255, 255]);
        assert!(palette[226..].iter().all(|c| *c == [0, 0, 0]));
    }

    #[test]
    fn test_exact_palette_colors_map_to_themselves() {
        let palette = web_palette();
        for (i, &rgb) in palette.iter().enumerate().skip(10).take(216) {
            assert_eq!(web_palette_index(rgb) as usize, i);
        }
    }

    #[test]
    fn test_nearest_level_rounding() {
        assert_eq!(web_palette_index([25, 0, 0]), 10);
        assert_eq!(web_palette_index([26, 0, 0]), 11);
        assert_eq!(web_palette_index([255, 255, 255]), 225);
        assert_eq!(web_palette_index([230, 128, 0]), 10 + 5 + 6 * 3);
    }

    #[test]
    fn test_black_maps_into_cube() {
        let palette = web_palette();
        let index = web_palette_index([0, 0, 0]) as usize;
        assert_eq!(index, 10);
        assert_eq!(palette[index], palette[0]);
    }

    #[test]
    fn test_colorscale_shape() {
        let scale = encode(&gradient(4, 3)).colorscale;
        assert_eq!(scale.len(), 256);
        assert_eq!(scale.stops()[0].0, 0.0);
        assert!((scale.stops()[255].0 - 1.0).abs() < 1e-6);
        assert!(scale.stops().windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(scale.stops()[11].1.to_string(), "rgb(51, 0, 0)");
    }

    #[test]
    fn test_encode_is_deterministic() {
        let image = gradient(17, 9);
        assert_eq!(encode(&image), encode(&image));
    }

    #[test]
    fn test_indexed_layout() {
        let mut image = RgbImage::new(2, 2);
        image.put_pixel(1, 0, Rgb([255, 0, 0]));
        image.put_pixel(0, 1, Rgb([0, 0, 255]));
        let encoded = encode(&image);

        assert_eq!(encoded.indexed.width(), 2);
        assert_eq!(encoded.indexed.height(), 2);
        assert_eq!(encoded.indexed.index(0, 0), 10);
        assert_eq!(encoded.indexed.index(1, 0), 15);
        assert_eq!(encoded.indexed.index(0, 1), 190);
        assert_eq!(encoded.indexed.indices(), &[10, 15, 190, 10]);
    }

    proptest! {
        #[test]
        fn prop_index_decodes_to_nearby_color(r: u8, g: u8, b: u8) {
            let palette = web_palette();
            let decoded = palette[web_palette_index([r, g, b]) as usize];
            for (orig, dec) in [r, g, b].iter().zip(decoded) {
                prop_assert!(orig.abs_diff(dec) <= 25);
            }
        }
    }
}
