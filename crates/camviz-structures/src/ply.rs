//! Shared PLY reading helpers.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use camviz_core::{CamvizError, Result};
use glam::Vec3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Ply, Property};

pub(crate) fn read_ply(path: &Path) -> Result<Ply<DefaultElement>> {
    let mut reader = BufReader::new(File::open(path)?);
    Parser::<DefaultElement>::new()
        .read_ply(&mut reader)
        .map_err(|e| CamvizError::load(path, e))
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub(crate) fn scalar(property: &Property) -> Option<f32> {
    Some(match *property {
        Property::Char(v) => f32::from(v),
        Property::UChar(v) => f32::from(v),
        Property::Short(v) => f32::from(v),
        Property::UShort(v) => f32::from(v),
        Property::Int(v) => v as f32,
        Property::UInt(v) => v as f32,
        Property::Float(v) => v,
        Property::Double(v) => v as f32,
        _ => return None,
    })
}

#[allow(clippy::cast_sign_loss)]
pub(crate) fn index_list(property: &Property) -> Option<Vec<u32>> {
    match property {
        Property::ListInt(v) => Some(v.iter().map(|&i| i as u32).collect()),
        Property::ListUInt(v) => Some(v.clone()),
        Property::ListShort(v) => Some(v.iter().map(|&i| i as u32).collect()),
        Property::ListUShort(v) => Some(v.iter().map(|&i| u32::from(i)).collect()),
        Property::ListUChar(v) => Some(v.iter().map(|&i| u32::from(i)).collect()),
        _ => None,
    }
}

pub(crate) fn vertex_positions(ply: &Ply<DefaultElement>, path: &Path) -> Result<Vec<Vec3>> {
    let vertices = ply
        .payload
        .get("vertex")
        .ok_or_else(|| CamvizError::load(path, "missing 'vertex' element"))?;
    vertices
        .iter()
        .map(|v| {
            let coord = |name: &str| {
                v.get(name)
                    .and_then(scalar)
                    .ok_or_else(|| CamvizError::load(path, format!("vertex without '{name}'")))
            };
            Ok(Vec3::new(coord("x")?, coord("y")?, coord("z")?))
        })
        .collect()
}

/// Decodes a color channel to 8 bits.
///
/// Floating point channels are taken as normalized to `[0, 1]`, integer
/// channels as already 8-bit; both are clamped.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn color_channel(property: &Property) -> Option<u8> {
    let unit = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Some(match *property {
        Property::UChar(v) => v,
        Property::Float(v) => unit(f64::from(v)),
        Property::Double(v) => unit(v),
        Property::Char(v) => v.clamp(0, i8::MAX) as u8,
        Property::Short(v) => v.clamp(0, 255) as u8,
        Property::UShort(v) => v.min(255) as u8,
        Property::Int(v) => v.clamp(0, 255) as u8,
        Property::UInt(v) => v.min(255) as u8,
        _ => return None,
    })
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Writes `contents` to `name` inside `dir`.
    pub fn write_temp(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}
