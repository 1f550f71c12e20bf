//! Triangle meshes shown alongside the cameras.

use std::path::Path;

use camviz_core::{CamvizError, Color, MeshTrace, Result};
use glam::Vec3;

use crate::ply;

/// An immutable triangle mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Creates a mesh, checking that every face index is in range.
    pub fn new(vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Result<Self> {
        let n = vertices.len();
        if let Some(bad) = faces.iter().flatten().find(|&&i| i as usize >= n) {
            return Err(CamvizError::InvalidInput(format!(
                "face index {bad} out of range for {n} vertices"
            )));
        }
        Ok(Self { vertices, faces })
    }

    /// Loads a mesh from an `.obj` or `.ply` file.
    ///
    /// Returns `Ok(None)` when `path` does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            log::warn!("mesh file {} not found, skipping", path.display());
            return Ok(None);
        }
        let mesh = match extension(path).as_deref() {
            Some("obj") => Self::load_obj(path)?,
            Some("ply") => Self::load_ply(path)?,
            _ => return Err(CamvizError::load(path, "unsupported mesh format")),
        };
        log::info!(
            "loaded mesh {} ({} vertices, {} faces)",
            path.display(),
            mesh.num_vertices(),
            mesh.num_faces()
        );
        Ok(Some(mesh))
    }

    fn load_obj(path: &Path) -> Result<Self> {
        let (models, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|e| CamvizError::load(path, e))?;

        let mut vertices = Vec::new();
        let mut faces = Vec::new();
        for model in models {
            let mesh = model.mesh;
            let vertex_offset = vertices.len() as u32;
            vertices.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            faces.extend(mesh.indices.chunks_exact(3).map(|f| {
                [
                    f[0] + vertex_offset,
                    f[1] + vertex_offset,
                    f[2] + vertex_offset,
                ]
            }));
        }
        Self::new(vertices, faces)
    }

    fn load_ply(path: &Path) -> Result<Self> {
        let ply = ply::read_ply(path)?;
        let vertices = ply::vertex_positions(&ply, path)?;

        let mut faces = Vec::new();
        for face in ply.payload.get("face").into_iter().flatten() {
            let polygon = face
                .get("vertex_indices")
                .or_else(|| face.get("vertex_index"))
                .and_then(ply::index_list)
                .ok_or_else(|| CamvizError::load(path, "face without vertex indices"))?;
            // Fan triangulation for polygons.
            for i in 1..polygon.len().saturating_sub(1) {
                faces.push([polygon[0], polygon[i], polygon[i + 1]]);
            }
        }
        Self::new(vertices, faces)
    }

    /// Returns the vertices.
    #[must_use]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the triangles.
    #[must_use]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Builds the mesh trace, with vertices shifted along Z then uniformly scaled.
    #[must_use]
    pub fn to_trace(&self, z_shift: f32, scale: f32) -> MeshTrace {
        MeshTrace {
            name: "mesh".to_string(),
            vertices: shift_and_scale(&self.vertices, z_shift, scale),
            faces: self.faces.clone(),
            color: Color::new(0.7, 0.7, 0.7),
            show_legend: false,
        }
    }
}

/// Applies `p' = (p + (0, 0, z_shift)) * scale` to every point.
pub fn shift_and_scale(points: &[Vec3], z_shift: f32, scale: f32) -> Vec<Vec3> {
    let shift = Vec3::new(0.0, 0.0, z_shift);
    points.iter().map(|&p| (p + shift) * scale).collect()
}

pub(crate) fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}
