use anyhow::{bail, Context, Result};
use glam::{Mat3, Mat4, Vec3};
use std::path::Path;

use crate::crystal_rig::FaceGroup;
use crate::types::MeshVertex;

/// The five sub-parts of the logo model, in scene-node order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartKind {
    Bitcoin,
    XPart,
    BitcoinLine,
    Arrow,
    XPartLine,
}

/// Which shading path a part takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Translucent dark glass
    Glass,
    /// Emissive pink outline
    Line,
}

impl PartKind {
    const NODE_ORDER: [PartKind; 5] = [
        PartKind::Bitcoin,
        PartKind::XPart,
        PartKind::BitcoinLine,
        PartKind::Arrow,
        PartKind::XPartLine,
    ];

    pub fn material(self) -> MaterialKind {
        match self {
            Self::Bitcoin | Self::XPart => MaterialKind::Glass,
            Self::BitcoinLine | Self::Arrow | Self::XPartLine => MaterialKind::Line,
        }
    }

    /// Face group this part belongs to; groups toggle visibility as the
    /// model rotates
    pub fn group(self) -> FaceGroup {
        match self {
            Self::Bitcoin | Self::BitcoinLine => FaceGroup::Front,
            Self::XPart | Self::XPartLine | Self::Arrow => FaceGroup::Back,
        }
    }

    /// Hand-tuned non-uniform scale aligning the parts visually
    pub fn scale(self) -> Vec3 {
        match self {
            Self::Bitcoin | Self::BitcoinLine => Vec3::new(1.52, 1.52, 1.0),
            Self::XPart | Self::XPartLine | Self::Arrow => Vec3::new(1.5, 1.5, 1.0),
        }
    }
}

/// One sub-part's geometry, with node transform and part scale baked in
#[derive(Debug)]
pub struct LogoPart {
    pub kind: PartKind,
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

#[derive(Debug)]
pub struct LogoModel {
    pub parts: Vec<LogoPart>,
}

/// Load the logo model. The glTF scene is expected to carry the five
/// sub-parts as its top-level nodes in the order of [`PartKind::NODE_ORDER`].
pub fn load_model(path: impl AsRef<Path>) -> Result<LogoModel> {
    let path = path.as_ref();
    let (document, buffers, _images) =
        gltf::import(path).with_context(|| format!("failed to load model {:?}", path))?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .with_context(|| format!("model {:?} has no scene", path))?;

    let mut parts = Vec::new();

    for (index, node) in scene.nodes().flat_map(collect_mesh_nodes).enumerate() {
        let Some(&kind) = PartKind::NODE_ORDER.get(index) else {
            log::warn!("model {:?} has more than 5 sub-parts, extras ignored", path);
            break;
        };

        let transform = Mat4::from_cols_array_2d(&node.transform().matrix())
            * Mat4::from_scale(kind.scale());
        let part = extract_part(&node, &buffers, kind, transform)
            .with_context(|| format!("failed to read sub-part {:?} of {:?}", kind, path))?;
        parts.push(part);
    }

    if parts.len() != PartKind::NODE_ORDER.len() {
        bail!(
            "model {:?} has {} sub-parts, expected {}",
            path,
            parts.len(),
            PartKind::NODE_ORDER.len()
        );
    }

    log::info!("loaded model {:?} ({} sub-parts)", path, parts.len());
    Ok(LogoModel { parts })
}

/// Depth-first traversal yielding nodes that carry a mesh
fn collect_mesh_nodes(node: gltf::Node<'_>) -> Vec<gltf::Node<'_>> {
    let mut out = Vec::new();
    if node.mesh().is_some() {
        out.push(node.clone());
    }
    for child in node.children() {
        out.extend(collect_mesh_nodes(child));
    }
    out
}

fn extract_part(
    node: &gltf::Node<'_>,
    buffers: &[gltf::buffer::Data],
    kind: PartKind,
    transform: Mat4,
) -> Result<LogoPart> {
    let mesh = node.mesh().context("node has no mesh")?;
    // Non-uniform scale: normals transform by the inverse transpose
    let normal_matrix = Mat3::from_mat4(transform).inverse().transpose();

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for primitive in mesh.primitives() {
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
        let positions: Vec<Vec3> = reader
            .read_positions()
            .context("mesh primitive has no positions")?
            .map(Vec3::from_array)
            .collect();
        let normals: Option<Vec<Vec3>> = reader
            .read_normals()
            .map(|iter| iter.map(Vec3::from_array).collect());

        let base = vertices.len() as u32;
        for (i, &position) in positions.iter().enumerate() {
            let normal = normals
                .as_ref()
                .map_or(Vec3::Z, |n| n[i]);
            vertices.push(MeshVertex {
                position: transform.transform_point3(position).to_array(),
                normal: (normal_matrix * normal).normalize_or_zero().to_array(),
            });
        }

        match reader.read_indices() {
            Some(read) => indices.extend(read.into_u32().map(|i| base + i)),
            // Unindexed primitive: treat as a plain triangle list
            None => indices.extend(base..base + positions.len() as u32),
        }
    }

    Ok(LogoPart {
        kind,
        vertices,
        indices,
    })
}
