//! Static skin assignment along a page's long axis and CPU linear-blend
//! skinning.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Per-vertex joint influences, laid out for direct GPU upload.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SkinAttributes {
    /// Joint indices. Unused slots point at joint 0 with zero weight.
    pub indices: [u16; 4],
    /// Joint weights; the used slots sum to 1.
    pub weights: [f32; 4],
}

impl SkinAttributes {
    /// Influences for a vertex at offset `x` from the spine.
    ///
    /// The vertex blends between joint `floor(x / segment_width)` and the
    /// next one by its fractional position inside the segment. Indices clamp
    /// to the chain, so the free edge binds fully to the last joint.
    pub fn for_offset(x: f32, segment_width: f32, joint_count: usize) -> Self {
        let last = joint_count.saturating_sub(1);
        if segment_width <= 0.0 || !x.is_finite() {
            return Self::rigid(0);
        }

        let base = (x / segment_width).floor().max(0.0) as usize;
        let frac = (x.rem_euclid(segment_width) / segment_width).clamp(0.0, 1.0);
        if base >= last {
            return Self::rigid(last);
        }
        Self {
            indices: [base as u16, (base + 1) as u16, 0, 0],
            weights: [1.0 - frac, frac, 0.0, 0.0],
        }
    }

    /// Bound entirely to one joint.
    pub fn rigid(joint: usize) -> Self {
        Self {
            indices: [joint as u16, 0, 0, 0],
            weights: [1.0, 0.0, 0.0, 0.0],
        }
    }
}

/// Skin attributes for every position, keyed on its x coordinate.
pub fn compute_skin(
    positions: &[Vec3],
    segment_width: f32,
    joint_count: usize,
) -> Vec<SkinAttributes> {
    positions
        .iter()
        .map(|p| SkinAttributes::for_offset(p.x, segment_width, joint_count))
        .collect()
}

/// Deformed positions and normals.
#[derive(Debug, Clone, Default)]
pub struct SkinnedVertices {
    /// Transformed positions.
    pub positions: Vec<Vec3>,
    /// Transformed, renormalized normals.
    pub normals: Vec<Vec3>,
}

/// Linear-blend skinning on the CPU.
///
/// `matrices` are skinning matrices (world × inverse bind). Slices shorter
/// than `positions` are treated as missing data: those vertices pass through
/// untouched.
pub fn deform(
    positions: &[Vec3],
    normals: &[Vec3],
    skin: &[SkinAttributes],
    matrices: &[Mat4],
) -> SkinnedVertices {
    let mut out = SkinnedVertices {
        positions: Vec::with_capacity(positions.len()),
        normals: Vec::with_capacity(normals.len()),
    };

    for (i, &position) in positions.iter().enumerate() {
        let normal = normals.get(i).copied().unwrap_or(Vec3::ZERO);
        let Some(attrs) = skin.get(i) else {
            out.positions.push(position);
            out.normals.push(normal);
            continue;
        };

        let mut pos = Vec3::ZERO;
        let mut norm = Vec3::ZERO;
        for (&joint, &weight) in attrs.indices.iter().zip(&attrs.weights) {
            if weight == 0.0 {
                continue;
            }
            let m = matrices
                .get(usize::from(joint))
                .copied()
                .unwrap_or(Mat4::IDENTITY);
            pos += m.transform_point3(position) * weight;
            norm += m.transform_vector3(normal) * weight;
        }
        out.positions.push(pos);
        out.normals.push(norm.normalize_or_zero());
    }
    out
}
