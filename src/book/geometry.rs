//! Page mesh: a thin box subdivided along its width, spine at x = 0, with
//! skin attributes binding each vertex to the page's joint chain.

use glam::{Vec2, Vec3};

use crate::options::BookOptions;
use crate::skeleton::{compute_skin, SkinAttributes};

/// Box faces in material-slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageFace {
    /// Free edge (+x).
    FreeEdge,
    /// Spine edge (-x).
    SpineEdge,
    /// Top edge (+y).
    Top,
    /// Bottom edge (-y).
    Bottom,
    /// Front picture (+z).
    Front,
    /// Back picture (-z).
    Back,
}

impl PageFace {
    /// All faces in material-slot order.
    pub const ALL: [PageFace; 6] = [
        PageFace::FreeEdge,
        PageFace::SpineEdge,
        PageFace::Top,
        PageFace::Bottom,
        PageFace::Front,
        PageFace::Back,
    ];

    /// Material slot the host binds for this face.
    pub fn material_index(self) -> usize {
        self as usize
    }

    /// Whether the face carries a picture (and the hover highlight).
    pub fn is_picture(self) -> bool {
        matches!(self, PageFace::Front | PageFace::Back)
    }
}

/// Index range drawn with one face's material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGroup {
    /// Which face.
    pub face: PageFace,
    /// First index into [`PageGeometry::indices`].
    pub start: usize,
    /// Number of indices.
    pub count: usize,
}

/// Skinned page mesh shared by every page of a book.
#[derive(Debug, Clone, Default)]
pub struct PageGeometry {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Outward face normals.
    pub normals: Vec<Vec3>,
    /// Texture coordinates, per face in `[0, 1]²`.
    pub uvs: Vec<Vec2>,
    /// Triangle list, counter-clockwise seen from outside.
    pub indices: Vec<u32>,
    /// Per-face index ranges.
    pub groups: Vec<FaceGroup>,
    /// Joint influences per vertex.
    pub skin: Vec<SkinAttributes>,
}

impl PageGeometry {
    /// Build the mesh for the configured page size and resolution.
    pub fn new(options: &BookOptions) -> Self {
        let w = options.page_width;
        let h = options.page_height;
        let d = options.page_depth;
        let half_h = h * 0.5;
        let half_d = d * 0.5;
        let across = options.page_segments.max(1);
        let down = options.height_segments.max(1);

        let mut geometry = Self::default();
        for face in PageFace::ALL {
            // (origin, u span, v span, u cells, v cells); u × v is outward.
            let (origin, u, v, cells_u, cells_v) = match face {
                PageFace::FreeEdge => (
                    Vec3::new(w, -half_h, half_d),
                    Vec3::new(0.0, 0.0, -d),
                    Vec3::new(0.0, h, 0.0),
                    1,
                    down,
                ),
                PageFace::SpineEdge => (
                    Vec3::new(0.0, -half_h, -half_d),
                    Vec3::new(0.0, 0.0, d),
                    Vec3::new(0.0, h, 0.0),
                    1,
                    down,
                ),
                PageFace::Top => (
                    Vec3::new(0.0, half_h, half_d),
                    Vec3::new(w, 0.0, 0.0),
                    Vec3::new(0.0, 0.0, -d),
                    across,
                    1,
                ),
                PageFace::Bottom => (
                    Vec3::new(0.0, -half_h, -half_d),
                    Vec3::new(w, 0.0, 0.0),
                    Vec3::new(0.0, 0.0, d),
                    across,
                    1,
                ),
                PageFace::Front => (
                    Vec3::new(0.0, -half_h, half_d),
                    Vec3::new(w, 0.0, 0.0),
                    Vec3::new(0.0, h, 0.0),
                    across,
                    down,
                ),
                PageFace::Back => (
                    Vec3::new(w, -half_h, -half_d),
                    Vec3::new(-w, 0.0, 0.0),
                    Vec3::new(0.0, h, 0.0),
                    across,
                    down,
                ),
            };
            geometry.push_face(face, origin, u, v, cells_u, cells_v);
        }

        geometry.skin = compute_skin(
            &geometry.positions,
            options.segment_width(),
            options.joint_count(),
        );
        geometry
    }

    fn push_face(
        &mut self,
        face: PageFace,
        origin: Vec3,
        u: Vec3,
        v: Vec3,
        cells_u: usize,
        cells_v: usize,
    ) {
        let normal = u.cross(v).normalize_or_zero();
        let base = self.positions.len() as u32;
        let start = self.indices.len();
        let row = cells_u as u32 + 1;

        for j in 0..=cells_v {
            for i in 0..=cells_u {
                let s = i as f32 / cells_u as f32;
                let t = j as f32 / cells_v as f32;
                self.positions.push(origin + u * s + v * t);
                self.normals.push(normal);
                self.uvs.push(Vec2::new(s, t));
            }
        }

        for j in 0..cells_v as u32 {
            for i in 0..cells_u as u32 {
                let a = base + j * row + i;
                let b = a + 1;
                let c = a + row + 1;
                let d = a + row;
                self.indices.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }

        self.groups.push(FaceGroup {
            face,
            start,
            count: self.indices.len() - start,
        });
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Index range for `face`.
    pub fn group(&self, face: PageFace) -> Option<&FaceGroup> {
        self.groups.iter().find(|g| g.face == face)
    }
}
