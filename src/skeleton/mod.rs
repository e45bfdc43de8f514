//! Page skeleton: the joint chain a page mesh is skinned to, and the
//! per-vertex skin assignment that binds the mesh to it.

mod chain;
pub mod skinning;

pub use chain::{Joint, JointChain};
pub use skinning::{compute_skin, deform, SkinAttributes, SkinnedVertices};
