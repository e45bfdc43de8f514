//! Linear joint chain stored as an arena indexed by chain position.

use glam::{EulerRot, Mat4, Quat, Vec3};

/// One joint of a page chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joint {
    /// Parent joint index; `None` for the root.
    pub parent: Option<usize>,
    /// Rest offset from the parent, in the parent's local frame.
    pub offset: Vec3,
    /// Rotation about the local y axis (radians).
    pub bend: f32,
    /// Rotation about the local x axis (radians).
    pub fold: f32,
}

impl Joint {
    /// Local rotation, x (fold) applied after y (bend) in XYZ order.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.fold, self.bend, 0.0)
    }

    /// Local transform relative to the parent.
    pub fn local_transform(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.offset)
    }
}

/// Chain of `segments + 1` joints. Joint 0 is the root at the page pivot;
/// joint `i` hangs off joint `i - 1`, one segment width along +x.
#[derive(Debug, Clone)]
pub struct JointChain {
    joints: Vec<Joint>,
    segment_width: f32,
    /// Inverse of each joint's rest world transform (root at identity).
    inverse_bind: Vec<Mat4>,
}

impl JointChain {
    /// Build a flat chain for a page split into `segments` rigid pieces.
    pub fn new(segments: usize, segment_width: f32) -> Self {
        let joints: Vec<Joint> = (0..=segments)
            .map(|i| Joint {
                parent: i.checked_sub(1),
                offset: if i == 0 {
                    Vec3::ZERO
                } else {
                    Vec3::new(segment_width, 0.0, 0.0)
                },
                bend: 0.0,
                fold: 0.0,
            })
            .collect();

        let mut chain = Self {
            joints,
            segment_width,
            inverse_bind: Vec::new(),
        };
        chain.inverse_bind = chain
            .world_transforms(Mat4::IDENTITY)
            .iter()
            .map(Mat4::inverse)
            .collect();
        chain
    }

    /// Number of joints.
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Whether the chain has no joints.
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Distance between consecutive joints.
    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// All joints in chain order.
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    /// Joint at `index`.
    pub fn joint(&self, index: usize) -> Option<&Joint> {
        self.joints.get(index)
    }

    /// Mutable joint at `index`.
    pub fn joint_mut(&mut self, index: usize) -> Option<&mut Joint> {
        self.joints.get_mut(index)
    }

    /// Mutable access to every joint.
    pub fn joints_mut(&mut self) -> &mut [Joint] {
        &mut self.joints
    }

    /// Zero every bend and fold.
    pub fn reset_pose(&mut self) {
        for joint in &mut self.joints {
            joint.bend = 0.0;
            joint.fold = 0.0;
        }
    }

    /// World transform of every joint, composed top-down from `root`.
    ///
    /// Parents always precede children in the arena, so one forward pass
    /// suffices.
    pub fn world_transforms(&self, root: Mat4) -> Vec<Mat4> {
        let mut world: Vec<Mat4> = Vec::with_capacity(self.joints.len());
        for joint in &self.joints {
            let parent = joint
                .parent
                .and_then(|p| world.get(p).copied())
                .unwrap_or(root);
            world.push(parent * joint.local_transform());
        }
        world
    }

    /// Skinning matrices (`world * inverse_bind`) for the current pose.
    pub fn skinning_matrices(&self, root: Mat4) -> Vec<Mat4> {
        self.world_transforms(root)
            .into_iter()
            .zip(&self.inverse_bind)
            .map(|(world, inverse_bind)| world * *inverse_bind)
            .collect()
    }

    /// World-space joint positions for the current pose.
    pub fn joint_positions(&self, root: Mat4) -> Vec<Vec3> {
        self.world_transforms(root)
            .iter()
            .map(|m| m.w_axis.truncate())
            .collect()
    }
}
