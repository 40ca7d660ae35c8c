#![allow(dead_code)]
//! Frame editing operations: copy, paste, mirror, reset, and the single-bone
//! write they are all built on. Every operation targets one frame of one
//! clip and leaves the frame list's length untouched; out-of-range frame
//! indices make the operation a no-op.

use crate::skeleton::{BoneOverrides, Skeleton};
use crate::timeline::Animation;
use crate::transform::Transform2D;

/// Deep copy of one frame's sparse pose, as taken by [`copy_frame`].
pub type FrameSnapshot = BoneOverrides;

/// Left/right bone pairing used by [`mirror_frame`]. Ids not listed mirror
/// onto themselves.
#[derive(Clone, Debug, Default)]
pub struct MirrorTable {
    pairs: Vec<(String, String)>,
}

impl MirrorTable {
    /// Build a table from symmetric pairs; each pair registers both
    /// directions.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut table = MirrorTable::default();
        for (left, right) in pairs {
            let (left, right) = (left.into(), right.into());
            table.pairs.push((left.clone(), right.clone()));
            table.pairs.push((right, left));
        }
        table
    }

    /// The standard humanoid pairing: arms, hands, legs, feet.
    pub fn humanoid() -> Self {
        MirrorTable::from_pairs([
            ("arm_left", "arm_right"),
            ("hand_left", "hand_right"),
            ("leg_left", "leg_right"),
            ("foot_left", "foot_right"),
        ])
    }

    /// The bone an override lands on when the frame is mirrored.
    pub fn mirror_of<'a>(&'a self, bone_id: &'a str) -> &'a str {
        self.pairs
            .iter()
            .find(|(from, _)| from.as_str() == bone_id)
            .map(|(_, to)| to.as_str())
            .unwrap_or(bone_id)
    }
}

/// Deep-copy the pose stored in a frame (empty if out of range).
pub fn copy_frame(animation: &Animation, frame_index: usize) -> FrameSnapshot {
    animation
        .frames
        .get(frame_index)
        .map(|frame| frame.bones.clone())
        .unwrap_or_default()
}

/// Replace a frame's pose wholesale with a copy of the snapshot.
pub fn paste_frame(animation: &mut Animation, frame_index: usize, snapshot: &FrameSnapshot) {
    if let Some(frame) = animation.frames.get_mut(frame_index) {
        frame.bones = snapshot.clone();
    }
}

/// Swap a frame's overrides across the left/right pairing, negating x
/// positions and rotations. The mirrored set replaces the pose wholesale, so
/// a bone keyed before the remap but not after it loses its override.
pub fn mirror_frame(animation: &mut Animation, frame_index: usize, table: &MirrorTable) {
    if let Some(frame) = animation.frames.get_mut(frame_index) {
        let mut mirrored = FrameSnapshot::with_capacity(frame.bones.len());
        for (bone_id, transform) in &frame.bones {
            let mut flipped = *transform;
            flipped.position.x = -flipped.position.x;
            flipped.rotation = -flipped.rotation;
            mirrored.insert(table.mirror_of(bone_id).to_string(), flipped);
        }
        frame.bones = mirrored;
    }
}

/// Write the bind pose as an explicit override for one bone, keeping the
/// bone keyed in the frame. Unknown bone ids are ignored.
pub fn reset_bone(
    animation: &mut Animation,
    frame_index: usize,
    skeleton: &Skeleton,
    bone_id: &str,
) {
    if let Some(bone) = skeleton.bones.get(bone_id) {
        set_bone_transform(animation, frame_index, bone_id, bone.local_transform);
    }
}

/// Drop every override in the frame; all bones return to the bind pose.
pub fn reset_all_bones(animation: &mut Animation, frame_index: usize) {
    if let Some(frame) = animation.frames.get_mut(frame_index) {
        frame.bones.clear();
    }
}

/// Key one bone in one frame. The write primitive underneath the other
/// editing operations and interactive posing.
pub fn set_bone_transform(
    animation: &mut Animation,
    frame_index: usize,
    bone_id: &str,
    transform: Transform2D,
) {
    if let Some(frame) = animation.frames.get_mut(frame_index) {
        frame.bones.insert(bone_id.to_string(), transform);
    }
}

/// Change how long a frame holds, in milliseconds.
pub fn set_frame_duration(animation: &mut Animation, frame_index: usize, duration_ms: u32) {
    if let Some(frame) = animation.frames.get_mut(frame_index) {
        frame.duration = duration_ms;
    }
}

/// The transform a bone shows in a frame: its override if keyed, else the
/// bind pose. `None` when the skeleton has no such bone.
pub fn effective_transform(
    animation: &Animation,
    frame_index: usize,
    skeleton: &Skeleton,
    bone_id: &str,
) -> Option<Transform2D> {
    let bone = skeleton.bones.get(bone_id)?;
    Some(
        animation
            .frames
            .get(frame_index)
            .and_then(|frame| frame.bones.get(bone_id))
            .copied()
            .unwrap_or(bone.local_transform),
    )
}
