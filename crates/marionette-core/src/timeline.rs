#![allow(dead_code)]
//! Keyframe timeline: clips made of duration-weighted frames.
//!
//! A frame holds for its own duration rather than a share of a fixed rate,
//! and poses only the bones it keys. Sampling is two-step: `locate` maps a
//! time to a pair of frames plus progress, `sample` blends that pair into a
//! total per-bone pose for a skeleton.

use serde::{Deserialize, Serialize};

use crate::error::PuppetError;
use crate::skeleton::{BoneOverrides, Skeleton};
use crate::transform::Transform2D;

/// Assumed clip length in milliseconds when no animation is loaded.
pub const DEFAULT_TOTAL_DURATION_MS: u32 = 400;

/// One keyframe: how long it holds and which bones it poses.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    pub index: usize,
    /// Hold time in milliseconds.
    pub duration: u32,
    /// Sparse pose: bones not keyed here fall back to the bind pose.
    #[serde(default)]
    pub bones: BoneOverrides,
}

/// A looping or one-shot clip authored against a named skeleton.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Animation {
    pub id: String,
    pub name: String,
    #[serde(rename = "skeletonId")]
    pub skeleton_id: String,
    #[serde(rename = "loop", default)]
    pub r#loop: bool,
    pub frames: Vec<Frame>,
}

impl Animation {
    /// Sum of all frame durations in milliseconds (0 for an empty clip).
    pub fn total_duration(&self) -> u32 {
        self.frames.iter().map(|frame| frame.duration).sum()
    }

    /// Check clip invariants: at least one frame, positive durations,
    /// `index` fields matching sequence order.
    pub fn validate_basic(&self) -> Result<(), PuppetError> {
        if self.frames.is_empty() {
            return Err(PuppetError::invalid("animation", "clip has no frames"));
        }
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.index != i {
                return Err(PuppetError::invalid(
                    "animation",
                    format!("frame at position {i} carries index {}", frame.index),
                ));
            }
            if frame.duration == 0 {
                return Err(PuppetError::invalid(
                    "animation",
                    format!("frame {i} has zero duration"),
                ));
            }
        }
        Ok(())
    }
}

/// Where a point in time falls: the frame holding it, the frame being
/// blended toward, and the normalized progress between the two.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameCursor {
    pub current: usize,
    pub next: usize,
    pub progress: f32,
}

/// Map a time in milliseconds to the frame cursor holding it.
///
/// Defined for any input: negative time clamps to 0, time at or past the end
/// of the clip rests on the first frame boundary, and an empty clip yields
/// the zero cursor. The next frame wraps around the clip, so the last frame
/// blends toward the first.
pub fn locate(animation: &Animation, time_ms: f32) -> FrameCursor {
    let frames = &animation.frames;
    if frames.is_empty() {
        return FrameCursor::default();
    }

    let time = time_ms.max(0.0);
    let mut start = 0.0_f32;
    for (i, frame) in frames.iter().enumerate() {
        let end = start + frame.duration as f32;
        if time < end {
            return FrameCursor {
                current: i,
                next: (i + 1) % frames.len(),
                progress: (time - start) / frame.duration as f32,
            };
        }
        start = end;
    }

    FrameCursor {
        current: 0,
        next: 1 % frames.len(),
        progress: 0.0,
    }
}

/// Blend the cursor's two frames into a total pose over `skeleton`'s bones.
/// Each endpoint falls back to the bind pose for bones it does not key, so
/// a bone keyed in only one frame still animates toward its rest placement.
pub fn sample(animation: &Animation, skeleton: &Skeleton, cursor: &FrameCursor) -> BoneOverrides {
    let from = animation.frames.get(cursor.current);
    let to = animation.frames.get(cursor.next);

    let mut pose = BoneOverrides::with_capacity(skeleton.bones.len());
    for (bone_id, bone) in &skeleton.bones {
        let a = from
            .and_then(|frame| frame.bones.get(bone_id))
            .unwrap_or(&bone.local_transform);
        let b = to
            .and_then(|frame| frame.bones.get(bone_id))
            .unwrap_or(&bone.local_transform);
        pose.insert(bone_id.clone(), Transform2D::lerp(a, b, cursor.progress));
    }
    pose
}

/// Total duration of an optional clip; an absent clip reports
/// `DEFAULT_TOTAL_DURATION_MS`.
pub fn total_duration(animation: Option<&Animation>) -> u32 {
    match animation {
        Some(animation) => animation.total_duration(),
        None => DEFAULT_TOTAL_DURATION_MS,
    }
}

/// Time in milliseconds at which `frame_index` begins: the prefix sum of the
/// preceding frame durations. Saturates past the end of the clip.
pub fn scrub_to(animation: &Animation, frame_index: usize) -> f32 {
    animation
        .frames
        .iter()
        .take(frame_index)
        .map(|frame| frame.duration)
        .sum::<u32>() as f32
}
