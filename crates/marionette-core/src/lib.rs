#![allow(dead_code)]
//! Marionette Core (engine-agnostic)
//!
//! 2D skeletal puppet animation: transform algebra, forward kinematics,
//! a duration-weighted keyframe timeline, frame editing, and depth-sorted
//! compositing. The crate turns (skeleton, clip, character, time) into an
//! ordered draw list; rendering, input and UI live outside.

pub mod catalog;
pub mod character;
pub mod compositing;
pub mod document;
pub mod editing;
pub mod error;
pub mod playback;
pub mod skeleton;
pub mod stage;
pub mod timeline;
pub mod transform;

// Re-exports for consumers (renderers, editors)
pub use character::{generate_character, Character, PartAssignments};
pub use compositing::{
    build_draw_list, build_draw_list_into, DrawItem, DrawList, Part, PartCatalog, PartCategory,
};
pub use document::{export_animation, export_character, import_document, Document, FORMAT_VERSION};
pub use editing::{
    copy_frame, effective_transform, mirror_frame, paste_frame, reset_all_bones, reset_bone,
    set_bone_transform, set_frame_duration, FrameSnapshot, MirrorTable,
};
pub use error::PuppetError;
pub use playback::Playback;
pub use skeleton::{resolve_world_transforms, Bone, BoneOverrides, Skeleton, WorldTransformSet};
pub use stage::Stage;
pub use timeline::{
    locate, sample, scrub_to, total_duration, Animation, Frame, FrameCursor,
    DEFAULT_TOTAL_DURATION_MS,
};
pub use transform::{lerp, lerp_angle, lerp_vec2, normalize_angle, Transform2D, Vec2};
