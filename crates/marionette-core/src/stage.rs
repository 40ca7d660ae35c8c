#![allow(dead_code)]
//! Stage: data ownership and the per-tick pipeline behind one synchronous
//! facade (advance, sample, resolve, composite).
//!
//! Nothing in here reacts to mutation. Edits and commands only change owned
//! state; their effect shows up when the next tick (or an explicit resample)
//! rebuilds the outputs.

use rand::Rng;

use crate::character::{generate_character, Character};
use crate::compositing::{build_draw_list_into, DrawList, PartCatalog};
use crate::document::{self, Document};
use crate::editing::{self, FrameSnapshot, MirrorTable};
use crate::error::PuppetError;
use crate::playback::Playback;
use crate::skeleton::{resolve_world_transforms, BoneOverrides, Skeleton, WorldTransformSet};
use crate::timeline::{locate, sample, Animation};
use crate::transform::Transform2D;

/// Owns one rig, its current clip and character, and the per-tick outputs.
pub struct Stage {
    // Owned data
    skeleton: Skeleton,
    catalog: PartCatalog,
    mirror: MirrorTable,
    character: Character,
    animation: Option<Animation>,
    playback: Playback,

    // Per-tick outputs
    world: WorldTransformSet,
    draw_list: DrawList,
}

impl Stage {
    pub fn new(skeleton: Skeleton, character: Character, catalog: PartCatalog) -> Self {
        Stage {
            skeleton,
            catalog,
            mirror: MirrorTable::humanoid(),
            character,
            animation: None,
            playback: Playback::default(),
            world: WorldTransformSet::default(),
            draw_list: DrawList::default(),
        }
    }

    /// The bundled humanoid with its part library, the default character and
    /// the idle clip loaded, ready to tick.
    pub fn default_scene() -> Self {
        let mut stage = Stage::new(
            crate::catalog::humanoid_skeleton(),
            crate::catalog::default_character(),
            crate::catalog::standard_parts(),
        );
        stage.set_animation(Some(crate::catalog::idle_animation()));
        stage
    }

    // Accessors

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    /// World transforms from the most recent tick or resample.
    pub fn world(&self) -> &WorldTransformSet {
        &self.world
    }

    /// Draw list from the most recent tick or resample.
    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn current_time(&self) -> f32 {
        self.playback.current_time
    }

    pub fn current_frame(&self) -> usize {
        self.playback.current_frame
    }

    pub fn is_playing(&self) -> bool {
        self.playback.playing
    }

    // Transport commands

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn toggle_playing(&mut self) {
        self.playback.toggle();
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.playback.speed = speed;
    }

    /// Jump to a frame of the current clip: stops playback and keeps frame
    /// and time in step. Without a clip the playhead just returns to zero.
    pub fn scrub_to_frame(&mut self, frame_index: usize) {
        match &self.animation {
            Some(animation) => self.playback.scrub(animation, frame_index),
            None => {
                self.playback.pause();
                self.playback.rewind();
            }
        }
    }

    // Content swaps

    /// Swap the current clip in one step and rewind the playhead. The old
    /// clip never mixes into the new one's first sample.
    pub fn set_animation(&mut self, animation: Option<Animation>) {
        self.animation = animation;
        self.playback.rewind();
    }

    pub fn set_character(&mut self, character: Character) {
        self.character = character;
    }

    pub fn set_mirror_table(&mut self, mirror: MirrorTable) {
        self.mirror = mirror;
    }

    /// Replace the character with a random roll from the part library.
    pub fn randomize_character(&mut self, rng: &mut impl Rng) {
        self.character = generate_character(&self.skeleton, &self.catalog, rng);
    }

    pub fn assign_part(&mut self, bone_id: impl Into<String>, part_id: impl Into<String>) {
        self.character.assign_part(bone_id, part_id);
    }

    pub fn remove_part(&mut self, bone_id: &str) -> Option<String> {
        self.character.remove_part(bone_id)
    }

    // Tick pipeline

    /// Advance the playhead (while playing) and rebuild the outputs.
    /// Returns the draw list for this tick, ordered back to front.
    pub fn tick(&mut self, dt_ms: f32) -> &DrawList {
        if self.playback.playing {
            if let Some(animation) = &self.animation {
                self.playback.advance(animation, dt_ms);
            }
        }
        self.resample()
    }

    /// Rebuild pose, world transforms and the draw list from current state
    /// without advancing time.
    pub fn resample(&mut self) -> &DrawList {
        // 1) Pose: interpolated while playing, the scrub frame's raw
        //    overrides while paused, bind pose with no clip.
        let pose: BoneOverrides = match &self.animation {
            Some(animation) if self.playback.playing => {
                let cursor = locate(animation, self.playback.current_time);
                sample(animation, &self.skeleton, &cursor)
            }
            Some(animation) => animation
                .frames
                .get(self.playback.current_frame)
                .map(|frame| frame.bones.clone())
                .unwrap_or_default(),
            None => BoneOverrides::default(),
        };

        // 2) Forward kinematics over the whole rig.
        self.world = resolve_world_transforms(&self.skeleton, &pose);

        // 3) Composite into the reusable draw list buffer.
        build_draw_list_into(
            &mut self.draw_list,
            &self.skeleton,
            &self.world,
            &self.character.parts,
            &self.catalog,
        );
        &self.draw_list
    }

    // Frame editing on the current clip and scrub frame

    /// Snapshot the scrub frame's pose, or `None` without a clip.
    pub fn copy_frame(&self) -> Option<FrameSnapshot> {
        self.animation
            .as_ref()
            .map(|animation| editing::copy_frame(animation, self.playback.current_frame))
    }

    pub fn paste_frame(&mut self, snapshot: &FrameSnapshot) {
        if let Some(animation) = &mut self.animation {
            editing::paste_frame(animation, self.playback.current_frame, snapshot);
        }
    }

    pub fn mirror_frame(&mut self) {
        if let Some(animation) = &mut self.animation {
            editing::mirror_frame(animation, self.playback.current_frame, &self.mirror);
        }
    }

    pub fn reset_bone(&mut self, bone_id: &str) {
        if let Some(animation) = &mut self.animation {
            editing::reset_bone(animation, self.playback.current_frame, &self.skeleton, bone_id);
        }
    }

    pub fn reset_all_bones(&mut self) {
        if let Some(animation) = &mut self.animation {
            editing::reset_all_bones(animation, self.playback.current_frame);
        }
    }

    pub fn set_bone_transform(&mut self, bone_id: &str, transform: Transform2D) {
        if let Some(animation) = &mut self.animation {
            editing::set_bone_transform(
                animation,
                self.playback.current_frame,
                bone_id,
                transform,
            );
        }
    }

    pub fn set_frame_duration(&mut self, frame_index: usize, duration_ms: u32) {
        if let Some(animation) = &mut self.animation {
            editing::set_frame_duration(animation, frame_index, duration_ms);
        }
    }

    /// The transform a bone shows at the scrub frame: override, else bind
    /// pose. Falls back to the bind pose when no clip is loaded.
    pub fn effective_transform(&self, bone_id: &str) -> Option<Transform2D> {
        match &self.animation {
            Some(animation) => editing::effective_transform(
                animation,
                self.playback.current_frame,
                &self.skeleton,
                bone_id,
            ),
            None => self
                .skeleton
                .bones
                .get(bone_id)
                .map(|bone| bone.local_transform),
        }
    }

    // Documents

    /// Parse a document and apply it: a character replaces the current one,
    /// an animation becomes the current clip with the playhead rewound.
    pub fn import(&mut self, json: &str) -> Result<(), PuppetError> {
        match document::import_document(json)? {
            Document::Character(character) => self.character = character,
            Document::Animation(animation) => self.set_animation(Some(animation)),
        }
        Ok(())
    }

    pub fn export_character(&self) -> Result<String, PuppetError> {
        document::export_character(&self.character)
    }

    /// Export the current clip; fails with `MissingPayload` when none is
    /// loaded.
    pub fn export_animation(&self) -> Result<String, PuppetError> {
        match &self.animation {
            Some(animation) => document::export_animation(animation),
            None => Err(PuppetError::MissingPayload),
        }
    }
}
