#![allow(dead_code)]
//! Playhead state and the single time-advance rule.

use crate::timeline::{scrub_to, Animation};

/// Transport state for one active clip.
///
/// `current_time` drives sampling while playing; `current_frame` is the
/// explicit scrub position used while paused. The two are reconciled only by
/// [`Playback::scrub`], which derives the time from the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Playback {
    /// Position in milliseconds from clip start.
    pub current_time: f32,
    /// Multiplier applied to advance deltas.
    pub speed: f32,
    pub playing: bool,
    /// Scrub position, authoritative while paused.
    pub current_frame: usize,
}

impl Default for Playback {
    fn default() -> Self {
        Playback {
            current_time: 0.0,
            speed: 1.0,
            playing: false,
            current_frame: 0,
        }
    }
}

impl Playback {
    pub fn play(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    /// Move the playhead back to the start of the clip (playing flag
    /// unchanged).
    pub fn rewind(&mut self) {
        self.current_time = 0.0;
        self.current_frame = 0;
    }

    /// Advance time by `dt_ms` scaled by speed. At or past the end of the
    /// clip a looping clip wraps by modulo and a one-shot clip clamps to the
    /// end and stops. A clip with no run time resets to 0 and stops.
    pub fn advance(&mut self, animation: &Animation, dt_ms: f32) {
        let total = animation.total_duration() as f32;
        if total <= 0.0 {
            self.current_time = 0.0;
            self.playing = false;
            return;
        }

        let mut time = self.current_time + dt_ms * self.speed;
        if time >= total {
            if animation.r#loop {
                time %= total;
            } else {
                time = total;
                self.playing = false;
            }
        }
        self.current_time = time;
    }

    /// Jump to a frame: stops playback, clamps the index into range, and
    /// derives the matching time so both position representations agree.
    pub fn scrub(&mut self, animation: &Animation, frame_index: usize) {
        let frame = frame_index.min(animation.frames.len().saturating_sub(1));
        self.playing = false;
        self.current_frame = frame;
        self.current_time = scrub_to(animation, frame);
    }
}
