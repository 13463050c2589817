//! Animation sink surface.
//!
//! The behaviour code does not drive clips directly; it emits
//! [`AnimationDirective`]s and the channel records them, reporting the
//! currently playing clip back so directives are only issued on an actual
//! clip change. Blending and playback belong to the engine's animation
//! player, not to this crate.
use bevy::prelude::*;
use log::debug;
use serde::Serialize;

/// A request for the animation player: which clip to play and how.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationDirective {
    /// Name of the clip to cross-fade to.
    pub clip: &'static str,
    /// Whether the clip repeats once it finishes.
    pub looped: bool,
    /// Cross-fade duration from the previous clip, in seconds.
    pub blend_time: f32,
    /// Playback speed multiplier.
    pub speed: f32,
}

/// Per-character animation channel.
#[derive(Component, Debug, Default, Serialize)]
pub struct AnimationChannel {
    current: Option<&'static str>,
    looped: bool,
    speed: f32,
    blend_time: f32,
    transitions: u32,
}

impl AnimationChannel {
    /// Name of the clip currently playing, if any clip was ever selected.
    pub fn current_clip(&self) -> Option<&'static str> {
        self.current
    }

    /// Number of clip changes applied since the channel was created.
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    /// Applies a directive, making its clip the current one.
    pub fn play(&mut self, directive: AnimationDirective) {
        debug!(
            "animation transition to {:?} (loop: {}, blend: {}s)",
            directive.clip, directive.looped, directive.blend_time
        );
        self.current = Some(directive.clip);
        self.looped = directive.looped;
        self.speed = directive.speed;
        self.blend_time = directive.blend_time;
        self.transitions += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_directive() -> AnimationDirective {
        AnimationDirective {
            clip: "Walk",
            looped: true,
            blend_time: 0.5,
            speed: 1.0,
        }
    }

    #[test]
    fn channel_starts_without_a_clip() {
        let channel = AnimationChannel::default();
        assert_eq!(channel.current_clip(), None);
        assert_eq!(channel.transitions(), 0);
    }

    #[test]
    fn play_records_the_directive() {
        let mut channel = AnimationChannel::default();
        channel.play(walk_directive());
        assert_eq!(channel.current_clip(), Some("Walk"));
        assert_eq!(channel.transitions(), 1);
    }
}
