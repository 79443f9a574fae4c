//! Animation component: sprite-sheet animation state

use crate::ecs::{Component, ComponentKind, EntityId};

/// Number of clip slots per animation component
pub const MAX_ANIMATION_CLIPS: usize = 8;

/// One animation: a run of frames on a sprite-sheet row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip {
    /// Sprite-sheet row the clip reads
    pub row: u32,

    /// Number of frames in the clip
    pub frame_count: u32,

    /// Seconds each frame stays on screen
    pub frame_time: f32,
}

/// Playback state over a fixed set of clip slots.
///
/// The animation system advances `elapsed`/`current_frame` each frame and
/// the renderer maps the current frame back to a sheet cell; the core only
/// stores the state.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationComponent {
    entity: EntityId,

    /// Clip slots; empty slots cannot be played
    pub clips: [Option<AnimationClip>; MAX_ANIMATION_CLIPS],

    /// Slot currently selected for playback
    pub current_clip: usize,

    /// Seconds accumulated on the current frame
    pub elapsed: f32,

    /// Frame index within the current clip
    pub current_frame: u32,

    /// Whether playback is running
    pub playing: bool,

    /// Whether playback wraps at the last frame
    pub looping: bool,
}

impl AnimationComponent {
    /// Create a stopped, looping animation with every slot empty
    pub fn new(entity: EntityId) -> Self {
        Self {
            entity,
            clips: [None; MAX_ANIMATION_CLIPS],
            current_clip: 0,
            elapsed: 0.0,
            current_frame: 0,
            playing: false,
            looping: true,
        }
    }

    /// Fill a clip slot; returns false when `slot` is out of range
    pub fn set_clip(&mut self, slot: usize, clip: AnimationClip) -> bool {
        match self.clips.get_mut(slot) {
            Some(entry) => {
                *entry = Some(clip);
                true
            }
            None => false,
        }
    }

    /// Start playback of a filled slot from its first frame;
    /// returns false when the slot is empty or out of range
    pub fn play(&mut self, slot: usize) -> bool {
        if self.clips.get(slot).copied().flatten().is_none() {
            return false;
        }
        self.current_clip = slot;
        self.current_frame = 0;
        self.elapsed = 0.0;
        self.playing = true;
        true
    }

    /// Halt playback, keeping the current frame
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Clip selected for playback, if its slot is filled
    pub fn current(&self) -> Option<&AnimationClip> {
        self.clips.get(self.current_clip)?.as_ref()
    }
}

impl Component for AnimationComponent {
    const KIND: ComponentKind = ComponentKind::Animation;

    fn entity(&self) -> EntityId {
        self.entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_clip() -> AnimationClip {
        AnimationClip {
            row: 1,
            frame_count: 4,
            frame_time: 0.15,
        }
    }

    #[test]
    fn test_play_requires_a_filled_slot() {
        let mut animation = AnimationComponent::new(EntityId::new(9));

        assert!(!animation.play(0));
        assert!(animation.set_clip(0, walk_clip()));
        assert!(animation.play(0));
        assert!(animation.playing);
        assert_eq!(animation.current_frame, 0);
    }

    #[test]
    fn test_out_of_range_slots_rejected() {
        let mut animation = AnimationComponent::new(EntityId::new(9));

        assert!(!animation.set_clip(MAX_ANIMATION_CLIPS, walk_clip()));
        assert!(!animation.play(MAX_ANIMATION_CLIPS));
    }
}
