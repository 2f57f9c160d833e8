//! Per-entity animation playback.
//!
//! [`AnimationPlayer`] drives a shared [`AnimationDef`] with two stacked
//! cursors: the outer one walks sections, the inner one walks the frames of
//! the current section. Every `speed` ticks the inner cursor is pulled; when
//! it runs out the outer cursor supplies the next section. Once the outer
//! cursor runs out the player is `finished` until the next
//! [`restart`](AnimationPlayer::restart).
//!
//! Policies for a section are resolved in this order:
//! 1. the player's own section override,
//! 2. the definition's section policy,
//! 3. the definition's default section policy.
//!
//! # Related
//! - [`crate::looping`] – cursor and loop policy state machine
//! - [`crate::systems::animation`] – ticks players and updates [`Sprite`](super::sprite::Sprite)

use std::sync::Arc;

use bevy_ecs::prelude::Component;
use log::warn;
use rustc_hash::FxHashMap;

use crate::looping::{LoopPolicy, SequenceCursor};
use crate::resources::animationstore::{AnimationDef, Section};
use crate::resources::framestore::FrameHandle;

/// Playback state for one entity over a shared [`AnimationDef`].
#[derive(Component, Clone, Debug)]
pub struct AnimationPlayer {
    def: Arc<AnimationDef>,
    outer: SequenceCursor<Arc<AnimationDef>>,
    inner: Option<SequenceCursor<Section>>,
    speed: u32,
    ticks_since_advance: u32,
    finished: bool,
    current_frame: Option<FrameHandle>,
    current_section: Option<usize>,
    /// Instance override for the outer (section) cursor.
    loop_policy: Option<LoopPolicy>,
    /// Instance overrides per section index.
    section_policies: FxHashMap<usize, LoopPolicy>,
}

impl AnimationPlayer {
    /// Create a player and start it at the definition's first section.
    ///
    /// `speed` is the number of ticks per frame advance; 0 is treated as 1.
    pub fn new(def: Arc<AnimationDef>, speed: u32) -> Self {
        let outer = SequenceCursor::new(def.clone(), def.loop_policy);
        let mut player = Self {
            def,
            outer,
            inner: None,
            speed: speed.max(1),
            ticks_since_advance: 0,
            finished: false,
            current_frame: None,
            current_section: None,
            loop_policy: None,
            section_policies: FxHashMap::default(),
        };
        player.restart(None, None);
        player
    }

    /// Override the outer policy for this instance and restart.
    pub fn with_loop_policy(mut self, policy: LoopPolicy) -> Self {
        self.loop_policy = Some(policy);
        self.restart(None, None);
        self
    }

    /// Override one section's policy for this instance and restart.
    pub fn with_section_policy(mut self, section: usize, policy: LoopPolicy) -> Self {
        self.section_policies.insert(section, policy);
        self.restart(None, None);
        self
    }

    pub fn def(&self) -> &Arc<AnimationDef> {
        &self.def
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn ticks_since_advance(&self) -> u32 {
        self.ticks_since_advance
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The last successfully pulled frame.
    pub fn current_frame(&self) -> Option<&FrameHandle> {
        self.current_frame.as_ref()
    }

    pub fn current_section(&self) -> Option<usize> {
        self.current_section
    }

    pub fn current_section_name(&self) -> Option<&str> {
        self.current_section
            .and_then(|i| self.def.sections.get(i))
            .map(|s| s.name.as_str())
    }

    /// Outer policy in effect: instance override, else the definition's.
    pub fn outer_policy(&self) -> LoopPolicy {
        self.loop_policy.unwrap_or(self.def.loop_policy)
    }

    /// Policy a fresh inner cursor over `section` starts with.
    pub fn section_policy(&self, section: usize) -> LoopPolicy {
        self.section_policies
            .get(&section)
            .copied()
            .unwrap_or_else(|| self.def.section_policy(section))
    }

    /// Reinitialize both cursors, optionally at a given section and frame.
    pub fn restart(&mut self, section: Option<usize>, frame: Option<usize>) {
        self.finished = false;
        self.ticks_since_advance = 0;
        self.inner = None;
        self.outer = SequenceCursor::starting_at(self.def.clone(), self.outer_policy(), section);
        self.next_section(frame);
    }

    /// Move to the next section and show its first frame.
    ///
    /// Sections that yield no frame are skipped. Returns whether a frame was
    /// pulled; `false` means the player is now finished.
    pub fn next_section(&mut self, frame: Option<usize>) -> bool {
        // Bounds the skipping of frameless sections under infinite outer policies.
        let mut attempts = 2 * self.def.sections.len() + 2;
        loop {
            let Some(section) = self.outer.next_index() else {
                self.finish();
                return false;
            };
            let Some(frames) = self.def.sections.get(section).cloned() else {
                self.finish();
                return false;
            };

            let mut inner = SequenceCursor::starting_at(frames, self.section_policy(section), frame);
            if let Some((_, first)) = inner.next_item() {
                self.current_frame = Some(first.clone());
                self.current_section = Some(section);
                self.inner = Some(inner);
                return true;
            }

            attempts -= 1;
            if attempts == 0 {
                warn!(
                    "Animation '{}' has no playable frames, stopping playback",
                    self.def.name
                );
                self.finish();
                return false;
            }
        }
    }

    /// Advance the tick counter, pulling a frame every `speed` ticks.
    ///
    /// Returns whether a new frame was pulled this tick.
    pub fn tick(&mut self) -> bool {
        if self.finished {
            return false;
        }
        self.ticks_since_advance += 1;
        if self.ticks_since_advance < self.speed {
            return false;
        }
        self.ticks_since_advance = 0;

        let pulled = self
            .inner
            .as_mut()
            .and_then(|cursor| cursor.next_item().map(|(_, frame)| frame.clone()));
        match pulled {
            Some(frame) => {
                self.current_frame = Some(frame);
                true
            }
            None => self.next_section(None),
        }
    }

    fn finish(&mut self) {
        self.finished = true;
        self.inner = None;
    }
}
