//! Animation resource registry.
//!
//! An animation is a [`AnimationDef`]: an ordered list of named [`Section`]s,
//! each an ordered, immutable run of frames. Definitions are shared by `Arc`
//! between every entity that plays them and are never mutated after
//! construction, so per-entity playback state lives only in
//! [`AnimationPlayer`](crate::components::animation::AnimationPlayer).

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::looping::{LoopPolicy, Sequence};
use crate::resources::framestore::FrameHandle;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, Arc<AnimationDef>>,
}

impl AnimationStore {
    pub fn insert(&mut self, def: AnimationDef) -> Arc<AnimationDef> {
        let def = Arc::new(def);
        self.animations.insert(def.name.clone(), def.clone());
        def
    }

    pub fn get(&self, name: &str) -> Option<Arc<AnimationDef>> {
        self.animations.get(name).cloned()
    }
}

/// A named, ordered run of frames.
#[derive(Debug, Clone)]
pub struct Section {
    pub name: String,
    pub frames: Arc<[FrameHandle]>,
}

impl Section {
    pub fn new(name: impl Into<String>, frames: Vec<FrameHandle>) -> Self {
        Self {
            name: name.into(),
            frames: frames.into(),
        }
    }
}

impl Sequence for Section {
    type Item = FrameHandle;

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn get(&self, index: usize) -> Option<&FrameHandle> {
        self.frames.get(index)
    }
}

/// Immutable description of a sectioned animation.
#[derive(Debug, Clone)]
pub struct AnimationDef {
    pub name: String,
    pub sections: Vec<Section>,
    /// Per-section policies; sections without an entry use `default_section_policy`.
    pub section_policies: FxHashMap<usize, LoopPolicy>,
    pub default_section_policy: LoopPolicy,
    /// Policy for walking the sections themselves.
    pub loop_policy: LoopPolicy,
}

impl AnimationDef {
    pub fn new(name: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            name: name.into(),
            sections,
            section_policies: FxHashMap::default(),
            default_section_policy: LoopPolicy::default(),
            loop_policy: LoopPolicy::default(),
        }
    }

    pub fn with_loop_policy(mut self, policy: LoopPolicy) -> Self {
        self.loop_policy = policy;
        self
    }

    pub fn with_section_policy(mut self, section: usize, policy: LoopPolicy) -> Self {
        self.section_policies.insert(section, policy);
        self
    }

    /// Policy the definition assigns to `section`.
    pub fn section_policy(&self, section: usize) -> LoopPolicy {
        self.section_policies
            .get(&section)
            .copied()
            .unwrap_or(self.default_section_policy)
    }

    pub fn frame_count(&self) -> usize {
        self.sections.iter().map(|s| s.frames.len()).sum()
    }
}

impl Sequence for AnimationDef {
    type Item = Section;

    fn len(&self) -> usize {
        self.sections.len()
    }

    fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }
}
