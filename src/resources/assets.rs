//! Asset provider interface and the JSON manifest implementation.
//!
//! The simulation never touches the filesystem for images. It asks an
//! [`AssetProvider`] for frame sequences and sectioned animations and treats
//! the returned [`FrameHandle`]s as opaque tokens.
//!
//! [`ManifestAssets`] reads a JSON manifest describing every frame by size
//! and mask shape and synthesises the frames once at construction, so the
//! same id always resolves to the same handles.
//!
//! # Manifest format
//!
//! ```json
//! {
//!   "frame_sequences": {
//!     "zapper": [ { "name": "zapper_off_h", "width": 160, "height": 40, "shape": "horizontal_beam" } ]
//!   },
//!   "animations": {
//!     "player": {
//!       "sections": [
//!         { "name": "running",
//!           "policy": { "kind": "clamp_to_other_end", "remaining_iterations": -1 },
//!           "frames": [ { "name": "run", "width": 64, "height": 80, "shape": "ellipse", "count": 4 } ] }
//!       ]
//!     }
//!   }
//! }
//! ```

use std::path::Path;

use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::looping::LoopPolicy;
use crate::resources::animationstore::{AnimationDef, Section};
use crate::resources::framestore::{FrameHandle, MaskShape};

/// Manifest shipped with the crate.
pub const BUILTIN_MANIFEST: &str = include_str!("../../assets/manifest.json");

/// Source of frames and sectioned animations.
pub trait AssetProvider {
    /// Ordered frames registered under `id`.
    fn load_frame_sequence(&self, id: &str) -> Result<Vec<FrameHandle>, String>;

    /// Ordered sections registered under `id`, each with its optional policy.
    fn load_section_sequence(&self, id: &str) -> Result<Vec<(Section, Option<LoopPolicy>)>, String>;

    /// Outer loop policy the provider associates with `id`, if any.
    fn animation_loop_policy(&self, _id: &str) -> Option<LoopPolicy> {
        None
    }

    /// Assemble an [`AnimationDef`] from the section sequence under `id`.
    ///
    /// `loop_policy` overrides the provider's outer policy; sections without
    /// a policy fall back to the definition default.
    fn load_animation(&self, id: &str, loop_policy: Option<LoopPolicy>) -> Result<AnimationDef, String> {
        let mut sections = Vec::new();
        let mut policies = FxHashMap::default();
        for (index, (section, policy)) in self.load_section_sequence(id)?.into_iter().enumerate() {
            if let Some(policy) = policy {
                policies.insert(index, policy);
            }
            sections.push(section);
        }
        let mut def = AnimationDef::new(id, sections);
        def.section_policies = policies;
        if let Some(policy) = loop_policy.or_else(|| self.animation_loop_policy(id)) {
            def.loop_policy = policy;
        }
        Ok(def)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct FrameEntry {
    name: String,
    width: u32,
    height: u32,
    #[serde(default)]
    shape: MaskShape,
    /// Number of distinct frames of this shape, named `{name}_{i}`.
    #[serde(default)]
    count: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
struct SectionEntry {
    name: String,
    #[serde(default)]
    policy: Option<LoopPolicy>,
    frames: Vec<FrameEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct AnimationEntry {
    #[serde(default)]
    loop_policy: Option<LoopPolicy>,
    sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    frame_sequences: FxHashMap<String, Vec<FrameEntry>>,
    #[serde(default)]
    animations: FxHashMap<String, AnimationEntry>,
}

fn build_frames(entries: &[FrameEntry]) -> Result<Vec<FrameHandle>, String> {
    let mut frames = Vec::new();
    for entry in entries {
        if entry.width == 0 || entry.height == 0 {
            return Err(format!(
                "Frame '{}' has an empty size {}x{}",
                entry.name, entry.width, entry.height
            ));
        }
        match entry.count {
            None => frames.push(FrameHandle::with_shape(
                entry.name.clone(),
                entry.shape,
                entry.width,
                entry.height,
            )),
            Some(count) => {
                for i in 0..count {
                    frames.push(FrameHandle::with_shape(
                        format!("{}_{}", entry.name, i),
                        entry.shape,
                        entry.width,
                        entry.height,
                    ));
                }
            }
        }
    }
    Ok(frames)
}

/// Asset provider backed by a JSON manifest with procedurally built frames.
pub struct ManifestAssets {
    frame_sequences: FxHashMap<String, Vec<FrameHandle>>,
    section_sequences: FxHashMap<String, Vec<(Section, Option<LoopPolicy>)>>,
    loop_policies: FxHashMap<String, LoopPolicy>,
}

impl ManifestAssets {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let manifest: Manifest =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse asset manifest: {}", e))?;

        let frame_sequences = manifest
            .frame_sequences
            .iter()
            .map(|(id, entries)| Ok((id.clone(), build_frames(entries)?)))
            .collect::<Result<FxHashMap<_, _>, String>>()?;

        let mut section_sequences = FxHashMap::default();
        let mut loop_policies = FxHashMap::default();
        for (id, anim) in &manifest.animations {
            let sections = anim
                .sections
                .iter()
                .map(|s| Ok((Section::new(s.name.clone(), build_frames(&s.frames)?), s.policy)))
                .collect::<Result<Vec<_>, String>>()?;
            debug!("Manifest animation '{}' with {} sections", id, sections.len());
            section_sequences.insert(id.clone(), sections);
            if let Some(policy) = anim.loop_policy {
                loop_policies.insert(id.clone(), policy);
            }
        }

        info!(
            "Loaded asset manifest: {} frame sequences, {} animations",
            frame_sequences.len(),
            section_sequences.len()
        );

        Ok(Self {
            frame_sequences,
            section_sequences,
            loop_policies,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read asset manifest {:?}: {}", path, e))?;
        Self::from_json(&json)
    }

    /// The manifest compiled into the crate.
    pub fn builtin() -> Result<Self, String> {
        Self::from_json(BUILTIN_MANIFEST)
    }
}

impl AssetProvider for ManifestAssets {
    fn load_frame_sequence(&self, id: &str) -> Result<Vec<FrameHandle>, String> {
        self.frame_sequences
            .get(id)
            .cloned()
            .ok_or_else(|| format!("Unknown frame sequence '{}'", id))
    }

    fn load_section_sequence(&self, id: &str) -> Result<Vec<(Section, Option<LoopPolicy>)>, String> {
        self.section_sequences
            .get(id)
            .cloned()
            .ok_or_else(|| format!("Unknown animation '{}'", id))
    }

    fn animation_loop_policy(&self, id: &str) -> Option<LoopPolicy> {
        self.loop_policies.get(id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::looping::LoopKind;

    #[test]
    fn test_builtin_manifest_has_player_and_zapper() {
        let assets = ManifestAssets::builtin().unwrap();
        let zapper = assets.load_frame_sequence("zapper").unwrap();
        assert_eq!(zapper.len(), 4);

        let player = assets.load_animation("player", None).unwrap();
        let names: Vec<&str> = player.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["running", "taking_off", "flying", "falling", "dead"]);
        assert_eq!(player.section_policy(1).remaining_iterations, 1);
        assert_eq!(player.section_policy(3).kind, LoopKind::ReverseDirection);
        assert_eq!(player.section_policy(4).kind, LoopKind::HoldLastFrame);
    }

    #[test]
    fn test_handles_are_stable_between_loads() {
        let assets = ManifestAssets::builtin().unwrap();
        let a = assets.load_frame_sequence("zapper").unwrap();
        let b = assets.load_frame_sequence("zapper").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_count_expands_frames() {
        let json = r#"{ "animations": { "blink": { "sections": [
            { "name": "on", "frames": [ { "name": "b", "width": 2, "height": 2, "count": 3 } ] }
        ] } } }"#;
        let assets = ManifestAssets::from_json(json).unwrap();
        let def = assets.load_animation("blink", Some(LoopPolicy::clamp(-1))).unwrap();
        assert_eq!(def.sections[0].frames.len(), 3);
        assert_eq!(def.sections[0].frames[2].name(), "b_2");
        assert!(def.loop_policy.is_infinite());
        assert_eq!(def.section_policy(0), LoopPolicy::default());
    }

    #[test]
    fn test_unknown_ids_and_bad_json_are_errors() {
        let assets = ManifestAssets::from_json("{}").unwrap();
        assert!(assets.load_frame_sequence("x").is_err());
        assert!(assets.load_animation("x", None).is_err());
        assert!(ManifestAssets::from_json("{ nope").is_err());
    }

    #[test]
    fn test_zero_sized_frames_are_errors() {
        let flat_beam = r#"{"frame_sequences":{"z":[{"name":"z","width":10,"height":0,"shape":"horizontal_beam"}]}}"#;
        let err = ManifestAssets::from_json(flat_beam).err().unwrap();
        assert!(err.contains("'z'"));

        let thin_section = r#"{"animations":{"a":{"sections":[
            {"name":"s","frames":[{"name":"t","width":0,"height":8,"shape":"vertical_beam"}]}
        ]}}}"#;
        assert!(ManifestAssets::from_json(thin_section).is_err());
    }
}
