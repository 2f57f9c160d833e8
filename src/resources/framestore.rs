//! Frame handles, pixel masks and the named frame-sequence registry.
//!
//! A [`Frame`] is the engine's opaque stand-in for a loaded image: a size in
//! pixels plus a [`PixelMask`] of its opaque pixels. Frames are shared through
//! [`FrameHandle`], a cheap `Arc` clone compared by identity.
//!
//! Related:
//! - [`crate::resources::assets`] builds frames from a manifest
//! - [`crate::components::sprite::Sprite`] shows the current frame of an entity
//! - [`crate::systems::collision`] uses masks for the pixel-perfect narrow phase

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use bevy_ecs::prelude::Resource;
use glam::IVec2;
use rustc_hash::FxHashMap;
use serde::Deserialize;

static NEXT_FRAME_ID: AtomicU32 = AtomicU32::new(1);

/// Procedural shape used to fill a frame's mask.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskShape {
    /// Every pixel opaque.
    #[default]
    Full,
    /// Ellipse inscribed in the frame.
    Ellipse,
    /// Two square end nodes joined by a thin horizontal beam.
    HorizontalBeam,
    /// Two square end nodes joined by a thin vertical beam.
    VerticalBeam,
}

/// One bit per pixel, row-major, `true` = opaque.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u32,
    height: u32,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl PixelMask {
    /// Build a mask by evaluating `opaque(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut opaque: impl FnMut(u32, u32) -> bool) -> Self {
        let words_per_row = (width as usize).div_ceil(64);
        let mut bits = vec![0u64; words_per_row * height as usize];
        for y in 0..height {
            for x in 0..width {
                if opaque(x, y) {
                    let word = y as usize * words_per_row + (x / 64) as usize;
                    bits[word] |= 1u64 << (x % 64);
                }
            }
        }
        Self {
            width,
            height,
            words_per_row,
            bits,
        }
    }

    pub fn filled(width: u32, height: u32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn from_shape(shape: MaskShape, width: u32, height: u32) -> Self {
        match shape {
            MaskShape::Full => Self::filled(width, height),
            MaskShape::Ellipse => {
                let rx = width as f32 / 2.0;
                let ry = height as f32 / 2.0;
                Self::from_fn(width, height, |x, y| {
                    let dx = (x as f32 + 0.5 - rx) / rx;
                    let dy = (y as f32 + 0.5 - ry) / ry;
                    dx * dx + dy * dy <= 1.0
                })
            }
            MaskShape::HorizontalBeam => {
                let node = height.min(width / 2);
                let band = (height / 3).max(1);
                let top = height.saturating_sub(band) / 2;
                Self::from_fn(width, height, |x, y| {
                    x < node || x + node >= width || (y >= top && y < top + band)
                })
            }
            MaskShape::VerticalBeam => {
                let node = width.min(height / 2);
                let band = (width / 3).max(1);
                let left = width.saturating_sub(band) / 2;
                Self::from_fn(width, height, |x, y| {
                    y < node || y + node >= height || (x >= left && x < left + band)
                })
            }
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Opacity at `(x, y)`; out-of-range coordinates are transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let word = y as usize * self.words_per_row + (x as u32 / 64) as usize;
        self.bits[word] & (1u64 << (x as u32 % 64)) != 0
    }

    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Whether any opaque pixel of `self` meets an opaque pixel of `other`
    /// placed at `offset` (other's top-left relative to self's top-left).
    pub fn overlaps(&self, other: &PixelMask, offset: IVec2) -> bool {
        let x0 = offset.x.max(0);
        let y0 = offset.y.max(0);
        let x1 = (offset.x + other.width as i32).min(self.width as i32);
        let y1 = (offset.y + other.height as i32).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }
        (y0..y1).any(|y| (x0..x1).any(|x| self.get(x, y) && other.get(x - offset.x, y - offset.y)))
    }
}

impl fmt::Debug for PixelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelMask")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("opaque", &self.count())
            .finish()
    }
}

/// Immutable image stand-in.
#[derive(Debug)]
pub struct Frame {
    id: u32,
    /// Asset-level name, for logs and renderers.
    pub name: String,
    /// Size in pixels.
    pub size: IVec2,
    /// Opaque pixels.
    pub mask: PixelMask,
}

/// Shared, identity-compared handle to a [`Frame`].
#[derive(Clone, Debug)]
pub struct FrameHandle(Arc<Frame>);

impl FrameHandle {
    pub fn new(name: impl Into<String>, mask: PixelMask) -> Self {
        let size = IVec2::new(mask.width() as i32, mask.height() as i32);
        Self(Arc::new(Frame {
            id: NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            size,
            mask,
        }))
    }

    pub fn with_shape(name: impl Into<String>, shape: MaskShape, width: u32, height: u32) -> Self {
        Self::new(name, PixelMask::from_shape(shape, width, height))
    }

    pub fn id(&self) -> u32 {
        self.0.id
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn size(&self) -> IVec2 {
        self.0.size
    }

    pub fn mask(&self) -> &PixelMask {
        &self.0.mask
    }
}

impl PartialEq for FrameHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id
    }
}

impl Eq for FrameHandle {}

impl Hash for FrameHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.id.hash(state);
    }
}

/// Named frame sequences that are not sectioned animations (e.g. the zapper).
#[derive(Resource, Default)]
pub struct FrameStore {
    pub sequences: FxHashMap<String, Arc<[FrameHandle]>>,
}

impl FrameStore {
    pub fn insert(&mut self, id: impl Into<String>, frames: Vec<FrameHandle>) {
        self.sequences.insert(id.into(), frames.into());
    }

    pub fn get(&self, id: &str) -> Option<&Arc<[FrameHandle]>> {
        self.sequences.get(id)
    }

    pub fn frame(&self, id: &str, index: usize) -> Option<&FrameHandle> {
        self.sequences.get(id).and_then(|frames| frames.get(index))
    }
}
