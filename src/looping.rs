//! Loop policies and the generic sequence cursor.
//!
//! A [`SequenceCursor`] walks an indexable [`Sequence`] one item at a time
//! and asks its [`LoopPolicy`] what to do whenever the index steps past
//! either end: wrap around, bounce back, hold the boundary item, or stop.
//!
//! Animations use two cursors stacked on top of each other (one over the
//! sections of an [`AnimationDef`](crate::resources::animationstore::AnimationDef),
//! one over the frames of the current section), see
//! [`AnimationPlayer`](crate::components::animation::AnimationPlayer).
//!
//! # Stepping
//!
//! [`SequenceCursor::step`] is an explicit state machine returning a
//! [`CursorStep`]:
//!
//! - `Produced` – the index was in range, the item is yielded and the index
//!   moves one place in the current direction.
//! - `BoundaryAdvance` – the index was out of range and the policy moved it
//!   back in range (clamp or reverse). Nothing is yielded; the next step will.
//! - `Terminated` – the iteration budget ran out, or the sequence is empty.
//!
//! [`SequenceCursor::next_item`] and the [`Iterator`] impl hide the
//! `BoundaryAdvance` case.
//!
//! # Example
//!
//! ```
//! use jetrunner::looping::{LoopPolicy, SequenceCursor};
//!
//! let cursor = SequenceCursor::new(vec![0, 1, 2], LoopPolicy::reverse(LoopPolicy::INFINITE));
//! let frames: Vec<i32> = cursor.take(7).collect();
//! assert_eq!(frames, vec![0, 1, 2, 1, 0, 1, 2]);
//! ```

use std::sync::Arc;

use serde::Deserialize;

/// What a cursor does when its index steps past an end of the sequence.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopKind {
    /// Jump to the opposite end and keep going in the same direction.
    #[default]
    ClampToOtherEnd,
    /// Flip the direction and walk back (ping-pong).
    ReverseDirection,
    /// Keep yielding the boundary item.
    HoldLastFrame,
}

/// Looping configuration and live state for one cursor.
///
/// `remaining_iterations` counts boundary crossings: negative means infinite,
/// zero means exhausted, positive values drop by one per crossing and never
/// grow back.
///
/// The type is `Copy`. A policy used as a template for many cursors is
/// copied into each of them, so one entity's countdown never affects another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoopPolicy {
    /// Boundary behavior.
    pub kind: LoopKind,
    /// Boundary crossings left before the cursor terminates.
    pub remaining_iterations: i32,
    /// Direction flag, `true` = forward.
    pub forward: bool,
}

impl Default for LoopPolicy {
    fn default() -> Self {
        Self {
            kind: LoopKind::ClampToOtherEnd,
            remaining_iterations: 1,
            forward: true,
        }
    }
}

impl LoopPolicy {
    /// Iteration count that never runs out.
    pub const INFINITE: i32 = -1;

    pub fn new(kind: LoopKind, remaining_iterations: i32) -> Self {
        Self {
            kind,
            remaining_iterations,
            forward: true,
        }
    }

    pub fn clamp(remaining_iterations: i32) -> Self {
        Self::new(LoopKind::ClampToOtherEnd, remaining_iterations)
    }

    pub fn reverse(remaining_iterations: i32) -> Self {
        Self::new(LoopKind::ReverseDirection, remaining_iterations)
    }

    pub fn hold(remaining_iterations: i32) -> Self {
        Self::new(LoopKind::HoldLastFrame, remaining_iterations)
    }

    /// Builder-style: start walking from the end towards the beginning.
    pub fn backwards(mut self) -> Self {
        self.forward = false;
        self
    }

    pub fn is_infinite(&self) -> bool {
        self.remaining_iterations < 0
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining_iterations == 0
    }

    /// Account for one boundary crossing. Returns `false` once exhausted.
    fn cross_boundary(&mut self) -> bool {
        if self.remaining_iterations > 0 {
            self.remaining_iterations -= 1;
        }
        self.remaining_iterations != 0
    }
}

/// An ordered, fixed-length, 0-indexed collection a cursor can walk.
pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

impl<S: Sequence + ?Sized> Sequence for Arc<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        S::len(self)
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        S::get(self, index)
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        S::len(self)
    }

    fn get(&self, index: usize) -> Option<&S::Item> {
        S::get(self, index)
    }
}

/// Result of a single [`SequenceCursor::step`].
#[derive(Debug, PartialEq, Eq)]
pub enum CursorStep<'a, T> {
    /// An item was yielded from `index`.
    Produced { index: usize, item: &'a T },
    /// A boundary was crossed and the index corrected; nothing yielded yet.
    BoundaryAdvance,
    /// No further items.
    Terminated,
}

/// Index-only outcome, so callers can loop without holding a borrow.
enum Advance {
    Produced(usize),
    Boundary,
    Terminated,
}

/// Stateful cursor over a [`Sequence`] driven by a [`LoopPolicy`].
#[derive(Clone, Debug)]
pub struct SequenceCursor<S> {
    sequence: S,
    index: isize,
    policy: LoopPolicy,
    terminated: bool,
}

impl<S: Sequence> SequenceCursor<S> {
    /// Cursor starting at the first item in the policy's direction.
    pub fn new(sequence: S, policy: LoopPolicy) -> Self {
        Self::starting_at(sequence, policy, None)
    }

    /// Cursor starting at `start`, or at the policy's natural start when `None`.
    ///
    /// An out-of-range `start` is treated as a boundary on the first step.
    pub fn starting_at(sequence: S, policy: LoopPolicy, start: Option<usize>) -> Self {
        let index = match start {
            Some(i) => isize::try_from(i).unwrap_or(isize::MAX),
            None if policy.forward => 0,
            None => sequence.len() as isize - 1,
        };
        Self {
            sequence,
            index,
            policy,
            terminated: policy.is_exhausted(),
        }
    }

    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    /// The cursor's own copy of the policy, including its live countdown.
    pub fn policy(&self) -> &LoopPolicy {
        &self.policy
    }

    /// Index the next step will look at. May be `-1` or `len` between steps.
    pub fn index(&self) -> isize {
        self.index
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Advance the state machine by one transition.
    pub fn step(&mut self) -> CursorStep<'_, S::Item> {
        match self.advance() {
            Advance::Produced(index) => match self.sequence.get(index) {
                Some(item) => CursorStep::Produced { index, item },
                None => CursorStep::Terminated,
            },
            Advance::Boundary => CursorStep::BoundaryAdvance,
            Advance::Terminated => CursorStep::Terminated,
        }
    }

    /// Index of the next produced item, stepping through boundary corrections.
    pub fn next_index(&mut self) -> Option<usize> {
        loop {
            match self.advance() {
                Advance::Produced(index) => return Some(index),
                Advance::Boundary => continue,
                Advance::Terminated => return None,
            }
        }
    }

    /// Next produced item together with its index.
    pub fn next_item(&mut self) -> Option<(usize, &S::Item)> {
        let index = self.next_index()?;
        self.sequence.get(index).map(|item| (index, item))
    }

    fn advance(&mut self) -> Advance {
        if self.terminated {
            return Advance::Terminated;
        }

        let len = self.sequence.len();
        if len == 0 {
            self.terminated = true;
            return Advance::Terminated;
        }

        let last = len as isize - 1;
        if (0..=last).contains(&self.index) {
            let index = self.index as usize;
            self.index += if self.policy.forward { 1 } else { -1 };
            return Advance::Produced(index);
        }

        if !self.policy.cross_boundary() {
            self.terminated = true;
            return Advance::Terminated;
        }

        // A single item has nothing to bounce between.
        let kind = match self.policy.kind {
            LoopKind::ReverseDirection if len == 1 => LoopKind::HoldLastFrame,
            kind => kind,
        };

        match kind {
            LoopKind::ClampToOtherEnd => {
                self.index = if self.index < 0 { last } else { 0 };
                Advance::Boundary
            }
            LoopKind::ReverseDirection => {
                self.policy.forward = !self.policy.forward;
                let jump = if self.policy.forward { 2 } else { -2 };
                self.index = self.index.saturating_add(jump).clamp(0, last);
                Advance::Boundary
            }
            LoopKind::HoldLastFrame => {
                let held = if self.index < 0 { 0 } else { last };
                self.index = held;
                Advance::Produced(held as usize)
            }
        }
    }
}

impl<S> Iterator for SequenceCursor<S>
where
    S: Sequence,
    S::Item: Clone,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_item().map(|(_, item)| item.clone())
    }
}
