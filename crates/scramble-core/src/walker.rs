// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The reversible LFSR walk over `1..=maximum`.
//!
//! A Galois LFSR of `w` bits visits every value in `1..2^w` once per
//! period. Choosing `w` as the bit width of `maximum` and skipping every
//! state above `maximum` leaves a cycle that visits each of
//! `1..=maximum` exactly once. Because at least half of the raw states
//! are in range, a single step skips fewer than `2^(w-1)` rejected states.
//!
//! Stepping backward runs the exact inverse of the forward shift, so the
//! walk can be replayed in either direction from any point without
//! storing what came before.

use serde::Deserialize;
use serde::Serialize;

use crate::bits::bit_width;
use crate::bits::rotate;
use crate::error::Fallible;
use crate::error::InvalidRangeError;
use crate::error::fail;
use crate::seed::hash_seed;
use crate::seed::normalize_offset;
use crate::seed::start_from_seed;
use crate::taps::feedback_mask;

/// Smallest range a walker accepts.
pub const MIN_MAXIMUM: u32 = 2;

/// Largest range a walker accepts: the highest signed 32-bit integer.
pub const MAX_MAXIMUM: u32 = i32::MAX as u32;

/// Which directions a walker can currently step in.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Traversal {
    /// Nothing emitted yet. Only forward steps are possible.
    NotStarted,
    /// Both directions are open.
    MidSequence,
    /// The last value of a non-looping walk was emitted. Only backward
    /// steps are possible.
    ExhaustedForward,
    /// A backward step ran past the first value and the walker rewound to
    /// its start. Only forward steps are possible.
    ExhaustedBackward,
}

/// Snapshot of a walker's position, taken with [`SequenceWalker::cursor`]
/// and restored with [`SequenceWalker::go_to`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Cursor {
    pub register: u32,
    pub position: i64,
}

impl Cursor {
    /// Checks that the cursor lies inside a walk over `1..=maximum`. Cursors
    /// read back from storage must pass this before reaching
    /// [`SequenceWalker::go_to`].
    pub fn validate(&self, maximum: u32) -> Fallible<()> {
        if self.register == 0 || self.register > maximum {
            return fail(format!(
                "cursor register {} is outside 1..={maximum}",
                self.register
            ));
        }
        if self.position < -1 || self.position > i64::from(maximum) - 1 {
            return fail(format!(
                "cursor position {} is outside -1..={}",
                self.position,
                i64::from(maximum) - 1
            ));
        }
        Ok(())
    }
}

/// A seeded, non-repeating walk over `1..=maximum`.
///
/// Cloning gives an independent cursor over the same permutation.
#[derive(Clone, Debug)]
pub struct SequenceWalker {
    maximum: u32,
    seed: i64,
    start: u32,
    /// Bit index of the register's top bit, `width - 1`.
    top_bit: u32,
    mask: u32,
    offset: u32,
    looping: bool,
    register: u32,
    position: i64,
    traversal: Traversal,
}

impl SequenceWalker {
    /// Creates a walker over `1..=maximum`.
    ///
    /// `seed` picks the starting register and `offset` rotates every value
    /// emitted; both may be any integer and are reduced modulo `maximum`.
    /// With `looping` set the walk repeats forever instead of ending after
    /// `maximum` values.
    pub fn new(
        maximum: u32,
        seed: i64,
        offset: i64,
        looping: bool,
    ) -> Result<Self, InvalidRangeError> {
        if !(MIN_MAXIMUM..=MAX_MAXIMUM).contains(&maximum) {
            return Err(InvalidRangeError {
                maximum: u64::from(maximum),
            });
        }
        let width = bit_width(maximum);
        let mask = feedback_mask(width).ok_or(InvalidRangeError {
            maximum: u64::from(maximum),
        })?;
        let start = start_from_seed(seed, maximum);
        let offset = normalize_offset(offset, maximum);
        log::debug!(
            "walker over 1..={maximum}: width={width} mask={mask:#x} start={start} offset={offset} loop={looping}"
        );
        Ok(Self {
            maximum,
            seed,
            start,
            top_bit: width - 1,
            mask,
            offset,
            looping,
            register: start,
            position: -1,
            traversal: Traversal::NotStarted,
        })
    }

    /// Creates a walker seeded from text via [`hash_seed`].
    pub fn with_seed_text(
        maximum: u32,
        text: &str,
        offset: i64,
        looping: bool,
    ) -> Result<Self, InvalidRangeError> {
        Self::new(maximum, hash_seed(Some(text)), offset, looping)
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Register value before the first step.
    pub fn start(&self) -> u32 {
        self.start
    }

    /// The normalized output offset, in `[0, maximum)`.
    pub fn output_offset(&self) -> u32 {
        self.offset
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn register_width(&self) -> u32 {
        self.top_bit + 1
    }

    pub fn feedback_mask(&self) -> u32 {
        self.mask
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    /// Rewinds to the state the walker was created in.
    pub fn reset(&mut self) {
        self.register = self.start;
        self.position = -1;
        self.traversal = Traversal::NotStarted;
    }

    /// Steps forward and returns the next value, or `None` once a
    /// non-looping walk has emitted all `maximum` values.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u32> {
        if self.traversal == Traversal::ExhaustedForward {
            return None;
        }
        loop {
            self.register = if self.register & 1 == 1 {
                (self.register >> 1) ^ self.mask
            } else {
                self.register >> 1
            };
            if self.register <= self.maximum {
                break;
            }
        }
        self.position += 1;
        if self.position > i64::from(self.maximum) - 1 {
            self.position -= i64::from(self.maximum);
        }
        // Reaching the start again means every value has been emitted; this
        // one still goes out.
        self.traversal = if self.register == self.start && !self.looping {
            Traversal::ExhaustedForward
        } else {
            Traversal::MidSequence
        };
        Some(self.emit())
    }

    /// Steps backward and returns the previous value, or `None` when there
    /// is nothing before the current one.
    ///
    /// Running past the first value rewinds the walker to its start, so
    /// [`SequenceWalker::current`] is `None` and the position is `-1`
    /// afterwards.
    pub fn prev(&mut self) -> Option<u32> {
        match self.traversal {
            Traversal::NotStarted | Traversal::ExhaustedBackward => return None,
            Traversal::MidSequence | Traversal::ExhaustedForward => {}
        }
        loop {
            self.register = if self.register >> self.top_bit == 1 {
                ((self.mask ^ self.register) << 1) | 1
            } else {
                self.register << 1
            };
            if self.register <= self.maximum {
                break;
            }
        }
        // The start is never emitted as a previous value.
        if self.register == self.start && !self.looping {
            self.position = -1;
            self.traversal = Traversal::ExhaustedBackward;
            return None;
        }
        self.position -= 1;
        if self.position < 0 {
            self.position += i64::from(self.maximum);
        }
        self.traversal = Traversal::MidSequence;
        Some(self.emit())
    }

    /// The value at the current position, or `None` before the first step.
    pub fn current(&self) -> Option<u32> {
        if self.position == -1 {
            None
        } else {
            Some(self.emit())
        }
    }

    /// Number of forward steps taken, `-1` before the first. Wraps back to
    /// zero when a looping walk starts over.
    pub fn current_pos(&self) -> i64 {
        self.position
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            register: self.register,
            position: self.position,
        }
    }

    /// Moves the walker to a cursor previously taken from a walker with the
    /// same maximum and seed.
    ///
    /// The cursor is not checked for reachability; a foreign cursor gives a
    /// walk over a different cycle.
    pub fn go_to(&mut self, cursor: Cursor) {
        self.register = cursor.register;
        self.position = cursor.position;
        self.traversal = if cursor.position < 0 {
            Traversal::NotStarted
        } else if cursor.position >= i64::from(self.maximum) - 1 && !self.looping {
            Traversal::ExhaustedForward
        } else {
            Traversal::MidSequence
        };
    }

    /// Validates `cursor` against this walker's range, then moves to it.
    pub fn try_go_to(&mut self, cursor: Cursor) -> Fallible<()> {
        cursor.validate(self.maximum)?;
        self.go_to(cursor);
        Ok(())
    }

    /// Up to `n` values that [`SequenceWalker::next`] would return, without
    /// moving this walker.
    pub fn lookahead(&self, n: usize) -> Vec<u32> {
        let mut walker = self.clone();
        let mut out = Vec::with_capacity(n.min(self.maximum as usize));
        while out.len() < n {
            match walker.next() {
                Some(value) => out.push(value),
                None => break,
            }
        }
        out
    }

    /// Up to `n` values that [`SequenceWalker::prev`] would return, without
    /// moving this walker.
    pub fn lookbehind(&self, n: usize) -> Vec<u32> {
        let mut walker = self.clone();
        let mut out = Vec::with_capacity(n.min(self.maximum as usize));
        while out.len() < n {
            match walker.prev() {
                Some(value) => out.push(value),
                None => break,
            }
        }
        out
    }

    /// Resets the walker and returns the whole permutation, leaving the
    /// walker on its last value.
    pub fn all(&mut self) -> Vec<u32> {
        self.reset();
        let mut out = Vec::with_capacity(self.maximum as usize);
        for _ in 0..self.maximum {
            match self.next() {
                Some(value) => out.push(value),
                None => break,
            }
        }
        out
    }

    /// Disables looping, for the iteration view.
    pub(crate) fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    fn emit(&self) -> u32 {
        match rotate(self.register, self.offset, self.maximum) {
            Ok(value) => value,
            Err(e) => panic!("walker register escaped its range: {e}"),
        }
    }
}
