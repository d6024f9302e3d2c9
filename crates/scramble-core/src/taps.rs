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

//! Galois feedback masks, one per register width.
//!
//! Each mask is the one-to-many form of a maximal-length tap set, so a
//! register of width `w` cycles through every value in `1..2^w` before
//! repeating. The constants decide which permutation a seed produces and
//! must never change.

/// Smallest register width in the table.
pub const MIN_WIDTH: u32 = 2;

/// Largest register width in the table.
pub const MAX_WIDTH: u32 = 32;

/// Feedback masks for widths 2 through 32, indexed by `width - 2`.
pub const FEEDBACK_MASKS: [u32; 31] = [
    // 2 to 8
    0x3, 0x6, 0x9, 0x1D, 0x36, 0x69, 0xA6,
    // 9 to 16
    0x17C, 0x32D, 0x4F2, 0xD34, 0x1349, 0x2532, 0x6699, 0xD295,
    // 17 to 24
    0x12933, 0x2C93E, 0x593CA, 0xAFF95, 0x12B6BC, 0x2E652E, 0x5373D6, 0x9CCDAE,
    // 25 to 32
    0x12BA74D, 0x36CD5A7, 0x4E5D793, 0xF5CDE95, 0x1A4E6FF2, 0x29D1E9EB, 0x7A5BC2E3, 0xB4BCD35C,
];

/// Returns the feedback mask for a register of `width` bits, if the table
/// has one.
pub fn feedback_mask(width: u32) -> Option<u32> {
    if !(MIN_WIDTH..=MAX_WIDTH).contains(&width) {
        return None;
    }
    FEEDBACK_MASKS.get((width - MIN_WIDTH) as usize).copied()
}
