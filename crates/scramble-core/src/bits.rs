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

use crate::error::RotationError;

/// Number of bits needed to represent `n`: the position of the highest set
/// bit plus one. `bit_width(0)` is zero.
pub fn bit_width(n: u32) -> u32 {
    u32::BITS - n.leading_zeros()
}

/// Rotates `value` by `offset` inside the one-based range `[1, maximum]`.
///
/// A sum of exactly `maximum` stays `maximum`; anything above it wraps
/// around to the start of the range. Both inputs must already be reduced
/// to `[0, maximum]`.
pub fn rotate(value: u32, offset: u32, maximum: u32) -> Result<u32, RotationError> {
    if value > maximum {
        return Err(RotationError::ValueAboveMaximum { value, maximum });
    }
    if offset > maximum {
        return Err(RotationError::OffsetAboveMaximum { offset, maximum });
    }
    // Both terms are at most 2^32 - 1, so widen before adding.
    let sum = u64::from(value) + u64::from(offset);
    let max = u64::from(maximum);
    let rotated = if sum > max { sum - max } else { sum };
    Ok(rotated as u32)
}
