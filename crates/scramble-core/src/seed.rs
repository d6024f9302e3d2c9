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

//! Turning caller-supplied seeds and offsets into register state.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Largest integer a JavaScript number holds exactly. Random seeds stay
/// below it so they survive a round trip through JSON.
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Hashes text into a 32-bit signed seed with `hash = hash * 31 + unit`
/// over the UTF-16 code units of the string.
///
/// Missing or empty text gives a random seed in `[0, 2^53)` instead.
pub fn hash_seed(value: Option<&str>) -> i64 {
    match value {
        Some(text) if !text.is_empty() => i64::from(hash_text(text)),
        _ => random_seed(),
    }
}

fn hash_text(text: &str) -> i32 {
    text.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

fn random_seed() -> i64 {
    let mut bytes = [0u8; 8];
    let raw = match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(e) => {
            log::warn!("entropy source unavailable ({e}), seeding from the clock");
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default()
        }
    };
    (raw & MAX_SAFE_INTEGER) as i64
}

/// Register value the walk starts from: `(|seed| mod maximum) + 1`.
///
/// Always in `[1, maximum]`; zero would lock the register.
pub fn start_from_seed(seed: i64, maximum: u32) -> u32 {
    let start = seed.unsigned_abs() % u64::from(maximum) + 1;
    start as u32
}

/// Reduces an arbitrary offset into `[0, maximum)`, shifting negative
/// offsets up into range.
pub fn normalize_offset(offset: i64, maximum: u32) -> u32 {
    offset.rem_euclid(i64::from(maximum)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_known_values() {
        assert_eq!(hash_seed(Some("a")), 97);
        assert_eq!(hash_seed(Some("ab")), 97 * 31 + 98);
        assert_eq!(hash_seed(Some("test")), 3556498);
    }

    #[test]
    fn test_hash_wraps_to_32_bits() {
        let hash = hash_seed(Some("the quick brown fox jumps over the lazy dog"));
        assert!(hash >= i64::from(i32::MIN) && hash <= i64::from(i32::MAX));
    }

    #[test]
    fn test_hash_differs_between_strings() {
        assert_ne!(hash_seed(Some("test 1")), hash_seed(Some("test 2")));
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        // U+1F600 is the surrogate pair D83D DE00.
        let expected = (0xD83Di64 * 31 + 0xDE00) as i32;
        assert_eq!(hash_seed(Some("\u{1F600}")), i64::from(expected));
    }

    #[test]
    fn test_hash_falls_back_to_random() {
        for value in [None, Some("")] {
            let seed = hash_seed(value);
            assert!(seed >= 0);
            assert!(seed as u64 <= MAX_SAFE_INTEGER);
        }
    }

    #[test]
    fn test_start_is_in_range() {
        let maximum = 123;
        for seed in [-500, -5, -1, 0, 1, 123, 500, i64::MIN, i64::MAX] {
            let start = start_from_seed(seed, maximum);
            assert!(start >= 1, "{seed} gives {start}");
            assert!(start <= maximum, "{seed} gives {start}");
        }
        assert_eq!(start_from_seed(0, maximum), 1);
        assert_eq!(start_from_seed(-5, maximum), 6);
        assert_eq!(start_from_seed(123, maximum), 1);
        assert_eq!(start_from_seed(122, maximum), 123);
    }

    #[test]
    fn test_offset_is_in_range() {
        let maximum = 123;
        for offset in [-500, -5, -1, 0, 1, 123, 500, i64::MIN, i64::MAX] {
            let normalized = normalize_offset(offset, maximum);
            assert!(normalized < maximum, "{offset} gives {normalized}");
        }
        assert_eq!(normalize_offset(-1, maximum), 122);
        assert_eq!(normalize_offset(5, maximum), 5);
        assert_eq!(normalize_offset(128, maximum), 5);
    }
}
