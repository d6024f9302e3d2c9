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

//! scramble-core: walk a seeded shuffle of `1..=maximum` without storing it.
//!
//! This library provides:
//! - A reversible Galois LFSR walker with forward and backward stepping
//! - The fixed table of feedback masks it draws from
//! - Seed hashing and offset helpers
//! - A TOML-loadable walker configuration

pub mod bits;
pub mod config;
pub mod error;
pub mod iter;
pub mod seed;
pub mod taps;
pub mod walker;

// Re-exports for convenience
pub use bits::{bit_width, rotate};
pub use config::WalkerConfig;
pub use error::{ErrorReport, Fallible, InvalidRangeError, RotationError, fail};
pub use iter::Iter;
pub use seed::hash_seed;
pub use walker::{Cursor, MAX_MAXIMUM, MIN_MAXIMUM, SequenceWalker, Traversal};
