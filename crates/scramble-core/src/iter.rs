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

use std::iter::FusedIterator;

use crate::walker::SequenceWalker;

/// A single pass over the whole permutation, from the first value to the
/// last, independent of the walker it was taken from.
pub struct Iter {
    walker: SequenceWalker,
    remaining: usize,
}

impl Iter {
    fn new(source: &SequenceWalker) -> Self {
        let mut walker = source.clone();
        walker.set_looping(false);
        walker.reset();
        let remaining = walker.maximum() as usize;
        Self { walker, remaining }
    }
}

impl Iterator for Iter {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let value = self.walker.next()?;
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

impl SequenceWalker {
    pub fn iter(&self) -> Iter {
        Iter::new(self)
    }
}

impl IntoIterator for &SequenceWalker {
    type Item = u32;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yields_every_value() {
        let uut = SequenceWalker::new(123, 0, 0, false).unwrap();
        let mut n = 0;
        for _ in &uut {
            n += 1;
        }
        assert_eq!(n, 123);
    }

    #[test]
    fn test_ignores_walker_state() {
        let mut uut = SequenceWalker::new(123, 0, 0, false).unwrap();
        uut.next();
        uut.next();
        assert_eq!(uut.iter().count(), 123);
        assert_eq!(uut.current_pos(), 1);
        assert_eq!(uut.iter().collect::<Vec<_>>(), uut.clone().all());
    }

    #[test]
    fn test_stops_when_looping() {
        let uut = SequenceWalker::new(7, 3, 2, true).unwrap();
        let values: Vec<u32> = uut.iter().collect();
        assert_eq!(values.len(), 7);
        assert!(uut.is_looping());
    }

    #[test]
    fn test_size_hint() {
        let uut = SequenceWalker::new(10, 0, 0, false).unwrap();
        let mut iter = uut.iter();
        assert_eq!(iter.len(), 10);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 8);
        for _ in iter.by_ref() {}
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }
}
