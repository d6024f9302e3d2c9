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

//! WASM bindings for scramble - walks a seeded shuffle in the browser.

use wasm_bindgen::prelude::*;
use web_sys::console;

use scramble_core::Fallible;
use scramble_core::InvalidRangeError;
use scramble_core::hash_seed;
use scramble_core::walker::Cursor;
use scramble_core::walker::SequenceWalker;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console::log_1(&"scramble WASM initialized".into());
}

/// A walker over `1..=maximum`, exposed to JavaScript.
#[wasm_bindgen]
pub struct ScrambleWalker {
    inner: SequenceWalker,
}

#[wasm_bindgen]
impl ScrambleWalker {
    /// Throws if `maximum` is outside `[2, 2^31 - 1]`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        maximum: u32,
        seed: f64,
        offset: f64,
        looping: Option<bool>,
    ) -> Result<ScrambleWalker, JsError> {
        Ok(Self {
            inner: build_walker(maximum, seed, offset, looping)?,
        })
    }

    /// Seeds the walker from text instead of a number.
    #[wasm_bindgen(js_name = fromSeedText)]
    pub fn from_seed_text(
        maximum: u32,
        text: &str,
        offset: f64,
        looping: Option<bool>,
    ) -> Result<ScrambleWalker, JsError> {
        let inner = SequenceWalker::with_seed_text(
            maximum,
            text,
            offset.trunc() as i64,
            looping.unwrap_or(false),
        )?;
        Ok(Self { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn maximum(&self) -> u32 {
        self.inner.maximum()
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<u32> {
        self.inner.next()
    }

    pub fn prev(&mut self) -> Option<u32> {
        self.inner.prev()
    }

    pub fn current(&self) -> Option<u32> {
        self.inner.current()
    }

    #[wasm_bindgen(js_name = currentPos)]
    pub fn current_pos(&self) -> f64 {
        self.inner.current_pos() as f64
    }

    pub fn lookahead(&self, n: usize) -> Vec<u32> {
        self.inner.lookahead(n)
    }

    pub fn lookbehind(&self, n: usize) -> Vec<u32> {
        self.inner.lookbehind(n)
    }

    pub fn all(&mut self) -> Vec<u32> {
        self.inner.all()
    }

    #[wasm_bindgen(js_name = clone)]
    pub fn duplicate(&self) -> ScrambleWalker {
        Self {
            inner: self.inner.clone(),
        }
    }

    /// The current position as JSON, for storing and passing to `goToJson`.
    #[wasm_bindgen(js_name = cursorJson)]
    pub fn cursor_json(&self) -> Result<String, JsError> {
        Ok(cursor_to_json(&self.inner)?)
    }

    #[wasm_bindgen(js_name = goToJson)]
    pub fn go_to_json(&mut self, json: &str) -> Result<(), JsError> {
        Ok(apply_cursor_json(&mut self.inner, json)?)
    }

    /// Hashes text into a seed; empty text gives a random one.
    #[wasm_bindgen(js_name = hashSeed)]
    pub fn hash_seed(text: Option<String>) -> f64 {
        hash_seed(text.as_deref()) as f64
    }
}

/// JavaScript numbers arrive as floats; fractions are dropped.
fn build_walker(
    maximum: u32,
    seed: f64,
    offset: f64,
    looping: Option<bool>,
) -> Result<SequenceWalker, InvalidRangeError> {
    SequenceWalker::new(
        maximum,
        seed.trunc() as i64,
        offset.trunc() as i64,
        looping.unwrap_or(false),
    )
}

fn cursor_to_json(walker: &SequenceWalker) -> Fallible<String> {
    Ok(serde_json::to_string(&walker.cursor())?)
}

fn apply_cursor_json(walker: &mut SequenceWalker, json: &str) -> Fallible<()> {
    let cursor: Cursor = serde_json::from_str(json)?;
    walker.try_go_to(cursor)
}
