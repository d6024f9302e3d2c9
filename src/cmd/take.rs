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

use std::fs::read_to_string;
use std::fs::write;
use std::io::ErrorKind;
use std::io::Write;

use scramble_core::Cursor;
use scramble_core::Fallible;
use scramble_core::SequenceWalker;
use scramble_core::WalkerConfig;
use scramble_core::fail;
use serde::Deserialize;
use serde::Serialize;

use crate::output::OutputFormat;
use crate::output::write_values;

pub struct TakeConfig {
    pub walker: WalkerConfig,
    pub count: usize,
    pub reverse: bool,
    pub state: Option<String>,
    pub format: OutputFormat,
}

/// What the state file records between runs. The maximum and seed are kept
/// so a cursor is never applied to a walk it did not come from.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct WalkState {
    maximum: u32,
    seed: i64,
    cursor: Cursor,
}

pub fn take_values(config: TakeConfig, out: &mut impl Write) -> Fallible<()> {
    let mut walker = config.walker.build()?;
    if let Some(path) = &config.state {
        if let Some(state) = read_state(path)? {
            if state.maximum != walker.maximum() || state.seed != walker.seed() {
                return fail(format!(
                    "state file {path} belongs to a walk over 1..={} with seed {}.",
                    state.maximum, state.seed
                ));
            }
            walker.try_go_to(state.cursor)?;
        }
    }

    let step: fn(&mut SequenceWalker) -> Option<u32> = if config.reverse {
        SequenceWalker::prev
    } else {
        SequenceWalker::next
    };
    let mut values = Vec::with_capacity(config.count.min(walker.maximum() as usize));
    while values.len() < config.count {
        match step(&mut walker) {
            Some(value) => values.push(value),
            None => break,
        }
    }
    write_values(out, &values, config.format)?;

    if let Some(path) = &config.state {
        let state = WalkState {
            maximum: walker.maximum(),
            seed: walker.seed(),
            cursor: walker.cursor(),
        };
        log::debug!("writing {state:?} to {path}");
        write(path, serde_json::to_string_pretty(&state)?)?;
    }
    Ok(())
}

fn read_state(path: &str) -> Fallible<Option<WalkState>> {
    match read_to_string(path) {
        Ok(text) => {
            let state: WalkState = serde_json::from_str(&text)?;
            log::debug!("resuming from {state:?}");
            Ok(Some(state))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
