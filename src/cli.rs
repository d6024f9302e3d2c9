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
use std::io::stdout;

use clap::Args;
use clap::Parser;
use scramble_core::Fallible;
use scramble_core::WalkerConfig;
use scramble_core::fail;

use crate::cmd::all::print_all;
use crate::cmd::hash::print_hash;
use crate::cmd::take::TakeConfig;
use crate::cmd::take::take_values;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Print the whole permutation.
    All {
        #[command(flatten)]
        walker: WalkerArgs,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Print the next values of a walk.
    Take {
        #[command(flatten)]
        walker: WalkerArgs,
        /// How many values to print. Fewer are printed if the walk ends first.
        #[arg(long)]
        count: usize,
        /// Step backward instead of forward.
        #[arg(long)]
        reverse: bool,
        /// JSON file holding the walk's position. Read before stepping if it
        /// exists and written afterwards, so repeated calls continue the walk.
        #[arg(long)]
        state: Option<String>,
        /// Which output format to use.
        #[arg(long, default_value_t = OutputFormat::Plain)]
        format: OutputFormat,
    },
    /// Print the numeric seed derived from a piece of text.
    Hash {
        /// The text to hash. Empty text gives a random seed.
        text: String,
    },
}

#[derive(Args)]
struct WalkerArgs {
    /// Highest value in the range. May come from the config file instead.
    maximum: Option<u32>,
    /// Numeric seed. Default is 0.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "seed_text")]
    seed: Option<i64>,
    /// Text to hash into a seed.
    #[arg(long)]
    seed_text: Option<String>,
    /// Rotation applied to every value. Default is 0.
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i64>,
    /// Start over after the last value instead of stopping.
    #[arg(long = "loop")]
    looping: bool,
    /// Path to a TOML walker config. Flags override its values.
    #[arg(long)]
    config: Option<String>,
}

impl WalkerArgs {
    fn resolve(self) -> Fallible<WalkerConfig> {
        let mut config = match &self.config {
            Some(path) => {
                log::debug!("reading walker config from {path}");
                WalkerConfig::from_toml_str(&read_to_string(path)?)?
            }
            None => WalkerConfig::default(),
        };
        if let Some(maximum) = self.maximum {
            config.maximum = maximum;
        }
        if config.maximum == 0 {
            return fail("no maximum given: pass it as an argument or set it in the config file.");
        }
        if self.seed.is_some() || self.seed_text.is_some() {
            config.seed = self.seed;
            config.seed_text = self.seed_text;
        }
        if let Some(offset) = self.offset {
            config.offset = offset;
        }
        if self.looping {
            config.looping = true;
        }
        Ok(config)
    }
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    let mut out = stdout().lock();
    match cli {
        Command::All { walker, format } => print_all(&walker.resolve()?, format, &mut out),
        Command::Take {
            walker,
            count,
            reverse,
            state,
            format,
        } => {
            let config = TakeConfig {
                walker: walker.resolve()?,
                count,
                reverse,
                state,
                format,
            };
            take_values(config, &mut out)
        }
        Command::Hash { text } => print_hash(&text, &mut out),
    }
}
