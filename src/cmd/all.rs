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

use std::io::Write;

use scramble_core::Fallible;
use scramble_core::WalkerConfig;

use crate::output::OutputFormat;
use crate::output::write_values;

pub fn print_all(config: &WalkerConfig, format: OutputFormat, out: &mut impl Write) -> Fallible<()> {
    let mut walker = config.build()?;
    let values = walker.all();
    write_values(out, &values, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_permutation() -> Fallible<()> {
        let config = WalkerConfig {
            maximum: 7,
            ..Default::default()
        };
        let mut out = Vec::new();
        print_all(&config, OutputFormat::Json, &mut out)?;
        assert_eq!(String::from_utf8(out).unwrap(), "[6,3,7,5,4,2,1]\n");
        Ok(())
    }

    #[test]
    fn test_invalid_range() {
        let config = WalkerConfig {
            maximum: 1,
            ..Default::default()
        };
        let mut out = Vec::new();
        let result = print_all(&config, OutputFormat::Plain, &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
