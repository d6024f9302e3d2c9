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

use std::fmt::Display;
use std::fmt::Formatter;
use std::io::Write;

use clap::ValueEnum;
use scramble_core::Fallible;

#[derive(ValueEnum, Clone, Copy, PartialEq, Debug)]
pub enum OutputFormat {
    /// One value per line.
    Plain,
    /// A single JSON array.
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn write_values(out: &mut impl Write, values: &[u32], format: OutputFormat) -> Fallible<()> {
    match format {
        OutputFormat::Plain => {
            for value in values {
                writeln!(out, "{value}")?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string(values)?)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain() -> Fallible<()> {
        let mut out = Vec::new();
        write_values(&mut out, &[3, 1, 2], OutputFormat::Plain)?;
        assert_eq!(String::from_utf8(out).unwrap(), "3\n1\n2\n");
        Ok(())
    }

    #[test]
    fn test_json() -> Fallible<()> {
        let mut out = Vec::new();
        write_values(&mut out, &[3, 1, 2], OutputFormat::Json)?;
        assert_eq!(String::from_utf8(out).unwrap(), "[3,1,2]\n");
        Ok(())
    }

    #[test]
    fn test_empty() -> Fallible<()> {
        let mut out = Vec::new();
        write_values(&mut out, &[], OutputFormat::Plain)?;
        assert!(out.is_empty());
        Ok(())
    }
}
