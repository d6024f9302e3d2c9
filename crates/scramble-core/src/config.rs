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

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::InvalidRangeError;
use crate::seed::hash_seed;
use crate::walker::SequenceWalker;

/// Everything needed to rebuild a walker, as written in a TOML file:
///
/// ```toml
/// maximum = 1000
/// seed_text = "invoices"
/// offset = 17
/// loop = false
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WalkerConfig {
    pub maximum: u32,
    pub seed: Option<i64>,
    pub seed_text: Option<String>,
    #[serde(default)]
    pub offset: i64,
    #[serde(default, rename = "loop")]
    pub looping: bool,
}

impl WalkerConfig {
    pub fn from_toml_str(text: &str) -> Fallible<Self> {
        let config: WalkerConfig = toml::from_str(text)?;
        log::debug!("loaded walker config: {config:?}");
        Ok(config)
    }

    /// The numeric seed: an explicit `seed` wins over `seed_text`, and
    /// neither means zero.
    pub fn resolve_seed(&self) -> i64 {
        match (self.seed, self.seed_text.as_deref()) {
            (Some(seed), _) => seed,
            (None, Some(text)) => hash_seed(Some(text)),
            (None, None) => 0,
        }
    }

    pub fn build(&self) -> Result<SequenceWalker, InvalidRangeError> {
        SequenceWalker::new(self.maximum, self.resolve_seed(), self.offset, self.looping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorReport;

    #[test]
    fn test_parse_full() -> Fallible<()> {
        let config = WalkerConfig::from_toml_str(
            "maximum = 1000\nseed = -4\noffset = 17\nloop = true\n",
        )?;
        assert_eq!(
            config,
            WalkerConfig {
                maximum: 1000,
                seed: Some(-4),
                seed_text: None,
                offset: 17,
                looping: true,
            }
        );
        let walker = config.build()?;
        assert_eq!(walker.start(), 5);
        assert_eq!(walker.output_offset(), 17);
        assert!(walker.is_looping());
        Ok(())
    }

    #[test]
    fn test_defaults() -> Fallible<()> {
        let config = WalkerConfig::from_toml_str("maximum = 50")?;
        assert_eq!(config.resolve_seed(), 0);
        assert_eq!(config.offset, 0);
        assert!(!config.looping);
        Ok(())
    }

    #[test]
    fn test_seed_text() -> Fallible<()> {
        let config = WalkerConfig::from_toml_str("maximum = 50\nseed_text = \"test\"")?;
        assert_eq!(config.resolve_seed(), 3556498);
        let config = WalkerConfig::from_toml_str("maximum = 50\nseed = 3\nseed_text = \"test\"")?;
        assert_eq!(config.resolve_seed(), 3);
        Ok(())
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = WalkerConfig::from_toml_str("maximum = 50\nsalt = 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_maximum() {
        assert!(WalkerConfig::from_toml_str("seed = 1").is_err());
    }

    #[test]
    fn test_build_invalid_range() {
        let config = WalkerConfig {
            maximum: 1,
            ..Default::default()
        };
        let err: ErrorReport = config.build().unwrap_err().into();
        assert!(err.to_string().contains("between 2 and 2147483647"));
    }
}
