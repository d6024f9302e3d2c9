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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::walker::MAX_MAXIMUM;
use crate::walker::MIN_MAXIMUM;

#[derive(Debug, PartialEq)]
pub struct ErrorReport {
    message: String,
}

impl ErrorReport {
    pub fn new(msg: impl Into<String>) -> Self {
        ErrorReport {
            message: msg.into(),
        }
    }
}

impl From<std::io::Error> for ErrorReport {
    fn from(value: std::io::Error) -> Self {
        ErrorReport {
            message: format!("I/O error: {value:#?}"),
        }
    }
}

impl From<serde_json::Error> for ErrorReport {
    fn from(value: serde_json::Error) -> Self {
        ErrorReport {
            message: format!("JSON error: {value:#?}"),
        }
    }
}

impl From<toml::de::Error> for ErrorReport {
    fn from(value: toml::de::Error) -> Self {
        ErrorReport {
            message: format!("TOML error: {value}"),
        }
    }
}

impl From<InvalidRangeError> for ErrorReport {
    fn from(value: InvalidRangeError) -> Self {
        ErrorReport {
            message: value.to_string(),
        }
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

impl Error for ErrorReport {}

pub type Fallible<T> = Result<T, ErrorReport>;

pub fn fail<T>(msg: impl Into<String>) -> Fallible<T> {
    Err(ErrorReport {
        message: msg.into(),
    })
}

/// The requested maximum cannot be walked by any register in the tap table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError {
    pub maximum: u64,
}

impl Display for InvalidRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\"maximum\" must be a number between {MIN_MAXIMUM} and {MAX_MAXIMUM} inclusive, got {}",
            self.maximum
        )
    }
}

impl Error for InvalidRangeError {}

/// A value handed to [`crate::bits::rotate`] lies outside `[0, maximum]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationError {
    ValueAboveMaximum { value: u32, maximum: u32 },
    OffsetAboveMaximum { offset: u32, maximum: u32 },
}

impl Display for RotationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RotationError::ValueAboveMaximum { value, maximum } => {
                write!(f, "not expecting number > max ({value} > {maximum})")
            }
            RotationError::OffsetAboveMaximum { offset, maximum } => {
                write!(f, "not expecting offset > max ({offset} > {maximum})")
            }
        }
    }
}

impl Error for RotationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_display() {
        let report = ErrorReport::new("state file is empty");
        assert_eq!(report.to_string(), "error: state file is empty");
    }

    #[test]
    fn test_invalid_range_message() {
        let report: ErrorReport = InvalidRangeError { maximum: 1 }.into();
        assert_eq!(
            report.to_string(),
            "error: \"maximum\" must be a number between 2 and 2147483647 inclusive, got 1"
        );
    }

    #[test]
    fn test_fail() {
        let result: Fallible<()> = fail("nope");
        assert_eq!(result, Err(ErrorReport::new("nope")));
    }
}
