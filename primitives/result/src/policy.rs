//! Unwrap policy for failure results.
//!
//! A failure result decides, at construction, what [`crate::Result::unwrap`]
//! does with it: raise a fatal fault or hand the failure payload back.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResultError;

/// What `unwrap` does when it meets a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnwrapPolicy {
    /// Panic with the failure payload.
    Panic,
    /// Return the failure payload as an ordinary value.
    #[default]
    Return,
}

impl UnwrapPolicy {
    /// Get the string representation of the policy.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnwrapPolicy::Panic => "panic",
            UnwrapPolicy::Return => "return",
        }
    }

    /// Whether `unwrap` aborts under this policy.
    pub fn panics(&self) -> bool { matches!(self, UnwrapPolicy::Panic) }
}

impl From<bool> for UnwrapPolicy {
    fn from(panic: bool) -> Self {
        if panic {
            UnwrapPolicy::Panic
        } else {
            UnwrapPolicy::Return
        }
    }
}

impl FromStr for UnwrapPolicy {
    type Err = ResultError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "panic" => Ok(UnwrapPolicy::Panic),
            "return" => Ok(UnwrapPolicy::Return),
            _ => Err(ResultError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for UnwrapPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.as_str()) }
}
