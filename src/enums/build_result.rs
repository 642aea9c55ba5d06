use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::GateError;

/// Build status, ordered by severity so `max` picks the worst one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BuildResult {
    Success,
    Unstable,
    Failure,
}

impl BuildResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildResult::Success => "SUCCESS",
            BuildResult::Unstable => "UNSTABLE",
            BuildResult::Failure => "FAILURE",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            BuildResult::Success => "✅",
            BuildResult::Unstable => "⚠️",
            BuildResult::Failure => "❌",
        }
    }

    /// Folds `other` into `self`; the result is never less severe than either side.
    pub fn combine(self, other: BuildResult) -> BuildResult {
        self.max(other)
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            BuildResult::Success => 0,
            BuildResult::Unstable => 2,
            BuildResult::Failure => 3,
        }
    }
}

impl Default for BuildResult {
    fn default() -> Self {
        BuildResult::Success
    }
}

impl fmt::Display for BuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuildResult {
    type Err = GateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SUCCESS" => Ok(BuildResult::Success),
            "UNSTABLE" => Ok(BuildResult::Unstable),
            "FAILURE" => Ok(BuildResult::Failure),
            other => Err(GateError::config_error(
                "warranted_result",
                &format!("'{}' is not one of SUCCESS, UNSTABLE, FAILURE", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_order_is_success_unstable_failure() {
        assert!(BuildResult::Success < BuildResult::Unstable);
        assert!(BuildResult::Unstable < BuildResult::Failure);
    }

    #[test]
    fn combine_never_improves() {
        assert_eq!(BuildResult::Failure.combine(BuildResult::Success), BuildResult::Failure);
        assert_eq!(BuildResult::Success.combine(BuildResult::Unstable), BuildResult::Unstable);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("unstable".parse::<BuildResult>().unwrap(), BuildResult::Unstable);
        assert!("broken".parse::<BuildResult>().is_err());
    }
}
