use std::fmt;
use serde::{Deserialize, Serialize};

/// Which warnings the hub returns for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityFilter {
    /// Every warning that is currently live.
    Active,
    /// Warnings introduced since the baseline analysis.
    New,
}

impl VisibilityFilter {
    pub fn name(&self) -> &'static str {
        match self {
            VisibilityFilter::Active => "active",
            VisibilityFilter::New => "new",
        }
    }
}

impl fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
