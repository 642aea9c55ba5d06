use serde::{Deserialize, Serialize};

/// A single finding reported by the hub for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub id: String,

    pub score: u32,

    #[serde(default)]
    pub warning_class: String,

    #[serde(default)]
    pub file: String,

    #[serde(default)]
    pub procedure: String,
}

impl Warning {
    pub fn new(id: &str, score: u32) -> Self {
        Self {
            id: id.to_string(),
            score,
            warning_class: String::new(),
            file: String::new(),
            procedure: String::new(),
        }
    }
}
