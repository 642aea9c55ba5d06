use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertColor {
    Red,
    Yellow,
    Blue,
    Green,
    Other,
}

impl AlertColor {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => AlertColor::Red,
            "yellow" => AlertColor::Yellow,
            "blue" => AlertColor::Blue,
            "green" => AlertColor::Green,
            _ => AlertColor::Other,
        }
    }
}
