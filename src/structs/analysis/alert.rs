use serde::{Deserialize, Serialize};
use crate::enums::alert_color::AlertColor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub color: String,

    #[serde(default)]
    pub message: String,
}

impl Alert {
    pub fn new(color: AlertColor, message: &str) -> Self {
        Self {
            color: format!("{:?}", color).to_ascii_lowercase(),
            message: message.to_string(),
        }
    }

    pub fn level(&self) -> AlertColor {
        AlertColor::from_name(&self.color)
    }
}
