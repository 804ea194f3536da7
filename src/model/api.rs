use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

/// One-shot status message shown on the next rendered page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FlashDto {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Fleet option for selection lists.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FleetDto {
    pub id: i32,
    pub name: String,
}
