// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub exclude_chars: String,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            exclude_chars: String::new(),
        }
    }
}

// One generated password as remembered by the history
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntry {
    pub password: String,
    pub strength: u8,
    pub created_at: DateTime<Utc>,
}
