// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::HistoryEntry;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (default: 12)
    pub length: Option<usize>,
    /// Characters to exclude from the charset (default: none)
    pub exclude_chars: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Password strength score (0-4)
    pub strength: Option<u8>,
    /// Password strength rating
    pub label: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength score (0-4)
    pub strength: u8,
    /// Password strength rating
    pub label: String,
    /// Stronger variant of the password (present when below Strong)
    pub suggestion: Option<String>,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HistoryListResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Recorded passwords, oldest first
    pub entries: Vec<HistoryEntry>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
}
