// src/api/handlers/history.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::{Arc, Mutex};

use crate::api::types::{HistoryListResponse, SuccessResponse};
use crate::history::PasswordHistory;

/// List recently generated passwords
#[utoipa::path(
    get,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "Recorded passwords", body = HistoryListResponse),
        (status = 500, description = "History unavailable", body = HistoryListResponse)
    )
)]
pub async fn list(history: web::Data<Arc<Mutex<PasswordHistory>>>) -> impl Responder {
    match history.lock() {
        Ok(history) => HttpResponse::Ok().json(HistoryListResponse {
            success: true,
            entries: history.entries().iter().cloned().collect(),
            error: None,
        }),
        Err(_) => HttpResponse::InternalServerError().json(HistoryListResponse {
            success: false,
            entries: Vec::new(),
            error: Some("Password history is unavailable".to_string()),
        }),
    }
}

/// Clear the password history
#[utoipa::path(
    delete,
    path = "/history",
    tag = "History",
    responses(
        (status = 200, description = "History cleared", body = SuccessResponse),
        (status = 500, description = "History unavailable", body = SuccessResponse)
    )
)]
pub async fn clear(history: web::Data<Arc<Mutex<PasswordHistory>>>) -> impl Responder {
    match history.lock() {
        Ok(mut history) => match history.clear() {
            Ok(()) => HttpResponse::Ok().json(SuccessResponse {
                success: true,
                message: "Password history cleared".to_string(),
            }),
            Err(e) => HttpResponse::InternalServerError().json(SuccessResponse {
                success: false,
                message: format!("Failed to clear history: {}", e),
            }),
        },
        Err(_) => HttpResponse::InternalServerError().json(SuccessResponse {
            success: false,
            message: "Password history is unavailable".to_string(),
        }),
    }
}
