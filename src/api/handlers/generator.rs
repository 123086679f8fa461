// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use std::sync::{Arc, Mutex};

use crate::api::types::{
    PasswordAnalysisResponse, PasswordGenerationRequest, PasswordGenerationResponse,
};
use crate::generators::password::generate_password;
use crate::history::PasswordHistory;
use crate::models::GenerationOptions;
use crate::strength::{class_feedback, score_password, suggest_stronger, StrengthLabel};

/// Generate a password
///
/// Generates a random password from the default charset minus the excluded
/// characters, and records it in the generation history.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid request", body = PasswordGenerationResponse)
    )
)]
pub async fn generate(
    history: web::Data<Arc<Mutex<PasswordHistory>>>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let defaults = GenerationOptions::default();
    let options = GenerationOptions {
        length: generation_req.length.unwrap_or(defaults.length),
        exclude_chars: generation_req.exclude_chars.clone().unwrap_or_default(),
    };

    match generate_password(&options) {
        Ok(password) => {
            let score = score_password(&password);

            match history.lock() {
                Ok(mut history) => {
                    history.record(&password, score);
                    if let Err(e) = history.save() {
                        log::warn!("Failed to save password history: {}", e);
                    }
                }
                Err(_) => log::warn!("Password history is unavailable; entry not recorded"),
            }

            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                password: Some(password),
                strength: Some(score),
                label: Some(StrengthLabel::from_score(score).to_string()),
                error: None,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(PasswordGenerationResponse {
            success: false,
            password: None,
            strength: None,
            label: None,
            error: Some(e.to_string()),
        }),
    }
}

/// Analyze password strength
///
/// Scores the password against the four character classes and, when below
/// Strong, returns per-class feedback and a stronger suggestion.
#[utoipa::path(
    get,
    path = "/generator/analysis/{pwd}",
    tag = "Generator",
    params(
        ("pwd" = String, Path, description = "Password to analyze")
    ),
    responses(
        (status = 200, description = "Password analysis result", body = PasswordAnalysisResponse)
    )
)]
pub async fn analyze(path: web::Path<String>) -> impl Responder {
    let password = path.into_inner();

    // URL decode the password if needed
    let decoded_password = match urlencoding::decode(&password) {
        Ok(decoded) => decoded.to_string(),
        Err(_) => password.clone(),
    };

    let score = score_password(&decoded_password);
    let label = StrengthLabel::from_score(score);
    let suggestion = (score < 3).then(|| suggest_stronger(&decoded_password));

    HttpResponse::Ok().json(PasswordAnalysisResponse {
        success: true,
        strength: score,
        label: label.to_string(),
        suggestion,
        feedback: class_feedback(&decoded_password),
        error: None,
    })
}
