// src/api/mod.rs
use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use std::sync::{Arc, Mutex};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

use crate::history::PasswordHistory;

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate,
        crate::api::handlers::generator::analyze,

        // History endpoints
        crate::api::handlers::history::list,
        crate::api::handlers::history::clear
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::PasswordAnalysisResponse,
            crate::api::types::HistoryListResponse,
            crate::api::types::SuccessResponse,
            crate::models::HistoryEntry,
            crate::strength::StrengthLabel
        )
    ),
    tags(
        (name = "Generator", description = "Password generation and analysis endpoints"),
        (name = "History", description = "Generation history endpoints")
    ),
    info(
        title = "SmartPass API",
        version = "0.1.0",
        description = "Password generator & strength checker API",
        license(name = "MIT")
    )
)]
struct ApiDoc;

pub async fn start_server(
    history: Arc<Mutex<PasswordHistory>>,
    address: String,
    port: u16,
) -> std::io::Result<()> {
    log::info!("Starting SmartPass API server on {}:{}", address, port);

    let history_data = web::Data::new(history);

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(history_data.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            // Configure the regular API routes
            .configure(routes::configure_routes)
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod handlers;
pub mod routes;
pub mod types;
