// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generator
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate))
            .route("/analysis/{pwd}", web::get().to(handlers::generator::analyze)),
    );

    // Generation history
    cfg.service(
        web::scope("/history")
            .route("", web::get().to(handlers::history::list))
            .route("", web::delete().to(handlers::history::clear)),
    );
}
