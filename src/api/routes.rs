// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Password generation
    cfg.route("/generate", web::get().to(handlers::generator::generate_password))
        .route("/generate/batch", web::post().to(handlers::generator::generate_batch));

    // Strength assessment
    cfg.route("/strength", web::get().to(handlers::generator::check_strength));
}
