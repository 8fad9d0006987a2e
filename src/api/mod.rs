// src/api/mod.rs
use actix_web::{middleware, web, App, HttpServer};
use actix_cors::Cors;
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::generate_batch,
        crate::api::handlers::generator::check_strength,
    ),
    components(
        schemas(
            crate::api::types::PasswordResponse,
            crate::api::types::BatchRequest,
            crate::api::types::BatchResponse,
            crate::api::types::StrengthResponse,
            crate::api::types::ErrorResponse,
            crate::models::StrengthLabel,
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Strength", description = "Password strength assessment")
    ),
    info(
        title = "Password Generator API",
        version = "1.0",
        description = "Random password generation and strength scoring",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub async fn start_server(generator: PasswordGenerator, config: &Config) -> std::io::Result<()> {
    log::info!(
        "Starting Password Generator API on {}:{} (rng policy: {:?})",
        config.web_address, config.web_port, config.rng_policy
    );

    let generator_data = web::Data::new(generator);
    let allow_any_origin = config.cors_allow_any_origin;

    HttpServer::new(move || {
        let cors = if allow_any_origin {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST"])
                .allowed_headers(vec!["Content-Type", "Accept"])
                .max_age(3600)
        } else {
            Cors::default()
        };

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(generator_data.clone())
            .app_data(utils::query_config())
            .app_data(utils::json_config())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/docs/{_:.*}")
                    .url("/openapi.json", ApiDoc::openapi())
            )
            // Add Redoc
            .service(Redoc::with_url("/redoc", ApiDoc::openapi()))
            .configure(routes::configure_routes)
    })
    .bind((config.web_address.as_str(), config.web_port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_documents_every_endpoint() {
        let doc = ApiDoc::openapi();
        assert_eq!(doc.info.title, "Password Generator API");
        for path in ["/generate", "/generate/batch", "/strength"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
