use actix_cors::Cors;
use actix_web::middleware::Compress;
use actix_web::{http::header, web, App, HttpServer};
use actix_web_prometheus::PrometheusMetricsBuilder;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod bidi;
pub mod config;
pub mod layout;
pub mod mail;
pub mod render;
pub mod submission;

pub use crate::config::AppConfig;
pub use crate::submission::SubmissionService;

#[derive(OpenApi)]
#[openapi(
    paths(crate::submission::handlers::submit),
    components(schemas(submission::models::SubmitResponse)),
    tags(
        (name = "Submission", description = "DS-160 form submission endpoint.")
    ),
    servers(
        (url = "http://127.0.0.1:8080", description = "Localhost server")
    )
)]
pub struct ApiDoc;

/// CORS policy for the form's origins. No configured origins allows any.
pub fn build_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}

pub async fn run() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if config.mail.api_key.is_empty() {
        log::warn!("BREVO_API_KEY is not set; email delivery will be rejected by the API");
    }
    if config.allowed_origins.is_empty() {
        log::warn!("ALLOWED_ORIGINS is not set; accepting submissions from any origin");
    }

    let service = match SubmissionService::from_config(&config) {
        Ok(service) => web::Data::new(service),
        Err(e) => {
            log::error!("Failed to initialise email dispatcher: {}", e);
            std::process::exit(1);
        }
    };

    let prometheus = PrometheusMetricsBuilder::new("visa_form_mailer")
        .endpoint("/metrics")
        .build()
        .map_err(|e| std::io::Error::other(format!("Failed to create Prometheus metrics middleware: {e}")))?;

    log::info!(
        "Starting server at http://{}:{} ({} attachments, recipient {})",
        config.host,
        config.port,
        config.document.format.label(),
        config.mail.recipient_email
    );

    let allowed_origins = config.allowed_origins.clone();
    HttpServer::new(move || {
        let service = service.clone();
        let prometheus = prometheus.clone();
        let cors = build_cors(&allowed_origins);

        App::new()
            .wrap(Compress::default())
            .wrap(prometheus)
            .wrap(cors)
            .app_data(service)
            .configure(submission::handlers::config)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
    })
    .keep_alive(actix_web::http::KeepAlive::Os)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
