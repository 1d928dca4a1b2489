use std::collections::HashMap;

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log;

use crate::submission::models::{SubmitResponse, Submission};
use crate::submission::service::SubmissionService;

pub const SUBMIT_PATH: &str = "/api/submit";

const SUCCESS_MESSAGE: &str = "Submission received and emailed.";
const FAILURE_MESSAGE: &str = "Failed to process submission. Please try again later.";
const INVALID_BODY_MESSAGE: &str = "Invalid submission payload.";

#[utoipa::path(
    post,
    path = "/api/submit",
    tag = "Submission",
    request_body(
        content = HashMap<String, String>,
        description = "Form fields keyed by field name. Values may be strings, string arrays or null."
    ),
    responses(
        (status = 200, description = "Report rendered and emailed", body = SubmitResponse),
        (status = 400, description = "Body is not a JSON object", body = SubmitResponse),
        (status = 405, description = "Method other than POST"),
        (status = 500, description = "Rendering or email delivery failed", body = SubmitResponse)
    )
)]
pub async fn submit(
    service: web::Data<SubmissionService>,
    body: web::Json<Submission>,
) -> impl Responder {
    let submission = body.into_inner();
    log::info!(
        "Received submission with {} fields from {}",
        submission.len(),
        submission.applicant_name().as_deref().unwrap_or("unnamed applicant")
    );

    match service.process(&submission).await {
        Ok(receipt) => {
            log::info!(
                "Submission emailed as {} ({} sections, {} rows)",
                receipt.filename,
                receipt.sections,
                receipt.rows
            );
            HttpResponse::Ok().json(SubmitResponse::ok(SUCCESS_MESSAGE))
        }
        Err(e) => {
            log::error!("Failed to process submission: {}", e);
            HttpResponse::InternalServerError().json(SubmitResponse::failed(FAILURE_MESSAGE))
        }
    }
}

pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    log::warn!("Rejected {} {}", req.method(), req.path());
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "POST"))
        .body("Method Not Allowed")
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected submission body: {}", err);
    let response = HttpResponse::BadRequest().json(SubmitResponse::failed(INVALID_BODY_MESSAGE));
    InternalError::from_response(err, response).into()
}

/// Body limits and the error envelope for malformed submissions.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(2 * 1024 * 1024)
        .error_handler(json_error_handler)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(SUBMIT_PATH)
            .app_data(json_config())
            .route(web::post().to(submit))
            .default_service(web::route().to(method_not_allowed)),
    );
}
