mod common;

use std::sync::Arc;

use actix_web::http::{header, StatusCode};
use actix_web::{test, web, App};
use serde_json::json;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use visa_form_mailer::render::{DocumentFormat, DocxRenderer, TextRenderer};
use visa_form_mailer::submission::handlers;
use visa_form_mailer::submission::SubmitResponse;

use common::{
    test_service, CountingRenderer, FailingDispatcher, FailingRenderer, RecordingDispatcher,
};

#[actix_web::test]
async fn test_get_is_rejected_without_side_effects() {
    let renderer = Arc::new(CountingRenderer::new(Arc::new(TextRenderer::new())));
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let service = test_service(renderer.clone(), dispatcher.clone());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/submit").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.headers().get(header::ALLOW).unwrap(), "POST");
    assert_eq!(renderer.calls(), 0);
    assert!(dispatcher.sent().await.is_empty());
}

#[actix_web::test]
async fn test_put_is_rejected() {
    let service = test_service(
        Arc::new(TextRenderer::new()),
        Arc::new(RecordingDispatcher::new()),
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::put()
        .uri("/api/submit")
        .set_json(json!({ "FullName": "Jane" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[actix_web::test]
async fn test_post_renders_and_emails_once() {
    let renderer = Arc::new(CountingRenderer::new(Arc::new(DocxRenderer::new(
        visa_form_mailer::render::Assets::new(std::env::temp_dir(), false),
    ))));
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let service = test_service(renderer.clone(), dispatcher.clone());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({
            "FullName": "محمد علي",
            "Email": "a@b.com",
            "Phone": "123",
            "Languages": ["English", "Arabic"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: SubmitResponse = test::read_body_json(resp).await;
    assert!(body.success);

    assert_eq!(renderer.calls(), 1);
    let sent = dispatcher.sent().await;
    assert_eq!(sent.len(), 1);

    let email = &sent[0];
    assert_eq!(email.subject, "DOCX ATTACHED: DS-160 Submission - محمد علي");
    assert_eq!(email.to[0].email, "visa-desk@example.com");
    assert_eq!(email.attachment.content_type, DocumentFormat::Docx.mime_type());
    assert!(email.attachment.filename.starts_with("DS-160_Submission_"));
    assert!(email.attachment.filename.ends_with(".docx"));

    let decoded = BASE64.decode(email.attachment.encoded()).unwrap();
    assert_eq!(&decoded[..2], b"PK");
}

#[actix_web::test]
async fn test_dispatch_failure_returns_500_envelope() {
    let dispatcher = Arc::new(FailingDispatcher::new());
    let service = test_service(Arc::new(TextRenderer::new()), dispatcher.clone());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({ "FullName": "Jane" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: SubmitResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(!body.message.contains("Key not found"));
    assert_eq!(dispatcher.attempts(), 1);
}

#[actix_web::test]
async fn test_render_failure_returns_500_without_sending() {
    let renderer = Arc::new(FailingRenderer::new());
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let service = test_service(renderer.clone(), dispatcher.clone());

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({ "FullName": "Jane" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: SubmitResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(!body.message.contains(FailingRenderer::CAUSE));
    assert!(!body.message.contains("Typst"));
    assert_eq!(renderer.calls(), 1);
    assert!(dispatcher.sent().await.is_empty());
}

#[actix_web::test]
async fn test_malformed_json_returns_400_envelope() {
    let renderer = Arc::new(CountingRenderer::new(Arc::new(TextRenderer::new())));
    let service = test_service(renderer.clone(), Arc::new(RecordingDispatcher::new()));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{ malformed json ")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: SubmitResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert_eq!(renderer.calls(), 0);
}

#[actix_web::test]
async fn test_json_array_body_is_rejected() {
    let service = test_service(
        Arc::new(TextRenderer::new()),
        Arc::new(RecordingDispatcher::new()),
    );
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!(["FullName", "Jane"]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_empty_object_still_sends_report() {
    let dispatcher = Arc::new(RecordingDispatcher::new());
    let service = test_service(Arc::new(TextRenderer::new()), dispatcher.clone());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .configure(handlers::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/submit")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let sent = dispatcher.sent().await;
    assert!(sent[0].subject.ends_with("- Client"));
}
