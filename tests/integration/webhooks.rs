use actix_web::{http::StatusCode, test, App};
use batch_mint_relayer::{api::routes::configure_routes, constants::WEBHOOK_SIGNATURE_HEADER_NAME};
use serde_json::{json, Value};

use super::common::{app_state, sign};

const SUCCEEDED: &[u8] = br#"{"type":"transaction_intent.succeeded","data":{"id":"T"}}"#;

#[actix_web::test]
async fn signed_succeeded_event_is_acknowledged() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/webhooks/openfort")
        .insert_header((WEBHOOK_SIGNATURE_HEADER_NAME, sign(SUCCEEDED)))
        .set_payload(SUCCEEDED)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"received": true}));
}

#[actix_web::test]
async fn byte_flipped_signature_is_rejected() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;
    let mut signature = sign(SUCCEEDED).into_bytes();
    signature[10] = if signature[10] == b'f' { b'e' } else { b'f' };

    let req = test::TestRequest::post()
        .uri("/api/webhooks/openfort")
        .insert_header((
            WEBHOOK_SIGNATURE_HEADER_NAME,
            String::from_utf8(signature).unwrap(),
        ))
        .set_payload(SUCCEEDED)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "AUTHENTICATION_FAILED");
}

#[actix_web::test]
async fn signature_over_reformatted_body_is_rejected() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;
    let reformatted = br#"{"type": "transaction_intent.succeeded", "data": {"id": "T"}}"#;

    let req = test::TestRequest::post()
        .uri("/api/webhooks/openfort")
        .insert_header((WEBHOOK_SIGNATURE_HEADER_NAME, sign(SUCCEEDED)))
        .set_payload(&reformatted[..])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn unrecognized_event_type_is_acknowledged() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;
    let payload = br#"{"type":"player.created","data":{"id":"pla_1"}}"#;

    let req = test::TestRequest::post()
        .uri("/api/webhooks/openfort")
        .insert_header((WEBHOOK_SIGNATURE_HEADER_NAME, sign(payload)))
        .set_payload(&payload[..])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn failed_event_with_error_is_acknowledged() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;
    let payload =
        br#"{"type":"transaction_intent.failed","data":{"id":"T","error":"execution reverted"}}"#;

    let req = test::TestRequest::post()
        .uri("/api/webhooks/openfort")
        .insert_header((WEBHOOK_SIGNATURE_HEADER_NAME, sign(payload)))
        .set_payload(&payload[..])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn signed_but_malformed_body_is_bad_request() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;
    let payload = b"not json at all";

    let req = test::TestRequest::post()
        .uri("/api/webhooks/openfort")
        .insert_header((WEBHOOK_SIGNATURE_HEADER_NAME, sign(payload)))
        .set_payload(&payload[..])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
