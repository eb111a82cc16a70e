use actix_web::{http::StatusCode, test, App};
use batch_mint_relayer::api::routes::configure_routes;
use serde_json::{json, Value};

use super::common::{app_state, bearer};

fn batch(token: Option<&str>) -> Value {
    let mut body = json!({
        "accountHandle": "acc_integration",
        "contractAddress": "0x00000000000000000000000000000000000000c0",
        "recipients": [
            "0x00000000000000000000000000000000000000a1",
            "0x00000000000000000000000000000000000000b2",
            "0x00000000000000000000000000000000000000c3"
        ]
    });
    if let Some(token) = token {
        body["idempotencyToken"] = json!(token);
    }
    body
}

#[actix_web::test]
async fn three_recipients_without_token_are_filed() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/batch-mint")
        .insert_header(bearer())
        .set_json(batch(None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["itemCount"], 3);
    assert_eq!(body["state"], "pending");
    assert!(body["transactionId"].as_str().unwrap().starts_with("tin_"));
    assert!(uuid::Uuid::parse_str(body["idempotencyToken"].as_str().unwrap()).is_ok());
}

#[actix_web::test]
async fn reused_token_is_reported_as_duplicate() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let first = test::TestRequest::post()
        .uri("/api/batch-mint")
        .insert_header(bearer())
        .set_json(batch(Some("drop-2024-01")))
        .to_request();
    let first = test::call_service(&app, first).await;
    assert_eq!(first.status(), StatusCode::OK);
    let first: Value = test::read_body_json(first).await;
    assert_eq!(first["idempotencyToken"], "drop-2024-01");

    let second = test::TestRequest::post()
        .uri("/api/batch-mint")
        .insert_header(bearer())
        .set_json(batch(Some("drop-2024-01")))
        .to_request();
    let second = test::call_service(&app, second).await;

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let second: Value = test::read_body_json(second).await;
    assert_eq!(second["code"], "DUPLICATE_REQUEST");
    assert!(second.get("transactionId").is_none());
}

#[actix_web::test]
async fn omitted_tokens_file_distinct_transactions() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let mut ids = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/batch-mint")
            .insert_header(bearer())
            .set_json(batch(None))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        ids.push(body["transactionId"].as_str().unwrap().to_string());
    }

    assert_ne!(ids[0], ids[1]);
}

#[actix_web::test]
async fn legacy_field_names_are_accepted() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/batch-mint")
        .insert_header(bearer())
        .set_json(json!({
            "accountId": "acc_integration",
            "contractAddress": "0xc0",
            "recipients": ["0xa1"],
            "idempotencyKey": "legacy-1"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["idempotencyToken"], "legacy-1");
    assert_eq!(body["itemCount"], 1);
}

#[actix_web::test]
async fn missing_fields_are_a_validation_error() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/batch-mint")
        .insert_header(bearer())
        .set_json(json!({"contractAddress": "0xc0", "recipients": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn malformed_json_is_a_validation_error() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/batch-mint")
        .insert_header(bearer())
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"recipients\": [")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn wrong_api_key_is_rejected() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/batch-mint")
        .insert_header(("Authorization", "Bearer not-the-key"))
        .set_json(batch(None))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "AUTHENTICATION_FAILED");
}

#[actix_web::test]
async fn concurrent_requests_with_one_token_file_once() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let calls = (0..8).map(|_| {
        let req = test::TestRequest::post()
            .uri("/api/batch-mint")
            .insert_header(bearer())
            .set_json(batch(Some("burst-token")))
            .to_request();
        test::call_service(&app, req)
    });
    let responses = futures::future::join_all(calls).await;

    let accepted = responses
        .iter()
        .filter(|resp| resp.status() == StatusCode::OK)
        .count();
    let duplicates = responses
        .iter()
        .filter(|resp| resp.status() == StatusCode::CONFLICT)
        .count();
    assert_eq!(accepted, 1);
    assert_eq!(duplicates, 7);
}
