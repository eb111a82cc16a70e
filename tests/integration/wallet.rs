use actix_web::{http::StatusCode, test, App};
use batch_mint_relayer::api::routes::configure_routes;
use serde_json::{json, Value};

use super::common::{app_state, bearer};

#[actix_web::test]
async fn wallet_is_created_on_requested_chain() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/wallet/create")
        .insert_header(bearer())
        .set_json(json!({"desiredChainId": 137}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["chainId"], 137);
    assert_eq!(body["address"].as_str().unwrap().len(), 42);
    assert!(body["createdAt"].is_string());
}

#[actix_web::test]
async fn wallet_requires_api_key() {
    let app = test::init_service(App::new().app_data(app_state()).configure(configure_routes)).await;

    let req = test::TestRequest::post()
        .uri("/api/wallet/create")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
