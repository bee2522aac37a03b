//! Zendit client against a fake provider

use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tu_core::domain::{AccessToken, Amount, ClientCredentials, Operator, TopUpRequest, TopUpSubmission};
use tu_core::errors::ProviderError;
use tu_core::services::AirtimeProvider;
use tu_infra::{ZenditClient, ZenditConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn client_for(server: &MockServer) -> ZenditClient {
    init_tracing();
    let config = ZenditConfig::default()
        .with_credentials("test-client", "test-secret")
        .with_base_urls(server.uri(), server.uri());
    ZenditClient::new(config).expect("client")
}

fn credentials() -> ClientCredentials {
    ClientCredentials::new("test-client", "test-secret")
}

#[tokio::test]
async fn test_token_request_is_form_encoded_client_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client"))
        .and(body_string_contains("client_secret=test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "ACCESS_TOKEN_XYZ",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server).request_token(&credentials()).await.unwrap();
    assert_eq!(token.as_str(), "ACCESS_TOKEN_XYZ");
}

#[tokio::test]
async fn test_token_rejection_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_client" })))
        .mount(&server)
        .await;

    let err = client_for(&server).request_token(&credentials()).await.unwrap_err();
    assert_eq!(err, ProviderError::Status { status: 401 });
}

#[tokio::test]
async fn test_token_without_access_token_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "Bearer" })))
        .mount(&server)
        .await;

    let err = client_for(&server).request_token(&credentials()).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_operator_lookup_sends_phone_and_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/airtime/operators"))
        .and(query_param("phoneNumber", "+2348030000000"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "operatorId": "MTN_NG", "name": "MTN Nigeria" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let lookup = client_for(&server)
        .find_operators(&AccessToken::new("tok-1"), "+2348030000000")
        .await
        .unwrap();

    let operator = lookup.first_match().unwrap();
    assert_eq!(operator.operator_id(), Some(&json!("MTN_NG")));
}

#[tokio::test]
async fn test_operator_lookup_ignores_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/airtime/operators"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "no operators" })))
        .mount(&server)
        .await;

    let lookup = client_for(&server)
        .find_operators(&AccessToken::new("tok-1"), "+10000000000")
        .await
        .unwrap();

    assert!(lookup.first_match().is_none());
}

#[tokio::test]
async fn test_operator_lookup_non_json_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/airtime/operators"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .find_operators(&AccessToken::new("tok-1"), "+2348030000000")
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_topup_posts_json_and_relays_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/airtime/topups"))
        .and(header("authorization", "Bearer tok-1"))
        .and(body_json(json!({
            "operatorId": "OP1",
            "phoneNumber": "+2348030000000",
            "amount": 10,
            "customIdentifier": "web-1700000000000"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "status": "PENDING",
            "transactionId": "tx-42"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let operator = Operator::from_value(json!({ "operatorId": "OP1" })).unwrap();
    let request = TopUpRequest::new("+2348030000000", Amount::from(10));
    let submission = TopUpSubmission::new(&operator, &request, "web-1700000000000");

    let reply = client_for(&server)
        .submit_topup(&AccessToken::new("tok-1"), &submission)
        .await
        .unwrap();

    assert!(reply.is_success());
    assert_eq!(reply.status, 201);
    assert_eq!(reply.body, json!({ "status": "PENDING", "transactionId": "tx-42" }));
}

#[tokio::test]
async fn test_topup_failure_keeps_body() {
    let server = MockServer::start().await;
    let failure = json!({ "code": "INVALID_AMOUNT", "message": "Amount out of range" });
    Mock::given(method("POST"))
        .and(path("/v1/airtime/topups"))
        .respond_with(ResponseTemplate::new(400).set_body_json(failure.clone()))
        .mount(&server)
        .await;

    let operator = Operator::from_value(json!({ "id": "OP9" })).unwrap();
    let request = TopUpRequest::new("+2348030000000", Amount::from(1_000_000));
    let submission = TopUpSubmission::new(&operator, &request, "web-1");

    let reply = client_for(&server)
        .submit_topup(&AccessToken::new("tok-1"), &submission)
        .await
        .unwrap();

    assert!(!reply.is_success());
    assert_eq!(reply.body, failure);
}

#[tokio::test]
async fn test_request_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "access_token": "late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = ZenditConfig {
        request_timeout_secs: Some(1),
        ..ZenditConfig::default().with_base_urls(server.uri(), server.uri())
    };
    let client = ZenditClient::new(config).unwrap();

    let err = client.request_token(&credentials()).await.unwrap_err();
    assert!(matches!(err, ProviderError::Transport(_)));
}
