use serde_json::json;
use stables_client::models::api_keys::ListApiKeysParams;
use stables_client::models::customers::{CreateCustomerRequest, CustomerType};
use stables_client::models::transfers::ListTransfersParams;
use stables_client::{ApiClient, ClientConfig, ClientError};
use stables_test_support::StubApi;

const KEY: &str = "sk_test_secret";

fn client_for(stub: &StubApi) -> ApiClient {
    let config = ClientConfig::new(KEY, Some(stub.base_url())).expect("config");
    ApiClient::new(config).expect("client")
}

fn customer_request() -> CreateCustomerRequest {
    CreateCustomerRequest {
        external_customer_id: "ext-1".to_string(),
        customer_type: CustomerType::Individual,
        email: Some("ada@example.com".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
        middle_name: None,
        company_name: None,
        phone: None,
        dob: None,
        nationality: None,
        address: None,
        entitlements: None,
        metadata: None,
    }
}

#[tokio::test]
async fn mutating_calls_get_distinct_idempotency_keys() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "POST",
        "/api/v1/customer",
        200,
        json!({"customerId": "cus_1", "customerType": "CUSTOMER_TYPE_INDIVIDUAL"}),
    );
    let client = client_for(&stub);

    client.create_customer(&customer_request()).await?;
    client.create_customer(&customer_request()).await?;

    let keys: Vec<String> = stub
        .requests()
        .iter()
        .map(|r| r.header("idempotency-key").unwrap_or_default().to_string())
        .collect();
    assert_eq!(keys.len(), 2);
    assert!(!keys[0].is_empty());
    assert_ne!(keys[0], keys[1]);
    Ok(())
}

#[tokio::test]
async fn get_sends_bearer_without_body_headers() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "GET",
        "/api/v1/customers/cus_1",
        200,
        json!({"customerId": "cus_1", "email": "ada@example.com"}),
    );
    let client = client_for(&stub);

    let customer = client.get_customer("cus_1").await?;
    assert_eq!(customer.customer_id, "cus_1");

    let req = stub.last_request().expect("recorded");
    assert_eq!(req.header("authorization"), Some("Bearer sk_test_secret"));
    assert_eq!(req.header("content-type"), None);
    assert_eq!(req.header("idempotency-key"), None);
    assert!(req.body.is_empty());
    Ok(())
}

#[tokio::test]
async fn post_with_body_is_json() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond("POST", "/api/v1/customer", 201, json!({"customerId": "cus_2"}));
    let client = client_for(&stub);

    client.create_customer(&customer_request()).await?;

    let req = stub.last_request().expect("recorded");
    assert_eq!(req.header("content-type"), Some("application/json"));
    let body = req.json().expect("json body");
    assert_eq!(body["customerType"], "CUSTOMER_TYPE_INDIVIDUAL");
    assert_eq!(body["externalCustomerId"], "ext-1");
    assert!(body.get("phone").is_none());
    Ok(())
}

#[tokio::test]
async fn delete_with_empty_body_succeeds() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond_raw("DELETE", "/api/v1/api-keys/key_1", 204, "");
    let client = client_for(&stub);

    client.revoke_api_key("key_1").await?;

    let req = stub.last_request().expect("recorded");
    assert_eq!(req.method, "DELETE");
    assert!(req.header("idempotency-key").is_some());
    assert_eq!(req.header("content-type"), None);
    Ok(())
}

#[tokio::test]
async fn error_message_prefers_nested_error_message() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "GET",
        "/api/v1/quotes/q_1",
        400,
        json!({"error": {"message": "Quote not found"}, "message": "outer"}),
    );
    let client = client_for(&stub);

    let err = client.get_quote("q_1").await.expect_err("should fail");
    assert_eq!(err.to_string(), "Quote not found");
    assert_eq!(err.status(), Some(400));
    Ok(())
}

#[tokio::test]
async fn non_json_error_falls_back_to_status_line() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond_raw("GET", "/api/v1/webhooks", 502, "<html>bad gateway</html>");
    let client = client_for(&stub);

    let err = client.list_webhooks().await.expect_err("should fail");
    assert!(matches!(err, ClientError::Api { status: 502, .. }));
    assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    Ok(())
}

#[tokio::test]
async fn list_filters_reach_the_wire_once_each() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "GET",
        "/api/v1/transfers",
        200,
        json!({"transfers": [], "page": {"nextPageToken": ""}}),
    );
    let client = client_for(&stub);

    let page = client
        .list_transfers(&ListTransfersParams {
            status: Some("PENDING".to_string()),
            page_token: Some("a b&c".to_string()),
            ..ListTransfersParams::default()
        })
        .await?;
    assert!(page.transfers.is_empty());
    assert_eq!(page.page.and_then(|p| p.next_token().map(str::to_string)), None);

    let req = stub.last_request().expect("recorded");
    assert_eq!(
        req.query_pairs(),
        vec![
            ("status".to_string(), "PENDING".to_string()),
            ("pageToken".to_string(), "a b&c".to_string()),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn unset_list_params_send_no_query() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond("GET", "/api/v1/api-keys", 200, json!({"apiKeys": []}));
    let client = client_for(&stub);

    client.list_api_keys(&ListApiKeysParams::default()).await?;

    let req = stub.last_request().expect("recorded");
    assert_eq!(req.query, None);
    Ok(())
}

#[tokio::test]
async fn empty_path_param_never_reaches_the_network() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    let client = client_for(&stub);

    let err = client.get_transfer("").await.expect_err("should fail");
    assert!(matches!(err, ClientError::InvalidArgument(_)));
    assert_eq!(stub.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn ids_cannot_retarget_the_request() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond("DELETE", "/api/v1/webhooks/wh_1", 200, json!({}));
    stub.respond("GET", "/api/v1/customers/cus_1", 200, json!({"customerId": "cus_1"}));
    let client = client_for(&stub);

    let err = client
        .revoke_api_key("../webhooks/wh_1")
        .await
        .expect_err("traversal rejected");
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    let err = client
        .get_customer("cus_1?x=1")
        .await
        .expect_err("query marker rejected");
    assert!(matches!(err, ClientError::InvalidArgument(_)));

    assert!(client.delete_webhook("wh_1/../../api-keys/key_1").await.is_err());
    assert_eq!(stub.call_count(), 0);
    Ok(())
}
