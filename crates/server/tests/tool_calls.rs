mod common;

use common::{API_KEY, args, is_error, server_for, text};
use serde_json::json;
use stables_test_support::StubApi;

#[tokio::test]
async fn create_customer_defaults_to_not_started() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "POST",
        "/api/v1/customer",
        200,
        json!({
            "customerId": "cus_123",
            "customerType": "CUSTOMER_TYPE_INDIVIDUAL",
            "email": "a@b.com",
            "createdAt": "2026-01-01T00:00:00Z"
        }),
    );
    let server = server_for(&stub);

    let result = server
        .invoke(
            "create_customer",
            args(json!({"customerType": "individual", "email": "a@b.com"})),
        )
        .await;

    assert!(!is_error(&result), "{}", text(&result));
    let out = text(&result);
    assert!(out.starts_with("Customer created successfully!"));
    assert!(out.contains("Customer ID: cus_123"));
    assert!(out.contains("Verification Status: NOT_STARTED"));

    let req = stub.last_request().expect("recorded");
    assert_eq!(req.header("authorization"), Some(format!("Bearer {API_KEY}").as_str()));
    assert!(req.header("idempotency-key").is_some());
    let body = req.json().expect("json body");
    assert_eq!(body["customerType"], "CUSTOMER_TYPE_INDIVIDUAL");
    assert_eq!(body["email"], "a@b.com");
    assert!(body["externalCustomerId"].as_str().is_some_and(|s| !s.is_empty()));
    assert!(body.get("address").is_none());
    Ok(())
}

#[tokio::test]
async fn expired_quote_status_wins_over_clock() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "GET",
        "/api/v1/quotes/q_1",
        200,
        json!({"quote": {
            "quoteId": "q_1",
            "status": "QUOTE_STATUS_EXPIRED",
            "from": {"currency": "USDC", "amount": "100", "network": "polygon"},
            "to": {"currency": "EUR", "amount": "91.50", "paymentMethodType": "SWIFT"},
            "fees": {"totalFee": {"currency": "USDC", "amount": "1.00"}},
            "exchangeRate": 0.925,
            "createdAt": "2099-01-01T00:00:00Z",
            "expiresAt": "2099-01-01T00:00:30Z"
        }}),
    );
    let server = server_for(&stub);

    let result = server
        .invoke("get_quote", args(json!({"quoteId": "q_1"})))
        .await;

    assert!(!is_error(&result));
    let out = text(&result);
    assert!(out.contains("Quote ID: q_1"));
    assert!(out.ends_with("This quote has expired. Create a new quote to proceed."));
    Ok(())
}

#[tokio::test]
async fn revoke_api_key_is_an_idempotent_delete() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond_raw("DELETE", "/api/v1/api-keys/key_9", 204, "");
    let server = server_for(&stub);

    let result = server
        .invoke("revoke_api_key", args(json!({"apiKeyId": "key_9"})))
        .await;

    assert!(!is_error(&result), "{}", text(&result));
    assert!(text(&result).starts_with("API key key_9 has been revoked successfully."));
    let req = stub.last_request().expect("recorded");
    assert_eq!(req.method, "DELETE");
    assert!(req.header("idempotency-key").is_some());
    Ok(())
}

#[tokio::test]
async fn invalid_arguments_never_reach_the_network() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    let server = server_for(&stub);

    let cases = [
        ("get_quote", json!({})),
        ("list_transfers", json!({"pageSize": "ten"})),
        ("create_customer", json!({"customerType": "trust", "email": "a@b.com"})),
        ("create_customer", json!({"customerType": "individual", "email": "not-an-email"})),
        ("get_customer", json!({"customerId": ""})),
        ("get_transfer", json!({"transferID": "tr_1"})),
        ("update_customer", json!({"customerId": "cus_1"})),
    ];
    for (tool, arguments) in cases {
        let result = server.invoke(tool, args(arguments.clone())).await;
        assert!(is_error(&result), "{tool} {arguments} should be rejected");
        assert!(
            text(&result).contains("Invalid params"),
            "{tool}: {}",
            text(&result)
        );
    }
    assert_eq!(stub.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn upstream_error_message_is_prefixed_with_action() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "POST",
        "/api/v1/quotes",
        400,
        json!({"error": {"message": "Quote amount too small"}}),
    );
    let server = server_for(&stub);

    let result = server
        .invoke(
            "create_quote",
            args(json!({
                "fromCurrency": "USDC",
                "fromAmount": "0.01",
                "fromNetwork": "polygon",
                "toCurrency": "EUR",
                "toCountry": "GR",
                "paymentMethodType": "SWIFT"
            })),
        )
        .await;

    assert!(is_error(&result));
    assert_eq!(text(&result), "Failed to create quote: Quote amount too small");
    assert_eq!(stub.call_count(), 1);
    Ok(())
}

#[tokio::test]
async fn list_transfers_forwards_filters_and_page_hint() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "GET",
        "/api/v1/transfers",
        200,
        json!({
            "transfers": [{
                "id": "tr_1",
                "customerId": "cus_1",
                "quoteId": "q_1",
                "type": "TRANSFER_TYPE_OFFRAMP",
                "status": "COMPLETED"
            }],
            "page": {"nextPageToken": "tok_2", "total": 3}
        }),
    );
    let server = server_for(&stub);

    let result = server
        .invoke(
            "list_transfers",
            args(json!({"status": "COMPLETED", "type": "TRANSFER_TYPE_OFFRAMP", "pageSize": 1})),
        )
        .await;

    let out = text(&result);
    assert!(out.starts_with("Transfers (1 of 3):"), "{out}");
    assert!(out.contains("- tr_1: Off-ramp - COMPLETED (Customer: cus_1)"));
    assert!(out.ends_with("Use pageToken: \"tok_2\""));

    let req = stub.last_request().expect("recorded");
    let pairs = req.query_pairs();
    assert!(pairs.contains(&("status".to_string(), "COMPLETED".to_string())));
    assert!(pairs.contains(&("type".to_string(), "TRANSFER_TYPE_OFFRAMP".to_string())));
    assert!(pairs.contains(&("pageSize".to_string(), "1".to_string())));
    assert!(req.header("idempotency-key").is_none());
    Ok(())
}

#[tokio::test]
async fn create_api_key_returns_secret_once() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "POST",
        "/api/v1/api-keys",
        200,
        json!({
            "apiKey": {"apiKeyId": "key_1", "name": "ci", "prefix": "sk_live_ab", "active": true},
            "plaintextKey": "sk_live_abcdef123"
        }),
    );
    let server = server_for(&stub);

    let result = server
        .invoke("create_api_key", args(json!({"name": "ci"})))
        .await;

    let out = text(&result);
    assert!(out.contains("SECRET KEY: sk_live_abcdef123"));
    assert!(out.contains("IMPORTANT: Save the secret key now!"));
    assert_eq!(stub.last_request().and_then(|r| r.json()), Some(json!({"name": "ci"})));
    Ok(())
}

#[tokio::test]
async fn virtual_account_lifecycle_hits_customer_scoped_paths() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    let account = json!({
        "id": "va_1",
        "status": "deactivated",
        "customer_id": "cus_1",
        "source_deposit_instructions": {"currency": "usd", "payment_rails": ["ach"]}
    });
    stub.respond(
        "POST",
        "/api/v1/customers/cus_1/virtual-accounts/va_1/deactivate",
        200,
        account,
    );
    stub.respond(
        "GET",
        "/api/v1/customers/cus_1/virtual-accounts/va_1/history",
        200,
        json!({"count": 0, "data": []}),
    );
    let server = server_for(&stub);
    let ids = json!({"customerId": "cus_1", "virtualAccountId": "va_1"});

    let result = server
        .invoke("deactivate_virtual_account", args(ids.clone()))
        .await;
    assert_eq!(
        text(&result),
        "Virtual account va_1 has been deactivated. No new deposits will be accepted."
    );
    let req = stub.last_request().expect("recorded");
    assert!(req.header("idempotency-key").is_some());
    assert!(req.body.is_empty());

    let mut history = ids;
    history["eventType"] = json!("funds_received");
    let result = server
        .invoke("get_virtual_account_history", args(history))
        .await;
    assert_eq!(text(&result), "No activity found for virtual account va_1.");
    let req = stub.last_request().expect("recorded");
    assert_eq!(
        req.query_pairs(),
        vec![("event_type".to_string(), "funds_received".to_string())]
    );
    Ok(())
}

#[tokio::test]
async fn delete_webhook_reports_the_id() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond("DELETE", "/api/v1/webhooks/wh_1", 200, json!({}));
    let server = server_for(&stub);

    let result = server
        .invoke("delete_webhook", args(json!({"webhookId": "wh_1"})))
        .await;

    assert_eq!(
        text(&result),
        "Webhook wh_1 has been deleted. You will no longer receive events at this endpoint."
    );
    Ok(())
}

#[tokio::test]
async fn traversal_in_an_id_is_rejected_before_any_request() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond("DELETE", "/api/v1/webhooks/wh_1", 200, json!({}));
    let server = server_for(&stub);

    let result = server
        .invoke("revoke_api_key", args(json!({"apiKeyId": "../webhooks/wh_1"})))
        .await;

    assert!(is_error(&result));
    assert!(
        text(&result).starts_with("Failed to revoke API key: apiKeyId contains characters"),
        "{}",
        text(&result)
    );
    assert_eq!(stub.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn update_customer_leaves_blank_fields_out() -> anyhow::Result<()> {
    let stub = StubApi::start().await?;
    stub.respond(
        "PATCH",
        "/api/v1/customer/cus_1",
        200,
        json!({"customerId": "cus_1", "lastName": "Lovelace"}),
    );
    let server = server_for(&stub);

    let result = server
        .invoke(
            "update_customer",
            args(json!({"customerId": "cus_1", "phone": "", "firstName": "", "lastName": "Lovelace"})),
        )
        .await;

    assert!(!is_error(&result), "{}", text(&result));
    let body = stub.last_request().and_then(|r| r.json()).expect("json body");
    assert_eq!(body, json!({"lastName": "Lovelace"}));
    Ok(())
}
