use super::{ToolSpec, id, object_schema, positive_integer, string, string_enum};
use crate::error::ToolResult;
use crate::format::virtual_accounts as render;
use reqwest::Method;
use serde::Deserialize;
use stables_client::ApiClient;
use stables_client::models::virtual_accounts::{
    CreateVirtualAccountRequest, DEFAULT_STABLECOIN, Destination, HistoryParams,
    ListVirtualAccountsParams, SourceCurrency, UpdateVirtualAccountRequest,
};

const DEPOSIT_HANDLING_MODES: &[&str] = &["auto_payout", "hold", "manual"];
const ACCOUNT_STATUSES: &[&str] = &["activated", "deactivated", "pending", "closed"];
const PAYMENT_RAILS: &[&str] = &[
    "arbitrum",
    "avalanche_c_chain",
    "base",
    "celo",
    "ethereum",
    "optimism",
    "polygon",
    "solana",
    "stellar",
    "tron",
];
const STABLECOINS: &[&str] = &["usdc", "usdt", "dai", "pyusd", "eurc"];
const HISTORY_EVENT_TYPES: &[&str] = &[
    "funds_scheduled",
    "funds_received",
    "payment_submitted",
    "payment_processed",
    "in_review",
    "refund",
    "microdeposit",
    "account_update",
    "deactivation",
    "activation",
];

fn account_ref_schema(action: &str) -> serde_json::Value {
    object_schema(
        vec![
            ("customerId", id("The customer ID")),
            ("virtualAccountId", id(&format!("The virtual account ID to {action}"))),
        ],
        &["customerId", "virtualAccountId"],
    )
}

pub(crate) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "create_virtual_account",
            title: "Create virtual account",
            description: "Create a virtual bank account for a customer to receive fiat deposits. Deposits can automatically convert to crypto and payout to a wallet.",
            action: "create virtual account",
            method: Method::POST,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID to create the virtual account for")),
                    (
                        "sourceCurrency",
                        string("Currency for the virtual account (e.g., 'USD', 'EUR', 'GBP')"),
                    ),
                    (
                        "depositHandlingMode",
                        string_enum(
                            DEPOSIT_HANDLING_MODES,
                            "How deposits are handled: 'auto_payout' converts and pays out, 'hold' keeps funds, 'manual' waits for instructions",
                        ),
                    ),
                    ("destinationAddress", string("Crypto wallet address for payouts")),
                    (
                        "destinationPaymentRail",
                        string_enum(PAYMENT_RAILS, "Blockchain for payouts"),
                    ),
                    (
                        "destinationCurrency",
                        string_enum(STABLECOINS, "Stablecoin to pay out (default: usdc)"),
                    ),
                ],
                &["customerId", "sourceCurrency"],
            ),
        },
        ToolSpec {
            name: "list_virtual_accounts",
            title: "List customer virtual accounts",
            description: "List all virtual accounts for a customer",
            action: "list virtual accounts",
            method: Method::GET,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID to list virtual accounts for")),
                    ("status", string_enum(ACCOUNT_STATUSES, "Filter by account status")),
                    ("limit", positive_integer("Maximum number of accounts to return")),
                ],
                &["customerId"],
            ),
        },
        ToolSpec {
            name: "list_all_virtual_accounts",
            title: "List all virtual accounts",
            description: "List virtual accounts across all customers of the tenant",
            action: "list virtual accounts",
            method: Method::GET,
            input_schema: object_schema(
                vec![
                    ("status", string_enum(ACCOUNT_STATUSES, "Filter by account status")),
                    ("limit", positive_integer("Maximum number of accounts to return")),
                ],
                &[],
            ),
        },
        ToolSpec {
            name: "update_virtual_account",
            title: "Update virtual account",
            description: "Update virtual account settings (e.g., deposit handling mode)",
            action: "update virtual account",
            method: Method::PATCH,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID")),
                    ("virtualAccountId", id("The virtual account ID to update")),
                    (
                        "depositHandlingMode",
                        string_enum(DEPOSIT_HANDLING_MODES, "New deposit handling mode"),
                    ),
                ],
                &["customerId", "virtualAccountId", "depositHandlingMode"],
            ),
        },
        ToolSpec {
            name: "deactivate_virtual_account",
            title: "Deactivate virtual account",
            description: "Deactivate a virtual account to prevent new incoming transactions",
            action: "deactivate virtual account",
            method: Method::POST,
            input_schema: account_ref_schema("deactivate"),
        },
        ToolSpec {
            name: "reactivate_virtual_account",
            title: "Reactivate virtual account",
            description: "Reactivate a previously deactivated virtual account",
            action: "reactivate virtual account",
            method: Method::POST,
            input_schema: account_ref_schema("reactivate"),
        },
        ToolSpec {
            name: "get_virtual_account_history",
            title: "Get virtual account history",
            description: "Get the activity history for a virtual account (deposits, payouts, etc.)",
            action: "get virtual account history",
            method: Method::GET,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID")),
                    ("virtualAccountId", id("The virtual account ID")),
                    ("limit", positive_integer("Maximum number of events to return (default: 10)")),
                    ("eventType", string_enum(HISTORY_EVENT_TYPES, "Filter by event type")),
                ],
                &["customerId", "virtualAccountId"],
            ),
        },
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateVirtualAccountArgs {
    customer_id: String,
    source_currency: String,
    deposit_handling_mode: Option<String>,
    destination_address: Option<String>,
    destination_payment_rail: Option<String>,
    destination_currency: Option<String>,
}

impl CreateVirtualAccountArgs {
    fn to_request(&self) -> CreateVirtualAccountRequest {
        let destination = match (&self.destination_address, &self.destination_payment_rail) {
            (Some(address), Some(rail)) if !address.is_empty() => Some(Destination {
                currency: self
                    .destination_currency
                    .clone()
                    .unwrap_or_else(|| DEFAULT_STABLECOIN.to_string()),
                payment_rail: rail.clone(),
                address: address.clone(),
                memo: None,
            }),
            _ => None,
        };
        CreateVirtualAccountRequest {
            source: SourceCurrency {
                currency: self.source_currency.clone(),
            },
            deposit_handling_mode: self.deposit_handling_mode.clone(),
            destination,
            metadata: None,
        }
    }
}

pub(crate) async fn create_virtual_account(
    client: &ApiClient,
    args: CreateVirtualAccountArgs,
) -> ToolResult<String> {
    let account = client
        .create_virtual_account(&args.customer_id, &args.to_request())
        .await?;
    Ok(render::virtual_account_created(&account))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListVirtualAccountsArgs {
    customer_id: String,
    status: Option<String>,
    limit: Option<u32>,
}

pub(crate) async fn list_virtual_accounts(
    client: &ApiClient,
    args: ListVirtualAccountsArgs,
) -> ToolResult<String> {
    let params = ListVirtualAccountsParams {
        status: args.status,
        limit: args.limit,
    };
    let response = client
        .list_virtual_accounts(&args.customer_id, &params)
        .await?;
    Ok(render::virtual_account_list(
        &args.customer_id,
        &response.data,
        response.count,
    ))
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListAllVirtualAccountsArgs {
    status: Option<String>,
    limit: Option<u32>,
}

pub(crate) async fn list_all_virtual_accounts(
    client: &ApiClient,
    args: ListAllVirtualAccountsArgs,
) -> ToolResult<String> {
    let params = ListVirtualAccountsParams {
        status: args.status,
        limit: args.limit,
    };
    let response = client.list_all_virtual_accounts(&params).await?;
    Ok(render::all_virtual_accounts_list(&response.data, response.count))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateVirtualAccountArgs {
    customer_id: String,
    virtual_account_id: String,
    deposit_handling_mode: String,
}

pub(crate) async fn update_virtual_account(
    client: &ApiClient,
    args: UpdateVirtualAccountArgs,
) -> ToolResult<String> {
    let body = UpdateVirtualAccountRequest {
        deposit_handling_mode: args.deposit_handling_mode,
    };
    let account = client
        .update_virtual_account(&args.customer_id, &args.virtual_account_id, &body)
        .await?;
    Ok(render::virtual_account_updated(&account))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountRefArgs {
    customer_id: String,
    virtual_account_id: String,
}

pub(crate) async fn deactivate_virtual_account(
    client: &ApiClient,
    args: AccountRefArgs,
) -> ToolResult<String> {
    let account = client
        .deactivate_virtual_account(&args.customer_id, &args.virtual_account_id)
        .await?;
    Ok(render::virtual_account_deactivated(&account))
}

pub(crate) async fn reactivate_virtual_account(
    client: &ApiClient,
    args: AccountRefArgs,
) -> ToolResult<String> {
    let account = client
        .reactivate_virtual_account(&args.customer_id, &args.virtual_account_id)
        .await?;
    Ok(render::virtual_account_reactivated(&account))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HistoryArgs {
    customer_id: String,
    virtual_account_id: String,
    limit: Option<u32>,
    event_type: Option<String>,
}

pub(crate) async fn get_virtual_account_history(
    client: &ApiClient,
    args: HistoryArgs,
) -> ToolResult<String> {
    let params = HistoryParams {
        limit: args.limit,
        event_type: args.event_type,
    };
    let response = client
        .virtual_account_history(&args.customer_id, &args.virtual_account_id, &params)
        .await?;
    Ok(render::history(
        &args.virtual_account_id,
        &response.data,
        response.count,
    ))
}
