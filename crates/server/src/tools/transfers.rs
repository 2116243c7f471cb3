use super::{ToolSpec, id, metadata, object_schema, positive_integer, string, string_enum};
use crate::error::ToolResult;
use crate::format::transfers as render;
use reqwest::Method;
use serde::Deserialize;
use stables_client::ApiClient;
use stables_client::models::Metadata;
use stables_client::models::transfers::{
    BankCodes, BankTransferDetails, CreateTransferRequest, ListTransfersParams, PaymentMethod,
};

const TRANSFER_STATUSES: &[&str] = &[
    "PENDING",
    "IN_PROGRESS",
    "COMPLETED",
    "FAILED",
    "CANCELLED",
    "EXPIRED",
];

pub(crate) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "create_transfer",
            title: "Create transfer",
            description: "Execute a transfer using an active quote. The quote must not be expired. This initiates the actual money movement. For off-ramp (crypto to fiat), include bank transfer details as the payment method.",
            action: "create transfer",
            method: Method::POST,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID for this transfer")),
                    ("quoteId", id("The quote ID to execute")),
                    (
                        "accountHolderName",
                        string("Bank account holder's full name (required for off-ramp)"),
                    ),
                    ("iban", string("IBAN for the destination bank account")),
                    ("accountNumber", string("Bank account number (if not using IBAN)")),
                    ("bankName", string("Name of the destination bank")),
                    ("bankCountry", string("Two-letter country code of the bank (e.g., 'GR', 'US')")),
                    ("bankCurrency", string("Currency for the bank payout (e.g., 'EUR', 'USD')")),
                    ("swiftCode", string("SWIFT/BIC code for international transfers")),
                    ("routingNumber", string("Routing number (for US bank transfers)")),
                    ("sortCode", string("Sort code (for UK bank transfers)")),
                    ("metadata", metadata("Optional metadata to attach to the transfer")),
                ],
                &["customerId", "quoteId"],
            ),
        },
        ToolSpec {
            name: "get_transfer",
            title: "Get transfer",
            description: "Get the current status and details of a transfer",
            action: "get transfer",
            method: Method::GET,
            input_schema: object_schema(
                vec![("transferId", id("The transfer ID to look up"))],
                &["transferId"],
            ),
        },
        ToolSpec {
            name: "list_transfers",
            title: "List transfers",
            description: "List transfers with optional filters for status, type, or customer",
            action: "list transfers",
            method: Method::GET,
            input_schema: object_schema(
                vec![
                    ("status", string_enum(TRANSFER_STATUSES, "Filter by transfer status")),
                    (
                        "type",
                        string_enum(
                            &["TRANSFER_TYPE_ONRAMP", "TRANSFER_TYPE_OFFRAMP"],
                            "Filter by transfer direction",
                        ),
                    ),
                    ("customerId", string("Filter by customer ID")),
                    ("pageSize", positive_integer("Number of transfers per page (default: 20)")),
                    ("pageToken", string("Token for the next page of results")),
                ],
                &[],
            ),
        },
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTransferArgs {
    customer_id: String,
    quote_id: String,
    account_holder_name: Option<String>,
    iban: Option<String>,
    account_number: Option<String>,
    bank_name: Option<String>,
    bank_country: Option<String>,
    bank_currency: Option<String>,
    swift_code: Option<String>,
    routing_number: Option<String>,
    sort_code: Option<String>,
    metadata: Option<Metadata>,
}

impl From<CreateTransferArgs> for CreateTransferRequest {
    fn from(args: CreateTransferArgs) -> Self {
        let payment_method = args
            .account_holder_name
            .filter(|name| !name.is_empty())
            .map(|account_holder_name| {
                let codes = BankCodes {
                    swift_code: args.swift_code,
                    routing_number: args.routing_number,
                    sort_code: args.sort_code,
                };
                PaymentMethod {
                    bank_transfer: BankTransferDetails {
                        account_holder_name,
                        account_number: args.account_number,
                        iban: args.iban,
                        bank_name: args.bank_name,
                        bank_country: args.bank_country,
                        currency: args.bank_currency,
                        bank_codes: (!codes.is_empty()).then_some(codes),
                    },
                }
            });
        Self {
            customer_id: args.customer_id,
            quote_id: args.quote_id,
            payment_method,
            metadata: args.metadata,
        }
    }
}

pub(crate) async fn create_transfer(client: &ApiClient, args: CreateTransferArgs) -> ToolResult<String> {
    let transfer = client.create_transfer(&args.into()).await?;
    Ok(render::transfer_created(&transfer))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetTransferArgs {
    transfer_id: String,
}

pub(crate) async fn get_transfer(client: &ApiClient, args: GetTransferArgs) -> ToolResult<String> {
    let transfer = client.get_transfer(&args.transfer_id).await?;
    Ok(render::transfer_details(&transfer))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ListTransfersArgs {
    status: Option<String>,
    #[serde(rename = "type")]
    transfer_type: Option<String>,
    customer_id: Option<String>,
    page_size: Option<u32>,
    page_token: Option<String>,
}

impl From<ListTransfersArgs> for ListTransfersParams {
    fn from(args: ListTransfersArgs) -> Self {
        Self {
            status: args.status,
            transfer_type: args.transfer_type,
            customer_id: args.customer_id,
            page_size: args.page_size,
            page_token: args.page_token,
        }
    }
}

pub(crate) async fn list_transfers(client: &ApiClient, args: ListTransfersArgs) -> ToolResult<String> {
    let response = client.list_transfers(&args.into()).await?;
    Ok(render::transfer_list(&response.transfers, response.page.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(args: serde_json::Value) -> serde_json::Value {
        let args: CreateTransferArgs = serde_json::from_value(args).expect("args");
        serde_json::to_value(CreateTransferRequest::from(args)).expect("encode")
    }

    #[test]
    fn bank_details_need_an_account_holder() {
        let body = request(json!({"customerId": "c", "quoteId": "q", "iban": "GR16..."}));
        assert_eq!(body, json!({"customerId": "c", "quoteId": "q"}));
    }

    #[test]
    fn bank_codes_only_when_one_is_given() {
        let body = request(json!({
            "customerId": "c",
            "quoteId": "q",
            "accountHolderName": "Ada Lovelace",
            "iban": "GR1601101250000000012300695",
            "bankCurrency": "EUR"
        }));
        assert_eq!(
            body["paymentMethod"]["bankTransfer"],
            json!({
                "accountHolderName": "Ada Lovelace",
                "iban": "GR1601101250000000012300695",
                "currency": "EUR"
            })
        );

        let body = request(json!({
            "customerId": "c",
            "quoteId": "q",
            "accountHolderName": "Ada Lovelace",
            "swiftCode": "ETHNGRAA"
        }));
        assert_eq!(
            body["paymentMethod"]["bankTransfer"]["bankCodes"],
            json!({"swiftCode": "ETHNGRAA"})
        );
    }

    #[test]
    fn list_args_map_type_filter() {
        let args: ListTransfersArgs =
            serde_json::from_value(json!({"type": "TRANSFER_TYPE_OFFRAMP", "pageSize": 5}))
                .expect("args");
        let params = ListTransfersParams::from(args);
        assert_eq!(params.transfer_type.as_deref(), Some("TRANSFER_TYPE_OFFRAMP"));
        assert_eq!(params.page_size, Some(5));
    }
}
