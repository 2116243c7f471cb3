use super::{ToolSpec, id, metadata, object_schema, string, string_enum};
use crate::error::ToolResult;
use crate::format::quotes as render;
use chrono::Utc;
use reqwest::Method;
use serde::Deserialize;
use stables_client::ApiClient;
use stables_client::models::Metadata;
use stables_client::models::quotes::{CreateQuoteRequest, QuoteSource, QuoteTarget};

pub(crate) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "create_quote",
            title: "Create quote",
            description: "Get a quote for currency exchange. Quotes show the exchange rate, fees, and amount the customer will receive. Quotes expire after 30 seconds. Currently supports crypto to fiat (off-ramp).",
            action: "create quote",
            method: Method::POST,
            input_schema: object_schema(
                vec![
                    (
                        "fromCurrency",
                        string_enum(&["USDC", "USDT"], "Source cryptocurrency (USDC or USDT)"),
                    ),
                    ("fromAmount", string("Amount to convert (e.g., '125.75')")),
                    (
                        "fromNetwork",
                        string_enum(
                            &["ethereum", "polygon", "polygon-amoy"],
                            "Blockchain network for the source crypto",
                        ),
                    ),
                    ("toCurrency", string("Destination currency code (e.g., 'EUR', 'USD', 'GBP')")),
                    ("toCountry", string("Destination country code (e.g., 'GR', 'US', 'GB')")),
                    (
                        "paymentMethodType",
                        string_enum(
                            &["SWIFT", "LOCAL"],
                            "Payment method for fiat payouts - 'SWIFT' for international, 'LOCAL' for domestic rails",
                        ),
                    ),
                    ("metadata", metadata("Optional metadata to attach to the quote")),
                ],
                &[
                    "fromCurrency",
                    "fromAmount",
                    "fromNetwork",
                    "toCurrency",
                    "toCountry",
                    "paymentMethodType",
                ],
            ),
        },
        ToolSpec {
            name: "get_quote",
            title: "Get quote",
            description: "Get details about an existing quote including its current status",
            action: "get quote",
            method: Method::GET,
            input_schema: object_schema(
                vec![("quoteId", id("The quote ID to look up"))],
                &["quoteId"],
            ),
        },
    ]
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateQuoteArgs {
    from_currency: String,
    from_amount: String,
    from_network: String,
    to_currency: String,
    to_country: String,
    payment_method_type: String,
    metadata: Option<Metadata>,
}

impl From<CreateQuoteArgs> for CreateQuoteRequest {
    fn from(args: CreateQuoteArgs) -> Self {
        Self {
            from: QuoteSource {
                currency: args.from_currency,
                network: args.from_network,
                amount: args.from_amount,
            },
            to: QuoteTarget {
                currency: args.to_currency,
                country: args.to_country,
                network: None,
                payment_method_type: args.payment_method_type,
            },
            metadata: args.metadata,
        }
    }
}

pub(crate) async fn create_quote(client: &ApiClient, args: CreateQuoteArgs) -> ToolResult<String> {
    let envelope = client.create_quote(&args.into()).await?;
    Ok(render::quote_created(&envelope.quote, Utc::now()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetQuoteArgs {
    quote_id: String,
}

pub(crate) async fn get_quote(client: &ApiClient, args: GetQuoteArgs) -> ToolResult<String> {
    let envelope = client.get_quote(&args.quote_id).await?;
    Ok(render::quote_details(&envelope.quote, Utc::now()))
}
