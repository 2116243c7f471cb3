use super::Metadata;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const QUOTE_STATUS_ACTIVE: &str = "QUOTE_STATUS_ACTIVE";
pub const QUOTE_STATUS_EXPIRED: &str = "QUOTE_STATUS_EXPIRED";
pub const QUOTE_STATUS_USED: &str = "QUOTE_STATUS_USED";
pub const QUOTE_STATUS_CANCELLED: &str = "QUOTE_STATUS_CANCELLED";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyAmount {
    pub currency: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteDestination {
    pub currency: String,
    pub amount: String,
    pub network: Option<String>,
    pub payment_method_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeeBreakdown {
    pub fx_fee: Option<CurrencyAmount>,
    pub integrator_fee: Option<CurrencyAmount>,
    pub platform_fee: Option<CurrencyAmount>,
    pub payment_method_fee: Option<CurrencyAmount>,
    pub network_fee: Option<CurrencyAmount>,
    pub total_fee: Option<CurrencyAmount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub quote_id: String,
    pub from: CurrencyAmount,
    pub to: QuoteDestination,
    pub fees: FeeBreakdown,
    #[serde(deserialize_with = "lenient_number")]
    pub exchange_rate: Option<f64>,
    pub expires_at: Option<String>,
    pub created_at: Option<String>,
    pub status: String,
    pub metadata: Option<Metadata>,
}

impl Quote {
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }
}

/// `{ "quote": ... }`, returned by both create and get.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteEnvelope {
    pub quote: Quote,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSource {
    pub currency: String,
    pub network: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTarget {
    pub currency: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    pub payment_method_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuoteRequest {
    pub from: QuoteSource,
    pub to: QuoteTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

// Rates arrive as JSON numbers today; accept numeric strings too rather than failing the call.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}
