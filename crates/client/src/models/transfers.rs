use super::{Metadata, PageInfo};
use serde::{Deserialize, Serialize};

pub const TRANSFER_TYPE_ONRAMP: &str = "TRANSFER_TYPE_ONRAMP";
pub const TRANSFER_TYPE_OFFRAMP: &str = "TRANSFER_TYPE_OFFRAMP";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankCodes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swift_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
}

impl BankCodes {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankTransferDetails {
    pub account_holder_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_codes: Option<BankCodes>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub bank_transfer: BankTransferDetails,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CollectionInstructions {
    pub wallet_address: String,
    pub currency: String,
    pub network: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transfer {
    pub id: String,
    pub tenant_id: Option<String>,
    pub customer_id: String,
    pub quote_id: String,
    #[serde(rename = "type")]
    pub transfer_type: String,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub collection_instructions: Option<CollectionInstructions>,
    pub metadata: Option<Metadata>,
}

impl Transfer {
    #[must_use]
    pub fn is_onramp(&self) -> bool {
        self.transfer_type == TRANSFER_TYPE_ONRAMP
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    pub customer_id: String,
    pub quote_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Optional filters for listing transfers; `None` fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTransfersParams {
    pub status: Option<String>,
    pub transfer_type: Option<String>,
    pub customer_id: Option<String>,
    pub page_size: Option<u32>,
    pub page_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListTransfersResponse {
    pub transfers: Vec<Transfer>,
    pub page: Option<PageInfo>,
}
