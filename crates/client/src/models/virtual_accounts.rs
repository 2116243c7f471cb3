//! Virtual-account shapes. Unlike the rest of the API these use snake_case field names.

use super::Metadata;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STABLECOIN: &str = "usdc";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Destination {
    pub currency: String,
    pub payment_rail: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositInstructions {
    pub currency: String,
    pub payment_rails: Vec<String>,
    pub bank_name: Option<String>,
    pub bank_address: Option<String>,
    pub bank_beneficiary_name: Option<String>,
    pub bank_beneficiary_address: Option<String>,
    pub bank_account_number: Option<String>,
    pub bank_routing_number: Option<String>,
    pub iban: Option<String>,
    pub bic: Option<String>,
    pub pix_key: Option<String>,
    pub clabe: Option<String>,
    pub account_holder_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldBalance {
    pub amount: String,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DepositStats {
    pub total_deposit_count: u64,
    pub total_deposit_amount: String,
    pub last_deposit_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualAccount {
    pub id: String,
    pub status: String,
    pub customer_id: String,
    pub developer_fee_percent: Option<String>,
    pub created_at: Option<String>,
    pub source_deposit_instructions: DepositInstructions,
    pub deposit_handling_mode: Option<String>,
    pub destination: Option<Destination>,
    pub held_balance: Option<HeldBalance>,
    pub deposit_stats: Option<DepositStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCurrency {
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVirtualAccountRequest {
    pub source: SourceCurrency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_handling_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateVirtualAccountRequest {
    pub deposit_handling_mode: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListVirtualAccountsParams {
    pub status: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListVirtualAccountsResponse {
    pub count: Option<u64>,
    pub data: Vec<VirtualAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryParams {
    pub limit: Option<u32>,
    pub event_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub customer_id: String,
    pub virtual_account_id: String,
    pub amount: String,
    pub currency: String,
    pub deposit_id: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryResponse {
    pub count: Option<u64>,
    pub data: Vec<HistoryEvent>,
}
