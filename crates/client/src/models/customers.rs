use super::Metadata;
use serde::{Deserialize, Serialize};

pub const CUSTOMER_TYPE_INDIVIDUAL: &str = "CUSTOMER_TYPE_INDIVIDUAL";
pub const CUSTOMER_TYPE_BUSINESS: &str = "CUSTOMER_TYPE_BUSINESS";
pub const VERIFICATION_APPROVED: &str = "VERIFICATION_APPROVED";
pub const VERIFICATION_NOT_STARTED: &str = "NOT_STARTED";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerType {
    #[serde(rename = "CUSTOMER_TYPE_INDIVIDUAL")]
    Individual,
    #[serde(rename = "CUSTOMER_TYPE_BUSINESS")]
    Business,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerificationLevelRecord {
    pub level: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Entitlement {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerAddress {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    pub customer_id: String,
    pub external_customer_id: Option<String>,
    pub customer_type: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub entitlements: Vec<Entitlement>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub verification_levels: Vec<VerificationLevelRecord>,
    pub metadata: Option<Metadata>,
}

impl Customer {
    /// Status of the first verification-level record, or `NOT_STARTED` when there are none.
    #[must_use]
    pub fn verification_status(&self) -> &str {
        self.verification_levels
            .first()
            .map(|l| l.status.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(VERIFICATION_NOT_STARTED)
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verification_status() == VERIFICATION_APPROVED
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListCustomersResponse {
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    pub external_customer_id: String,
    pub customer_type: CustomerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<CustomerAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

/// Partial update: only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlements: Option<Vec<String>>,
}

impl UpdateCustomerRequest {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationRedirect {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reject_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateVerificationLinkRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_in_secs: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<VerificationRedirect>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VerificationLink {
    pub customer_id: String,
    pub kyc_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verification_status_defaults_to_not_started() {
        let c: Customer = serde_json::from_value(json!({"customerId": "c-1"})).expect("decode");
        assert_eq!(c.verification_status(), "NOT_STARTED");
        assert!(!c.is_verified());
    }

    #[test]
    fn verification_status_reads_first_record() {
        let c: Customer = serde_json::from_value(json!({
            "customerId": "c-1",
            "verificationLevels": [
                {"level": "KYC_LEVEL_1", "status": "VERIFICATION_APPROVED"},
                {"level": "KYC_LEVEL_2", "status": "VERIFICATION_IN_PROGRESS"}
            ]
        }))
        .expect("decode");
        assert_eq!(c.verification_status(), "VERIFICATION_APPROVED");
        assert!(c.is_verified());
    }

    #[test]
    fn create_request_omits_unset_fields() {
        let req = CreateCustomerRequest {
            external_customer_id: "ext-1".to_string(),
            customer_type: CustomerType::Individual,
            email: Some("a@b.com".to_string()),
            first_name: None,
            last_name: None,
            middle_name: None,
            company_name: None,
            phone: None,
            dob: None,
            nationality: None,
            address: None,
            entitlements: None,
            metadata: None,
        };
        assert_eq!(
            serde_json::to_value(&req).expect("encode"),
            json!({
                "externalCustomerId": "ext-1",
                "customerType": "CUSTOMER_TYPE_INDIVIDUAL",
                "email": "a@b.com"
            })
        );
    }
}
