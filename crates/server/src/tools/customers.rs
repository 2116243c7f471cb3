//! Customer tools: onboarding, profile updates, KYC links.

use super::{
    ToolSpec, email, id, metadata, object_schema, positive_integer, string, string_enum,
    string_list, url,
};
use crate::error::{ToolError, ToolResult};
use crate::format::customers as render;
use reqwest::Method;
use serde::Deserialize;
use stables_client::ApiClient;
use stables_client::models::Metadata;
use stables_client::models::customers::{
    CreateCustomerRequest, CustomerAddress, CustomerType, GenerateVerificationLinkRequest,
    UpdateCustomerRequest, VerificationRedirect,
};

pub(crate) fn specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "create_customer",
            title: "Create customer",
            description: "Create a new customer in Stables for KYC verification and transfers. Use 'individual' for personal accounts or 'business' for company accounts. Include entitlements like 'base_payout' to enable transactions.",
            action: "create customer",
            method: Method::POST,
            input_schema: object_schema(
                vec![
                    ("email", email("Customer's email address")),
                    (
                        "customerType",
                        string_enum(
                            &["individual", "business"],
                            "Type of customer - 'individual' for personal, 'business' for companies",
                        ),
                    ),
                    ("firstName", string("First name (required for individuals)")),
                    ("lastName", string("Last name (required for individuals)")),
                    ("middleName", string("Middle name")),
                    ("companyName", string("Company name (required for businesses)")),
                    ("externalCustomerId", string("Your own reference ID for this customer")),
                    ("phone", string("Phone number with country code (e.g., '+14155552671')")),
                    ("dob", string("Date of birth in YYYY-MM-DD format (e.g., '1990-01-15')")),
                    ("nationality", string("Two-letter country code (e.g., 'US', 'GB')")),
                    (
                        "entitlements",
                        string_list("List of entitlements to request (e.g., ['base_payout', 'virtual_account'])"),
                    ),
                    ("addressLine1", string("Street address line 1")),
                    ("addressLine2", string("Street address line 2")),
                    ("addressCity", string("City")),
                    ("addressState", string("State or region")),
                    ("addressPostalCode", string("Postal/ZIP code")),
                    ("addressCountry", string("Two-letter country code (e.g., 'US')")),
                    ("metadata", metadata("Optional metadata to attach to the customer")),
                ],
                &["email", "customerType"],
            ),
        },
        ToolSpec {
            name: "get_customer",
            title: "Get customer",
            description: "Get details about a specific customer including their verification status",
            action: "get customer",
            method: Method::GET,
            input_schema: object_schema(
                vec![("customerId", id("The customer ID to look up"))],
                &["customerId"],
            ),
        },
        ToolSpec {
            name: "list_customers",
            title: "List customers",
            description: "List all customers for the authenticated tenant",
            action: "list customers",
            method: Method::GET,
            input_schema: object_schema(vec![], &[]),
        },
        ToolSpec {
            name: "update_customer",
            title: "Update customer",
            description: "Update customer details, entitlements, or verification information",
            action: "update customer",
            method: Method::PATCH,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID to update")),
                    ("email", email("Updated email address")),
                    ("phone", string("Updated phone number")),
                    ("firstName", string("Updated first name")),
                    ("lastName", string("Updated last name")),
                    (
                        "entitlements",
                        string_list("Updated entitlements (e.g., ['base_payout', 'virtual_account'])"),
                    ),
                ],
                &["customerId"],
            ),
        },
        ToolSpec {
            name: "update_customer_metadata",
            title: "Update customer metadata",
            description: "Update customer metadata key-value pairs",
            action: "update metadata",
            method: Method::PUT,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID to update metadata for")),
                    ("metadata", metadata("Metadata key-value pairs to set")),
                ],
                &["customerId", "metadata"],
            ),
        },
        ToolSpec {
            name: "get_verification_link",
            title: "Get verification link",
            description: "Generate a KYC verification link for a customer. The customer must complete verification before they can make transfers.",
            action: "generate verification link",
            method: Method::POST,
            input_schema: object_schema(
                vec![
                    ("customerId", id("The customer ID to generate verification link for")),
                    (
                        "ttlInSecs",
                        positive_integer("Time-to-live for the KYC link in seconds (default: 1800)"),
                    ),
                    ("successUrl", url("URL to redirect to after successful verification")),
                    ("rejectUrl", url("URL to redirect to after rejected verification")),
                ],
                &["customerId"],
            ),
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum CustomerKind {
    Individual,
    Business,
}

impl CustomerKind {
    fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Business => "business",
        }
    }
}

impl From<CustomerKind> for CustomerType {
    fn from(kind: CustomerKind) -> Self {
        match kind {
            CustomerKind::Individual => Self::Individual,
            CustomerKind::Business => Self::Business,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateCustomerArgs {
    email: String,
    customer_type: CustomerKind,
    first_name: Option<String>,
    last_name: Option<String>,
    middle_name: Option<String>,
    company_name: Option<String>,
    external_customer_id: Option<String>,
    phone: Option<String>,
    dob: Option<String>,
    nationality: Option<String>,
    entitlements: Option<Vec<String>>,
    address_line1: Option<String>,
    address_line2: Option<String>,
    address_city: Option<String>,
    address_state: Option<String>,
    address_postal_code: Option<String>,
    address_country: Option<String>,
    metadata: Option<Metadata>,
}

impl CreateCustomerArgs {
    fn address(&self) -> Option<CustomerAddress> {
        let line1 = self.address_line1.clone().filter(|l| !l.is_empty())?;
        Some(CustomerAddress {
            line1,
            line2: self.address_line2.clone(),
            city: self.address_city.clone().unwrap_or_default(),
            state: self.address_state.clone(),
            postal_code: self.address_postal_code.clone(),
            country: self.address_country.clone().unwrap_or_default(),
        })
    }

    fn to_request(&self) -> CreateCustomerRequest {
        let external_customer_id = self
            .external_customer_id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        CreateCustomerRequest {
            external_customer_id,
            customer_type: self.customer_type.into(),
            email: Some(self.email.clone()),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            middle_name: self.middle_name.clone(),
            company_name: self.company_name.clone(),
            phone: self.phone.clone(),
            dob: self.dob.clone(),
            nationality: self.nationality.clone(),
            address: self.address(),
            entitlements: self.entitlements.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

pub(crate) async fn create_customer(client: &ApiClient, args: CreateCustomerArgs) -> ToolResult<String> {
    let customer = client.create_customer(&args.to_request()).await?;
    let submitted = render::SubmittedCustomer {
        customer_type: args.customer_type.as_str(),
        first_name: args.first_name.as_deref(),
        middle_name: args.middle_name.as_deref(),
        last_name: args.last_name.as_deref(),
        company_name: args.company_name.as_deref(),
        phone: args.phone.as_deref(),
        nationality: args.nationality.as_deref(),
    };
    Ok(render::customer_created(&customer, &submitted))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerIdArgs {
    customer_id: String,
}

pub(crate) async fn get_customer(client: &ApiClient, args: CustomerIdArgs) -> ToolResult<String> {
    let customer = client.get_customer(&args.customer_id).await?;
    Ok(render::customer_details(&customer))
}

pub(crate) async fn list_customers(client: &ApiClient) -> ToolResult<String> {
    let response = client.list_customers().await?;
    Ok(render::customer_list(&response.customers))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCustomerArgs {
    customer_id: String,
    email: Option<String>,
    phone: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    entitlements: Option<Vec<String>>,
}

impl UpdateCustomerArgs {
    /// Blank strings mean "not provided" and are left out of the patch.
    fn to_patch(&self) -> UpdateCustomerRequest {
        let given = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        UpdateCustomerRequest {
            email: given(&self.email),
            phone: given(&self.phone),
            first_name: given(&self.first_name),
            last_name: given(&self.last_name),
            entitlements: self.entitlements.clone(),
        }
    }
}

pub(crate) async fn update_customer(client: &ApiClient, args: UpdateCustomerArgs) -> ToolResult<String> {
    let patch = args.to_patch();
    if patch.is_empty() {
        return Err(ToolError::InvalidParams(
            "provide at least one field to update".to_string(),
        ));
    }
    let customer = client.update_customer(&args.customer_id, &patch).await?;
    Ok(render::customer_updated(&customer))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateMetadataArgs {
    customer_id: String,
    metadata: Metadata,
}

pub(crate) async fn update_customer_metadata(
    client: &ApiClient,
    args: UpdateMetadataArgs,
) -> ToolResult<String> {
    client
        .update_customer_metadata(&args.customer_id, &args.metadata)
        .await?;
    Ok(render::metadata_updated(&args.customer_id, &args.metadata))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VerificationLinkArgs {
    customer_id: String,
    ttl_in_secs: Option<u64>,
    success_url: Option<String>,
    reject_url: Option<String>,
}

impl VerificationLinkArgs {
    fn to_request(&self) -> GenerateVerificationLinkRequest {
        let redirect = (self.success_url.is_some() || self.reject_url.is_some()).then(|| {
            VerificationRedirect {
                success_url: self.success_url.clone(),
                reject_url: self.reject_url.clone(),
            }
        });
        GenerateVerificationLinkRequest {
            ttl_in_secs: self.ttl_in_secs,
            redirect,
        }
    }
}

pub(crate) async fn get_verification_link(
    client: &ApiClient,
    args: VerificationLinkArgs,
) -> ToolResult<String> {
    let link = client
        .generate_verification_link(&args.customer_id, &args.to_request())
        .await?;
    Ok(render::verification_link(&link, args.ttl_in_secs))
}
