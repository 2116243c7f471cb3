use crate::error::Result;
use crate::http::{ApiClient, ApiRequest, path_param};
use crate::models::customers::{
    CreateCustomerRequest, Customer, GenerateVerificationLinkRequest, ListCustomersResponse,
    UpdateCustomerRequest, VerificationLink,
};
use crate::models::{Empty, Metadata};
use serde_json::json;

#[must_use]
pub fn list_customers() -> ApiRequest {
    ApiRequest::get("/api/v1/customers")
}

/// # Errors
///
/// Returns an error if `customer_id` is empty.
pub fn get_customer(customer_id: &str) -> Result<ApiRequest> {
    let id = path_param("customerId", customer_id)?;
    Ok(ApiRequest::get(format!("/api/v1/customers/{id}")))
}

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn create_customer(body: &CreateCustomerRequest) -> Result<ApiRequest> {
    ApiRequest::post("/api/v1/customer").with_json(body)
}

/// # Errors
///
/// Returns an error if `customer_id` is empty.
pub fn update_customer(customer_id: &str, body: &UpdateCustomerRequest) -> Result<ApiRequest> {
    let id = path_param("customerId", customer_id)?;
    ApiRequest::patch(format!("/api/v1/customer/{id}")).with_json(body)
}

/// # Errors
///
/// Returns an error if `customer_id` is empty.
pub fn update_customer_metadata(customer_id: &str, metadata: &Metadata) -> Result<ApiRequest> {
    let id = path_param("customerId", customer_id)?;
    ApiRequest::put(format!("/api/v1/customers/{id}/metadata"))
        .with_json(&json!({ "metadata": metadata }))
}

/// # Errors
///
/// Returns an error if `customer_id` is empty.
pub fn generate_verification_link(
    customer_id: &str,
    body: &GenerateVerificationLinkRequest,
) -> Result<ApiRequest> {
    let id = path_param("customerId", customer_id)?;
    ApiRequest::post(format!("/api/v1/customer/{id}/verification/link")).with_json(body)
}

impl ApiClient {
    /// List all customers for the authenticated tenant.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (see [`ApiClient::send`]).
    pub async fn list_customers(&self) -> Result<ListCustomersResponse> {
        self.send(list_customers()).await
    }

    /// # Errors
    ///
    /// Returns an error if `customer_id` is empty or the request fails.
    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        self.send(get_customer(customer_id)?).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_customer(&self, body: &CreateCustomerRequest) -> Result<Customer> {
        self.send(create_customer(body)?).await
    }

    /// # Errors
    ///
    /// Returns an error if `customer_id` is empty or the request fails.
    pub async fn update_customer(
        &self,
        customer_id: &str,
        body: &UpdateCustomerRequest,
    ) -> Result<Customer> {
        self.send(update_customer(customer_id, body)?).await
    }

    /// Replace the customer's metadata map.
    ///
    /// # Errors
    ///
    /// Returns an error if `customer_id` is empty or the request fails.
    pub async fn update_customer_metadata(
        &self,
        customer_id: &str,
        metadata: &Metadata,
    ) -> Result<()> {
        let _: Empty = self
            .send(update_customer_metadata(customer_id, metadata)?)
            .await?;
        Ok(())
    }

    /// Generate a hosted KYC link for the customer.
    ///
    /// # Errors
    ///
    /// Returns an error if `customer_id` is empty or the request fails.
    pub async fn generate_verification_link(
        &self,
        customer_id: &str,
        body: &GenerateVerificationLinkRequest,
    ) -> Result<VerificationLink> {
        self.send(generate_verification_link(customer_id, body)?)
            .await
    }
}
