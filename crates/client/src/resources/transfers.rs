use crate::error::Result;
use crate::http::{ApiClient, ApiRequest, QueryParams, path_param};
use crate::models::transfers::{
    CreateTransferRequest, ListTransfersParams, ListTransfersResponse, Transfer,
};

#[must_use]
pub fn list_transfers(params: &ListTransfersParams) -> ApiRequest {
    let query = QueryParams::new()
        .with("status", params.status.as_deref())
        .with("type", params.transfer_type.as_deref())
        .with("customerId", params.customer_id.as_deref())
        .with("pageSize", params.page_size)
        .with("pageToken", params.page_token.as_deref());
    ApiRequest::get("/api/v1/transfers").with_query(query)
}

/// # Errors
///
/// Returns an error if `transfer_id` is empty.
pub fn get_transfer(transfer_id: &str) -> Result<ApiRequest> {
    let id = path_param("transferId", transfer_id)?;
    Ok(ApiRequest::get(format!("/api/v1/transfers/{id}")))
}

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn create_transfer(body: &CreateTransferRequest) -> Result<ApiRequest> {
    ApiRequest::post("/api/v1/transfer").with_json(body)
}

impl ApiClient {
    /// One page of transfers; the page token is forwarded verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_transfers(
        &self,
        params: &ListTransfersParams,
    ) -> Result<ListTransfersResponse> {
        self.send(list_transfers(params)).await
    }

    /// # Errors
    ///
    /// Returns an error if `transfer_id` is empty or the request fails.
    pub async fn get_transfer(&self, transfer_id: &str) -> Result<Transfer> {
        self.send(get_transfer(transfer_id)?).await
    }

    /// Execute a quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_transfer(&self, body: &CreateTransferRequest) -> Result<Transfer> {
        self.send(create_transfer(body)?).await
    }
}
