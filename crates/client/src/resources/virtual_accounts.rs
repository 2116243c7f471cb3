use crate::error::Result;
use crate::http::{ApiClient, ApiRequest, QueryParams, path_param};
use crate::models::virtual_accounts::{
    CreateVirtualAccountRequest, HistoryParams, HistoryResponse, ListVirtualAccountsParams,
    ListVirtualAccountsResponse, UpdateVirtualAccountRequest, VirtualAccount,
};

fn account_path(customer_id: &str, virtual_account_id: &str) -> Result<String> {
    let customer = path_param("customerId", customer_id)?;
    let account = path_param("virtualAccountId", virtual_account_id)?;
    Ok(format!(
        "/api/v1/customers/{customer}/virtual-accounts/{account}"
    ))
}

fn list_query(params: &ListVirtualAccountsParams) -> QueryParams {
    QueryParams::new()
        .with("status", params.status.as_deref())
        .with("limit", params.limit)
}

/// Tenant-wide listing across all customers.
#[must_use]
pub fn list_all_virtual_accounts(params: &ListVirtualAccountsParams) -> ApiRequest {
    ApiRequest::get("/api/v1/virtual-accounts").with_query(list_query(params))
}

/// # Errors
///
/// Returns an error if `customer_id` is empty.
pub fn list_virtual_accounts(
    customer_id: &str,
    params: &ListVirtualAccountsParams,
) -> Result<ApiRequest> {
    let id = path_param("customerId", customer_id)?;
    Ok(ApiRequest::get(format!("/api/v1/customers/{id}/virtual-accounts"))
        .with_query(list_query(params)))
}

/// # Errors
///
/// Returns an error if `customer_id` is empty.
pub fn create_virtual_account(
    customer_id: &str,
    body: &CreateVirtualAccountRequest,
) -> Result<ApiRequest> {
    let id = path_param("customerId", customer_id)?;
    ApiRequest::post(format!("/api/v1/customers/{id}/virtual-accounts")).with_json(body)
}

/// # Errors
///
/// Returns an error if either id is empty.
pub fn update_virtual_account(
    customer_id: &str,
    virtual_account_id: &str,
    body: &UpdateVirtualAccountRequest,
) -> Result<ApiRequest> {
    ApiRequest::patch(account_path(customer_id, virtual_account_id)?).with_json(body)
}

/// # Errors
///
/// Returns an error if either id is empty.
pub fn deactivate_virtual_account(
    customer_id: &str,
    virtual_account_id: &str,
) -> Result<ApiRequest> {
    let path = account_path(customer_id, virtual_account_id)?;
    Ok(ApiRequest::post(format!("{path}/deactivate")))
}

/// # Errors
///
/// Returns an error if either id is empty.
pub fn reactivate_virtual_account(
    customer_id: &str,
    virtual_account_id: &str,
) -> Result<ApiRequest> {
    let path = account_path(customer_id, virtual_account_id)?;
    Ok(ApiRequest::post(format!("{path}/reactivate")))
}

/// # Errors
///
/// Returns an error if either id is empty.
pub fn virtual_account_history(
    customer_id: &str,
    virtual_account_id: &str,
    params: &HistoryParams,
) -> Result<ApiRequest> {
    let path = account_path(customer_id, virtual_account_id)?;
    let query = QueryParams::new()
        .with("limit", params.limit)
        .with("event_type", params.event_type.as_deref());
    Ok(ApiRequest::get(format!("{path}/history")).with_query(query))
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_all_virtual_accounts(
        &self,
        params: &ListVirtualAccountsParams,
    ) -> Result<ListVirtualAccountsResponse> {
        self.send(list_all_virtual_accounts(params)).await
    }

    /// # Errors
    ///
    /// Returns an error if `customer_id` is empty or the request fails.
    pub async fn list_virtual_accounts(
        &self,
        customer_id: &str,
        params: &ListVirtualAccountsParams,
    ) -> Result<ListVirtualAccountsResponse> {
        self.send(list_virtual_accounts(customer_id, params)?).await
    }

    /// # Errors
    ///
    /// Returns an error if `customer_id` is empty or the request fails.
    pub async fn create_virtual_account(
        &self,
        customer_id: &str,
        body: &CreateVirtualAccountRequest,
    ) -> Result<VirtualAccount> {
        self.send(create_virtual_account(customer_id, body)?).await
    }

    /// # Errors
    ///
    /// Returns an error if either id is empty or the request fails.
    pub async fn update_virtual_account(
        &self,
        customer_id: &str,
        virtual_account_id: &str,
        body: &UpdateVirtualAccountRequest,
    ) -> Result<VirtualAccount> {
        self.send(update_virtual_account(
            customer_id,
            virtual_account_id,
            body,
        )?)
        .await
    }

    /// # Errors
    ///
    /// Returns an error if either id is empty or the request fails.
    pub async fn deactivate_virtual_account(
        &self,
        customer_id: &str,
        virtual_account_id: &str,
    ) -> Result<VirtualAccount> {
        self.send(deactivate_virtual_account(customer_id, virtual_account_id)?)
            .await
    }

    /// # Errors
    ///
    /// Returns an error if either id is empty or the request fails.
    pub async fn reactivate_virtual_account(
        &self,
        customer_id: &str,
        virtual_account_id: &str,
    ) -> Result<VirtualAccount> {
        self.send(reactivate_virtual_account(customer_id, virtual_account_id)?)
            .await
    }

    /// Deposit and state-change events, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is empty or the request fails.
    pub async fn virtual_account_history(
        &self,
        customer_id: &str,
        virtual_account_id: &str,
        params: &HistoryParams,
    ) -> Result<HistoryResponse> {
        self.send(virtual_account_history(
            customer_id,
            virtual_account_id,
            params,
        )?)
        .await
    }
}
