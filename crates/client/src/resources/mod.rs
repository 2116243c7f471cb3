//! One function per remote endpoint.
//!
//! Each module exposes pure request builders (`fn ... -> Result<ApiRequest>`) and the matching
//! async methods on [`ApiClient`](crate::ApiClient). The builders are what the tests exercise;
//! the methods only add `send`.

pub mod api_keys;
pub mod customers;
pub mod quotes;
pub mod transfers;
pub mod virtual_accounts;
pub mod webhooks;
