use crate::error::Result;
use crate::http::{ApiClient, ApiRequest, path_param};
use crate::models::quotes::{CreateQuoteRequest, QuoteEnvelope};

/// # Errors
///
/// Returns an error if the body cannot be serialized.
pub fn create_quote(body: &CreateQuoteRequest) -> Result<ApiRequest> {
    ApiRequest::post("/api/v1/quotes").with_json(body)
}

/// # Errors
///
/// Returns an error if `quote_id` is empty.
pub fn get_quote(quote_id: &str) -> Result<ApiRequest> {
    let id = path_param("quoteId", quote_id)?;
    Ok(ApiRequest::get(format!("/api/v1/quotes/{id}")))
}

impl ApiClient {
    /// Request a new exchange-rate quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create_quote(&self, body: &CreateQuoteRequest) -> Result<QuoteEnvelope> {
        self.send(create_quote(body)?).await
    }

    /// # Errors
    ///
    /// Returns an error if `quote_id` is empty or the request fails.
    pub async fn get_quote(&self, quote_id: &str) -> Result<QuoteEnvelope> {
        self.send(get_quote(quote_id)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::quotes::{QuoteSource, QuoteTarget};
    use reqwest::Method;
    use serde_json::json;

    #[test]
    fn create_quote_shapes_nested_body() {
        let body = CreateQuoteRequest {
            from: QuoteSource {
                currency: "USDC".to_string(),
                network: "polygon".to_string(),
                amount: "125.75".to_string(),
            },
            to: QuoteTarget {
                currency: "EUR".to_string(),
                country: "GR".to_string(),
                network: None,
                payment_method_type: "SWIFT".to_string(),
            },
            metadata: None,
        };
        let req = create_quote(&body).expect("request");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "/api/v1/quotes");
        assert!(req.is_mutating());
        assert_eq!(
            req.body,
            Some(json!({
                "from": {"currency": "USDC", "network": "polygon", "amount": "125.75"},
                "to": {"currency": "EUR", "country": "GR", "paymentMethodType": "SWIFT"}
            }))
        );
    }

    #[test]
    fn get_quote_rejects_empty_id() {
        assert!(get_quote("").is_err());
        assert_eq!(get_quote("q-1").expect("request").path, "/api/v1/quotes/q-1");
    }
}
