use serde::Serialize;
use url::form_urlencoded;

use crate::api::{BaseApiClient, Credentials};
use crate::client::client::Client;
use crate::consts::MERCHANT_KEY_HEADER;
use crate::error::Error;
use crate::types::Response;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreateInvoiceRequest<'a> {
    pub cryptocurrencies: &'a [String],
    pub currency: &'a str,
    pub target_value: f64,
    pub title: &'a str,
    pub description: &'a str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct EstimateInvoicePriceRequest<'a> {
    pub cryptocurrencies: &'a [String],
    pub currency: &'a str,
    pub target_value: f64,
}

/// Body of `process-invoices` and `forward-invoices`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InvoiceHashesRequest<'a> {
    pub invoice_hashes: &'a [String],
}

/// Body of `generate-invoice-address` and `recover-invoice-private-key`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InvoiceCryptocurrencyRequest<'a> {
    pub invoice_hash: &'a str,
    pub cryptocurrency: &'a str,
}

/// Client for the `merchant` resource: invoices and their funds.
#[derive(Debug, Clone)]
pub struct MerchantApi {
    credentials: Credentials,
    client: Client,
}

impl MerchantApi {
    const SUFFIX: &'static str = "merchant";

    pub fn new(merchant_key: &str, secret_key: &str) -> Result<Self, Error> {
        let credentials = Credentials::new(merchant_key, secret_key);
        let client = Client::new(Self::SUFFIX, credentials.headers(MERCHANT_KEY_HEADER)?)?;
        Ok(Self { credentials, client })
    }

    pub fn with_http_client(http_client: reqwest::Client, merchant_key: &str, secret_key: &str) -> Result<Self, Error> {
        let credentials = Credentials::new(merchant_key, secret_key);
        let client = Client::with_http_client(http_client, Self::SUFFIX, credentials.headers(MERCHANT_KEY_HEADER)?);
        Ok(Self { credentials, client })
    }

    pub fn merchant_key(&self) -> &str {
        self.credentials.key()
    }

    /// Creates an invoice to charge for a product or service.
    pub async fn create_invoice(
        &self,
        cryptocurrencies: &[String],
        currency: &str,
        target_value: f64,
        title: &str,
        description: &str,
    ) -> Result<Response, Error> {
        let body = CreateInvoiceRequest { cryptocurrencies, currency, target_value, title, description };
        self.client.post("create-invoice", &body).await
    }

    /// Estimates the invoice price in each of `cryptocurrencies`.
    pub async fn estimate_invoice_price(&self, cryptocurrencies: &[String], currency: &str, target_value: f64) -> Result<Response, Error> {
        let body = EstimateInvoicePriceRequest { cryptocurrencies, currency, target_value };
        self.client.post("estimate-invoice-price", &body).await
    }

    /// Manually processes expired invoices to update their received amount.
    pub async fn process_invoices(&self, invoice_hashes: &[String]) -> Result<Response, Error> {
        self.client.post("process-invoices", &InvoiceHashesRequest { invoice_hashes }).await
    }

    pub async fn forward_invoices(&self, invoice_hashes: &[String]) -> Result<Response, Error> {
        self.client.post("forward-invoices", &InvoiceHashesRequest { invoice_hashes }).await
    }

    pub async fn generate_invoice_address(&self, invoice_hash: &str, cryptocurrency: &str) -> Result<Response, Error> {
        let body = InvoiceCryptocurrencyRequest { invoice_hash, cryptocurrency };
        self.client.post("generate-invoice-address", &body).await
    }

    pub async fn recover_invoice_private_key(&self, invoice_hash: &str, cryptocurrency: &str) -> Result<Response, Error> {
        let body = InvoiceCryptocurrencyRequest { invoice_hash, cryptocurrency };
        self.client.post("recover-invoice-private-key", &body).await
    }

    /// Invoice details and current status.
    pub async fn invoice_info(&self, invoice_hash: &str) -> Result<Response, Error> {
        self.client.get(&invoice_info_uri(invoice_hash)).await
    }
}

impl BaseApiClient for MerchantApi {
    fn set_api_url(&mut self, api_url: &str) {
        self.client.set_api_url(api_url);
    }

    fn base_uri(&self) -> &str {
        self.client.base_uri()
    }
}

fn invoice_info_uri(invoice_hash: &str) -> String {
    let hash: String = form_urlencoded::byte_serialize(invoice_hash.as_bytes()).collect();
    format!("invoice-info?invoice_hash={}", hash)
}

#[cfg(test)]
mod tests {
    use super::{invoice_info_uri, CreateInvoiceRequest, MerchantApi};
    use crate::api::BaseApiClient;
    use crate::consts::DEFAULT_API_URL;
    use serde_json::json;

    #[test]
    fn test_merchant_base_uri() {
        let api = MerchantApi::new("mk", "sk").unwrap();
        assert_eq!(api.base_uri(), format!("{}/merchant", DEFAULT_API_URL));
        assert_eq!(api.merchant_key(), "mk");
    }

    #[test]
    fn test_invoice_info_uri() {
        assert_eq!(invoice_info_uri("3f9a0c"), "invoice-info?invoice_hash=3f9a0c");
        assert_eq!(invoice_info_uri("a b&c"), "invoice-info?invoice_hash=a+b%26c");
    }

    #[test]
    fn test_create_invoice_body() {
        let cryptocurrencies = vec!["BTC".to_string()];
        let body = CreateInvoiceRequest {
            cryptocurrencies: &cryptocurrencies,
            currency: "USD",
            target_value: 10.0,
            title: "t",
            description: "d",
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"cryptocurrencies":["BTC"],"currency":"USD","target_value":10.0,"title":"t","description":"d"}"#
        );
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"cryptocurrencies": ["BTC"], "currency": "USD", "target_value": 10.0, "title": "t", "description": "d"})
        );
    }
}
