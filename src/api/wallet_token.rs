use serde_json::Value;

use crate::api::wallet::TransactionRequest;
use crate::api::{BaseApiClient, Credentials};
use crate::client::client::Client;
use crate::consts::WALLET_KEY_HEADER;
use crate::error::Error;
use crate::types::Response;

/// Client for the `wallet/{crypto_symbol}/token/{token_symbol}` resource.
#[derive(Debug, Clone)]
pub struct WalletTokenApi {
    credentials: Credentials,
    crypto_symbol: String,
    token_symbol: String,
    client: Client,
}

impl WalletTokenApi {
    pub fn new(wallet_key: &str, secret_key: &str, crypto_symbol: &str, token_symbol: &str) -> Result<Self, Error> {
        let credentials = Credentials::new(wallet_key, secret_key);
        let client = Client::new(
            Self::suffix(crypto_symbol, token_symbol),
            credentials.headers(WALLET_KEY_HEADER)?,
        )?;
        Ok(Self {
            credentials,
            crypto_symbol: crypto_symbol.to_string(),
            token_symbol: token_symbol.to_string(),
            client,
        })
    }

    pub fn with_http_client(
        http_client: reqwest::Client,
        wallet_key: &str,
        secret_key: &str,
        crypto_symbol: &str,
        token_symbol: &str,
    ) -> Result<Self, Error> {
        let credentials = Credentials::new(wallet_key, secret_key);
        let client = Client::with_http_client(
            http_client,
            Self::suffix(crypto_symbol, token_symbol),
            credentials.headers(WALLET_KEY_HEADER)?,
        );
        Ok(Self {
            credentials,
            crypto_symbol: crypto_symbol.to_string(),
            token_symbol: token_symbol.to_string(),
            client,
        })
    }

    fn suffix(crypto_symbol: &str, token_symbol: &str) -> String {
        format!("wallet/{}/token/{}", crypto_symbol, token_symbol)
    }

    pub fn wallet_key(&self) -> &str {
        self.credentials.key()
    }

    pub fn crypto_symbol(&self) -> &str {
        &self.crypto_symbol
    }

    pub fn token_symbol(&self) -> &str {
        &self.token_symbol
    }

    /// Creates and broadcasts a token transaction.
    pub async fn send_token_transaction(&self, destinations: &Value, fee_per_byte: f64, extra_field: &str) -> Result<Response, Error> {
        let body = TransactionRequest { destinations, fee_per_byte, extra_field };
        self.client.post("send-transaction", &body).await
    }

    pub async fn estimate_token_fee(&self, destinations: &Value, fee_per_byte: f64, extra_field: &str) -> Result<Response, Error> {
        let body = TransactionRequest { destinations, fee_per_byte, extra_field };
        self.client.post("estimate-fee", &body).await
    }

    pub async fn get_token_balance(&self) -> Result<Response, Error> {
        self.client.get("balance").await
    }
}

impl BaseApiClient for WalletTokenApi {
    fn set_api_url(&mut self, api_url: &str) {
        self.client.set_api_url(api_url);
    }

    fn base_uri(&self) -> &str {
        self.client.base_uri()
    }
}

#[cfg(test)]
mod tests {
    use super::WalletTokenApi;
    use crate::api::BaseApiClient;
    use crate::consts::DEFAULT_API_URL;

    #[test]
    fn test_token_base_uri() {
        let mut api = WalletTokenApi::new("wk", "sk", "eth", "usdt").unwrap();
        assert_eq!(api.base_uri(), format!("{}/wallet/eth/token/usdt", DEFAULT_API_URL));
        assert_eq!(api.token_symbol(), "usdt");

        api.set_api_url("https://sandbox.example.com/api");
        assert_eq!(api.base_uri(), "https://sandbox.example.com/api/wallet/eth/token/usdt");
    }
}
