use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use crate::api::{BaseApiClient, Credentials};
use crate::client::client::Client;
use crate::consts::WALLET_KEY_HEADER;
use crate::error::Error;
use crate::types::Response;

/// Body of `send-transaction` and `estimate-fee`, shared with the token API.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TransactionRequest<'a> {
    pub destinations: &'a Value,
    pub fee_per_byte: f64,
    pub extra_field: &'a str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ValidateAddressesRequest<'a> {
    pub addresses: &'a [String],
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TransactionInfoRequest<'a> {
    pub txid: &'a str,
}

/// Client for the `wallet/{crypto_symbol}` resource.
#[derive(Debug, Clone)]
pub struct WalletApi {
    credentials: Credentials,
    crypto_symbol: String,
    client: Client,
}

impl WalletApi {
    pub fn new(wallet_key: &str, secret_key: &str, crypto_symbol: &str) -> Result<Self, Error> {
        let credentials = Credentials::new(wallet_key, secret_key);
        let client = Client::new(Self::suffix(crypto_symbol), credentials.headers(WALLET_KEY_HEADER)?)?;
        Ok(Self { credentials, crypto_symbol: crypto_symbol.to_string(), client })
    }

    pub fn with_http_client(
        http_client: reqwest::Client,
        wallet_key: &str,
        secret_key: &str,
        crypto_symbol: &str,
    ) -> Result<Self, Error> {
        let credentials = Credentials::new(wallet_key, secret_key);
        let client = Client::with_http_client(
            http_client,
            Self::suffix(crypto_symbol),
            credentials.headers(WALLET_KEY_HEADER)?,
        );
        Ok(Self { credentials, crypto_symbol: crypto_symbol.to_string(), client })
    }

    fn suffix(crypto_symbol: &str) -> String {
        format!("wallet/{}", crypto_symbol)
    }

    pub fn wallet_key(&self) -> &str {
        self.credentials.key()
    }

    pub fn crypto_symbol(&self) -> &str {
        &self.crypto_symbol
    }

    /// Creates and broadcasts a transaction.
    pub async fn send_transaction(&self, destinations: &Value, fee_per_byte: f64, extra_field: &str) -> Result<Response, Error> {
        let body = TransactionRequest { destinations, fee_per_byte, extra_field };
        self.client.post("send-transaction", &body).await
    }

    /// Estimates the final fee of a transaction and its cost per byte.
    pub async fn estimate_fee(&self, destinations: &Value, fee_per_byte: f64, extra_field: &str) -> Result<Response, Error> {
        let body = TransactionRequest { destinations, fee_per_byte, extra_field };
        self.client.post("estimate-fee", &body).await
    }

    /// Checks whether each address is valid for this cryptocurrency.
    pub async fn validate_addresses(&self, addresses: &[String]) -> Result<Response, Error> {
        self.client.post("validate-addresses", &ValidateAddressesRequest { addresses }).await
    }

    /// Confirmed and unconfirmed balance.
    pub async fn get_balance(&self) -> Result<Response, Error> {
        self.client.get("balance").await
    }

    pub async fn get_deposit_addresses(&self) -> Result<Response, Error> {
        self.client.get("deposit-addresses").await
    }

    /// Current state of the blockchain and the sync percentage of the node.
    pub async fn get_blockchain_info(&self) -> Result<Response, Error> {
        self.client.get("blockchain-info").await
    }

    /// Sends `{"txid": ...}` as the body of a GET request.
    pub async fn get_transaction_info(&self, txid: &str) -> Result<Response, Error> {
        self.client
            .execute_request(Method::GET, "transaction-info", Some(&TransactionInfoRequest { txid }))
            .await
    }
}

impl BaseApiClient for WalletApi {
    fn set_api_url(&mut self, api_url: &str) {
        self.client.set_api_url(api_url);
    }

    fn base_uri(&self) -> &str {
        self.client.base_uri()
    }
}
