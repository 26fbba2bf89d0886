pub mod api;
pub mod client;
pub mod consts;
pub mod error;
pub mod types;

use crate::api::merchant::MerchantApi;
use crate::api::wallet::WalletApi;
use crate::api::wallet_token::WalletTokenApi;
use crate::error::Error;

pub fn wallet_api(wallet_key: &str, secret_key: &str, crypto_symbol: &str) -> Result<WalletApi, Error> {
    WalletApi::new(wallet_key, secret_key, crypto_symbol)
}

pub fn wallet_token_api(wallet_key: &str, secret_key: &str, crypto_symbol: &str, token_symbol: &str) -> Result<WalletTokenApi, Error> {
    WalletTokenApi::new(wallet_key, secret_key, crypto_symbol, token_symbol)
}

pub fn merchant_api(merchant_key: &str, secret_key: &str) -> Result<MerchantApi, Error> {
    MerchantApi::new(merchant_key, secret_key)
}
