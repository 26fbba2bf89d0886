use std::time::Duration;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Origin every client starts with until `set_api_url` replaces it.
pub const DEFAULT_API_URL: &str = "https://cryptounifier.io/api/v1";

/// Total time allowed for one request, connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub const WALLET_KEY_HEADER: &str = "X-Wallet-Key";
pub const MERCHANT_KEY_HEADER: &str = "X-Merchant-Key";
pub const SECRET_KEY_HEADER: &str = "X-Secret-Key";
