use cryptounifier_sdk_rs::api::BaseApiClient;
use cryptounifier_sdk_rs::error::Error;
use cryptounifier_sdk_rs::{merchant_api, wallet_api};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let wallet_key = std::env::var("CRYPTOUNIFIER_WALLET_KEY").unwrap_or_default();
    let secret_key = std::env::var("CRYPTOUNIFIER_SECRET_KEY").unwrap_or_default();

    let mut wallet = wallet_api(&wallet_key, &secret_key, "btc")?;
    if let Ok(url) = std::env::var("CRYPTOUNIFIER_API_URL") {
        wallet.set_api_url(&url);
    }

    let balance = wallet.get_balance().await?;
    println!("balance: {}", balance.message);
    println!("credits: consumed {} remaining {}", balance.credits.consumed, balance.credits.remaining_balance);

    let merchant_key = std::env::var("CRYPTOUNIFIER_MERCHANT_KEY").unwrap_or_default();
    let merchant = merchant_api(&merchant_key, &secret_key)?;
    let estimate = merchant
        .estimate_invoice_price(&["BTC".to_string(), "LTC".to_string()], "USD", 25.0)
        .await?;
    println!("estimate: {}", estimate.message);

    Ok(())
}
