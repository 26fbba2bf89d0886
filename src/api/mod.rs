//! Typed clients for the three CryptoUnifier resource areas.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::consts::SECRET_KEY_HEADER;
use crate::error::Error;

pub mod merchant;
pub mod wallet;
pub mod wallet_token;

/// Operations every resource client shares with its underlying executor.
pub trait BaseApiClient {
    /// Points the client at another origin, keeping its resource suffix.
    fn set_api_url(&mut self, api_url: &str);

    fn base_uri(&self) -> &str;
}

/// Key/secret pair sent as auth headers on every request.
#[derive(Clone)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self { key: key.into(), secret: secret.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Builds `{key_header: key, X-Secret-Key: secret}`. The secret value is
    /// marked sensitive so it is redacted from `Debug` output.
    pub(crate) fn headers(&self, key_header: &str) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(header_name(key_header)?, header_value(key_header, &self.key)?);

        let mut secret = header_value(SECRET_KEY_HEADER, &self.secret)?;
        secret.set_sensitive(true);
        headers.insert(header_name(SECRET_KEY_HEADER)?, secret);
        Ok(headers)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

fn header_name(name: &str) -> Result<HeaderName, Error> {
    HeaderName::from_bytes(name.as_bytes()).map_err(|_| Error::InvalidHeaderValue(name.to_string()))
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, Error> {
    HeaderValue::from_str(value).map_err(|_| Error::InvalidHeaderValue(name.to_string()))
}
