use crate::consts::{DEFAULT_API_URL, REQUEST_TIMEOUT, VERSION};
use crate::error::Error;
use crate::error::Error::{DecodeError, SerializationError, TransportError};
use crate::types::Response;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, warn};

/// Request executor shared by the wallet, wallet token and merchant APIs.
///
/// Every request goes to `{base_uri}/{uri}` with the configured headers. The
/// reply is decoded whatever its HTTP status.
#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    suffix: String,
    headers: HeaderMap,
    base_uri: String,
}

impl Client {
    pub fn new(suffix: impl Into<String>, headers: HeaderMap) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(format!("cryptounifier-sdk-rs/{}", VERSION))
            .build()?;
        Ok(Self::with_http_client(client, suffix, headers))
    }

    /// Uses `client` as the transport. Its timeout policy is left untouched.
    pub fn with_http_client(client: reqwest::Client, suffix: impl Into<String>, headers: HeaderMap) -> Self {
        let suffix = suffix.into();
        Self {
            client,
            base_uri: join_uri(DEFAULT_API_URL, &suffix),
            suffix,
            headers,
        }
    }

    pub fn set_api_url(&mut self, api_url: &str) {
        self.base_uri = join_uri(api_url, &self.suffix);
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub async fn execute_request<T>(&self, method: Method, uri: &str, payload: Option<&T>) -> Result<Response, Error>
        where
            T: Serialize + ?Sized,
    {
        let url = join_uri(&self.base_uri, uri);

        let mut request = self
            .client
            .request(method.clone(), url.as_str())
            .headers(self.headers.clone());

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(SerializationError)?;
            request = request
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        debug!(%method, %url, "sending request");
        let resp = request.send().await.map_err(|e| {
            warn!(%method, %url, error = %e, "request failed");
            TransportError(e)
        })?;

        let status = resp.status();
        let body = resp.bytes().await.map_err(|e| {
            warn!(%method, %url, error = %e, "reading response body failed");
            TransportError(e)
        })?;
        debug!(%method, %url, %status, bytes = body.len(), "received response");

        decode_response_body(&body)
    }

    pub async fn get(&self, uri: &str) -> Result<Response, Error> {
        self.execute_request::<()>(Method::GET, uri, None).await
    }

    pub async fn post<T>(&self, uri: &str, payload: &T) -> Result<Response, Error>
        where
            T: Serialize + ?Sized,
    {
        self.execute_request(Method::POST, uri, Some(payload)).await
    }
}

fn join_uri(base: &str, path: &str) -> String {
    format!("{}/{}", base, path)
}

fn decode_response_body(body: &[u8]) -> Result<Response, Error> {
    Response::from_slice(body).map_err(|e| {
        warn!(error = %e, "malformed response body");
        DecodeError(e)
    })
}
