//! PCB Point REST API client
//!
//! Thin JSON-over-HTTPS wrapper: base URL, timeout, bearer token from the
//! session's token cell, a request id per call, and mapping of failures to
//! [`ApiError`]. There is no retry; a failed call surfaces once.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::ApiConfig;
use crate::state::TokenCell;
use crate::utils::errors::{ApiError, PcbPointError, Result};
use crate::utils::helpers::generate_request_id;
use crate::utils::logging;

/// Generic acknowledgement body (`{"message": "..."}` or anything else)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Percent-encode an id for use as a path segment
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: TokenCell,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig, token: TokenCell) -> Result<Self> {
        url::Url::parse(&config.base_url)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(PcbPointError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_cell(&self) -> &TokenCell {
        &self.token
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(self.url(path)?);
        self.execute(Method::GET, path, request).await
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self.client.get(self.url(path)?).query(query);
        self.execute(Method::GET, path, request).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.post(self.url(path)?).json(body);
        self.execute(Method::POST, path, request).await
    }

    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.client.patch(self.url(path)?).json(body);
        self.execute(Method::PATCH, path, request).await
    }

    fn url(&self, path: &str) -> Result<String> {
        let full = if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        };
        url::Url::parse(&full)?;
        Ok(full)
    }

    async fn execute<T: DeserializeOwned>(&self, method: Method, path: &str, request: RequestBuilder) -> Result<T> {
        let request_id = generate_request_id();
        let mut request = request.header("x-request-id", &request_id);
        if let Some(token) = self.token.get().await {
            request = request.bearer_auth(token);
        }

        debug!(method = %method, path = path, request_id = %request_id, "Sending API request");
        let started = Instant::now();

        let response = request.send().await.map_err(|e| {
            logging::log_api_error(path, &e.to_string(), Some(method.as_str()));
            if e.is_timeout() {
                PcbPointError::Api(ApiError::Timeout)
            } else if e.is_connect() {
                PcbPointError::Api(ApiError::Unreachable)
            } else {
                PcbPointError::Api(ApiError::RequestFailed(e.to_string()))
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            PcbPointError::Api(ApiError::RequestFailed(e.to_string()))
        })?;
        logging::log_api_call(method.as_str(), path, status.as_u16(), started.elapsed().as_millis() as u64);

        if !status.is_success() {
            return Err(error_for_status(status, &body));
        }

        decode_body(&body)
    }
}

/// Pull a human message out of an error body, if the server sent one
pub fn server_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error", "msg"]
        .iter()
        .find_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn error_for_status(status: StatusCode, body: &str) -> PcbPointError {
    let message = server_message(body);
    if status == StatusCode::UNAUTHORIZED {
        return PcbPointError::Authentication(
            message.unwrap_or_else(|| "Session expired, please log in again".to_string()),
        );
    }
    if status == StatusCode::FORBIDDEN {
        return PcbPointError::PermissionDenied(
            message.unwrap_or_else(|| "You are not allowed to do that".to_string()),
        );
    }
    PcbPointError::Api(ApiError::Status { status: status.as_u16(), message })
}

/// Decode a success body. Responses are ad hoc: some endpoints return the
/// payload directly, others wrap it as `{"data": ...}`. The wrapped payload
/// is tried first, then the whole body. An empty body is treated as `{}`.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T> {
    let value: Value = if body.trim().is_empty() {
        Value::Object(Default::default())
    } else {
        serde_json::from_str(body)
            .map_err(|e| PcbPointError::Api(ApiError::InvalidResponse(e.to_string())))?
    };

    if let Some(data) = value.get("data") {
        if let Ok(decoded) = serde_json::from_value::<T>(data.clone()) {
            return Ok(decoded);
        }
    }

    serde_json::from_value::<T>(value)
        .map_err(|e| PcbPointError::Api(ApiError::InvalidResponse(e.to_string())))
}
