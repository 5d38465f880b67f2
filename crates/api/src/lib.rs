//! Scaffold API client.
//!
//! A thin client over the scaffold server's REST API. It focuses on:
//!
//! - Constructing an HTTP client with the `X-Scaffold-API` authorization header
//! - Validating the base URL before any request is built
//! - One method per resource operation, returning the status and typed body
//!
//! Every operation takes `fail_on_error`. When it is `true`, a status of 400 or
//! above becomes [`ApiError::Status`]; when it is `false`, the status is handed
//! back in the [`ApiResponse`] and the body is left empty.
//!
//! # Example
//!
//! ```ignore
//! use scaffold_api::ScaffoldClient;
//!
//! async fn list() -> Result<(), scaffold_api::ApiError> {
//!     let client = ScaffoldClient::new("http://localhost:2997", "MyCoolPrimaryKey12345")?;
//!     let workflows = client.workflows(true).await?.into_body()?;
//!     println!("{} workflows", workflows.len());
//!     Ok(())
//! }
//! ```

use std::env;
use std::time::Duration;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url, header};
use scaffold_types::LoadError;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

mod files;
mod histories;
mod inputs;
mod response;
mod runs;
mod states;
mod tasks;
mod users;
mod webhooks;
mod workflows;

pub use response::{ApiResponse, JsonParseError, parse_response_json_strict, status_error_message};

/// Prefix of every API route.
pub const API_PREFIX: &str = "/api/v1";

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Error surfaced by [`ScaffoldClient`] operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid scaffold base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("invalid API token header: {0}")]
    InvalidToken(#[from] header::InvalidHeaderValue),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request {method} {url} failed: {source}")]
    Http {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} responded with {status}{}: {body_preview}", format_hint(.hint))]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
        hint: Option<String>,
        body_preview: String,
    },
    #[error("response with status {status} carried no body")]
    MissingBody { status: StatusCode },
    #[error(transparent)]
    Json(#[from] JsonParseError),
    #[error(transparent)]
    Payload(#[from] LoadError),
}

fn format_hint(hint: &Option<String>) -> String {
    hint.as_deref().map(|hint| format!(" ({hint})")).unwrap_or_default()
}

impl ApiError {
    /// Status code of an error response, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } | ApiError::MissingBody { status } => Some(*status),
            _ => None,
        }
    }
}

/// Thin wrapper around a configured `reqwest::Client` for scaffold API access.
#[derive(Debug, Clone)]
pub struct ScaffoldClient {
    base_url: String,
    http: Client,
    user_agent: String,
}

impl ScaffoldClient {
    /// Build a client for `base_url` (e.g. `http://localhost:2997`) that
    /// authenticates every request with `api_token`.
    ///
    /// # Errors
    /// [`ApiError::InvalidBaseUrl`] unless the URL is http(s) with a host.
    pub fn new(base_url: &str, api_token: &str) -> Result<Self, ApiError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        validate_base_url(&base_url)?;

        let mut default_headers = header::HeaderMap::new();
        let mut authorization = header::HeaderValue::from_str(&format!("X-Scaffold-API {}", api_token))?;
        authorization.set_sensitive(true);
        default_headers.insert(header::AUTHORIZATION, authorization);
        default_headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            base_url,
            http,
            user_agent: format!("scaffold-harness/{}; {}", env!("CARGO_PKG_VERSION"), env::consts::OS),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for an API route made of `segments`, each percent-encoded.
    ///
    /// `["task", "foo", "write file"]` resolves to `/api/v1/task/foo/write%20file`.
    pub fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, api_path(segments));
        debug!(%method, %url, "building request");

        self.http
            .request(method, url)
            .header(header::USER_AGENT, &self.user_agent)
    }

    /// Send a request and decode its JSON body.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fail_on_error: bool,
    ) -> Result<ApiResponse<T>, ApiError> {
        let (status, text) = self.send(builder, fail_on_error).await?;
        if !status.is_success() {
            return Ok(ApiResponse { status, body: None });
        }
        let body = parse_response_json_strict(&text, Some(status))?;
        Ok(ApiResponse { status, body: Some(body) })
    }

    /// Send a request whose body is not needed by callers.
    pub(crate) async fn send_status(&self, builder: RequestBuilder, fail_on_error: bool) -> Result<ApiResponse<()>, ApiError> {
        let (status, _) = self.send(builder, fail_on_error).await?;
        let body = status.is_success().then_some(());
        Ok(ApiResponse { status, body })
    }

    async fn send(&self, builder: RequestBuilder, fail_on_error: bool) -> Result<(StatusCode, String), ApiError> {
        let request = builder.build().map_err(ApiError::Client)?;
        let method = request.method().clone();
        let url = request.url().to_string();

        let reply = self.http.execute(request).await.map_err(|source| ApiError::Http {
            method: method.clone(),
            url: url.clone(),
            source,
        })?;
        let status = reply.status();
        let text = reply.text().await.map_err(|source| ApiError::Http {
            method: method.clone(),
            url: url.clone(),
            source,
        })?;
        debug!(%method, %url, status = status.as_u16(), "received response");

        if fail_on_error && (status.is_client_error() || status.is_server_error()) {
            return Err(ApiError::Status {
                method,
                url,
                status,
                hint: status_error_message(status.as_u16()),
                body_preview: response::truncate_response_preview(&text, response::PREVIEW_CHARS),
            });
        }
        Ok((status, text))
    }
}

/// Join path segments into an encoded API route.
pub fn api_path(segments: &[&str]) -> String {
    let mut path = API_PREFIX.to_string();
    for segment in segments {
        path.push('/');
        path.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    path
}

/// Validate that a base URL is usable: http or https, with a host.
fn validate_base_url(base: &str) -> Result<(), ApiError> {
    let invalid = |reason: String| ApiError::InvalidBaseUrl {
        url: base.to_string(),
        reason,
    };

    let parsed = Url::parse(base).map_err(|error| invalid(error.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", parsed.scheme())));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}
