//! HTTP transport for the application API.
//!
//! Speaks the service's REST-JSON protocol:
//! - `GET /applications/{applicationId}` for DescribeApplication
//! - `GET /v1/tags/{resourceArn}` for ListTagsForResource
//!
//! Request signing is not done here; point the endpoint at the service
//! through a signing proxy, or at a local emulator.

use anyhow::{Context, Result};
use async_trait::async_trait;
use qbiz_id::{ApplicationId, ResourceArn};
use qbiz_reconcile::api::{DescribeApplicationResponse, ListTagsForResourceResponse};
use qbiz_reconcile::{ApplicationApi, ServiceError};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;

/// Header carrying the service error type.
const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Application API client over HTTP.
#[derive(Debug, Clone)]
pub struct HttpApplicationApi {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpApplicationApi {
    /// Create a new client from config.
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.endpoint_url)
            .with_context(|| format!("invalid endpoint URL: {}", config.endpoint_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("endpoint URL cannot be a base: {}", config.endpoint_url);
        }

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    /// Build a URL from percent-encoded path segments.
    ///
    /// URL normalization drops `.` and `..` segments, which would address a
    /// different resource, so they are rejected.
    fn url(&self, segments: &[&str]) -> Result<Url, ServiceError> {
        if let Some(segment) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(ServiceError::Validation {
                message: format!("'{segment}' is not a valid path segment"),
            });
        }

        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ServiceError> {
        debug!(url = %url, "Sending request");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(decode_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| ServiceError::Transport(format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl ApplicationApi for HttpApplicationApi {
    async fn describe_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<DescribeApplicationResponse, ServiceError> {
        self.get(self.url(&["applications", application_id.as_str()])?)
            .await
    }

    async fn list_tags_for_resource(
        &self,
        resource_arn: &ResourceArn,
    ) -> Result<ListTagsForResourceResponse, ServiceError> {
        let arn = resource_arn.to_string();
        self.get(self.url(&["v1", "tags", arn.as_str()])?).await
    }
}

/// Service error body. Services disagree on member casing.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(rename = "__type", default)]
    error_type: Option<String>,

    #[serde(default)]
    code: Option<String>,

    #[serde(default, alias = "Message")]
    message: Option<String>,
}

/// Turn a non-success response into a `ServiceError`.
async fn decode_error(response: reqwest::Response) -> ServiceError {
    let status = response.status();
    let header_type = response
        .headers()
        .get(ERROR_TYPE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let body: ErrorBody = response.json().await.unwrap_or_default();
    let message = body.message.unwrap_or_else(|| status.to_string());

    let error = match header_type.or(body.error_type).or(body.code) {
        Some(raw) => ServiceError::from_code(error_code(&raw), message),
        None => ServiceError::Unclassified {
            code: format!("HTTP{}", status.as_u16()),
            message,
        },
    };

    debug!(status = %status, error = %error, "Request failed");
    error
}

/// Strip namespace and trailing metadata from a wire error type.
///
/// `aws.protocoltests#ThrottlingException:http://internal` becomes
/// `ThrottlingException`.
fn error_code(raw: &str) -> &str {
    let without_suffix = raw.split(':').next().unwrap_or(raw);
    without_suffix
        .rsplit('#')
        .next()
        .unwrap_or(without_suffix)
        .trim()
}

/// A request that produced no response. Timeouts are the transport's
/// deadline expiring and surface as throttling.
fn transport_error(err: reqwest::Error) -> ServiceError {
    if err.is_timeout() {
        ServiceError::Throttling {
            message: format!("request timed out: {err}"),
        }
    } else {
        ServiceError::Transport(err.to_string())
    }
}
