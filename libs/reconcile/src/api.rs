//! Remote application API: the transport seam and its wire types.
//!
//! The reconciler only sees this trait. Network I/O, request signing,
//! retries and deadlines all live behind it.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use qbiz_id::{ApplicationId, ResourceArn};
use serde::Deserialize;

use crate::ServiceError;

/// Remote application API.
#[async_trait]
pub trait ApplicationApi: Send + Sync {
    /// Fetch the authoritative attributes of an application.
    async fn describe_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<DescribeApplicationResponse, ServiceError>;

    /// Fetch the tags attached to a resource.
    async fn list_tags_for_resource(
        &self,
        resource_arn: &ResourceArn,
    ) -> Result<ListTagsForResourceResponse, ServiceError>;
}

#[async_trait]
impl<T: ApplicationApi + ?Sized> ApplicationApi for Arc<T> {
    async fn describe_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<DescribeApplicationResponse, ServiceError> {
        (**self).describe_application(application_id).await
    }

    async fn list_tags_for_resource(
        &self,
        resource_arn: &ResourceArn,
    ) -> Result<ListTagsForResourceResponse, ServiceError> {
        (**self).list_tags_for_resource(resource_arn).await
    }
}

// =============================================================================
// DescribeApplication
// =============================================================================

/// Snapshot returned by `DescribeApplication`.
///
/// Every member is optional: the service omits what is not set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeApplicationResponse {
    #[serde(default)]
    pub application_id: Option<String>,

    #[serde(default)]
    pub role_arn: Option<String>,

    #[serde(default, deserialize_with = "epoch_seconds::deserialize")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "epoch_seconds::deserialize")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub status: Option<ApplicationStatus>,

    #[serde(default)]
    pub capacity_unit_configuration: Option<ChatCapacityUnitConfiguration>,

    #[serde(default)]
    pub chat_configuration: Option<AppliedChatConfiguration>,

    #[serde(default)]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,
}

/// Application lifecycle status.
///
/// Values this crate does not know are carried through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ApplicationStatus {
    Creating,
    Active,
    Deleting,
    Failed,
    Updating,
    Unknown(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationStatus::Creating => "CREATING",
            ApplicationStatus::Active => "ACTIVE",
            ApplicationStatus::Deleting => "DELETING",
            ApplicationStatus::Failed => "FAILED",
            ApplicationStatus::Updating => "UPDATING",
            ApplicationStatus::Unknown(other) => other,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "CREATING" => ApplicationStatus::Creating,
            "ACTIVE" => ApplicationStatus::Active,
            "DELETING" => ApplicationStatus::Deleting,
            "FAILED" => ApplicationStatus::Failed,
            "UPDATING" => ApplicationStatus::Updating,
            _ => ApplicationStatus::Unknown(value),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatCapacityUnitConfiguration {
    #[serde(default)]
    pub users: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedChatConfiguration {
    #[serde(default)]
    pub response_configuration: Option<ResponseConfiguration>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseConfiguration {
    #[serde(default)]
    pub blocked_phrases: Option<Vec<String>>,

    #[serde(default)]
    pub blocked_topics_prompt: Option<String>,

    #[serde(default)]
    pub default_message: Option<String>,

    #[serde(default)]
    pub non_retrieval_response_control_status: Option<ResponseControlStatus>,

    #[serde(default)]
    pub retrieval_response_control_status: Option<ResponseControlStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ResponseControlStatus {
    Enabled,
    Disabled,
    Unknown(String),
}

impl ResponseControlStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ResponseControlStatus::Enabled => "ENABLED",
            ResponseControlStatus::Disabled => "DISABLED",
            ResponseControlStatus::Unknown(other) => other,
        }
    }
}

impl From<String> for ResponseControlStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ENABLED" => ResponseControlStatus::Enabled,
            "DISABLED" => ResponseControlStatus::Disabled,
            _ => ResponseControlStatus::Unknown(value),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSideEncryptionConfiguration {
    #[serde(default)]
    pub kms_key_id: Option<String>,
}

// =============================================================================
// ListTagsForResource
// =============================================================================

/// Tags returned by `ListTagsForResource`, in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsForResourceResponse {
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Service timestamps are epoch seconds, possibly fractional.
mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(secs) = Option::<f64>::deserialize(deserializer)? else {
            return Ok(None);
        };

        if !secs.is_finite() {
            return Err(de::Error::custom(format!("invalid timestamp: {secs}")));
        }

        // Truncate toward the earlier instant so a fraction never carries
        // into the next second.
        let whole = secs.floor();
        let nanos = (((secs - whole) * 1e9) as u32).min(999_999_999);
        DateTime::from_timestamp(whole as i64, nanos)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("timestamp out of range: {secs}")))
    }
}
