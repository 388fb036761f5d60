//! Invocation envelope - what a handler receives and what it hands back.

use serde::{Deserialize, Serialize};

use crate::ResourceModel;

/// Terminal or intermediate status of a handler invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Pending,
    InProgress,
    Success,
    Failed,
}

impl std::fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OperationStatus::Pending => "PENDING",
            OperationStatus::InProgress => "IN_PROGRESS",
            OperationStatus::Success => "SUCCESS",
            OperationStatus::Failed => "FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Caller-facing failure classification.
///
/// These names are part of the envelope contract and must not change; they
/// are independent of the remote service's own error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandlerErrorCode {
    NotUpdatable,
    InvalidRequest,
    AccessDenied,
    InvalidCredentials,
    AlreadyExists,
    NotFound,
    ResourceConflict,
    Throttling,
    ServiceLimitExceeded,
    NotStabilized,
    GeneralServiceException,
    ServiceInternalError,
    NetworkFailure,
    InternalFailure,
    InvalidTypeConfiguration,
    HandlerInternalFailure,
    NonCompliant,
    Unknown,
    UnsupportedTarget,
}

impl HandlerErrorCode {
    /// The wire name of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            HandlerErrorCode::NotUpdatable => "NotUpdatable",
            HandlerErrorCode::InvalidRequest => "InvalidRequest",
            HandlerErrorCode::AccessDenied => "AccessDenied",
            HandlerErrorCode::InvalidCredentials => "InvalidCredentials",
            HandlerErrorCode::AlreadyExists => "AlreadyExists",
            HandlerErrorCode::NotFound => "NotFound",
            HandlerErrorCode::ResourceConflict => "ResourceConflict",
            HandlerErrorCode::Throttling => "Throttling",
            HandlerErrorCode::ServiceLimitExceeded => "ServiceLimitExceeded",
            HandlerErrorCode::NotStabilized => "NotStabilized",
            HandlerErrorCode::GeneralServiceException => "GeneralServiceException",
            HandlerErrorCode::ServiceInternalError => "ServiceInternalError",
            HandlerErrorCode::NetworkFailure => "NetworkFailure",
            HandlerErrorCode::InternalFailure => "InternalFailure",
            HandlerErrorCode::InvalidTypeConfiguration => "InvalidTypeConfiguration",
            HandlerErrorCode::HandlerInternalFailure => "HandlerInternalFailure",
            HandlerErrorCode::NonCompliant => "NonCompliant",
            HandlerErrorCode::Unknown => "Unknown",
            HandlerErrorCode::UnsupportedTarget => "UnsupportedTarget",
        }
    }
}

impl std::fmt::Display for HandlerErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request handed to a resource handler by the invocation envelope.
///
/// Only the fields the Application handlers consume are modelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceHandlerRequest {
    #[serde(default)]
    pub desired_resource_state: Option<ResourceModel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws_partition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_resource_identifier: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_request_token: Option<String>,
}

impl ResourceHandlerRequest {
    /// The primary identifier of the desired state, if one was supplied.
    pub fn application_id(&self) -> Option<&str> {
        self.desired_resource_state
            .as_ref()
            .and_then(|model| model.application_id.as_deref())
    }
}

/// Outcome of a handler invocation.
///
/// A successful event never carries `message` or `error_code`; a failed
/// event never carries a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    pub status: OperationStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_model: Option<ResourceModel>,

    /// Only list-style handlers populate this.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_models: Option<Vec<ResourceModel>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<HandlerErrorCode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_delay_seconds: Option<u32>,
}

impl ProgressEvent {
    /// Terminal success carrying a single model.
    pub fn success(model: ResourceModel) -> Self {
        Self {
            status: OperationStatus::Success,
            resource_model: Some(model),
            resource_models: None,
            message: None,
            error_code: None,
            callback_delay_seconds: None,
        }
    }

    /// Terminal failure.
    pub fn failed(error_code: HandlerErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: OperationStatus::Failed,
            resource_model: None,
            resource_models: None,
            message: Some(message.into()),
            error_code: Some(error_code),
            callback_delay_seconds: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OperationStatus::Success
    }

    pub fn is_failed(&self) -> bool {
        self.status == OperationStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_success_envelope_shape() {
        let event = ProgressEvent::success(ResourceModel::with_application_id("app-1"));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "SUCCESS",
                "resourceModel": { "ApplicationId": "app-1" }
            })
        );
    }

    #[test]
    fn test_failed_envelope_shape() {
        let event = ProgressEvent::failed(HandlerErrorCode::NotFound, "404");
        assert!(event.is_failed());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "status": "FAILED",
                "message": "404",
                "errorCode": "NotFound"
            })
        );
    }

    #[rstest]
    #[case(OperationStatus::Pending, "\"PENDING\"")]
    #[case(OperationStatus::InProgress, "\"IN_PROGRESS\"")]
    #[case(OperationStatus::Success, "\"SUCCESS\"")]
    #[case(OperationStatus::Failed, "\"FAILED\"")]
    fn test_operation_status_serialization(
        #[case] status: OperationStatus,
        #[case] expected: &str,
    ) {
        assert_eq!(serde_json::to_string(&status).unwrap(), expected);
        assert_eq!(format!("\"{status}\""), expected);
    }

    #[rstest]
    #[case(HandlerErrorCode::InvalidRequest)]
    #[case(HandlerErrorCode::NotFound)]
    #[case(HandlerErrorCode::Throttling)]
    #[case(HandlerErrorCode::AccessDenied)]
    #[case(HandlerErrorCode::GeneralServiceException)]
    #[case(HandlerErrorCode::ServiceLimitExceeded)]
    fn test_error_code_wire_names(#[case] code: HandlerErrorCode) {
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code.as_str()));

        let parsed: HandlerErrorCode = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, code);
    }

    #[test]
    fn test_request_deserialization() {
        let request: ResourceHandlerRequest = serde_json::from_str(
            r#"{
                "desiredResourceState": { "ApplicationId": "app-1" },
                "awsAccountId": "123456",
                "awsPartition": "aws",
                "region": "us-east-1",
                "stackId": "Stack1"
            }"#,
        )
        .unwrap();
        assert_eq!(request.application_id(), Some("app-1"));
        assert_eq!(request.aws_partition.as_deref(), Some("aws"));
        assert_eq!(request.client_request_token, None);
    }

    #[test]
    fn test_request_without_desired_state() {
        let request: ResourceHandlerRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.application_id(), None);
    }
}
