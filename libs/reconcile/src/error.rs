//! Error types for the read path.
//!
//! `ServiceError` is the closed set of failures the transport reports.
//! `RequestError` covers envelope requests the handler cannot act on.
//! Both collapse into a `HandlerErrorCode` at the envelope boundary.

use qbiz_id::IdError;
use qbiz_model::HandlerErrorCode;
use thiserror::Error;

/// Failure reported by the remote service or the transport in front of it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The service rejected the request as malformed.
    #[error("ValidationException: {message}")]
    Validation { message: String },

    /// The addressed resource does not exist.
    #[error("ResourceNotFoundException: {message}")]
    ResourceNotFound { message: String },

    /// Request rate exceeded, or the transport gave up waiting.
    #[error("ThrottlingException: {message}")]
    Throttling { message: String },

    /// The caller's credentials do not permit the call.
    #[error("AccessDeniedException: {message}")]
    AccessDenied { message: String },

    /// The service failed internally.
    #[error("InternalServerException: {message}")]
    InternalServer { message: String },

    /// A service error type this handler does not classify.
    #[error("{code}: {message}")]
    Unclassified { code: String, message: String },

    /// The call never produced a service response.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ServiceError {
    /// Decode a service error from its wire error type.
    ///
    /// `code` is the bare exception name, e.g. `ThrottlingException`.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            "ValidationException" => ServiceError::Validation { message },
            "ResourceNotFoundException" => ServiceError::ResourceNotFound { message },
            "ThrottlingException" => ServiceError::Throttling { message },
            "AccessDeniedException" => ServiceError::AccessDenied { message },
            "InternalServerException" => ServiceError::InternalServer { message },
            other => ServiceError::Unclassified {
                code: other.to_string(),
                message,
            },
        }
    }

    /// Map onto the envelope's error taxonomy.
    ///
    /// Anything not explicitly classified is a general service failure.
    pub fn handler_error_code(&self) -> HandlerErrorCode {
        match self {
            ServiceError::Validation { .. } => HandlerErrorCode::InvalidRequest,
            ServiceError::ResourceNotFound { .. } => HandlerErrorCode::NotFound,
            ServiceError::Throttling { .. } => HandlerErrorCode::Throttling,
            ServiceError::AccessDenied { .. } => HandlerErrorCode::AccessDenied,
            ServiceError::InternalServer { .. } => HandlerErrorCode::GeneralServiceException,
            _ => HandlerErrorCode::GeneralServiceException,
        }
    }

    /// Wire error type, for logging.
    pub fn code(&self) -> &str {
        match self {
            ServiceError::Validation { .. } => "ValidationException",
            ServiceError::ResourceNotFound { .. } => "ResourceNotFoundException",
            ServiceError::Throttling { .. } => "ThrottlingException",
            ServiceError::AccessDenied { .. } => "AccessDeniedException",
            ServiceError::InternalServer { .. } => "InternalServerException",
            ServiceError::Unclassified { code, .. } => code,
            ServiceError::Transport(_) => "TransportError",
        }
    }
}

/// A handler request that cannot be served.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No desired state, or desired state without `ApplicationId`.
    #[error("ApplicationId is required")]
    MissingIdentifier,

    /// The identifier is present but unusable.
    #[error("invalid ApplicationId: {0}")]
    InvalidIdentifier(#[source] IdError),

    /// Account context needed to address the resource is missing.
    #[error("cannot derive resource ARN: {0}")]
    ResourceArn(#[source] IdError),
}

impl RequestError {
    pub fn handler_error_code(&self) -> HandlerErrorCode {
        HandlerErrorCode::InvalidRequest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_types() {
        assert_eq!(
            ServiceError::from_code("ValidationException", "nopes"),
            ServiceError::Validation {
                message: "nopes".to_string()
            }
        );
        assert_eq!(
            ServiceError::from_code("ResourceNotFoundException", "404").handler_error_code(),
            HandlerErrorCode::NotFound
        );
    }

    #[test]
    fn test_from_code_unknown_type_falls_back() {
        let err = ServiceError::from_code("ConflictException", "busy");
        assert_eq!(err.code(), "ConflictException");
        assert_eq!(
            err.handler_error_code(),
            HandlerErrorCode::GeneralServiceException
        );
        assert_eq!(err.to_string(), "ConflictException: busy");
    }

    #[test]
    fn test_transport_error_is_general() {
        let err = ServiceError::Transport("connection reset".to_string());
        assert_eq!(
            err.handler_error_code(),
            HandlerErrorCode::GeneralServiceException
        );
        assert_eq!(err.code(), "TransportError");
    }

    #[test]
    fn test_request_errors_are_invalid_requests() {
        assert_eq!(
            RequestError::MissingIdentifier.handler_error_code(),
            HandlerErrorCode::InvalidRequest
        );
        let err = RequestError::ResourceArn(IdError::EmptyComponent("region"));
        assert_eq!(
            err.to_string(),
            "cannot derive resource ARN: ARN component 'region' cannot be empty"
        );
    }
}
