//! Read handler for the Application resource.
//!
//! The handler:
//! - Resolves the target application and its ARN from the request
//! - Describes the application
//! - Lists the application's tags
//! - Merges both into a `ResourceModel`
//!
//! The two remote calls run strictly in that order. The first failure ends
//! the read with a failed `ProgressEvent`; nothing fetched before it is
//! returned.

use qbiz_id::{ApplicationId, ResourceArn};
use qbiz_model::{ProgressEvent, ResourceHandlerRequest, ResourceModel};
use tracing::{debug, info, warn};

use crate::api::ApplicationApi;
use crate::error::{RequestError, ServiceError};
use crate::translate;

/// Remote call made during a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteOperation {
    DescribeApplication,
    ListTagsForResource,
}

impl std::fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemoteOperation::DescribeApplication => write!(f, "DescribeApplication"),
            RemoteOperation::ListTagsForResource => write!(f, "ListTagsForResource"),
        }
    }
}

/// The application a read is addressed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTarget {
    pub application_id: ApplicationId,
    pub resource_arn: ResourceArn,
}

impl ReadTarget {
    /// Resolve the target from a handler request.
    pub fn from_request(request: &ResourceHandlerRequest) -> Result<Self, RequestError> {
        let raw_id = request
            .application_id()
            .ok_or(RequestError::MissingIdentifier)?;
        let application_id = ApplicationId::parse(raw_id).map_err(RequestError::InvalidIdentifier)?;

        let resource_arn = ResourceArn::for_application(
            request.aws_partition.as_deref().unwrap_or_default(),
            request.region.as_deref().unwrap_or_default(),
            request.aws_account_id.as_deref().unwrap_or_default(),
            &application_id,
        )
        .map_err(RequestError::ResourceArn)?;

        Ok(Self {
            application_id,
            resource_arn,
        })
    }
}

/// A remote call that failed, attributed to the call that raised it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFailure {
    pub operation: RemoteOperation,
    pub source: ServiceError,
}

impl ReadFailure {
    fn into_progress_event(self, application_id: &ApplicationId) -> ProgressEvent {
        let error_code = self.source.handler_error_code();
        warn!(
            application_id = %application_id,
            operation = %self.operation,
            service_error = self.source.code(),
            error_code = %error_code,
            error = %self.source,
            "Read failed"
        );
        ProgressEvent::failed(
            error_code,
            format!(
                "{} failed for application {}: {}",
                self.operation, application_id, self.source
            ),
        )
    }
}

/// Reads an application's live state.
pub struct ReadHandler<A> {
    api: A,
}

impl<A: ApplicationApi> ReadHandler<A> {
    /// Create a read handler over the given transport.
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Serve an envelope request.
    ///
    /// Requests that do not identify an application fail with
    /// `InvalidRequest` before any remote call is made.
    pub async fn handle_request(&self, request: &ResourceHandlerRequest) -> ProgressEvent {
        match ReadTarget::from_request(request) {
            Ok(target) => self.read(&target).await,
            Err(e) => {
                warn!(
                    stack_id = request.stack_id.as_deref().unwrap_or("-"),
                    error = %e,
                    "Rejecting read request"
                );
                ProgressEvent::failed(e.handler_error_code(), e.to_string())
            }
        }
    }

    /// Read the target application.
    pub async fn read(&self, target: &ReadTarget) -> ProgressEvent {
        info!(application_id = %target.application_id, "Reading application");

        match self.fetch(target).await {
            Ok(model) => {
                info!(
                    application_id = %target.application_id,
                    tag_count = model.tags.as_ref().map_or(0, Vec::len),
                    "Read succeeded"
                );
                ProgressEvent::success(model)
            }
            Err(failure) => failure.into_progress_event(&target.application_id),
        }
    }

    /// Describe, then list tags, then merge.
    pub async fn fetch(&self, target: &ReadTarget) -> Result<ResourceModel, ReadFailure> {
        let describe = self
            .api
            .describe_application(&target.application_id)
            .await
            .map_err(|source| ReadFailure {
                operation: RemoteOperation::DescribeApplication,
                source,
            })?;
        debug!(application_id = %target.application_id, "Described application");

        let tags = self
            .api
            .list_tags_for_resource(&target.resource_arn)
            .await
            .map_err(|source| ReadFailure {
                operation: RemoteOperation::ListTagsForResource,
                source,
            })?;
        debug!(
            resource_arn = %target.resource_arn,
            tag_count = tags.tags.len(),
            "Listed tags"
        );

        Ok(translate::resource_model(describe, tags))
    }
}
