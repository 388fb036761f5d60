//! In-memory `ApplicationApi` for tests and local development.
//!
//! Responses are configured up front and replayed on every call. Every call
//! is recorded so callers can assert on call order and count.

use std::sync::Mutex;

use async_trait::async_trait;
use qbiz_id::{ApplicationId, ResourceArn};
use tracing::debug;

use crate::api::{ApplicationApi, DescribeApplicationResponse, ListTagsForResourceResponse};
use crate::ServiceError;

/// A call received by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    DescribeApplication(ApplicationId),
    ListTagsForResource(ResourceArn),
}

/// Mock application API.
pub struct MockApplicationApi {
    describe: Result<DescribeApplicationResponse, ServiceError>,
    list_tags: Result<ListTagsForResourceResponse, ServiceError>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockApplicationApi {
    /// Create a mock that knows no applications and lists no tags.
    pub fn new() -> Self {
        Self {
            describe: Err(ServiceError::ResourceNotFound {
                message: "application not found".to_string(),
            }),
            list_tags: Ok(ListTagsForResourceResponse::default()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer every describe with this result.
    pub fn with_describe(
        mut self,
        result: Result<DescribeApplicationResponse, ServiceError>,
    ) -> Self {
        self.describe = result;
        self
    }

    /// Answer every list-tags with this result.
    pub fn with_list_tags(
        mut self,
        result: Result<ListTagsForResourceResponse, ServiceError>,
    ) -> Self {
        self.list_tags = result;
        self
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock_calls().clone()
    }

    pub fn describe_count(&self) -> usize {
        self.lock_calls()
            .iter()
            .filter(|call| matches!(call, RecordedCall::DescribeApplication(_)))
            .count()
    }

    pub fn list_tags_count(&self) -> usize {
        self.lock_calls()
            .iter()
            .filter(|call| matches!(call, RecordedCall::ListTagsForResource(_)))
            .count()
    }

    fn record(&self, call: RecordedCall) {
        self.lock_calls().push(call);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<RecordedCall>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockApplicationApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationApi for MockApplicationApi {
    async fn describe_application(
        &self,
        application_id: &ApplicationId,
    ) -> Result<DescribeApplicationResponse, ServiceError> {
        debug!(application_id = %application_id, "[MOCK] DescribeApplication");
        self.record(RecordedCall::DescribeApplication(application_id.clone()));
        self.describe.clone()
    }

    async fn list_tags_for_resource(
        &self,
        resource_arn: &ResourceArn,
    ) -> Result<ListTagsForResourceResponse, ServiceError> {
        debug!(resource_arn = %resource_arn, "[MOCK] ListTagsForResource");
        self.record(RecordedCall::ListTagsForResource(resource_arn.clone()));
        self.list_tags.clone()
    }
}
