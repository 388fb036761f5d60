//! One handler invocation: request document in, progress event out.

use qbiz_model::{HandlerErrorCode, ProgressEvent, ResourceHandlerRequest};
use qbiz_reconcile::{ApplicationApi, ReadHandler};
use tracing::{info, warn};

/// Parse a request document and run the read handler on it.
///
/// Always produces a progress event; a malformed document is an
/// `InvalidRequest` failure.
pub async fn invoke<A: ApplicationApi>(handler: &ReadHandler<A>, input: &str) -> ProgressEvent {
    let request: ResourceHandlerRequest = match serde_json::from_str(input) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Malformed handler request");
            return ProgressEvent::failed(
                HandlerErrorCode::InvalidRequest,
                format!("malformed request: {e}"),
            );
        }
    };

    info!(
        stack_id = request.stack_id.as_deref().unwrap_or("-"),
        logical_resource_id = request.logical_resource_identifier.as_deref().unwrap_or("-"),
        client_request_token = request.client_request_token.as_deref().unwrap_or("-"),
        "Handling read request"
    );

    handler.handle_request(&request).await
}
