//! Translation from remote responses to the canonical resource model.
//!
//! Presence is preserved: a member the service omitted stays `None` in the
//! model. The one exception is an applied chat configuration without a
//! response configuration, which carries nothing and maps to `None`.

use qbiz_model::{self as model, time::format_instant, ResourceModel};

use crate::api::{
    AppliedChatConfiguration, ChatCapacityUnitConfiguration, DescribeApplicationResponse,
    ListTagsForResourceResponse, ResponseConfiguration, ServerSideEncryptionConfiguration, Tag,
};

/// Merge a describe snapshot and a tag listing into one model.
pub fn resource_model(
    describe: DescribeApplicationResponse,
    tags: ListTagsForResourceResponse,
) -> ResourceModel {
    ResourceModel {
        application_id: describe.application_id,
        role_arn: describe.role_arn,
        created_at: describe.created_at.as_ref().map(format_instant),
        updated_at: describe.updated_at.as_ref().map(format_instant),
        description: describe.description,
        name: describe.name,
        status: describe.status.map(|status| status.as_str().to_string()),
        capacity_unit_configuration: describe
            .capacity_unit_configuration
            .map(capacity_unit_configuration),
        chat_configuration: describe.chat_configuration.and_then(chat_configuration),
        server_side_encryption_configuration: describe
            .server_side_encryption_configuration
            .map(server_side_encryption_configuration),
        tags: Some(model_tags(tags.tags)),
    }
}

fn capacity_unit_configuration(
    remote: ChatCapacityUnitConfiguration,
) -> model::CapacityUnitConfiguration {
    model::CapacityUnitConfiguration {
        users: remote.users,
    }
}

fn chat_configuration(remote: AppliedChatConfiguration) -> Option<model::ChatConfiguration> {
    let response_configuration = remote.response_configuration?;
    Some(model::ChatConfiguration {
        response_configuration: Some(response_configuration_model(response_configuration)),
    })
}

fn response_configuration_model(remote: ResponseConfiguration) -> model::ResponseConfiguration {
    model::ResponseConfiguration {
        blocked_phrases: remote.blocked_phrases,
        blocked_topics_prompt: remote.blocked_topics_prompt,
        default_message: remote.default_message,
        non_retrieval_response_control_status: remote
            .non_retrieval_response_control_status
            .map(|status| status.as_str().to_string()),
        retrieval_response_control_status: remote
            .retrieval_response_control_status
            .map(|status| status.as_str().to_string()),
    }
}

fn server_side_encryption_configuration(
    remote: ServerSideEncryptionConfiguration,
) -> model::ServerSideEncryptionConfiguration {
    model::ServerSideEncryptionConfiguration {
        kms_key_id: remote.kms_key_id,
    }
}

fn model_tags(tags: Vec<Tag>) -> Vec<model::Tag> {
    tags.into_iter()
        .map(|tag| model::Tag::new(tag.key, tag.value))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::api::{ApplicationStatus, ResponseControlStatus};

    #[test]
    fn test_empty_chat_configuration_is_absent() {
        let describe = DescribeApplicationResponse {
            chat_configuration: Some(AppliedChatConfiguration::default()),
            ..DescribeApplicationResponse::default()
        };
        let model = resource_model(describe, ListTagsForResourceResponse::default());
        assert_eq!(model.chat_configuration, None);
    }

    #[test]
    fn test_present_but_empty_blocks_stay_present() {
        let describe = DescribeApplicationResponse {
            capacity_unit_configuration: Some(ChatCapacityUnitConfiguration::default()),
            server_side_encryption_configuration: Some(ServerSideEncryptionConfiguration::default()),
            ..DescribeApplicationResponse::default()
        };
        let model = resource_model(describe, ListTagsForResourceResponse::default());
        assert_eq!(
            model.capacity_unit_configuration,
            Some(model::CapacityUnitConfiguration { users: None })
        );
        assert_eq!(
            model.server_side_encryption_configuration,
            Some(model::ServerSideEncryptionConfiguration { kms_key_id: None })
        );
    }

    #[test]
    fn test_statuses_render_as_wire_names() {
        let describe = DescribeApplicationResponse {
            status: Some(ApplicationStatus::Updating),
            chat_configuration: Some(AppliedChatConfiguration {
                response_configuration: Some(ResponseConfiguration {
                    non_retrieval_response_control_status: Some(ResponseControlStatus::Disabled),
                    ..ResponseConfiguration::default()
                }),
            }),
            ..DescribeApplicationResponse::default()
        };
        let model = resource_model(describe, ListTagsForResourceResponse::default());
        assert_eq!(model.status.as_deref(), Some("UPDATING"));

        let response_configuration = model
            .chat_configuration
            .and_then(|c| c.response_configuration)
            .unwrap();
        assert_eq!(
            response_configuration
                .non_retrieval_response_control_status
                .as_deref(),
            Some("DISABLED")
        );
        assert_eq!(response_configuration.retrieval_response_control_status, None);
        assert_eq!(response_configuration.blocked_phrases, None);
    }

    #[test]
    fn test_timestamps_and_tags() {
        let describe = DescribeApplicationResponse {
            created_at: DateTime::from_timestamp_millis(1_697_824_935_000),
            ..DescribeApplicationResponse::default()
        };
        let tags = ListTagsForResourceResponse {
            tags: vec![Tag::new("k", "1"), Tag::new("k", "2")],
        };
        let model = resource_model(describe, tags);
        assert_eq!(model.created_at.as_deref(), Some("2023-10-20T18:02:15Z"));
        assert_eq!(model.updated_at, None);
        assert_eq!(
            model.tags,
            Some(vec![model::Tag::new("k", "1"), model::Tag::new("k", "2")])
        );
    }

    #[test]
    fn test_no_tags_is_empty_list() {
        let model = resource_model(
            DescribeApplicationResponse::default(),
            ListTagsForResourceResponse::default(),
        );
        assert_eq!(model.tags, Some(vec![]));
    }
}
