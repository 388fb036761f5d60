//! Canonical resource model for the Application resource.
//!
//! Property names follow the resource schema (PascalCase on the wire).
//! Nested configuration blocks are `Option`s of their own struct so that an
//! unset block is distinguishable from a block with unset members.

use serde::{Deserialize, Serialize};

/// The Application resource as seen by the invocation envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_unit_configuration: Option<CapacityUnitConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat_configuration: Option<ChatConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_encryption_configuration: Option<ServerSideEncryptionConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceModel {
    /// Model carrying only the primary identifier, as sent by the envelope
    /// for read requests.
    pub fn with_application_id(application_id: impl Into<String>) -> Self {
        Self {
            application_id: Some(application_id.into()),
            ..Self::default()
        }
    }
}

/// Chat capacity purchased for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CapacityUnitConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<i32>,
}

/// Chat behaviour settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChatConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_configuration: Option<ResponseConfiguration>,
}

/// Guardrails applied to chat responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_phrases: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_topics_prompt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,

    /// `ENABLED` or `DISABLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_retrieval_response_control_status: Option<String>,

    /// `ENABLED` or `DISABLED`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_response_control_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<String>,
}

/// Resource tag. Keys are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_properties_are_omitted() {
        let model = ResourceModel::with_application_id("app-1");
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json, serde_json::json!({ "ApplicationId": "app-1" }));
    }

    #[test]
    fn test_nested_properties_use_schema_names() {
        let model = ResourceModel {
            capacity_unit_configuration: Some(CapacityUnitConfiguration { users: Some(10) }),
            server_side_encryption_configuration: Some(ServerSideEncryptionConfiguration {
                kms_key_id: Some("keyblade".to_string()),
            }),
            tags: Some(vec![Tag::new("Category", "Chat Stuff")]),
            ..ResourceModel::default()
        };
        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["CapacityUnitConfiguration"]["Users"], 10);
        assert_eq!(
            json["ServerSideEncryptionConfiguration"]["KmsKeyId"],
            "keyblade"
        );
        assert_eq!(json["Tags"][0]["Key"], "Category");
        assert_eq!(json["Tags"][0]["Value"], "Chat Stuff");
    }

    #[test]
    fn test_empty_tag_list_is_kept() {
        let model = ResourceModel {
            tags: Some(vec![]),
            ..ResourceModel::default()
        };
        let json = serde_json::to_string(&model).unwrap();
        assert_eq!(json, r#"{"Tags":[]}"#);

        let parsed: ResourceModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.tags, Some(vec![]));
    }

    #[test]
    fn test_deserialize_request_model() {
        let model: ResourceModel = serde_json::from_str(
            r#"{"ApplicationId":"app-1","ChatConfiguration":{"ResponseConfiguration":{"BlockedPhrases":["a","b"]}}}"#,
        )
        .unwrap();
        assert_eq!(model.application_id.as_deref(), Some("app-1"));
        let phrases = model
            .chat_configuration
            .and_then(|c| c.response_configuration)
            .and_then(|r| r.blocked_phrases)
            .unwrap();
        assert_eq!(phrases, vec!["a".to_string(), "b".to_string()]);
    }
}
