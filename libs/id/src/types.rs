//! Typed identifiers for handler resources.
//!
//! Application IDs are opaque strings assigned by the remote service.
//! Resource ARNs are derived from an application ID plus the account context
//! of the invocation.

use crate::IdError;

// =============================================================================
// Application
// =============================================================================

/// Identifier of a remote application.
///
/// Opaque to the handler, except that it must be non-blank and must not be a
/// relative path segment (`.` or `..`), since it is addressed as one.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Parses an application ID, rejecting blank input and dot segments.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.trim().is_empty() {
            return Err(IdError::Empty);
        }
        if matches!(s, "." | "..") {
            return Err(IdError::InvalidFormat {
                message: format!("'{s}' is not a valid application ID"),
            });
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ApplicationId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ApplicationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for ApplicationId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for ApplicationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Resource ARN
// =============================================================================

/// ARN of an application, used to address its tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceArn {
    partition: String,
    region: String,
    account_id: String,
    application_id: ApplicationId,
}

impl ResourceArn {
    /// Service namespace of every ARN this type represents.
    pub const SERVICE: &'static str = "qbusiness";

    /// Resource type segment for applications.
    pub const RESOURCE_TYPE: &'static str = "application";

    /// Builds the ARN of an application in the given account context.
    pub fn for_application(
        partition: &str,
        region: &str,
        account_id: &str,
        application_id: &ApplicationId,
    ) -> Result<Self, IdError> {
        Ok(Self {
            partition: non_empty(partition, "partition")?,
            region: non_empty(region, "region")?,
            account_id: non_empty(account_id, "account")?,
            application_id: application_id.clone(),
        })
    }

    /// Parses an ARN of the form
    /// `arn:{partition}:qbusiness:{region}:{account}:application/{id}`.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        if s.is_empty() {
            return Err(IdError::Empty);
        }

        let Some(rest) = s.strip_prefix("arn:") else {
            return Err(IdError::MissingPrefix {
                actual: s.to_string(),
            });
        };

        let parts: Vec<&str> = rest.splitn(5, ':').collect();
        let &[partition, service, region, account_id, resource] = parts.as_slice() else {
            return Err(IdError::InvalidFormat {
                message: format!("expected 6 ':'-separated components in '{s}'"),
            });
        };

        if service != Self::SERVICE {
            return Err(IdError::InvalidService {
                expected: Self::SERVICE,
                actual: service.to_string(),
            });
        }

        let Some((resource_type, id)) = resource.split_once('/') else {
            return Err(IdError::InvalidFormat {
                message: format!("resource '{resource}' missing '/' separator"),
            });
        };

        if resource_type != Self::RESOURCE_TYPE {
            return Err(IdError::InvalidResourceType {
                expected: Self::RESOURCE_TYPE,
                actual: resource_type.to_string(),
            });
        }

        Self::for_application(partition, region, account_id, &ApplicationId::parse(id)?)
    }

    pub fn partition(&self) -> &str {
        &self.partition
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }
}

fn non_empty(value: &str, component: &'static str) -> Result<String, IdError> {
    if value.trim().is_empty() {
        return Err(IdError::EmptyComponent(component));
    }
    Ok(value.to_string())
}

impl std::fmt::Display for ResourceArn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}/{}",
            self.partition,
            Self::SERVICE,
            self.region,
            self.account_id,
            Self::RESOURCE_TYPE,
            self.application_id
        )
    }
}

impl std::str::FromStr for ResourceArn {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for ResourceArn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for ResourceArn {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const APP_ID: &str = "63451660-1596-4f1a-a3c8-e5f4b33d9fe5";

    #[test]
    fn test_application_id_parse() {
        let id = ApplicationId::parse(APP_ID).unwrap();
        assert_eq!(id.as_str(), APP_ID);
        assert_eq!(id.to_string(), APP_ID);
    }

    #[test]
    fn test_application_id_rejects_empty() {
        assert_eq!(ApplicationId::parse(""), Err(IdError::Empty));
        assert_eq!(ApplicationId::parse("   "), Err(IdError::Empty));
    }

    #[test]
    fn test_application_id_rejects_dot_segments() {
        for raw in [".", ".."] {
            assert!(matches!(
                ApplicationId::parse(raw),
                Err(IdError::InvalidFormat { .. })
            ));
        }
        assert!(serde_json::from_str::<ApplicationId>("\"..\"").is_err());
        assert_eq!(ApplicationId::parse("...").unwrap().as_str(), "...");
    }

    #[test]
    fn test_application_id_serde() {
        let id = ApplicationId::parse(APP_ID).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{APP_ID}\""));

        let parsed: ApplicationId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);

        assert!(serde_json::from_str::<ApplicationId>("\"\"").is_err());
    }

    #[test]
    fn test_arn_for_application() {
        let id = ApplicationId::parse(APP_ID).unwrap();
        let arn = ResourceArn::for_application("aws", "us-east-1", "123456", &id).unwrap();
        assert_eq!(
            arn.to_string(),
            format!("arn:aws:qbusiness:us-east-1:123456:application/{APP_ID}")
        );
        assert_eq!(arn.application_id(), &id);
    }

    #[test]
    fn test_arn_for_application_rejects_missing_context() {
        let id = ApplicationId::parse(APP_ID).unwrap();
        let err = ResourceArn::for_application("aws", "", "123456", &id).unwrap_err();
        assert_eq!(err, IdError::EmptyComponent("region"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_arn_parse_roundtrip() {
        let s = format!("arn:aws-cn:qbusiness:cn-north-1:999:application/{APP_ID}");
        let arn: ResourceArn = s.parse().unwrap();
        assert_eq!(arn.partition(), "aws-cn");
        assert_eq!(arn.region(), "cn-north-1");
        assert_eq!(arn.account_id(), "999");
        assert_eq!(arn.to_string(), s);
    }

    #[test]
    fn test_arn_parse_errors() {
        assert_eq!(ResourceArn::parse(""), Err(IdError::Empty));
        assert!(matches!(
            ResourceArn::parse("qbusiness:application/x"),
            Err(IdError::MissingPrefix { .. })
        ));
        assert!(matches!(
            ResourceArn::parse("arn:aws:s3:us-east-1:1:application/x"),
            Err(IdError::InvalidService { .. })
        ));
        assert!(matches!(
            ResourceArn::parse("arn:aws:qbusiness:us-east-1:1:index/x"),
            Err(IdError::InvalidResourceType { .. })
        ));
        assert!(matches!(
            ResourceArn::parse("arn:aws:qbusiness:us-east-1"),
            Err(IdError::InvalidFormat { .. })
        ));
        assert_eq!(
            ResourceArn::parse("arn:aws:qbusiness:us-east-1:1:application/"),
            Err(IdError::Empty)
        );
    }
}
