//! # qbiz-id
//!
//! Identifier types for the qbiz resource handlers.
//!
//! ## Design Principles
//!
//! - Application IDs are opaque and service-assigned; the handler never
//!   inspects their structure, it only refuses empty values
//! - Resource ARNs have a canonical string representation with strict parsing
//! - Both types roundtrip through `Display` / `FromStr` and serde
//!
//! ## ARN Format
//!
//! Applications are addressed for tagging by ARN:
//! `arn:{partition}:qbusiness:{region}:{account}:application/{application_id}`
//!
//! Example:
//! - `arn:aws:qbusiness:us-east-1:123456:application/63451660-1596-4f1a-a3c8-e5f4b33d9fe5`

mod error;
mod types;

pub use error::IdError;
pub use types::*;
