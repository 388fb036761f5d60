//! # qbiz-model
//!
//! Schema-shaped types exchanged with the invocation envelope.
//!
//! ## Design Principles
//!
//! - Every property is optional; absence is meaningful and is never replaced
//!   by an empty or zero default
//! - Models serialize with the schema's PascalCase property names; the
//!   envelope (`ProgressEvent`, `ResourceHandlerRequest`) uses camelCase
//! - Timestamps are carried as text in a single canonical format
//!
//! ## Modules
//!
//! - `resource`: the canonical `ResourceModel` and its nested configurations
//! - `envelope`: handler request, progress event, status and error codes
//! - `time`: canonical timestamp rendering

mod envelope;
mod resource;
pub mod time;

pub use envelope::*;
pub use resource::*;
