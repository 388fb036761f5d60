//! Read reconciliation for the Application resource.
//!
//! This library reconciles a declared Application against the remote
//! service's live state. Key concepts:
//!
//! - **Transport**: the `ApplicationApi` seam; it owns I/O, signing, retries.
//! - **Read**: describe the application, then list its tags, then merge.
//! - **Outcome**: a terminal `ProgressEvent`, never a propagated error.
//!
//! # Invariants
//!
//! - Describe always precedes list-tags; list-tags is skipped when describe fails
//! - Each remote call is made at most once per read
//! - Remote failures map onto `HandlerErrorCode` through one table, whichever
//!   call raised them
//! - A failed read carries no model; a successful read carries no message
//!   and no error code
//! - Members the service omits are absent in the model, never defaulted

pub mod api;
mod error;
pub mod mock;
mod read;
pub mod translate;

pub use api::ApplicationApi;
pub use error::{RequestError, ServiceError};
pub use read::{ReadFailure, ReadHandler, ReadTarget, RemoteOperation};
