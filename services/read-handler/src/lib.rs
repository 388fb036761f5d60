//! qbiz Read Handler Library
//!
//! Runs the Application read handler against a live endpoint. Each
//! invocation reads one `ResourceHandlerRequest` and yields one
//! `ProgressEvent`.
//!
//! ## Modules
//!
//! - `client`: `ApplicationApi` over HTTP (reqwest)
//! - `config`: environment configuration
//! - `invoke`: request parsing and dispatch
//! - `logging`: JSON tracing setup

pub mod client;
pub mod config;
pub mod invoke;
pub mod logging;

pub use client::HttpApplicationApi;
pub use config::Config;
pub use invoke::invoke;
