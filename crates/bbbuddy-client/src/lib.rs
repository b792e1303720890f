//! Typed client and CLI for the buddy bridge.
//!
//! This crate provides [`ApiClient`], a reqwest-based client for the
//! envelope protocol defined in `bbbuddy-protocol`, and the `bbbuddy`
//! command-line interface built on top of it.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod output;
pub mod secret;

pub use cli::Cli;
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use options::{CreateOptions, JoinOptions};
