//! Core components for generating Azure Blob Storage signed URLs.
//!
//! This crate provides the foundational types shared by the azsas crates.
//! It holds no Azure specific logic: the signer itself lives in
//! `azsas-azure-blob`.
//!
//! ## Overview
//!
//! - **Context**: A container that holds implementations for environment access,
//!   HTTP sending and file writing
//! - **Error**: A single error type with an [`ErrorKind`] that callers can match on
//! - **Utilities**: hashing, time formatting and secret redaction
//!
//! ## Example
//!
//! ```
//! use azsas_core::{Context, StaticEnv};
//! use std::collections::HashMap;
//!
//! let ctx = Context::new().with_env(StaticEnv {
//!     envs: HashMap::from([("AZURE_STORAGE_CONTAINER".to_string(), "docs".to_string())]),
//! });
//!
//! assert_eq!(ctx.env_var("AZURE_STORAGE_CONTAINER").as_deref(), Some("docs"));
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`FileWrite`]: For writing downloaded content to the local file system
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::FileWrite;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopFileWrite;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
