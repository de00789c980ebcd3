//! Azure Blob Storage signed urls
//!
//! This crate builds urls for the blobs of one container:
//! - plain urls, optionally served from custom domains
//! - SAS (Shared Access Signature) urls signed with the account key
//! - temporary urls valid until a given time
//! - remote copies that download a blob through a freshly signed url
//!
//! Signing is a pure computation: no request is made and no state is kept.
//!
//! # Example
//!
//! ```rust,no_run
//! use azsas_azure_blob::{BlobUrlGenerator, Config};
//! use azsas_core::{Context, OsEnv, Result};
//!
//! fn main() -> Result<()> {
//!     let ctx = Context::new().with_env(OsEnv);
//!     let config = Config::default().from_env(&ctx);
//!     let generator = BlobUrlGenerator::new(ctx, config)?;
//!
//!     // Plain url, nothing is signed.
//!     println!("{}", generator.signed_url_default("reports/q1.pdf", None, None)?);
//!
//!     // Read-only url valid until the given time, for any client.
//!     let url = generator.signed_url_default(
//!         "reports/q1.pdf",
//!         Some("2030-01-01T00:00:00Z"),
//!         None,
//!     )?;
//!     println!("{url}");
//!     Ok(())
//! }
//! ```

mod constants;
pub use constants::SAS_VERSION;

mod config;
pub use config::Config;

mod credential;
pub use credential::StorageIdentity;

mod options;
pub use options::{BlobOptions, MetaValue, META_OPTIONS};

mod sas;
pub use sas::{
    build_signed_url, compute_signature, normalize_ip, string_to_sign, ResourceType, SignRequest,
};

mod url;
pub use url::{apply_path_prefix, BlobUrlGenerator};
