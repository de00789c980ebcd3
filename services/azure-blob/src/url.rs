use std::collections::HashMap;

use azsas_core::time::{format_iso8601, now, DateTime};
use azsas_core::utils::redact_signature;
use azsas_core::{Context, Error, Result};
use bytes::Bytes;
use chrono::TimeDelta;
use http::StatusCode;
use log::debug;
use rand::seq::IteratorRandom;

use crate::constants::*;
use crate::sas::{build_signed_url, ResourceType, SignRequest};
use crate::Config;

/// Prepend the configured prefix to a blob path.
///
/// `None` or an empty prefix leaves the path unchanged.
pub fn apply_path_prefix(prefix: Option<&str>, path: &str) -> String {
    match prefix.map(|p| p.trim_end_matches('/')) {
        Some(p) if !p.is_empty() => format!("{p}/{}", path.trim_start_matches('/')),
        _ => path.to_string(),
    }
}

/// BlobUrlGenerator builds plain, signed and temporary urls for the blobs
/// of one container, and downloads blobs through them.
#[derive(Debug, Clone)]
pub struct BlobUrlGenerator {
    ctx: Context,
    config: Config,
}

impl BlobUrlGenerator {
    /// Create a generator, failing if the config lacks account or container.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { ctx, config })
    }

    /// The config this generator was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base url serving the container, without trailing slash.
    ///
    /// A random entry of `domain_urls` if any, else `endpoint`, else the
    /// public blob endpoint of the account.
    pub fn domain_url(&self) -> String {
        let domain = self
            .config
            .domain_urls
            .iter()
            .choose(&mut rand::thread_rng())
            .cloned()
            .or_else(|| self.config.endpoint.clone())
            .unwrap_or_else(|| {
                format!("https://{}.blob.core.windows.net", self.config.account_name)
            });

        domain.trim_end_matches(['/', '\\']).to_string()
    }

    /// Plain url of the blob at `path`.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.domain_url(),
            self.config.container,
            self.prefixed(path)
        )
    }

    /// Url of the blob at `path`, signed when `expiry` is given.
    ///
    /// `signed_ip` is the client the url is restricted to. The caller
    /// resolves it, private and loopback addresses add no restriction.
    pub fn signed_url(
        &self,
        path: &str,
        expiry: Option<&str>,
        signed_ip: Option<&str>,
        resource_type: ResourceType,
        permissions: &str,
    ) -> Result<String> {
        let blob = self.prefixed(path);
        let req = SignRequest::new(&blob)
            .with_resource_type(resource_type)
            .with_permissions(permissions)
            .with_expiry(expiry)
            .with_signed_ip(signed_ip);

        build_signed_url(
            &self.config.identity(),
            &self.domain_url(),
            &self.config.container,
            &req,
        )
    }

    /// Read-only blob url, signed when `expiry` is given.
    pub fn signed_url_default(
        &self,
        path: &str,
        expiry: Option<&str>,
        signed_ip: Option<&str>,
    ) -> Result<String> {
        self.signed_url(
            path,
            expiry,
            signed_ip,
            ResourceType::Blob,
            DEFAULT_PERMISSIONS,
        )
    }

    /// Read-only url of the blob at `path` valid until `expiration`.
    ///
    /// The url is signed for `127.0.0.1`, which normalization always drops:
    /// temporary urls are never restricted to a client ip. `options` is
    /// accepted for interface compatibility and not used.
    pub fn temporary_url(
        &self,
        path: &str,
        expiration: DateTime,
        _options: &HashMap<String, String>,
    ) -> Result<String> {
        let expiry = format_iso8601(expiration);
        self.signed_url_default(path, Some(&expiry), Some(TEMPORARY_URL_SIGNED_IP))
    }

    /// Download the blob at `remote_path` into the local file `local_path`.
    ///
    /// The blob is fetched through a read-only url that expires in one hour
    /// and carries no ip restriction.
    pub async fn remote_copy(&self, remote_path: &str, local_path: &str) -> Result<()> {
        let expiry = format_iso8601(now() + TimeDelta::hours(REMOTE_COPY_EXPIRY_HOURS));
        let url = self.signed_url_default(remote_path, Some(&expiry), None)?;
        debug!("copying {} into {local_path}", redact_signature(&url));

        let req = http::Request::get(&url).body(Bytes::new())?;
        let resp = self.ctx.http_send(req).await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::not_found(format!(
                "blob {remote_path} does not exist"
            )));
        }
        if !status.is_success() {
            return Err(Error::upstream(format!(
                "failed to download blob {remote_path}: {status}"
            )));
        }

        self.ctx.file_write(local_path, resp.into_body()).await
    }

    fn prefixed(&self, path: &str) -> String {
        apply_path_prefix(self.config.prefix.as_deref(), path)
    }
}
