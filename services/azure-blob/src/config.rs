use std::collections::BTreeSet;
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use azsas_core::utils::Redact;
use azsas_core::{Context, Error, Result};
use serde::Deserialize;

use crate::constants::*;
use crate::{MetaValue, StorageIdentity};

/// Config carries all the configuration for one Azure Blob Storage container.
///
/// It's resolved once, every field is read by name afterwards.
#[derive(Clone, Default, Deserialize)]
#[cfg_attr(test, derive(PartialEq))]
#[serde(default)]
pub struct Config {
    /// `account_name` will be loaded from
    ///
    /// - this field if it's not empty
    /// - env value: [`AZBLOB_ACCOUNT_NAME`] or [`AZURE_STORAGE_ACCOUNT_NAME`]
    pub account_name: String,
    /// `account_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AZBLOB_ACCOUNT_KEY`] or [`AZURE_STORAGE_ACCOUNT_KEY`]
    ///
    /// Only signed urls need it, a missing key is reported when signing.
    pub account_key: Option<String>,
    /// `container` will be loaded from
    ///
    /// - this field if it's not empty
    /// - env value: [`AZURE_STORAGE_CONTAINER`]
    pub container: String,
    /// Custom domains, like a CDN, serving the container. One of them is
    /// picked for every generated url.
    ///
    /// - env value: [`AZURE_STORAGE_DOMAIN`], comma separated
    pub domain_urls: BTreeSet<String>,
    /// Blob service endpoint used when no domain is configured.
    ///
    /// - env value: [`AZBLOB_ENDPOINT`]
    pub endpoint: Option<String>,
    /// Path prefix applied to every blob path.
    ///
    /// - env value: [`AZURE_STORAGE_PREFIX`]
    pub prefix: Option<String>,
    /// Blob meta options applied to every upload, see [`crate::META_OPTIONS`].
    pub options: HashMap<String, MetaValue>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("account_name", &self.account_name)
            .field("account_key", &Redact::from(&self.account_key))
            .field("container", &self.container)
            .field("domain_urls", &self.domain_urls)
            .field("endpoint", &self.endpoint)
            .field("prefix", &self.prefix)
            .field("options", &self.options)
            .finish()
    }
}

impl Config {
    /// Load config from env.
    ///
    /// Values already set on the config are kept.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if self.account_name.is_empty() {
            if let Some(v) = ctx
                .env_var(AZBLOB_ACCOUNT_NAME)
                .or_else(|| ctx.env_var(AZURE_STORAGE_ACCOUNT_NAME))
            {
                self.account_name = v;
            }
        }

        if self.account_key.is_none() {
            self.account_key = ctx
                .env_var(AZBLOB_ACCOUNT_KEY)
                .or_else(|| ctx.env_var(AZURE_STORAGE_ACCOUNT_KEY));
        }

        if self.container.is_empty() {
            if let Some(v) = ctx.env_var(AZURE_STORAGE_CONTAINER) {
                self.container = v;
            }
        }

        if self.domain_urls.is_empty() {
            if let Some(v) = ctx.env_var(AZURE_STORAGE_DOMAIN) {
                self.domain_urls = v
                    .split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect();
            }
        }

        if self.endpoint.is_none() {
            self.endpoint = ctx.env_var(AZBLOB_ENDPOINT);
        }

        if self.prefix.is_none() {
            self.prefix = ctx.env_var(AZURE_STORAGE_PREFIX);
        }

        self
    }

    /// Check the fields every url needs.
    pub fn validate(&self) -> Result<()> {
        if self.account_name.is_empty() {
            return Err(Error::config_invalid("account name is required"));
        }
        if self.container.is_empty() {
            return Err(Error::config_invalid("container is required"));
        }
        Ok(())
    }

    /// The identity used to sign urls of this container.
    pub fn identity(&self) -> StorageIdentity {
        StorageIdentity {
            account_name: self.account_name.clone(),
            container_name: self.container.clone(),
            shared_key: self.account_key.clone(),
        }
    }
}
