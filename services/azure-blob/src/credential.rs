// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use azsas_core::utils::Redact;
use azsas_core::{Error, Result};
use std::fmt::{Debug, Formatter};

/// StorageIdentity carries the account, container and shared key used to
/// sign urls.
///
/// The signer only reads it: the key is decoded for every signature and never
/// cached.
#[derive(Clone, Default)]
pub struct StorageIdentity {
    /// Azure storage account name.
    pub account_name: String,
    /// Container every signed blob lives in.
    pub container_name: String,
    /// Base64 encoded storage account key.
    pub shared_key: Option<String>,
}

impl Debug for StorageIdentity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageIdentity")
            .field("account_name", &self.account_name)
            .field("container_name", &self.container_name)
            .field("shared_key", &Redact::from(&self.shared_key))
            .finish()
    }
}

impl StorageIdentity {
    /// Create a new identity with shared key authentication.
    pub fn with_shared_key(
        account_name: impl Into<String>,
        container_name: impl Into<String>,
        shared_key: impl Into<String>,
    ) -> Self {
        Self {
            account_name: account_name.into(),
            container_name: container_name.into(),
            shared_key: Some(shared_key.into()),
        }
    }

    /// Return the shared key, or a config error if it is not set.
    pub fn shared_key(&self) -> Result<&str> {
        match self.shared_key.as_deref() {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(Error::config_invalid(
                "missing storage key: please set the storage account key",
            )),
        }
    }
}
