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

//! Tokio-based file writing implementation for azsas.
//!
//! This crate provides `TokioFileWrite`, an async file writer that implements
//! the `FileWrite` trait from `azsas_core` using Tokio's file system operations.
//! Remote copies use it to store the downloaded blob locally.
//!
//! ## Example
//!
//! ```no_run
//! use azsas_core::Context;
//! use azsas_file_write_tokio::TokioFileWrite;
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = Context::new().with_file_write(TokioFileWrite);
//!
//!     match ctx.file_write("/tmp/q1.pdf", bytes::Bytes::from_static(b"%PDF")).await {
//!         Ok(()) => println!("written"),
//!         Err(e) => eprintln!("Failed to write file: {}", e),
//!     }
//! }
//! ```

use async_trait::async_trait;
use azsas_core::{Error, FileWrite, Result};
use bytes::Bytes;

/// Tokio-based implementation of the `FileWrite` trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileWrite;

#[async_trait]
impl FileWrite for TokioFileWrite {
    async fn file_write(&self, path: &str, content: Bytes) -> Result<()> {
        tokio::fs::write(path, content)
            .await
            .map_err(|e| Error::unexpected(format!("failed to write file {path}")).with_source(e))
    }
}
