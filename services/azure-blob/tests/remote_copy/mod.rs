use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use azsas_azure_blob::{BlobUrlGenerator, Config};
use azsas_core::{Context, ErrorKind, HttpSend, Result};
use azsas_file_write_tokio::TokioFileWrite;
use bytes::Bytes;
use http::StatusCode;

const KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";

/// Answers every request with a fixed response and records the uris.
#[derive(Debug, Clone)]
struct MockHttpSend {
    status: StatusCode,
    body: Bytes,
    uris: Arc<Mutex<Vec<String>>>,
}

impl MockHttpSend {
    fn new(status: StatusCode, body: &'static [u8]) -> Self {
        Self {
            status,
            body: Bytes::from_static(body),
            uris: Arc::default(),
        }
    }

    fn uris(&self) -> Vec<String> {
        self.uris.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSend for MockHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.uris.lock().unwrap().push(req.uri().to_string());

        Ok(http::Response::builder()
            .status(self.status)
            .body(self.body.clone())?)
    }
}

fn generator(http: MockHttpSend, account_key: Option<&str>) -> BlobUrlGenerator {
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new()
        .with_http_send(http)
        .with_file_write(TokioFileWrite);
    let config = Config {
        account_name: "acct".to_string(),
        account_key: account_key.map(str::to_string),
        container: "docs".to_string(),
        ..Default::default()
    };
    BlobUrlGenerator::new(ctx, config).unwrap()
}

#[tokio::test]
async fn test_remote_copy() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let local = dir.path().join("q1.pdf");
    let local = local.to_str().unwrap();

    let http = MockHttpSend::new(StatusCode::OK, b"%PDF-1.7 quarterly report");
    generator(http.clone(), Some(KEY))
        .remote_copy("reports/q1.pdf", local)
        .await?;

    assert_eq!(tokio::fs::read(local).await?, b"%PDF-1.7 quarterly report");

    let uris = http.uris();
    assert_eq!(uris.len(), 1);
    assert!(uris[0].starts_with("https://acct.blob.core.windows.net/docs/reports/q1.pdf?se="));
    assert!(uris[0].contains("&sr=b&sp=r&sig="));
    assert!(uris[0].ends_with("&sv=2015-04-05"));
    assert!(!uris[0].contains("sip="));
    Ok(())
}

#[tokio::test]
async fn test_remote_copy_not_found() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let local = dir.path().join("missing.pdf");

    let http = MockHttpSend::new(StatusCode::NOT_FOUND, b"");
    let err = generator(http, Some(KEY))
        .remote_copy("reports/missing.pdf", local.to_str().unwrap())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(!local.exists());
    Ok(())
}

#[tokio::test]
async fn test_remote_copy_upstream_error() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let local = dir.path().join("q1.pdf");

    let http = MockHttpSend::new(StatusCode::FORBIDDEN, b"AuthenticationFailed");
    let err = generator(http, Some(KEY))
        .remote_copy("reports/q1.pdf", local.to_str().unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Upstream);
    assert!(!local.exists());
    Ok(())
}

#[tokio::test]
async fn test_remote_copy_without_key_sends_nothing() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let local = dir.path().join("q1.pdf");

    let http = MockHttpSend::new(StatusCode::OK, b"unused");
    let err = generator(http.clone(), None)
        .remote_copy("reports/q1.pdf", local.to_str().unwrap())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert!(http.uris().is_empty());
    Ok(())
}
