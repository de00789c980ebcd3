use std::collections::HashMap;
use std::env;

use anyhow::Result;
use azsas_azure_blob::{BlobUrlGenerator, Config};
use azsas_core::time::now;
use azsas_core::{Context, OsEnv};
use azsas_file_write_tokio::TokioFileWrite;
use azsas_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use chrono::TimeDelta;
use http::StatusCode;
use log::{debug, warn};

fn init_generator() -> Option<(Context, BlobUrlGenerator)> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("AZSAS_AZURE_BLOB_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default())
        .with_file_write(TokioFileWrite);
    let config = Config::default().from_env(&ctx);
    let generator =
        BlobUrlGenerator::new(ctx.clone(), config).expect("azure blob config must be valid");

    Some((ctx, generator))
}

#[tokio::test]
async fn test_head_missing_blob_with_temporary_url() -> Result<()> {
    let Some((ctx, generator)) = init_generator() else {
        warn!("AZSAS_AZURE_BLOB_TEST is not set, skipped");
        return Ok(());
    };

    let url = generator.temporary_url(
        "not_exist_file",
        now() + TimeDelta::minutes(5),
        &HashMap::new(),
    )?;

    let req = http::Request::head(&url).body(Bytes::new())?;
    let resp = ctx.http_send(req).await?;

    debug!("got response: {:?}", resp);
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
    Ok(())
}

#[tokio::test]
async fn test_remote_copy_missing_blob() -> Result<()> {
    let Some((_, generator)) = init_generator() else {
        warn!("AZSAS_AZURE_BLOB_TEST is not set, skipped");
        return Ok(());
    };

    let dir = tempfile::tempdir()?;
    let local = dir.path().join("not_exist_file");

    let err = generator
        .remote_copy("not_exist_file", local.to_str().unwrap())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    Ok(())
}
