use std::collections::HashMap;

use azsas_azure_blob::{BlobUrlGenerator, Config, ResourceType};
use azsas_core::time::now;
use azsas_core::{Context, OsEnv, Result};
use chrono::TimeDelta;

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    // Reads AZURE_STORAGE_ACCOUNT_NAME, AZURE_STORAGE_ACCOUNT_KEY,
    // AZURE_STORAGE_CONTAINER and friends.
    let ctx = Context::new().with_env(OsEnv);
    let mut config = Config::default().from_env(&ctx);

    let demo_mode = config.account_name.is_empty();
    if demo_mode {
        println!("No Azure configuration found, using demo mode");
        println!("To use a real account, set AZURE_STORAGE_ACCOUNT_NAME, AZURE_STORAGE_ACCOUNT_KEY and AZURE_STORAGE_CONTAINER");
        println!();

        config = Config {
            account_name: "devstoreaccount1".to_string(),
            account_key: Some(
                "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw=="
                    .to_string(),
            ),
            container: "docs".to_string(),
            ..config
        };
    }

    let generator = BlobUrlGenerator::new(ctx, config)?;

    println!("Plain url:");
    println!("  {}", generator.url("reports/q1.pdf"));

    println!("Read url for one client, valid for 15 minutes:");
    let expiry = azsas_core::time::format_iso8601(now() + TimeDelta::minutes(15));
    println!(
        "  {}",
        generator.signed_url(
            "reports/q1.pdf",
            Some(&expiry),
            Some("203.0.113.9"),
            ResourceType::Blob,
            "r",
        )?
    );

    println!("Temporary url, valid for one hour:");
    println!(
        "  {}",
        generator.temporary_url("reports/q1.pdf", now() + TimeDelta::hours(1), &HashMap::new())?
    );

    Ok(())
}
