use anyhow::Result;
use std::sync::Arc;

use comic_deal_hunter::api::EbayClient;
use comic_deal_hunter::core::{self, Config};
use comic_deal_hunter::report::format_ranked_table;
use comic_deal_hunter::scanner::DealScanner;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    core::logging::init_logging(&config.log_level);

    tracing::info!("🕵️ Comic Deal Hunter starting...");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    if config.demo_mode() {
        tracing::warn!("No EBAY_APP_ID set — demo mode, scans return nothing");
    }

    let client = Arc::new(EbayClient::new(config.ebay.clone()));
    let scanner = DealScanner::new(client);

    // A fetch failure ends the scan; show the neutral empty state, not a crash.
    let ranked = match scanner.scan(&config.scan).await {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::error!("❌ Scan failed: {:#}", e);
            Vec::new()
        }
    };

    print!("{}", format_ranked_table(&ranked));
    Ok(())
}
