//! Daily email digest: one scan, rendered as HTML, dispatched via SendGrid.
//! Needs EBAY_APP_ID, SENDGRID_API_KEY, TO_EMAIL, FROM_EMAIL (verified sender).

use anyhow::Result;
use std::sync::Arc;

use comic_deal_hunter::api::EbayClient;
use comic_deal_hunter::core::{self, Config};
use comic_deal_hunter::report::{build_html, EmailSender};
use comic_deal_hunter::scanner::DealScanner;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    core::logging::init_logging(&config.log_level);

    tracing::info!("📬 Comic Deal Hunter digest starting...");

    // Fail before scanning if the mail side is not configured.
    let sender = EmailSender::from_config(&config.email)?;

    let client = Arc::new(EbayClient::new(config.ebay.clone()));
    let scanner = DealScanner::new(client);

    let ranked = match scanner.scan(&config.scan).await {
        Ok(ranked) => ranked,
        Err(e) => {
            tracing::error!("❌ Scan failed, sending empty digest: {:#}", e);
            Vec::new()
        }
    };

    let subject = format!(
        "Comic Deal Hunter — {}",
        chrono::Local::now().format("%Y-%m-%d")
    );
    let html = build_html(&ranked);

    // No retry; dispatch failure is fatal for the run.
    sender.send(&subject, &html).await?;
    tracing::info!("✅ Digest run complete ({} candidates)", ranked.len());
    Ok(())
}
