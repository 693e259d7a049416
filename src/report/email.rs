use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::core::EmailConfig;
use crate::scanner::RankedListing;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";
const MAX_DIGEST_ROWS: usize = 60;
const SENDER_NAME: &str = "Comic Deal Hunter";

/// Ranked results as an HTML ordered list for the daily digest.
pub fn build_html(ranked: &[RankedListing]) -> String {
    if ranked.is_empty() {
        return "<p>No promising items today.</p>".to_string();
    }

    let mut html = vec!["<h2>Comic Deal Hunter — Daily Report</h2><ol>".to_string()];
    for r in ranked.iter().take(MAX_DIGEST_ROWS) {
        let fmv = r
            .fmv
            .map(|v| format!("{:.0}", v))
            .unwrap_or_else(|| "None".to_string());
        html.push(format!(
            "<li><b>[{}]</b> {} — ${:.0} (FMV: {}) • Score {} — <a href='{}'>Open</a></li>",
            r.verdict, r.listing.title, r.listing.price, fmv, r.score, r.listing.url
        ));
    }
    html.push("</ol>".to_string());
    html.join("\n")
}

pub struct EmailSender {
    client: Client,
    api_key: String,
    to_email: String,
    from_email: String,
    send_url: String,
}

impl EmailSender {
    /// Errors when the SendGrid key or recipient is not configured; the digest
    /// binary treats that as fatal, unlike the scanner's demo mode.
    pub fn from_config(config: &EmailConfig) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            api_key: config
                .sendgrid_api_key
                .clone()
                .context("SENDGRID_API_KEY is not set")?,
            to_email: config.to_email.clone().context("TO_EMAIL is not set")?,
            from_email: config.from_email.clone(),
            send_url: SENDGRID_SEND_URL.to_string(),
        })
    }

    #[cfg(test)]
    fn with_send_url(mut self, url: String) -> Self {
        self.send_url = url;
        self
    }

    /// Dispatch failure propagates; the scheduled run has no retry.
    pub async fn send(&self, subject: &str, html: &str) -> Result<()> {
        let payload = serde_json::json!({
            "personalizations": [{"to": [{"email": self.to_email}]}],
            "from": {"email": self.from_email, "name": SENDER_NAME},
            "subject": subject,
            "content": [{"type": "text/html", "value": html}]
        });

        let response = self
            .client
            .post(&self.send_url)
            .timeout(Duration::from_secs(30))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            return Err(anyhow::anyhow!(
                "SendGrid dispatch failed: {} - {}",
                status,
                error_text
            ));
        }

        tracing::info!("📧 Digest sent to {}", self.to_email);
        Ok(())
    }
}
