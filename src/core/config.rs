use anyhow::Result;
use serde::Deserialize;
use std::env;

pub const FINDING_ENDPOINT: &str = "https://svcs.ebay.com/services/search/FindingService/v1";

pub const DEFAULT_QUERIES: [&str; 9] = [
    "comic key issue",
    "first appearance comic",
    "silver age comic",
    "bronze age comic",
    "marvel key comic",
    "dc key comic",
    "spider-man key",
    "batman key",
    "x-men key",
];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub ebay: EbayConfig,
    pub scan: ScanConfig,
    pub email: EmailConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EbayConfig {
    /// eBay Developer "App ID (Client ID)". Absent -> demo mode, no network I/O.
    pub app_id: Option<String>,
    pub endpoint: String,
    pub global_id: String,
    pub site_id: String,
    pub buyer_postal_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScanConfig {
    pub max_price_aud: f64,
    pub pages_per_query: u32,
    pub queries: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub sendgrid_api_key: Option<String>,
    pub to_email: Option<String>,
    pub from_email: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Ok(Config {
            ebay: EbayConfig {
                app_id: env::var("EBAY_APP_ID").ok().filter(|v| !v.is_empty()),
                endpoint: env::var("EBAY_ENDPOINT")
                    .unwrap_or_else(|_| FINDING_ENDPOINT.to_string()),
                global_id: "EBAY-AU".to_string(),
                site_id: "15".to_string(),
                buyer_postal_code: "2000".to_string(), // Sydney
            },
            scan: ScanConfig {
                max_price_aud: env::var("MAX_PRICE_AUD")
                    .unwrap_or_else(|_| "250".to_string())
                    .parse()
                    .unwrap_or(250.0),
                pages_per_query: env::var("PAGES_PER_QUERY")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .unwrap_or(2),
                queries: env::var("SCAN_QUERIES")
                    .map(|v| {
                        v.split(',')
                            .map(|q| q.trim().to_string())
                            .filter(|q| !q.is_empty())
                            .collect()
                    })
                    .unwrap_or_else(|_| {
                        DEFAULT_QUERIES.iter().map(|q| q.to_string()).collect()
                    }),
            },
            email: EmailConfig {
                sendgrid_api_key: env::var("SENDGRID_API_KEY").ok().filter(|v| !v.is_empty()),
                to_email: env::var("TO_EMAIL").ok().filter(|v| !v.is_empty()),
                from_email: env::var("FROM_EMAIL")
                    .unwrap_or_else(|_| "deals@example.com".to_string()),
            },
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn demo_mode(&self) -> bool {
        self.ebay.app_id.is_none()
    }
}
