use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::types::{FindCompletedItems, FindItemsByKeywords, Listing, RawItem};
use crate::core::EbayConfig;

const SERVICE_VERSION: &str = "1.13.0";
const ENTRIES_PER_PAGE: u32 = 50;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_DELAY: Duration = Duration::from_millis(150);

pub struct EbayClient {
    client: Client,
    config: EbayConfig,
}

impl EbayClient {
    pub fn new(config: EbayConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        app_id: &str,
        operation: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .header("X-EBAY-SOA-OPERATION-NAME", operation)
            .header("X-EBAY-SOA-SERVICE-VERSION", SERVICE_VERSION)
            .header("X-EBAY-SOA-SECURITY-APPNAME", app_id)
            .header("X-EBAY-SOA-RESPONSE-DATA-FORMAT", "JSON")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await?;
            tracing::error!("Finding API error: {} - {}", status, error_text);
            return Err(anyhow::anyhow!(
                "Finding API request failed: {} - {}",
                status,
                error_text
            ));
        }

        response
            .json()
            .await
            .context("Failed to parse Finding API response")
    }

    /// Paginated fixed-price keyword search, normalized to flat listings.
    /// Items missing a title, url, or positive price are dropped.
    pub async fn search(&self, query: &str, max_price: f64, pages: u32) -> Result<Vec<Listing>> {
        let Some(app_id) = self.config.app_id.as_deref() else {
            tracing::debug!("No App ID configured, demo mode: skipping search for '{}'", query);
            return Ok(Vec::new());
        };

        let mut results = Vec::new();
        for page in 1..=pages {
            let params = [
                ("keywords", query.to_string()),
                ("paginationInput.entriesPerPage", ENTRIES_PER_PAGE.to_string()),
                ("paginationInput.pageNumber", page.to_string()),
                ("buyerPostalCode", self.config.buyer_postal_code.clone()),
                ("itemFilter(0).name", "ListingType".to_string()),
                ("itemFilter(0).value(0)", "FixedPrice".to_string()),
                ("itemFilter(1).name", "MaxPrice".to_string()),
                ("itemFilter(1).value", max_price.to_string()),
                ("itemFilter(1).paramName", "Currency".to_string()),
                ("itemFilter(1).paramValue", "AUD".to_string()),
                ("GLOBAL-ID", self.config.global_id.clone()),
                ("siteid", self.config.site_id.clone()),
            ];

            let parsed: FindItemsByKeywords =
                self.get_json(app_id, "findItemsByKeywords", &params).await?;
            let items = parsed.items();
            tracing::debug!("'{}' page {}: {} raw items", query, page, items.len());

            results.extend(items.iter().filter_map(normalize_item));

            // Courtesy pause between pages, informal rate limit.
            tokio::time::sleep(PAGE_DELAY).await;
        }

        Ok(results)
    }

    /// Completed/sold comps for a title. Raw items; the caller filters on
    /// selling state.
    pub async fn find_completed(&self, keywords: &str) -> Result<Vec<RawItem>> {
        let Some(app_id) = self.config.app_id.as_deref() else {
            return Ok(Vec::new());
        };

        let params = [
            ("keywords", keywords.to_string()),
            ("GLOBAL-ID", self.config.global_id.clone()),
            ("siteid", self.config.site_id.clone()),
            ("paginationInput.entriesPerPage", ENTRIES_PER_PAGE.to_string()),
            ("itemFilter(0).name", "SoldItemsOnly".to_string()),
            ("itemFilter(0).value(0)", "true".to_string()),
        ];

        let parsed: FindCompletedItems =
            self.get_json(app_id, "findCompletedItems", &params).await?;
        Ok(parsed.items())
    }
}

fn normalize_item(item: &RawItem) -> Option<Listing> {
    Some(Listing {
        title: item.title()?.to_string(),
        price: item.price()?,
        url: item.url()?.to_string(),
        gallery_url: item.gallery(),
    })
}
