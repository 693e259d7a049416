use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use super::keywords::keyishness;
use super::ranker::{sort_ranked, RankedListing};
use super::valuation::ValuationLookup;
use crate::api::{EbayClient, Listing};
use crate::core::ScanConfig;

const VALUATION_DELAY: Duration = Duration::from_millis(100);

/// One-shot scan pipeline: fetch listings per query, keep the key-ish ones,
/// attach an FMV estimate, rank, sort. No state survives a scan.
pub struct DealScanner {
    client: Arc<EbayClient>,
    valuation: ValuationLookup,
}

impl DealScanner {
    pub fn new(client: Arc<EbayClient>) -> Self {
        Self {
            valuation: ValuationLookup::new(client.clone()),
            client,
        }
    }

    /// Scan with configured caps and the configured query set.
    pub async fn scan(&self, scan: &ScanConfig) -> Result<Vec<RankedListing>> {
        self.scan_all(scan.max_price_aud, scan.pages_per_query, &scan.queries)
            .await
    }

    pub async fn scan_all(
        &self,
        max_price: f64,
        pages: u32,
        queries: &[String],
    ) -> Result<Vec<RankedListing>> {
        let mut listings = Vec::new();
        for query in queries {
            let found = self.client.search(query, max_price, pages).await?;
            tracing::info!("🔎 '{}': {} listings", query, found.len());
            listings.extend(found);
        }

        Ok(self.rank_listings(listings).await)
    }

    async fn rank_listings(&self, listings: Vec<Listing>) -> Vec<RankedListing> {
        let mut ranked = Vec::new();
        for listing in listings {
            let kscore = keyishness(&listing.title);
            if kscore == 0 {
                continue;
            }

            let fmv = self.valuation.sold_median(&listing.title, None).await;
            ranked.push(RankedListing::new(listing, kscore, fmv));

            // Comps lookups run sequentially; pause between them.
            tokio::time::sleep(VALUATION_DELAY).await;
        }

        sort_ranked(&mut ranked);
        tracing::info!("🏁 Ranked {} candidates", ranked.len());
        ranked
    }
}
