use std::sync::Arc;
use thiserror::Error;

use crate::api::EbayClient;

#[derive(Debug, Error)]
pub enum ValuationError {
    #[error("sold comps request failed: {0}")]
    Http(#[from] anyhow::Error),
    #[error("no qualifying sold comps")]
    NoComps,
}

/// Fair-market-value estimate from eBay completed/sold comps.
pub struct ValuationLookup {
    client: Arc<EbayClient>,
}

impl ValuationLookup {
    pub fn new(client: Arc<EbayClient>) -> Self {
        Self { client }
    }

    /// Median sold price for a title, or `fallback` when the lookup fails or
    /// finds nothing. Never propagates an error to the caller.
    pub async fn sold_median(&self, title: &str, fallback: Option<f64>) -> Option<f64> {
        match self.fetch_sold_median(title).await {
            Ok(fmv) => Some(fmv),
            Err(e) => {
                tracing::debug!("FMV lookup fell back for '{}': {}", title, e);
                fallback
            }
        }
    }

    async fn fetch_sold_median(&self, title: &str) -> Result<f64, ValuationError> {
        let items = self.client.find_completed(title).await?;

        let mut sold_prices: Vec<f64> = items
            .iter()
            .filter(|it| it.selling_state() == Some("EndedWithSales"))
            .filter_map(|it| it.price())
            .collect();

        if sold_prices.is_empty() {
            return Err(ValuationError::NoComps);
        }

        sold_prices.sort_by(f64::total_cmp);
        Ok(median_low(&sold_prices))
    }
}

// Lower-middle element for even counts, not an averaged midpoint. The ranker's
// thresholds were tuned against this pick, so it stays.
fn median_low(sorted: &[f64]) -> f64 {
    sorted[sorted.len() / 2]
}
