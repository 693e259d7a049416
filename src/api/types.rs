use serde::{Deserialize, Serialize};

/// One normalized fixed-price listing pulled from a keyword search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub title: String,
    pub price: f64,
    pub url: String,
    pub gallery_url: Option<String>,
}

// The Finding API wraps every scalar in a one-element array. Each level
// defaults to empty so a missing key anywhere yields no items, not an error.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindItemsByKeywords {
    #[serde(rename = "findItemsByKeywordsResponse", default)]
    pub response: Vec<SearchResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindCompletedItems {
    #[serde(rename = "findCompletedItemsResponse", default)]
    pub response: Vec<SearchResponse>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "searchResult", default)]
    pub search_result: Vec<SearchResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub item: Vec<RawItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub title: Vec<String>,
    #[serde(rename = "viewItemURL", default)]
    pub view_item_url: Vec<String>,
    #[serde(rename = "galleryURL", default)]
    pub gallery_url: Vec<String>,
    #[serde(rename = "sellingStatus", default)]
    pub selling_status: Vec<SellingStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SellingStatus {
    #[serde(rename = "currentPrice", default)]
    pub current_price: Vec<CurrentPrice>,
    #[serde(rename = "sellingState", default)]
    pub selling_state: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentPrice {
    #[serde(rename = "@currencyId", default)]
    pub currency_id: String,
    #[serde(rename = "__value__", default)]
    pub value: String,
}

impl FindItemsByKeywords {
    pub fn items(self) -> Vec<RawItem> {
        items_of(self.response)
    }
}

impl FindCompletedItems {
    pub fn items(self) -> Vec<RawItem> {
        items_of(self.response)
    }
}

fn items_of(response: Vec<SearchResponse>) -> Vec<RawItem> {
    response
        .into_iter()
        .next()
        .and_then(|r| r.search_result.into_iter().next())
        .map(|r| r.item)
        .unwrap_or_default()
}

impl RawItem {
    pub fn title(&self) -> Option<&str> {
        self.title.first().map(String::as_str).filter(|t| !t.is_empty())
    }

    pub fn url(&self) -> Option<&str> {
        self.view_item_url
            .first()
            .map(String::as_str)
            .filter(|u| !u.is_empty())
    }

    pub fn gallery(&self) -> Option<String> {
        self.gallery_url.first().filter(|g| !g.is_empty()).cloned()
    }

    /// Current price as a positive decimal; fails soft on anything malformed.
    pub fn price(&self) -> Option<f64> {
        self.selling_status
            .first()?
            .current_price
            .first()?
            .value
            .parse::<f64>()
            .ok()
            .filter(|p| *p > 0.0)
    }

    pub fn selling_state(&self) -> Option<&str> {
        self.selling_status.first()?.selling_state.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item_json() -> serde_json::Value {
        serde_json::json!({
            "title": ["Amazing Spider-Man #300 Key Issue"],
            "viewItemURL": ["https://www.ebay.com.au/itm/123"],
            "galleryURL": ["https://thumbs.ebay.com/123.jpg"],
            "sellingStatus": [{
                "currentPrice": [{"@currencyId": "AUD", "__value__": "120.50"}],
                "sellingState": ["Active"]
            }]
        })
    }

    #[test]
    fn test_nested_response_extraction() {
        let body = serde_json::json!({
            "findItemsByKeywordsResponse": [{
                "searchResult": [{"item": [sample_item_json()]}]
            }]
        });
        let parsed: FindItemsByKeywords = serde_json::from_value(body).unwrap();
        let items = parsed.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title(), Some("Amazing Spider-Man #300 Key Issue"));
        assert_eq!(items[0].price(), Some(120.50));
        assert_eq!(items[0].url(), Some("https://www.ebay.com.au/itm/123"));
    }

    #[test]
    fn test_missing_layers_yield_no_items() {
        let parsed: FindItemsByKeywords = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(parsed.items().is_empty());

        let no_result: FindItemsByKeywords = serde_json::from_value(serde_json::json!({
            "findItemsByKeywordsResponse": [{}]
        }))
        .unwrap();
        assert!(no_result.items().is_empty());
    }

    #[test]
    fn test_price_fails_soft() {
        let item: RawItem = serde_json::from_value(serde_json::json!({
            "sellingStatus": [{"currentPrice": [{"__value__": "not-a-number"}]}]
        }))
        .unwrap();
        assert_eq!(item.price(), None);

        let zero: RawItem = serde_json::from_value(serde_json::json!({
            "sellingStatus": [{"currentPrice": [{"__value__": "0"}]}]
        }))
        .unwrap();
        assert_eq!(zero.price(), None);

        let empty = RawItem::default();
        assert_eq!(empty.price(), None);
    }
}
