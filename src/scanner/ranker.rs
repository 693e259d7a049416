use serde::{Deserialize, Serialize};
use std::fmt;

use crate::api::Listing;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Buy,
    Maybe,
    Pass,
}

impl Verdict {
    /// Sort priority: BUYs always precede MAYBEs regardless of score.
    pub fn rank(&self) -> u8 {
        match self {
            Verdict::Buy => 0,
            Verdict::Maybe => 1,
            Verdict::Pass => 2,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Buy => write!(f, "BUY"),
            Verdict::Maybe => write!(f, "MAYBE"),
            Verdict::Pass => write!(f, "PASS"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedListing {
    #[serde(flatten)]
    pub listing: Listing,
    pub fmv: Option<f64>,
    #[serde(rename = "label")]
    pub verdict: Verdict,
    pub kscore: u32,
    pub score: i32,
}

impl RankedListing {
    /// Verdict and score are a pure function of price, FMV, and keyishness.
    pub fn new(listing: Listing, kscore: u32, fmv: Option<f64>) -> Self {
        let (verdict, score) = match fmv {
            None => {
                if kscore >= 2 && listing.price <= 60.0 {
                    (Verdict::Maybe, 55)
                } else {
                    (Verdict::Pass, 40)
                }
            }
            Some(fmv) => {
                // Tuned constants, kept verbatim; fmv <= 0 is treated as
                // unknown by pushing the ratio well past the PASS threshold.
                let ratio = if fmv > 0.0 { listing.price / fmv } else { 9.9 };
                if ratio <= 0.7 {
                    (Verdict::Buy, 90 - floor_pts(ratio * 10.0))
                } else if ratio <= 0.9 {
                    (Verdict::Maybe, 70 - floor_pts((ratio - 0.7) * 50.0))
                } else {
                    (Verdict::Pass, 40 - floor_pts((ratio - 0.9) * 80.0))
                }
            }
        };

        Self {
            listing,
            fmv,
            verdict,
            kscore,
            score,
        }
    }
}

// Floor with a nudge that absorbs f64 subtraction error at band edges
// (ratio 1.0 must deduct 8 points, not 7).
fn floor_pts(x: f64) -> i32 {
    (x + 1e-9).floor() as i32
}

/// Order by verdict priority, then score descending. Stable.
pub fn sort_ranked(ranked: &mut [RankedListing]) {
    ranked.sort_by_key(|r| (r.verdict.rank(), std::cmp::Reverse(r.score)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(price: f64) -> Listing {
        Listing {
            title: "Key Issue #1 First Appearance".to_string(),
            price,
            url: "https://www.ebay.com.au/itm/1".to_string(),
            gallery_url: None,
        }
    }

    #[test]
    fn test_no_fmv_cheap_keyish_is_maybe() {
        let r = RankedListing::new(listing(50.0), 4, None);
        assert_eq!(r.verdict, Verdict::Maybe);
        assert_eq!(r.score, 55);
    }

    #[test]
    fn test_no_fmv_otherwise_is_pass() {
        let pricey = RankedListing::new(listing(61.0), 4, None);
        assert_eq!((pricey.verdict, pricey.score), (Verdict::Pass, 40));

        let weak = RankedListing::new(listing(50.0), 1, None);
        assert_eq!((weak.verdict, weak.score), (Verdict::Pass, 40));
    }

    #[test]
    fn test_half_fmv_is_buy() {
        let r = RankedListing::new(listing(50.0), 2, Some(100.0));
        assert_eq!(r.verdict, Verdict::Buy);
        assert_eq!(r.score, 85); // 90 - floor(0.5 * 10)
    }

    #[test]
    fn test_ratio_bands() {
        let maybe = RankedListing::new(listing(80.0), 2, Some(100.0));
        assert_eq!((maybe.verdict, maybe.score), (Verdict::Maybe, 65));

        let pass = RankedListing::new(listing(100.0), 2, Some(100.0));
        assert_eq!((pass.verdict, pass.score), (Verdict::Pass, 32));
    }

    #[test]
    fn test_nonpositive_fmv_treated_as_unknown() {
        let r = RankedListing::new(listing(50.0), 2, Some(0.0));
        assert_eq!(r.verdict, Verdict::Pass);
        // ratio pinned to 9.9: 40 - floor((9.9 - 0.9) * 80) = 40 - 720
        assert_eq!(r.score, 40 - 720);
    }

    #[test]
    fn test_buy_sorts_before_higher_scoring_maybe() {
        let mut ranked = vec![
            RankedListing {
                listing: listing(10.0),
                fmv: Some(100.0),
                verdict: Verdict::Maybe,
                kscore: 2,
                score: 99,
            },
            RankedListing {
                listing: listing(10.0),
                fmv: Some(100.0),
                verdict: Verdict::Buy,
                kscore: 2,
                score: 10,
            },
        ];
        sort_ranked(&mut ranked);
        assert_eq!(ranked[0].verdict, Verdict::Buy);
    }

    #[test]
    fn test_scores_sort_descending_within_verdict() {
        let mut ranked = vec![
            RankedListing::new(listing(69.0), 2, Some(100.0)), // BUY 84
            RankedListing::new(listing(50.0), 2, Some(100.0)), // BUY 85
        ];
        sort_ranked(&mut ranked);
        assert_eq!(ranked[0].score, 85);
        assert_eq!(ranked[1].score, 84);
    }
}
