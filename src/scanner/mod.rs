pub mod deal_scanner;
pub mod keywords;
pub mod ranker;
pub mod valuation;

pub use deal_scanner::DealScanner;
pub use keywords::keyishness;
pub use ranker::{RankedListing, Verdict};
pub use valuation::{ValuationError, ValuationLookup};
