pub mod ebay;
pub mod types;

pub use ebay::EbayClient;
pub use types::*;
