pub mod config;
pub mod logging;

pub use config::{Config, EbayConfig, EmailConfig, ScanConfig};
