//! # Market Listing Records
//!
//! Rows of the markets table and the global statistics shown above it.

use serde::{Deserialize, Serialize};

/// One row of the market listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetListing {
    /// Unique id within the listing (e.g. "bitcoin")
    pub id: String,
    pub name: String,
    pub symbol: String,
    /// Last price in USD
    pub price: f64,
    /// 24h change in percent (1.25 = +1.25%)
    pub change_24h: f64,
    /// 24h traded volume in USD
    pub volume_24h: f64,
    pub market_cap: f64,
    #[serde(default)]
    pub is_favorite: bool,
}

impl AssetListing {
    /// Case-insensitive substring match against name or symbol.
    ///
    /// An empty term matches every row.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.symbol.to_lowercase().contains(&term)
    }
}

/// Headline numbers for the whole market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStats {
    /// Global market capitalisation in USD
    pub global_market_cap: f64,
    /// Global 24h volume in USD
    pub volume_24h: f64,
    /// BTC share of the global market cap, in percent
    pub btc_dominance: f64,
    /// Number of listed assets (display only)
    pub active_cryptos: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(name: &str, symbol: &str) -> AssetListing {
        AssetListing {
            id: name.to_lowercase(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            price: 1.0,
            change_24h: 0.0,
            volume_24h: 0.0,
            market_cap: 0.0,
            is_favorite: false,
        }
    }

    #[test]
    fn test_search_matches_name_or_symbol_ignoring_case() {
        let btc = listing("Bitcoin", "BTC");
        assert!(btc.matches_search("bit"));
        assert!(btc.matches_search("BITCOIN"));
        assert!(btc.matches_search("btc"));
        assert!(btc.matches_search(""));
        assert!(!btc.matches_search("eth"));
    }

    #[test]
    fn test_missing_favorite_flag_defaults_to_false() {
        let json = r#"{"id":"xrp","name":"XRP","symbol":"XRP","price":0.52,"change_24h":-1.15,"volume_24h":1.2e9,"market_cap":2.8e10}"#;
        let row: AssetListing = serde_json::from_str(json).unwrap();
        assert!(!row.is_favorite);
        assert_eq!(row.change_24h, -1.15);
    }
}
