//! Exchange routing and upstream URL construction
//!
//! Routing is a static two-way branch on the symbol prefix:
//! index options on the `SENSEX` family go to BSE's order-book feed,
//! everything else to NSE's live-price feed. Both share the FNO segment.

use crate::symbol::OptionSymbol;
use std::fmt;

/// Symbol prefix that routes to the secondary exchange
pub const INDEX_PREFIX: &str = "SENSEX";

/// Market segment literal used for every request
pub const SEGMENT: &str = "FNO";

/// Exchange an option trades on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exchange {
    /// Primary exchange
    Nse,
    /// Secondary exchange, index options with the `SENSEX` prefix
    Bse,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Nse => "NSE",
            Exchange::Bse => "BSE",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Upstream API path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiPath {
    /// `tr_live_prices`
    LivePrices,
    /// `tr_live_book`
    LiveBook,
}

impl ApiPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiPath::LivePrices => "tr_live_prices",
            ApiPath::LiveBook => "tr_live_book",
        }
    }
}

impl fmt::Display for ApiPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved destination for a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Route {
    pub exchange: Exchange,
    pub api_path: ApiPath,
}

impl Route {
    /// Route a normalized symbol
    pub fn for_symbol(symbol: &OptionSymbol) -> Self {
        if symbol.as_str().starts_with(INDEX_PREFIX) {
            Self {
                exchange: Exchange::Bse,
                api_path: ApiPath::LiveBook,
            }
        } else {
            Self {
                exchange: Exchange::Nse,
                api_path: ApiPath::LivePrices,
            }
        }
    }
}

/// Build the upstream "latest" URL for a symbol
///
/// Format: `{base}/{api_path}/exchange/{EXCHANGE}/segment/FNO/{SYMBOL}/latest`.
/// A trailing slash on `base` is ignored.
pub fn latest_url(base: &str, symbol: &OptionSymbol) -> String {
    let route = Route::for_symbol(symbol);
    format!(
        "{}/{}/exchange/{}/segment/{}/{}/latest",
        base.trim_end_matches('/'),
        route.api_path,
        route.exchange,
        SEGMENT,
        symbol
    )
}
