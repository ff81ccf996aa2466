use serde::Serialize;
use serde_json::{Map, Value, json};
use types::symbol::OptionSymbol;

/// Upstream payload, passed through untyped
pub type Quote = Map<String, Value>;

/// Field injected into every successful response
pub const SYMBOL_FIELD: &str = "option_id";

/// A validated upstream object together with the symbol it was fetched for
#[derive(Debug, Clone, PartialEq)]
pub struct LiveQuote {
    pub symbol: OptionSymbol,
    pub body: Quote,
}

impl LiveQuote {
    /// Response body: the upstream object with `option_id` set to the
    /// normalized symbol, overwriting any upstream value
    pub fn into_response_body(self) -> Quote {
        let mut body = self.body;
        body.insert(SYMBOL_FIELD.to_string(), json!(self.symbol));
        body
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
