//! Option contract symbols
//!
//! A symbol is an opaque instrument identifier. The only normalization
//! applied is uppercasing; blank input is rejected before any routing.

use crate::errors::SymbolError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized option contract symbol (e.g. "NIFTY24JUN22000CE")
///
/// Always uppercase and never blank. Two inputs differing only in case
/// produce equal symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSymbol(String);

impl OptionSymbol {
    /// Parse and normalize a raw symbol
    ///
    /// Fails with [`SymbolError::Empty`] for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, SymbolError> {
        if raw.trim().is_empty() {
            return Err(SymbolError::Empty);
        }
        Ok(Self(raw.to_uppercase()))
    }

    /// Get the normalized symbol string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_is_uppercased() {
        let symbol = OptionSymbol::parse("nifty24jun22000ce").unwrap();
        assert_eq!(symbol.as_str(), "NIFTY24JUN22000CE");
    }

    #[test]
    fn test_symbol_case_insensitive_equality() {
        let lower = OptionSymbol::parse("nifty123").unwrap();
        let upper = OptionSymbol::parse("NIFTY123").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(OptionSymbol::parse(""), Err(SymbolError::Empty));
    }

    #[test]
    fn test_whitespace_symbol_rejected() {
        assert_eq!(OptionSymbol::parse("   "), Err(SymbolError::Empty));
        assert_eq!(OptionSymbol::parse("\t\n"), Err(SymbolError::Empty));
    }

    #[test]
    fn test_non_blank_symbol_is_not_trimmed() {
        let symbol = OptionSymbol::parse(" nifty ").unwrap();
        assert_eq!(symbol.as_str(), " NIFTY ");
    }

    #[test]
    fn test_symbol_serializes_as_plain_string() {
        let symbol = OptionSymbol::parse("banknifty").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, "\"BANKNIFTY\"");
    }
}
