//! Types library for the option live-data gateway
//!
//! Pure, I/O-free definitions shared by the gateway service: symbol
//! normalization, exchange routing, upstream URL construction and the
//! fetch error taxonomy.
//!
//! # Modules
//! - `symbol`: Normalized option symbol (OptionSymbol)
//! - `route`: Exchange/API path routing and the upstream URL template
//! - `errors`: Error taxonomy

// Public modules
pub mod symbol;
pub mod route;
pub mod errors;
