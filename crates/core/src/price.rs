//! Price filter validation.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{CatalogError, CatalogResult};

/// Parse a raw `priceLessThan` query value into an optional filter threshold.
///
/// Empty input means "no filter". The value must be a valid, non-negative
/// decimal; the two failure modes are reported distinctly so the boundary can
/// message them separately. Decimals keep exact fixed-point semantics here;
/// conversion to floating point only ever happens at JSON serialization.
pub fn parse_price_filter(raw: &str) -> CatalogResult<Option<Decimal>> {
    if raw.is_empty() {
        return Ok(None);
    }
    let price = Decimal::from_str(raw).map_err(|_| CatalogError::InvalidPrice)?;
    if price < Decimal::ZERO {
        return Err(CatalogError::NegativePrice);
    }
    Ok(Some(price))
}
