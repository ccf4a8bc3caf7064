//! Pagination parameter validation and normalization.
//!
//! Raw query-string values are parsed here (empty means "not provided"), and
//! range handling is a separate normalization step so that the "limit was
//! explicitly provided" tri-state survives until defaulting/clamping.

use crate::error::{CatalogError, CatalogResult};

/// Default page size when the caller does not provide a limit.
pub const DEFAULT_LIMIT: i64 = 10;
/// Inclusive bounds a provided limit is clamped to.
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

/// A validated, normalized pagination window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Page {
    pub offset: i64,
    pub limit: i64,
}

impl Page {
    /// Normalize raw pagination values into an effective window.
    ///
    /// Offset passes through unchanged. A limit that was never provided
    /// becomes [`DEFAULT_LIMIT`]; a provided limit is clamped to
    /// `[MIN_LIMIT, MAX_LIMIT]` inclusive.
    pub fn normalize(offset: i64, limit: i64, limit_provided: bool) -> Self {
        let limit = if limit_provided {
            limit.clamp(MIN_LIMIT, MAX_LIMIT)
        } else {
            DEFAULT_LIMIT
        };
        Self { offset, limit }
    }
}

/// Parse a raw `offset` query value.
///
/// Empty input defaults to 0. Anything that is not a non-negative integer is
/// rejected.
pub fn parse_offset(raw: &str) -> CatalogResult<i64> {
    if raw.is_empty() {
        return Ok(0);
    }
    let offset: i64 = raw.parse().map_err(|_| CatalogError::InvalidOffset)?;
    if offset < 0 {
        return Err(CatalogError::InvalidOffset);
    }
    Ok(offset)
}

/// Parse a raw `limit` query value.
///
/// Returns the parsed value plus whether it was provided at all. Out-of-range
/// integers (zero, negative) are accepted here; [`Page::normalize`] clamps
/// them.
pub fn parse_limit(raw: &str) -> CatalogResult<(i64, bool)> {
    if raw.is_empty() {
        return Ok((0, false));
    }
    let limit: i64 = raw.parse().map_err(|_| CatalogError::InvalidLimit)?;
    Ok((limit, true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_offset_defaults_empty_to_zero() {
        assert_eq!(parse_offset("").unwrap(), 0);
    }

    #[test]
    fn parse_offset_accepts_non_negative_integers() {
        assert_eq!(parse_offset("0").unwrap(), 0);
        assert_eq!(parse_offset("42").unwrap(), 42);
    }

    #[test]
    fn parse_offset_rejects_garbage_and_negatives() {
        assert!(matches!(
            parse_offset("abc"),
            Err(CatalogError::InvalidOffset)
        ));
        assert!(matches!(
            parse_offset("1.5"),
            Err(CatalogError::InvalidOffset)
        ));
        assert!(matches!(
            parse_offset("-1"),
            Err(CatalogError::InvalidOffset)
        ));
    }

    #[test]
    fn parse_limit_distinguishes_absent_from_provided() {
        assert_eq!(parse_limit("").unwrap(), (0, false));
        assert_eq!(parse_limit("0").unwrap(), (0, true));
        assert_eq!(parse_limit("-5").unwrap(), (-5, true));
        assert_eq!(parse_limit("25").unwrap(), (25, true));
    }

    #[test]
    fn parse_limit_rejects_non_integers() {
        assert!(matches!(parse_limit("ten"), Err(CatalogError::InvalidLimit)));
        assert!(matches!(parse_limit("2.5"), Err(CatalogError::InvalidLimit)));
    }

    #[test]
    fn normalize_limit_table() {
        let cases = [
            // (limit, provided, expected)
            (0, false, DEFAULT_LIMIT),
            (0, true, 1),
            (-5, true, 1),
            (1, true, 1),
            (200, true, 100),
            (100, true, 100),
            (50, true, 50),
        ];
        for (limit, provided, expected) in cases {
            let page = Page::normalize(0, limit, provided);
            assert_eq!(page.limit, expected, "limit={limit} provided={provided}");
        }
    }

    #[test]
    fn normalize_passes_offset_through() {
        assert_eq!(Page::normalize(7, 10, true).offset, 7);
        assert_eq!(Page::normalize(0, 0, false).offset, 0);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: any provided limit normalizes into [MIN, MAX].
            #[test]
            fn provided_limit_is_always_clamped(limit in any::<i64>()) {
                let page = Page::normalize(0, limit, true);
                prop_assert!(page.limit >= MIN_LIMIT);
                prop_assert!(page.limit <= MAX_LIMIT);
                if (MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
                    prop_assert_eq!(page.limit, limit);
                }
            }

            /// Property: offset is never altered by normalization.
            #[test]
            fn offset_passes_through(offset in 0i64..1_000_000, limit in any::<i64>()) {
                prop_assert_eq!(Page::normalize(offset, limit, true).offset, offset);
                prop_assert_eq!(Page::normalize(offset, 0, false).offset, offset);
            }

            /// Property: parse_offset round-trips every non-negative integer.
            #[test]
            fn parse_offset_roundtrip(offset in 0i64..i64::MAX) {
                prop_assert_eq!(parse_offset(&offset.to_string()).unwrap(), offset);
            }
        }
    }
}
