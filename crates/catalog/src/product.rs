use rust_decimal::Decimal;

use crate::category::Category;

/// A product in the catalog.
///
/// `code` is the unique, immutable business identifier; `category` is
/// optional (a product may be uncategorized). Variants are carried in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub code: String,
    pub price: Decimal,
    pub category: Option<Category>,
    pub variants: Vec<Variant>,
}

/// A product variant.
///
/// `price: None` means the variant inherits the owning product's price.
/// `price: Some(d)` — including an explicit `0.00` — means `d` is charged.
/// The tri-state lives in the type; zero is never a sentinel for "absent".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub sku: String,
    pub price: Option<Decimal>,
}

impl Variant {
    /// The price actually charged for this variant, after applying the
    /// inheritance rule against the owning product's price.
    pub fn effective_price(&self, product_price: Decimal) -> Decimal {
        self.price.unwrap_or(product_price)
    }
}

/// Filter criteria for product listing queries. Filters compose
/// conjunctively; category match is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub price_less_than: Option<Decimal>,
}

impl ProductFilter {
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.price_less_than.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn variant(price: Option<Decimal>) -> Variant {
        Variant {
            name: "Large".to_string(),
            sku: "SKU-L".to_string(),
            price,
        }
    }

    #[test]
    fn absent_price_inherits_from_product() {
        let v = variant(None);
        assert_eq!(v.effective_price(dec("10.99")), dec("10.99"));
    }

    #[test]
    fn explicit_price_wins_over_product() {
        let v = variant(Some(dec("8.50")));
        assert_eq!(v.effective_price(dec("10.99")), dec("8.50"));
    }

    #[test]
    fn explicit_zero_is_not_treated_as_absent() {
        let v = variant(Some(dec("0.00")));
        assert_eq!(v.effective_price(dec("10.99")), dec("0.00"));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_decimal() -> impl Strategy<Value = Decimal> {
            // Two-digit scale, the same shape as the numeric(10,2) columns.
            (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
        }

        proptest! {
            /// Property: an explicitly priced variant never inherits.
            #[test]
            fn explicit_price_always_wins(own in arb_decimal(), product in arb_decimal()) {
                let v = variant(Some(own));
                prop_assert_eq!(v.effective_price(product), own);
            }

            /// Property: an unpriced variant always inherits.
            #[test]
            fn absent_price_always_inherits(product in arb_decimal()) {
                let v = variant(None);
                prop_assert_eq!(v.effective_price(product), product);
            }
        }
    }
}
