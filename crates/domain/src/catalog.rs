//! Catalog reference entities: product variants and sales channels.

use serde::{Deserialize, Serialize};

use crate::order::{ChannelCode, CurrencyCode, Money, VariantCode};

/// A purchasable configuration of a product (e.g., size/color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductVariant {
    pub code: VariantCode,
    pub product_name: String,
    pub unit_price: Money,
}

impl ProductVariant {
    pub fn new(
        code: impl Into<VariantCode>,
        product_name: impl Into<String>,
        unit_price: Money,
    ) -> Self {
        Self {
            code: code.into(),
            product_name: product_name.into(),
            unit_price,
        }
    }
}

/// A sales context (storefront) with its own base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub code: ChannelCode,
    pub name: String,
    pub base_currency: CurrencyCode,
}

impl Channel {
    pub fn new(
        code: impl Into<ChannelCode>,
        name: impl Into<String>,
        base_currency: impl Into<CurrencyCode>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            base_currency: base_currency.into(),
        }
    }
}
