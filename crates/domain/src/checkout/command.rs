//! One-click checkout command.

use crate::order::{ChannelCode, LocaleCode, VariantCode};

/// Command to buy a single product variant in one request.
///
/// The variant and locale come from the client payload. The channel code is
/// assigned after construction from the resolved request context (host or
/// header), never by the caller, hence the mutable setter.
#[derive(Debug, Clone)]
pub struct OneClickCheckout {
    product_variant_code: VariantCode,
    locale_code: Option<LocaleCode>,
    channel_code: Option<ChannelCode>,
}

impl OneClickCheckout {
    /// Creates a new command for a variant, optionally pinning a locale.
    pub fn new(product_variant_code: impl Into<VariantCode>, locale_code: Option<LocaleCode>) -> Self {
        Self {
            product_variant_code: product_variant_code.into(),
            locale_code,
            channel_code: None,
        }
    }

    pub fn product_variant_code(&self) -> &VariantCode {
        &self.product_variant_code
    }

    pub fn locale_code(&self) -> Option<&LocaleCode> {
        self.locale_code.as_ref()
    }

    pub fn channel_code(&self) -> Option<&ChannelCode> {
        self.channel_code.as_ref()
    }

    /// Assigns the channel resolved from the request context.
    pub fn set_channel_code(&mut self, channel_code: Option<ChannelCode>) {
        self.channel_code = channel_code;
    }
}
