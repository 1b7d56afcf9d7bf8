//! One-click checkout command and handler.

mod command;
mod service;

pub use command::OneClickCheckout;
pub use service::CheckoutService;
