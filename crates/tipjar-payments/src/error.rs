//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Stripe API error (network, auth, or provider-side rejection)
    #[error("Stripe error: {0}")]
    Stripe(String),

    /// Stripe answered without a usable session id
    #[error("Stripe returned an empty checkout session id")]
    MissingSessionId,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PaymentError {
    /// Get user-friendly message
    ///
    /// Never includes provider details; those stay in server logs.
    pub const fn user_message(&self) -> &'static str {
        tipjar_core::api::CHECKOUT_FAILED_MESSAGE
    }
}

impl From<stripe::StripeError> for PaymentError {
    fn from(err: stripe::StripeError) -> Self {
        Self::Stripe(err.to_string())
    }
}
