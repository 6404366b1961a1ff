//! # tipjar-payments
//!
//! Hosted checkout sessions for one-off yen donations.
//!
//! **Flow:** donation form → checkout endpoint → Stripe hosted page → success page
//!
//! ```text
//! ┌─────────────┐     ┌─────────────────┐     ┌─────────────┐
//! │  Donation   │────▶│  Stripe Hosted  │────▶│  /success   │
//! │    form     │     │  Checkout Page  │     │  ?amount=…  │
//! └─────────────┘     └─────────────────┘     └─────────────┘
//! ```
//!
//! There is no webhook confirmation: reaching the success page does not mean
//! the payment completed.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tipjar_core::AmountPolicy;
//! use tipjar_payments::{CheckoutGateway, DonationCheckoutParams, StripeGateway};
//!
//! let gateway = StripeGateway::from_env()?;
//! let amount = AmountPolicy::DONATION.check(500)?;
//! let params = DonationCheckoutParams::for_donation(amount, "https://tips.example");
//!
//! // Hand session_id to Stripe.js redirectToCheckout
//! let session_id = gateway.create_session(&params).await?;
//! ```

mod checkout;
mod error;
mod gateway;
mod stripe_gateway;

pub use checkout::{
    CheckoutMode, CheckoutSessionId, Currency, DonationCheckoutParams, LineItem, PaymentMethodType,
    AMOUNT_METADATA_KEY, DONATION_PRODUCT_DESCRIPTION, DONATION_PRODUCT_NAME,
};
pub use error::{PaymentError, Result};
pub use gateway::CheckoutGateway;
pub use stripe_gateway::{StripeGateway, SECRET_KEY_VAR};
