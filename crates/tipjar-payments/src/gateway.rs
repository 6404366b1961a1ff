//! Checkout Gateway
//!
//! The seam between the checkout endpoint and the payment provider.

use async_trait::async_trait;

use crate::checkout::{CheckoutSessionId, DonationCheckoutParams};
use crate::error::Result;

/// Creates hosted checkout sessions
///
/// Implementations must not retry: every call creates at most one session,
/// and a failure is final for the request that triggered it.
#[async_trait]
pub trait CheckoutGateway: Send + Sync {
    /// Submit `params` to the provider and return the session id
    async fn create_session(&self, params: &DonationCheckoutParams) -> Result<CheckoutSessionId>;

    /// Provider name, for logs
    fn name(&self) -> &'static str;
}
