//! Stripe Checkout Integration
//!
//! Hosted checkout: the browser is redirected to Stripe with the returned
//! session id and comes back to the success or cancel URL.

use async_trait::async_trait;
use stripe::{
    CheckoutSession, CheckoutSessionMode, Client, CreateCheckoutSession,
    CreateCheckoutSessionLineItems, CreateCheckoutSessionLineItemsPriceData,
    CreateCheckoutSessionLineItemsPriceDataProductData, CreateCheckoutSessionPaymentMethodTypes,
    Metadata,
};

use crate::checkout::{
    CheckoutMode, CheckoutSessionId, Currency, DonationCheckoutParams, LineItem, PaymentMethodType,
};
use crate::error::{PaymentError, Result};
use crate::gateway::CheckoutGateway;

/// Environment variable holding the Stripe secret key
pub const SECRET_KEY_VAR: &str = "STRIPE_SECRET_KEY";

/// Stripe-backed [`CheckoutGateway`]
///
/// Holds one immutable API client for the lifetime of the process.
pub struct StripeGateway {
    client: Client,
}

impl StripeGateway {
    /// Create a new gateway from a secret key
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Create from environment variables
    ///
    /// Fails when `STRIPE_SECRET_KEY` is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_secret_key(std::env::var(SECRET_KEY_VAR).ok())
    }

    fn from_secret_key(secret_key: Option<String>) -> Result<Self> {
        match secret_key {
            Some(key) if !key.trim().is_empty() => Ok(Self::new(key.trim())),
            _ => Err(PaymentError::Config(format!("{SECRET_KEY_VAR} not set"))),
        }
    }
}

#[async_trait]
impl CheckoutGateway for StripeGateway {
    async fn create_session(&self, params: &DonationCheckoutParams) -> Result<CheckoutSessionId> {
        let session = CheckoutSession::create(&self.client, stripe_params(params)).await?;

        let id = session.id.to_string();
        if id.is_empty() {
            return Err(PaymentError::MissingSessionId);
        }

        tracing::info!(session_id = %id, "Created Stripe checkout session");
        Ok(CheckoutSessionId::new(id))
    }

    fn name(&self) -> &'static str {
        "stripe"
    }
}

/// Map donation params onto the Stripe create-session request
fn stripe_params(params: &DonationCheckoutParams) -> CreateCheckoutSession<'_> {
    let mut request = CreateCheckoutSession::new();
    request.success_url = Some(&params.success_url);
    request.cancel_url = Some(&params.cancel_url);
    request.mode = Some(match params.mode {
        CheckoutMode::Payment => CheckoutSessionMode::Payment,
    });
    request.payment_method_types = Some(
        params
            .payment_method_types
            .iter()
            .map(|method| match method {
                PaymentMethodType::Card => CreateCheckoutSessionPaymentMethodTypes::Card,
            })
            .collect(),
    );
    request.line_items = Some(params.line_items.iter().map(stripe_line_item).collect());
    request.metadata = Some(
        params
            .metadata
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Metadata>(),
    );
    request
}

fn stripe_line_item(item: &LineItem) -> CreateCheckoutSessionLineItems {
    CreateCheckoutSessionLineItems {
        quantity: Some(item.quantity),
        price_data: Some(CreateCheckoutSessionLineItemsPriceData {
            currency: match item.currency {
                Currency::Jpy => stripe::Currency::JPY,
            },
            unit_amount: Some(item.unit_amount),
            product_data: Some(CreateCheckoutSessionLineItemsPriceDataProductData {
                name: item.name.clone(),
                description: Some(item.description.clone()),
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipjar_core::AmountPolicy;

    fn params(yen: i64) -> DonationCheckoutParams {
        let amount = AmountPolicy::DONATION.check(yen).unwrap();
        DonationCheckoutParams::for_donation(amount, "https://tips.example")
    }

    #[test]
    fn test_missing_secret_key_fails_fast() {
        assert!(matches!(
            StripeGateway::from_secret_key(None),
            Err(PaymentError::Config(_))
        ));
        assert!(matches!(
            StripeGateway::from_secret_key(Some("  ".into())),
            Err(PaymentError::Config(_))
        ));
        assert!(StripeGateway::from_secret_key(Some("sk_test_123".into())).is_ok());
    }

    #[test]
    fn test_stripe_params_mapping() {
        let params = params(500);
        let request = stripe_params(&params);

        assert_eq!(request.success_url, Some("https://tips.example/success?amount=500"));
        assert_eq!(request.cancel_url, Some("https://tips.example/"));
        assert_eq!(request.mode, Some(CheckoutSessionMode::Payment));
        assert_eq!(
            request.metadata.as_ref().and_then(|m| m.get("amount")).map(String::as_str),
            Some("500")
        );

        let items = request.line_items.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, Some(1));

        let price = items[0].price_data.as_ref().unwrap();
        assert_eq!(price.currency, stripe::Currency::JPY);
        assert_eq!(price.unit_amount, Some(500));

        let product = price.product_data.as_ref().unwrap();
        assert_eq!(product.name, "投げ銭");
        assert_eq!(product.description.as_deref(), Some("ご支援ありがとうございます！"));
    }
}
