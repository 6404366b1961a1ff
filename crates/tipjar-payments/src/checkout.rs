//! Donation Checkout Parameters
//!
//! Provider-neutral description of the hosted checkout session created for a
//! single donation. [`StripeGateway`](crate::StripeGateway) maps it onto the
//! Stripe API; tests inspect it directly.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tipjar_core::{api::SUCCESS_PATH, DonationAmount};

/// Product name shown on the hosted checkout page
pub const DONATION_PRODUCT_NAME: &str = "投げ銭";

/// Product description shown on the hosted checkout page
pub const DONATION_PRODUCT_DESCRIPTION: &str = "ご支援ありがとうございます！";

/// Metadata key echoing the donated amount
pub const AMOUNT_METADATA_KEY: &str = "amount";

/// Checkout currency. Only yen is supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Jpy,
}

impl Currency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpy => "jpy",
        }
    }
}

/// Checkout session mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    /// One-off payment
    Payment,
}

/// Accepted payment method types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodType {
    Card,
}

/// One priced entry on the session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub description: String,
    pub currency: Currency,
    /// Smallest currency unit; for yen this is whole yen
    pub unit_amount: i64,
    pub quantity: u64,
}

/// Everything needed to create one donation checkout session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationCheckoutParams {
    pub mode: CheckoutMode,
    pub payment_method_types: Vec<PaymentMethodType>,
    pub line_items: Vec<LineItem>,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: BTreeMap<String, String>,
}

impl DonationCheckoutParams {
    /// Build the session for `amount`, redirecting back to `origin`.
    ///
    /// `origin` is scheme + host (+ port), with or without a trailing slash.
    pub fn for_donation(amount: DonationAmount, origin: &str) -> Self {
        let origin = origin.trim_end_matches('/');
        let yen = amount.yen();

        let mut metadata = BTreeMap::new();
        metadata.insert(AMOUNT_METADATA_KEY.to_string(), yen.to_string());

        Self {
            mode: CheckoutMode::Payment,
            payment_method_types: vec![PaymentMethodType::Card],
            line_items: vec![LineItem {
                name: DONATION_PRODUCT_NAME.into(),
                description: DONATION_PRODUCT_DESCRIPTION.into(),
                currency: Currency::Jpy,
                unit_amount: yen,
                quantity: 1,
            }],
            success_url: format!("{origin}{SUCCESS_PATH}?amount={yen}"),
            cancel_url: format!("{origin}/"),
            metadata,
        }
    }
}

/// Opaque provider-issued session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckoutSessionId(String);

impl CheckoutSessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tipjar_core::AmountPolicy;

    fn donation(yen: i64) -> DonationAmount {
        AmountPolicy::DONATION.check(yen).unwrap()
    }

    #[test]
    fn test_redirect_urls() {
        let params = DonationCheckoutParams::for_donation(donation(500), "https://tips.example/");
        assert_eq!(params.success_url, "https://tips.example/success?amount=500");
        assert_eq!(params.cancel_url, "https://tips.example/");
    }

    #[test]
    fn test_fixed_session_shape() {
        let params = DonationCheckoutParams::for_donation(donation(3000), "http://localhost:3000");
        assert_eq!(params.mode, CheckoutMode::Payment);
        assert_eq!(params.payment_method_types, vec![PaymentMethodType::Card]);

        let item = &params.line_items[0];
        assert_eq!(item.name, "投げ銭");
        assert_eq!(item.description, "ご支援ありがとうございます！");
        assert_eq!(item.currency.as_str(), "jpy");
    }

    proptest! {
        #[test]
        fn prop_single_line_item_echoes_amount(a in 100i64..=1_000_000) {
            let params = DonationCheckoutParams::for_donation(donation(a), "https://tips.example");

            prop_assert_eq!(params.line_items.len(), 1);
            let item = &params.line_items[0];
            prop_assert_eq!(item.unit_amount, a);
            prop_assert_eq!(item.currency, Currency::Jpy);
            prop_assert_eq!(item.quantity, 1);
            prop_assert_eq!(params.metadata.get("amount"), Some(&a.to_string()));
            prop_assert_eq!(params.metadata.len(), 1);
        }
    }
}
