//! HTTP wire types shared by the server and the web frontend

use serde::{Deserialize, Serialize};

use crate::DonationAmount;

/// Checkout endpoint route
pub const CREATE_CHECKOUT_SESSION_PATH: &str = "/api/create-checkout-session";

/// Return route after a completed checkout
pub const SUCCESS_PATH: &str = "/success";

/// Generic failure message for anything past validation
pub const CHECKOUT_FAILED_MESSAGE: &str = "チェックアウトセッションの作成に失敗しました";

/// `POST /api/create-checkout-session` body
///
/// `amount` stays a raw JSON number here; range and integrality are checked
/// by [`AmountPolicy::validate`](crate::AmountPolicy::validate).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCheckoutSessionRequest {
    #[serde(default)]
    pub amount: Option<f64>,
}

/// Body the browser form sends: an already validated, whole yen amount
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DonationRequestBody {
    pub amount: DonationAmount,
}

/// Successful checkout endpoint response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutSessionResponse {
    pub session_id: String,
}

/// Error body for 4xx/5xx responses
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_session_id_key() {
        let body = CreateCheckoutSessionResponse {
            session_id: "cs_test_123".into(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "sessionId": "cs_test_123" })
        );
    }

    #[test]
    fn test_request_amount_optional() {
        let empty: CreateCheckoutSessionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.amount, None);

        let null: CreateCheckoutSessionRequest = serde_json::from_str(r#"{"amount":null}"#).unwrap();
        assert_eq!(null.amount, None);

        let whole: CreateCheckoutSessionRequest = serde_json::from_str(r#"{"amount":500}"#).unwrap();
        assert_eq!(whole.amount, Some(500.0));
    }

    #[test]
    fn test_form_body_sends_integer_amount() {
        let amount = crate::AmountPolicy::DONATION.check(500).unwrap();
        let json = serde_json::to_string(&DonationRequestBody { amount }).unwrap();
        assert_eq!(json, r#"{"amount":500}"#);

        let received: CreateCheckoutSessionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(crate::AmountPolicy::DONATION.validate(received.amount), Ok(amount));
    }

    #[test]
    fn test_request_rejects_string_amount() {
        assert!(serde_json::from_str::<CreateCheckoutSessionRequest>(r#"{"amount":"500"}"#).is_err());
    }
}
