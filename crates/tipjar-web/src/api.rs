//! API Client

use tipjar_core::{
    api::CREATE_CHECKOUT_SESSION_PATH, CreateCheckoutSessionResponse, DonationAmount,
    DonationRequestBody, ErrorBody,
};

/// Origin the page was served from
fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

/// Create a Stripe checkout session for `amount` and return its id
pub async fn create_checkout_session(amount: DonationAmount) -> Result<String, String> {
    let client = reqwest::Client::new();
    let body = DonationRequestBody { amount };

    let response = client
        .post(format!("{}{}", origin(), CREATE_CHECKOUT_SESSION_PATH))
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        let data: CreateCheckoutSessionResponse =
            response.json().await.map_err(|e| e.to_string())?;
        Ok(data.session_id)
    } else {
        let data: ErrorBody = response
            .json()
            .await
            .unwrap_or_else(|_| ErrorBody::new("Failed to create checkout session"));
        Err(data.error)
    }
}
