//! Stripe.js redirect
//!
//! Bindings to the Stripe.js v3 script loaded by `index.html`, and the one
//! call the donation form makes on it.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Object, Promise, Reflect};

/// Publishable key baked in at build time
const PUBLISHABLE_KEY: Option<&str> = option_env!("STRIPE_PUBLISHABLE_KEY");

#[wasm_bindgen]
extern "C" {
    /// Stripe.js client handle
    #[wasm_bindgen(js_name = Stripe, js_namespace = window)]
    #[derive(Debug, Clone)]
    type JsStripe;

    /// `Stripe(publishableKey)`; throws when Stripe.js is not loaded
    #[wasm_bindgen(catch, js_name = Stripe, js_namespace = window)]
    fn new_stripe(publishable_key: &str) -> Result<JsStripe, JsValue>;

    /// `stripe.redirectToCheckout({ sessionId })` → JS `Promise`
    #[wasm_bindgen(method, catch, js_name = redirectToCheckout)]
    fn redirect_to_checkout_js(this: &JsStripe, options: JsValue) -> Result<Promise, JsValue>;
}

fn js_error(value: &JsValue) -> String {
    Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Send the browser to the hosted checkout page for `session_id`
///
/// Only returns on failure; on success the page navigates away.
pub async fn redirect_to_checkout(session_id: &str) -> Result<(), String> {
    let key = PUBLISHABLE_KEY
        .filter(|k| !k.is_empty())
        .ok_or("STRIPE_PUBLISHABLE_KEY was not set at build time")?;

    let stripe =
        new_stripe(key).map_err(|e| format!("Stripe failed to initialize: {}", js_error(&e)))?;

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("sessionId"), &JsValue::from_str(session_id))
        .map_err(|e| js_error(&e))?;

    let promise = stripe
        .redirect_to_checkout_js(options.into())
        .map_err(|e| js_error(&e))?;
    let result = JsFuture::from(promise).await.map_err(|e| js_error(&e))?;

    // Resolves with `{ error }` when the redirect could not happen
    match Reflect::get(&result, &JsValue::from_str("error")) {
        Ok(error) if !error.is_undefined() && !error.is_null() => Err(js_error(&error)),
        _ => Ok(()),
    }
}
