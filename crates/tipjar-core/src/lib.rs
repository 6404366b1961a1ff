//! # tipjar-core
//!
//! Shared domain for the tip jar: the donation amount policy, HTTP wire
//! types, and the small bits of page logic the browser frontend needs.
//!
//! This crate has no I/O and builds for both the server and `wasm32`.
//!
//! ```text
//! ┌──────────────┐   { amount }   ┌──────────────┐   params   ┌──────────┐
//! │ tipjar-web   │──────────────▶│ tipjar-server│───────────▶│  Stripe  │
//! │ (form)       │◀──────────────│ (endpoint)   │◀───────────│          │
//! └──────────────┘  { sessionId } └──────────────┘ session id └──────────┘
//!         └────────── AmountPolicy::DONATION ─────────┘
//! ```

pub mod amount;
pub mod api;
pub mod demo;
pub mod error;
pub mod form;
pub mod format;
pub mod success;

pub use amount::{AmountPolicy, DonationAmount};
pub use api::{
    CreateCheckoutSessionRequest, CreateCheckoutSessionResponse, DonationRequestBody, ErrorBody,
};
pub use error::{AmountError, Result};
pub use format::{format_yen, group_thousands};
pub use success::{Countdown, Tick};
