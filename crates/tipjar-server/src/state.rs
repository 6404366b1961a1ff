//! Application State

use std::sync::Arc;

use tipjar_payments::CheckoutGateway;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Checkout provider, built once at startup
    pub gateway: Arc<dyn CheckoutGateway>,

    /// Settings read at startup
    pub config: Arc<ServerConfig>,
}
