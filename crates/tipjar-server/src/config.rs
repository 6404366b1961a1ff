//! Server Configuration

/// Listen address when `BIND_ADDR` is unset
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Frontend build directory when `STATIC_DIR` is unset
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Origin used when neither `PUBLIC_BASE_URL` nor a `Host` header is available
pub const FALLBACK_ORIGIN: &str = "http://localhost:3000";

/// Runtime settings read from the environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: String,
    /// Fixed origin for checkout redirect URLs, e.g. `https://tips.example`
    pub public_base_url: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            static_dir: DEFAULT_STATIC_DIR.into(),
            public_base_url: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            static_dir: non_empty("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.into()),
            public_base_url: non_empty("PUBLIC_BASE_URL")
                .map(|url| url.trim().trim_end_matches('/').to_string()),
        }
    }
}
