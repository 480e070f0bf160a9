//! CLI configuration.

use anyhow::{Context, Result};

use afya_core::BaseUrl;

/// Environment variable naming the backend server.
pub const SERVER_URL_ENV: &str = "AFYA_SERVER_URL";

/// The hosted backend used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "https://healthis-server.onrender.com";

/// Resolve the backend base URL.
///
/// Precedence: the `--server` flag, then `AFYA_SERVER_URL`, then the
/// default.
pub fn server_url(flag: Option<&str>) -> Result<BaseUrl> {
    let raw = match flag {
        Some(value) => value.to_string(),
        None => std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string()),
    };

    BaseUrl::new(&raw).with_context(|| format!("Invalid server URL '{}'", raw))
}
