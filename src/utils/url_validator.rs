// SPDX-License-Identifier: GPL-3.0-only
use url::Url;
use anyhow::{Result, Context};

/// Maximum allowed URL length
const MAX_URL_LENGTH: usize = 2048;

/// Validate the food API base URL
///
/// Checks:
/// - Validates URL length
/// - Only allows http/https schemes
/// - Requires a host
pub fn validate_base_url(url_str: &str) -> Result<()> {
    if url_str.len() > MAX_URL_LENGTH {
        return Err(anyhow::anyhow!("URL exceeds maximum length of {} characters", MAX_URL_LENGTH));
    }

    let url = Url::parse(url_str)
        .with_context(|| format!("Invalid API base URL: {}", url_str))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(anyhow::anyhow!(
                "Invalid URL scheme: {} (only http and https are allowed)",
                scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(anyhow::anyhow!("URL must have a host"));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(anyhow::anyhow!("API base URL must not carry a query or fragment"));
    }

    Ok(())
}
