//! CORS proxy URL construction.

use urlencoding::encode;

use crate::errors::EconomicDataError;

const URL_ENCODED_PLACEHOLDER: &str = "{urlEncoded}";
const URL_PLACEHOLDER: &str = "{url}";

/// Route `target_url` through the configured proxy.
///
/// The proxy base may contain `{urlEncoded}` (replaced by the percent-encoded
/// target) or `{url}` (replaced by the raw target). Without a placeholder the
/// encoded target is appended.
pub fn build_proxied_url(
    target_url: &str,
    proxy_base: Option<&str>,
) -> Result<String, EconomicDataError> {
    let trimmed = proxy_base.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(EconomicDataError::ProxyNotConfigured);
    }

    if trimmed.contains(URL_ENCODED_PLACEHOLDER) {
        return Ok(trimmed.replacen(URL_ENCODED_PLACEHOLDER, &encode(target_url), 1));
    }

    if trimmed.contains(URL_PLACEHOLDER) {
        return Ok(trimmed.replacen(URL_PLACEHOLDER, target_url, 1));
    }

    Ok(format!("{}{}", trimmed, encode(target_url)))
}
