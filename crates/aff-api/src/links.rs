//! Tracked product links carrying the affiliate's UTM tags.

use aff_config::LinkConfig;
use aff_core::Session;

use crate::error::ApiError;

/// Append `utm_source=<userId>`, `utm_medium` and, when configured,
/// `utm_campaign` to a product URL. Existing query parameters and any
/// `#fragment` are preserved.
///
/// # Errors
///
/// Returns `ApiError::Validation` unless `product_url` is an `http(s)` URL.
pub fn tracked_link(
    product_url: &str,
    session: &Session,
    config: &LinkConfig,
) -> Result<String, ApiError> {
    let url = product_url.trim();
    if !has_http_scheme(url) {
        return Err(ApiError::Validation(format!(
            "product URL must start with http:// or https://, got '{url}'"
        )));
    }

    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment)),
        None => (url, None),
    };

    let mut params = vec![("utm_source", session.user_id.trim())];
    if !config.utm_medium.trim().is_empty() {
        params.push(("utm_medium", config.utm_medium.trim()));
    }
    if !config.utm_campaign.trim().is_empty() {
        params.push(("utm_campaign", config.utm_campaign.trim()));
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut link = format!("{base}{separator}{query}");
    if let Some(fragment) = fragment {
        link.push('#');
        link.push_str(fragment);
    }
    Ok(link)
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    ["http://", "https://"]
        .iter()
        .any(|scheme| lower.starts_with(scheme) && lower.len() > scheme.len())
}
