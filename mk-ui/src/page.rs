//! The hosting page: URL parameters and origin.

use mk_gateway::GatewayConfig;

/// A non-empty query-string parameter of the current page.
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name).filter(|v| !v.trim().is_empty())
}

/// True when the parameter is present and set to `1` or `true`.
pub fn flag(name: &str) -> bool {
    query_param(name).is_some_and(|v| is_truthy(&v))
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Gateway configuration for the page's own origin.
///
/// reqwest needs absolute URLs in the browser, so the base path is anchored
/// at `window.location.origin`.
pub fn gateway_config() -> GatewayConfig {
    match origin() {
        Some(origin) => GatewayConfig::for_origin(&origin),
        None => GatewayConfig::default(),
    }
}
