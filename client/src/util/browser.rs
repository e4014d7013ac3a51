//! Small window-level helpers: clock, locale time, alerts, query string.

#[cfg(feature = "csr")]
use wasm_bindgen::JsValue;

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now().max(0.0) as u64;
        now
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Current time formatted the way Korean users read it.
pub fn locale_timestamp() -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new_0()
            .to_locale_string("ko-KR", &JsValue::UNDEFINED)
            .into()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Show a blocking alert. Failures to show it are only logged.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        let shown = web_sys::window().map(|w| w.alert_with_message(message));
        if !matches!(shown, Some(Ok(()))) {
            log::warn!("could not show alert: {message}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// The page's `?query` string, empty when unavailable.
pub fn location_search() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Seed for the card placement RNG.
pub fn random_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let noise = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        now_ms() ^ (noise << 32)
    }
    #[cfg(not(feature = "csr"))]
    {
        0
    }
}

/// Best human-readable text for a thrown JS value.
#[cfg(feature = "csr")]
pub fn js_error_message(value: &JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
