//! Measuring the board for card placement.

use board::entry::Viewport;

/// Measure the board container and the window.
///
/// `container` is the board's root element; `None` (not mounted yet) falls
/// back to the window width.
#[cfg(feature = "csr")]
pub fn measure(container: Option<&web_sys::HtmlElement>) -> Viewport {
    let window = web_sys::window();
    let read = |value: Option<Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>>| {
        value.and_then(Result::ok).and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    Viewport {
        container_width: container.map_or(0.0, |el| f64::from(el.offset_width())),
        window_width: read(window.as_ref().map(web_sys::Window::inner_width)),
        window_height: read(window.as_ref().map(web_sys::Window::inner_height)),
    }
}

/// Native builds have no layout; everything measures zero.
#[cfg(not(feature = "csr"))]
pub fn measure<T>(container: Option<&T>) -> Viewport {
    let _ = container;
    Viewport { container_width: 0.0, window_width: 0.0, window_height: 0.0 }
}
