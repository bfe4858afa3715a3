//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The ECharts registry lives in `assets/js/echarts-bridge.js` and is
//! evaluated once at global scope. [`EchartsSurface`] drives one registry
//! entry per container id; the registry polls until both the library and
//! the container element exist before creating the chart.

use log::warn;
use mk_dashboard::{ChartSurface, RenderError};
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

static ECHARTS_BRIDGE_JS: &str = include_str!("../assets/js/echarts-bridge.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('chart bridge call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Install the chart registry (and start loading ECharts if the page did not
/// include it). Safe to call repeatedly.
pub fn init_echarts() {
    let _ = js_sys::eval(ECHARTS_BRIDGE_JS);
}

/// A Rust string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

/// One ECharts instance, addressed by its container id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchartsSurface {
    container_id: String,
}

impl EchartsSurface {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.to_string(),
        }
    }

    fn call(&self, function: &str, extra: Option<&str>) {
        let id = js_string(&self.container_id);
        match extra {
            Some(arg) => call_js(&format!("window.{function}({id}, {arg});")),
            None => call_js(&format!("window.{function}({id});")),
        }
    }
}

impl ChartSurface for EchartsSurface {
    fn init(&mut self) -> Result<(), RenderError> {
        init_echarts();
        self.call("__mkChartInit", None);
        Ok(())
    }

    fn set_option(&mut self, option: &Value) -> Result<(), RenderError> {
        let json = serde_json::to_string(option)
            .map_err(|e| RenderError::Surface(format!("option serialization failed: {e}")))?;
        self.call("__mkChartSetOption", Some(&js_string(&json)));
        Ok(())
    }

    fn resize(&mut self) {
        self.call("__mkChartResize", None);
    }

    fn dispose(&mut self) {
        self.call("__mkChartDispose", None);
    }
}

/// A `resize` listener on `window`, removed again on drop.
pub struct ResizeListener {
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn new(on_resize: impl FnMut() + 'static) -> Option<Self> {
        let callback = Closure::<dyn FnMut()>::new(on_resize);
        let window = web_sys::window()?;
        if let Err(e) = window
            .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
        {
            warn!("could not listen for window resize: {e:?}");
            return None;
        }
        Some(Self { callback })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Resolve after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
