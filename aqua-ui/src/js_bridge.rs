//! Browser interop via `js_sys` and `web_sys`.
//!
//! The only asynchronous work in the dashboard is the artificial prediction
//! delay, implemented here as a `setTimeout` wrapped in a `Promise` and
//! awaited through `wasm_bindgen_futures`, so the render thread is never
//! blocked.

use aqua_core::prediction::Timer;
use std::time::Duration;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Resolve after `duration` using `window.setTimeout`.
///
/// If there is no `window` (or scheduling fails) the promise resolves
/// immediately rather than hanging the caller.
pub async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        });
        if !matches!(scheduled, Some(Ok(_))) {
            log::warn!("setTimeout unavailable, resolving {}ms delay immediately", millis);
            let _ = resolve.call0(&JsValue::UNDEFINED);
        }
    });
    if let Err(e) = JsFuture::from(promise).await {
        log::warn!("timer promise rejected: {:?}", e);
    }
}

/// [`Timer`] backed by the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebTimer;

impl Timer for WebTimer {
    async fn sleep(&self, duration: Duration) {
        sleep(duration).await
    }
}

/// Write a line to the browser console.
pub fn console_log(message: &str) {
    web_sys::console::log_1(&message.into());
}
