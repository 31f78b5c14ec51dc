//! Clipboard capability adapter.
//!
//! The binder only depends on the success/failure signal of a text write,
//! so the capability is a trait; tests substitute a recording fake and
//! production uses the Web Clipboard API via `navigator.clipboard`.

use clipbind_core::CopyError;
use futures::FutureExt;
use futures::future::LocalBoxFuture;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Something that can write text to the clipboard.
pub trait ClipboardWriter {
    fn write_text(&self, payload: String) -> LocalBoxFuture<'static, Result<(), CopyError>>;
}

/// Production writer over `navigator.clipboard.writeText`.
pub struct NavigatorClipboard;

impl ClipboardWriter for NavigatorClipboard {
    fn write_text(&self, payload: String) -> LocalBoxFuture<'static, Result<(), CopyError>> {
        async move {
            let window = web_sys::window().ok_or(CopyError::ClipboardUnavailable)?;
            let clipboard = window.navigator().clipboard();
            JsFuture::from(clipboard.write_text(&payload))
                .await
                .map(|_| ())
                .map_err(|err| CopyError::WriteRejected(describe_js_error(&err)))
        }
        .boxed_local()
    }
}

fn describe_js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
