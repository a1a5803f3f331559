//! Browser helpers for the wizard: toast notifications and clipboard access.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlElement;

/// How long a toast stays on screen.
const TOAST_MS: u32 = 3000;

/// Displays a temporary notification at the bottom of the screen.
///
/// `description` is shown as a second, smaller line when non-empty. The
/// toast removes itself after a few seconds.
pub fn show_toast(title: &str, description: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(title));
                if !description.is_empty() {
                    if let Ok(detail) = document.create_element("div") {
                        detail.set_text_content(Some(description));
                        detail
                            .set_attribute("style", "font-size: 12px; opacity: 0.8; margin-top: 4px;")
                            .ok();
                        toast.append_child(&detail).ok();
                    }
                }
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Writes `text` to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Parses the column count input; non-numeric input counts as zero.
pub fn parse_column_count(input: &str) -> usize {
    input.trim().parse().unwrap_or(0)
}
