//! Browser entry point.
//!
//! Looks up the four widget elements by id, binds a [`UserFetchWidget`] to
//! them and wires the trigger's click event. Activation fails if any element
//! is missing.

mod client;
mod dom;

pub use client::BrowserUserSource;

use crate::{
    config::FetchConfig,
    widget::{Handles, UserFetchWidget},
};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::{Document, HtmlElement};

pub const TRIGGER_ID: &str = "fetchUsers";
pub const OUTPUT_ID: &str = "userList";
pub const LOADING_ID: &str = "loading";
pub const ERROR_ID: &str = "error";

/// Mounts the widget on page load.
///
/// # Errors
/// Returns a JS error if the document or one of the elements is missing.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_logging();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let handles = Handles {
        trigger: element_by_id(&document, TRIGGER_ID)?,
        output: element_by_id(&document, OUTPUT_ID)?,
        loading: element_by_id(&document, LOADING_ID)?,
        error: element_by_id(&document, ERROR_ID)?,
    };
    let trigger = handles.trigger.clone();

    let source = BrowserUserSource::new(FetchConfig::load());
    let widget = Rc::new(UserFetchWidget::new(source, handles));

    let on_click = Closure::<dyn FnMut()>::new(move || {
        let widget = Rc::clone(&widget);
        wasm_bindgen_futures::spawn_local(async move {
            widget.fetch_and_display_users().await;
        });
    });
    trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    on_click.forget();

    Ok(())
}

/// Routes panics and `tracing` events to the browser console.
fn init_logging() {
    console_error_panic_hook::set_once();
    // A second mount on the same page keeps the existing subscriber.
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HTML element")))
}
