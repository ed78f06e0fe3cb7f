use crate::widget::Element;
use wasm_bindgen::JsCast;
use web_sys::{HtmlButtonElement, HtmlElement};

/// CSS class toggled to show or hide an element.
const HIDDEN_CLASS: &str = "hidden";

impl Element for HtmlElement {
    fn set_html(&self, html: &str) {
        self.set_inner_html(html);
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_hidden(&self, hidden: bool) {
        let classes = self.class_list();
        let result = if hidden {
            classes.add_1(HIDDEN_CLASS)
        } else {
            classes.remove_1(HIDDEN_CLASS)
        };
        if result.is_err() {
            tracing::warn!(id = %self.id(), "failed to toggle hidden class");
        }
    }

    fn set_disabled(&self, disabled: bool) {
        let Some(button) = self.dyn_ref::<HtmlButtonElement>() else {
            let result = if disabled {
                self.set_attribute("aria-disabled", "true")
            } else {
                self.remove_attribute("aria-disabled")
            };
            if result.is_err() {
                tracing::warn!(id = %self.id(), "failed to toggle aria-disabled");
            }
            return;
        };
        button.set_disabled(disabled);
    }
}
