//! UI handle abstraction.
//!
//! The widget mutates its four handles only through [`Element`], mirroring the
//! handful of DOM operations it needs. Methods take `&self` because DOM
//! handles are shared references with interior mutability.

use std::{cell::RefCell, rc::Rc};

pub trait Element {
    /// Replaces the element's markup.
    fn set_html(&self, html: &str);
    /// Replaces the element's text content; the text is never parsed as markup.
    fn set_text(&self, text: &str);
    fn set_hidden(&self, hidden: bool);
    fn set_disabled(&self, disabled: bool);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ElementState {
    pub html: String,
    pub text: String,
    pub hidden: bool,
    pub disabled: bool,
}

/// In-memory element. Clones share the same state, so a caller can keep a
/// clone to inspect what the widget rendered.
#[derive(Clone, Debug, Default)]
pub struct MemoryElement {
    state: Rc<RefCell<ElementState>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Element that starts hidden, like a loading indicator or error display.
    #[must_use]
    pub fn hidden() -> Self {
        let element = Self::default();
        element.set_hidden(true);
        element
    }

    /// Element that starts with the given text, like a labelled button.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let element = Self::default();
        element.set_text(text);
        element
    }

    #[must_use]
    pub fn html(&self) -> String {
        self.state.borrow().html.clone()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.state.borrow().text.clone()
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state.borrow().hidden
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    #[must_use]
    pub fn snapshot(&self) -> ElementState {
        self.state.borrow().clone()
    }
}

impl Element for MemoryElement {
    fn set_html(&self, html: &str) {
        let mut state = self.state.borrow_mut();
        state.html = html.to_string();
        state.text.clear();
    }

    fn set_text(&self, text: &str) {
        let mut state = self.state.borrow_mut();
        state.text = text.to_string();
        state.html.clear();
    }

    fn set_hidden(&self, hidden: bool) {
        self.state.borrow_mut().hidden = hidden;
    }

    fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }
}
