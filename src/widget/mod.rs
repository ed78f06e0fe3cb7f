//! The user list widget.
//!
//! One operation, [`UserFetchWidget::fetch_and_display_users`], drives the
//! linear lifecycle `Idle -> Loading -> {Success | Failed}`. At any time the
//! handles show exactly one of: empty, loading, populated, error.

mod element;
pub mod render;

pub use element::{Element, ElementState, MemoryElement};

use crate::users::{FetchError, User, UserSource};
use std::cell::Cell;
use tracing::{debug, error, info, warn};

pub const TRIGGER_LABEL: &str = "Fetch Users";
pub const LOADING_LABEL: &str = "Loading...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// The four UI handles the widget drives.
#[derive(Clone, Debug)]
pub struct Handles<E> {
    pub trigger: E,
    pub output: E,
    pub loading: E,
    pub error: E,
}

pub struct UserFetchWidget<S, E> {
    source: S,
    handles: Handles<E>,
    state: Cell<RequestState>,
}

impl<S: UserSource, E: Element> UserFetchWidget<S, E> {
    /// Binds the widget to its source and handles and puts the view in the
    /// idle state: trigger enabled, indicator and error display hidden.
    pub fn new(source: S, handles: Handles<E>) -> Self {
        let widget = Self {
            source,
            handles,
            state: Cell::new(RequestState::Idle),
        };
        widget.show_loading(false);
        widget.handles.error.set_hidden(true);
        widget
    }

    #[must_use]
    pub fn state(&self) -> RequestState {
        self.state.get()
    }

    pub fn handles(&self) -> &Handles<E> {
        &self.handles
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches the user list and renders the outcome.
    ///
    /// Failures never propagate: they are logged and written to the error
    /// display. A call made while a request is in flight is ignored.
    pub async fn fetch_and_display_users(&self) {
        if self.state.get() == RequestState::Loading {
            warn!("fetch already in flight, ignoring trigger");
            return;
        }

        self.clear_results();
        self.show_loading(true);
        self.state.set(RequestState::Loading);
        debug!("fetching users");

        let result = self.source.fetch_users().await;

        self.show_loading(false);

        let state = match result {
            Ok(users) => {
                self.display_users(&users);
                RequestState::Success
            }
            Err(err) => {
                self.handle_error(&err);
                RequestState::Failed
            }
        };
        self.state.set(state);
    }

    fn display_users(&self, users: &[User]) {
        self.handles.output.set_html(&render::user_list(users));
        info!(count = users.len(), "rendered users");
    }

    fn handle_error(&self, err: &FetchError) {
        error!(error = %err, "fetch error");
        self.handles.error.set_text(&err.user_message());
        self.handles.error.set_hidden(false);
    }

    fn show_loading(&self, show: bool) {
        let Handles {
            trigger, loading, ..
        } = &self.handles;

        loading.set_hidden(!show);
        trigger.set_disabled(show);
        trigger.set_text(if show { LOADING_LABEL } else { TRIGGER_LABEL });
    }

    fn clear_results(&self) {
        self.handles.output.set_html("");
        self.handles.error.set_hidden(true);
    }
}
