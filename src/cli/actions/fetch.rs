use crate::{
    config::FetchConfig,
    users::HttpUserSource,
    widget::{Handles, MemoryElement, RequestState, TRIGGER_LABEL, UserFetchWidget, render},
};
use anyhow::{Context, Result, anyhow};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::info;

#[derive(Debug)]
pub struct Args {
    pub config: FetchConfig,
    pub output: Option<PathBuf>,
}

/// Fetch the users through the widget and emit what it rendered.
/// # Errors
/// Returns the error display's message if the fetch fails, or an error if the
/// output cannot be written.
pub async fn execute(args: Args) -> Result<()> {
    let html = fetch_html(args.config).await?;

    match args.output {
        Some(path) => write_page(&path, &html),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}")?;
            Ok(())
        }
    }
}

/// Runs one fetch against in-memory handles and returns the output
/// container markup.
/// # Errors
/// Returns the error display's message when the fetch fails.
pub async fn fetch_html(config: FetchConfig) -> Result<String> {
    let source = HttpUserSource::new(config)?;
    let handles = Handles {
        trigger: MemoryElement::with_text(TRIGGER_LABEL),
        output: MemoryElement::new(),
        loading: MemoryElement::hidden(),
        error: MemoryElement::hidden(),
    };

    let widget = UserFetchWidget::new(source, handles);
    widget.fetch_and_display_users().await;

    match widget.state() {
        RequestState::Success => Ok(widget.handles().output.html()),
        state => Err(anyhow!(widget.handles().error.text()).context(format!(
            "fetch from {} ended in state {state:?}",
            widget.source().config().endpoint
        ))),
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, render::page(html))
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote users page");
    Ok(())
}
