use anyhow::Result;
use tracing::Level;
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt};

/// Initialize logging. Events go to stderr so stdout only carries the
/// rendered markup; `RUST_LOG` overrides the verbosity flag.
///
/// # Errors
///
/// Returns an error if the subscriber cannot be installed.
pub fn init(verbosity_level: Option<Level>) -> Result<()> {
    let verbosity_level = verbosity_level.unwrap_or(Level::ERROR);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let filter = EnvFilter::builder()
        .with_default_directive(verbosity_level.into())
        .from_env_lossy()
        .add_directive("hyper=error".parse()?)
        .add_directive("hyper_util=error".parse()?)
        .add_directive("reqwest=warn".parse()?);

    let subscriber = Registry::default().with(fmt_layer).with(filter);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}
