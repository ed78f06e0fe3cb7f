#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let action = userfetch::cli::start()?;

    action.execute().await?;

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
