use eyre::Context;
use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use youtube_uploads::{Config, YouTubeClient, config};

const EXAMPLE_HANDLE: &str = "MrBeast";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // stdout is reserved for the playlist ID
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    config::load_env_files();
    let config = Config::from_env().context("load configuration")?;
    let yt = YouTubeClient::from_config(&config).context("build YouTube client")?;

    let playlist_id = yt
        .resolve_playlist_id(EXAMPLE_HANDLE)
        .await
        .with_context(|| format!("resolve uploads playlist of '{EXAMPLE_HANDLE}'"))?;

    println!("{playlist_id}");
    Ok(())
}
