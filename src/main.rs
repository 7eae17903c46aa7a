// =============================================================================
// main.rs — BANK REGISTER ENGINE
// =============================================================================
//
// Wire-up only: logging, configuration, client, pipeline, summary.
//
// Stdout is reserved for the records, so the tracing subscriber writes to
// stderr. Piping stdout somewhere useful and stderr somewhere visible is
// the intended mode of operation.
// =============================================================================

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use bank_register_engine::config::Config;
use bank_register_engine::fetch::Fetcher;
use bank_register_engine::pipeline;
use bank_register_engine::publisher;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let config = Config::from_env()?;
    info!(
        register_url = %config.register_url,
        start_bank_id = %config.start_bank_id,
        "bank register engine starting"
    );

    let fetcher = Fetcher::new(&config)?;
    let mut publisher = publisher::stdout_publisher();

    let stats = pipeline::run(&config, &fetcher, &mut publisher).await?;

    info!(
        listed = stats.listed,
        emitted = stats.emitted,
        skipped = stats.skipped,
        "run complete"
    );
    Ok(())
}
