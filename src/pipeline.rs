// =============================================================================
// pipeline.rs — THE REGISTER WALK
// =============================================================================
//
// The whole run, start to finish: fetch the listing page, read the bank
// roster out of it, then visit every bank's detail page in listing order
// and publish a record for each. Strictly sequential; one request in
// flight at a time; output order is listing order by construction.
//
// Failure policy, per the error taxonomy:
// - a fetch failure anywhere aborts the run (and the listing fetch fails
//   before any detail fetch is attempted)
// - an extraction failure skips that one bank and the walk continues
// =============================================================================

use std::io::Write;

use tracing::{info, warn};

use crate::config::Config;
use crate::extract::{extract_details, extract_listing};
use crate::fetch::Fetcher;
use crate::models::OutputRecord;
use crate::publisher::RecordPublisher;

/// What the walk ended up doing, for the final log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub listed: usize,
    pub emitted: u64,
    pub skipped: u64,
}

/// Run the full pipeline against the configured registry.
pub async fn run<W: Write>(
    config: &Config,
    fetcher: &Fetcher,
    publisher: &mut RecordPublisher<W>,
) -> anyhow::Result<RunStats> {
    let start_url = config.start_url();
    info!(url = %start_url, "fetching register listing page");

    let listing_page = fetcher.fetch_page(&start_url).await?;
    let listing = extract_listing(&listing_page);

    if listing.is_empty() {
        warn!(url = %start_url, "no bank select control found; the register yields zero records");
    } else {
        info!(banks = listing.len(), "register listing extracted");
    }

    let mut skipped = 0u64;

    for bank in &listing {
        let detail_url = config.detail_url(&bank.id);
        let page = fetcher.fetch_page(&detail_url).await?;

        match extract_details(&page) {
            Ok(details) => {
                let record = OutputRecord::new(bank, details, detail_url);
                publisher.publish(&record)?;
            }
            Err(err) => {
                skipped += 1;
                warn!(
                    bank_id = %bank.id,
                    bank = %bank.name,
                    url = %detail_url,
                    error = %err,
                    "skipping bank, required fields could not be extracted"
                );
            }
        }
    }

    Ok(RunStats {
        listed: listing.len(),
        emitted: publisher.emitted(),
        skipped,
    })
}
