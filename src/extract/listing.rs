// =============================================================================
// listing.rs — THE BANK ROSTER READER
// =============================================================================
//
// The listing page carries a <select name="bank"> control whose options
// enumerate every registered bank: the value attribute addresses the bank's
// detail page, the visible text is its display name. This part of the page
// is real HTML, so it gets a real HTML parser.
//
// A page without the control is not an error. It means the registry moved
// or changed, and the answer to "which banks?" is simply "none found".
// =============================================================================

use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::debug;

use crate::models::BankListing;

/// The control that enumerates the banks. The name attribute is the literal
/// token the registry has used since the page was built.
static BANK_SELECT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"select[name="bank"]"#).expect("bank select selector is valid CSS")
});

static OPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("option").expect("option selector is valid CSS"));

/// Extract every (id, display name) pair from the listing page's bank
/// select control, in document order.
///
/// Pure function of the page text. Returns an empty Vec when no
/// `select[name="bank"]` exists. An option missing its value attribute
/// still produces a pair, with an empty id, so the result always has
/// exactly one entry per option.
pub fn extract_listing(page: &str) -> Vec<BankListing> {
    let document = Html::parse_document(page);

    let Some(select) = document.select(&BANK_SELECT).next() else {
        debug!("no bank select control on the listing page");
        return Vec::new();
    };

    select
        .select(&OPTION)
        .map(|option| BankListing {
            id: option.value().attr("value").unwrap_or_default().to_string(),
            name: option.text().collect::<String>().trim().to_string(),
        })
        .collect()
}
