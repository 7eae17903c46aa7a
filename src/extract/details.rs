// =============================================================================
// details.rs — THE DETAIL PAGE FIELD EXTRACTORS
// =============================================================================
//
// A bank's detail page is tag soup. The name sits loose between the end of
// the search form and the next line break; the license data hides behind a
// fixed English label halfway down the page. Neither lives in an element we
// could query for, so both are located by anchored patterns instead of
// structural traversal.
//
// The anchors are named constants and the tolerances are part of the
// contract, documented on each pattern. Swapping a pattern for a structural
// parser later must not change what callers see.
//
// Each extractor front-runs its pattern with a memchr scan for the anchor
// bytes. If the anchor is nowhere in the page, the regex never runs.
// =============================================================================

use std::sync::LazyLock;

use memchr::memmem;
use regex::Regex;
use scraper::{Html, Selector};
use tracing::warn;

use crate::error::ExtractError;
use crate::extract::normalize::strip_spare;
use crate::models::BankDetails;

/// Start anchor for the name block: the close tag of the bank search form.
pub const FORM_CLOSE_ANCHOR: &str = "</form>";

/// End anchor for the name block.
pub const LINE_BREAK_ANCHOR: &str = "<br>";

/// Label that introduces the license number/date sentence.
pub const LICENSE_LABEL: &str = "Banking License";

/// Class attribute of the operations list on the detail page.
const OPERATIONS_LIST_CLASS: &str = "withtit";

/// The name block pattern: `</form> TEXT (PARENTHETICAL)? <br>`.
///
/// Tolerances, all contractual:
/// - the match spans line breaks (`(?s)`); the name may sit lines away from
///   either anchor
/// - TEXT may carry bold tags anywhere; they are removed by normalization
/// - the parenthetical is optional, need not be bold-tagged, and may be
///   separated from the line break by arbitrary whitespace
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?s){form}(.+?)(\(.*?)?{br}",
        form = regex::escape(FORM_CLOSE_ANCHOR),
        br = regex::escape(LINE_BREAK_ANCHOR),
    ))
    .expect("name pattern is valid")
});

/// The license sentence pattern: the label, a bold-wrapped `No. NNN` token
/// (word characters only), a comma, "was issued on", then a bold-wrapped
/// date string. Whitespace between the pieces is arbitrary; the date is
/// captured verbatim and never parsed into a calendar date.
static LICENSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\s+{label}\s*<b>\s*No\.\s+(\w*?)</b>\s*,\s*was\s+issued\s+on\s*<b>(.*?)</b>",
        label = regex::escape(LICENSE_LABEL),
    ))
    .expect("license pattern is valid")
});

static UL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul").expect("ul selector is valid CSS"));

static LI: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("li selector is valid CSS"));

/// Extract the (organizational name, display name) pair from a detail page.
///
/// Returns the normalized text before the parenthetical as the
/// organizational `full_name` and the parenthetical's content as the
/// display `name`. A group that did not participate (or normalized to
/// nothing) is `None`. A page where the whole pattern fails is
/// `Err(NameNotFound)`, which is a different statement than "the page
/// matched and the field was blank".
pub fn extract_name(page: &str) -> Result<(Option<String>, Option<String>), ExtractError> {
    if memmem::find(page.as_bytes(), FORM_CLOSE_ANCHOR.as_bytes()).is_none() {
        return Err(ExtractError::NameNotFound);
    }

    let captures = NAME_PATTERN
        .captures(page)
        .ok_or(ExtractError::NameNotFound)?;

    let full_name = captures
        .get(1)
        .map(|m| strip_spare(m.as_str()))
        .filter(|s| !s.is_empty());
    let name = captures
        .get(2)
        .map(|m| strip_spare(m.as_str()))
        .filter(|s| !s.is_empty());

    Ok((full_name, name))
}

/// Extract the (license number, issue date) pair from a detail page.
///
/// Both values come back normalized but otherwise raw; `01.01.2000` stays
/// the string `01.01.2000`.
pub fn extract_license(page: &str) -> Result<(String, String), ExtractError> {
    if memmem::find(page.as_bytes(), LICENSE_LABEL.as_bytes()).is_none() {
        return Err(ExtractError::LicenseNotFound);
    }

    let captures = LICENSE_PATTERN
        .captures(page)
        .ok_or(ExtractError::LicenseNotFound)?;

    let number = strip_spare(captures.get(1).map_or("", |m| m.as_str()));
    let issue_date = strip_spare(captures.get(2).map_or("", |m| m.as_str()));
    Ok((number, issue_date))
}

/// Extract the full field set for one bank.
///
/// The license block is required; its absence fails the page. A missing
/// name block is logged and tolerated, leaving both name fields empty so
/// the caller can fall back to the listing's display name.
pub fn extract_details(page: &str) -> Result<BankDetails, ExtractError> {
    let (full_name, name) = match extract_name(page) {
        Ok(pair) => pair,
        Err(err) => {
            warn!(error = %err, "name block missing from detail page, listing name will be used");
            (None, None)
        }
    };

    let (license_number, issue_date) = extract_license(page)?;

    Ok(BankDetails {
        name,
        full_name,
        license_number,
        issue_date,
    })
}

/// Extract the permitted-operations list from a detail page.
///
/// Finds the first `<ul>` whose class attribute is exactly
/// "withtit" and returns the normalized text of each item. Not part of the
/// emitted record; kept as an independent capability of the extraction
/// layer.
pub fn extract_operations(page: &str) -> Vec<String> {
    let document = Html::parse_document(page);

    let Some(list) = document
        .select(&UL)
        .find(|ul| ul.value().attr("class") == Some(OPERATIONS_LIST_CLASS))
    else {
        return Vec::new();
    };

    list.select(&LI)
        .map(|li| strip_spare(&li.text().collect::<String>()))
        .collect()
}
