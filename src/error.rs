// =============================================================================
// error.rs — WAYS THE REGISTER CAN DISAPPOINT US
// =============================================================================
//
// Two failure families, two fates:
//
// - FetchError: the registry would not give us a page. Fatal. The run stops
//   and the error carries the URL plus whatever body the server sent, so a
//   human can see what the registry was serving instead of the register.
// - ExtractError: a page arrived but a required pattern did not match.
//   Scoped to the one bank whose page is malformed; the pipeline logs it
//   and moves on to the next bank.
//
// An empty listing is neither of these. No select control on the listing
// page means zero records, not an error.
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain a page from the registry. Always fatal to the run.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response (connect failure,
    /// timeout, body read error).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status. The body is kept
    /// verbatim; registries tend to explain themselves in the error page.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },
}

/// A required extraction pattern did not match a detail page.
///
/// Distinct variants per field group so callers can tell "the name block is
/// gone" (recoverable via the listing-name fallback) from "the license block
/// is gone" (the record cannot be built).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No text matched between the form-close anchor and the line break.
    #[error("no bank name block found after the form close anchor")]
    NameNotFound,

    /// The "Banking License" label and its number/date pair did not match.
    #[error("no banking license block found")]
    LicenseNotFound,
}
