// =============================================================================
// models.rs — THE RECORDS OF RECORD
// =============================================================================
//
// Three plain immutable structs, one per pipeline stage:
//
//   BankListing  — one <option> from the listing page's bank select control
//   BankDetails  — what the detail-page extractors recovered for one bank
//   OutputRecord — the JSON line the consumer actually receives
//
// No inheritance, no polymorphism, no cleverness. Construct once, never
// mutate, serialize, move on.
// =============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Every record is categorized as a financial institution. It is a bank
/// register. We checked.
pub const FINANCIAL_CATEGORY: &str = "Financial";

/// One entry from the listing page's `<select name="bank">` control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankListing {
    /// The option's value attribute: the opaque token that addresses the
    /// bank's detail page.
    pub id: String,

    /// The option's visible text, used as the fallback display name when
    /// the detail page yields none.
    pub name: String,
}

/// Fields extracted from one bank's detail page.
///
/// `name` is the parenthetical display name and `full_name` the
/// organizational wrapper name (the "Open Joint-Stock Company ..." form).
/// Either may be absent when the page omits the corresponding segment.
/// `issue_date` stays in whatever format the registry printed; this system
/// does not parse calendars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDetails {
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub license_number: String,
    pub issue_date: String,
}

/// The normalized per-bank record emitted as one JSON line on stdout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRecord {
    pub name: String,
    pub full_name: Option<String>,
    pub license_number: String,
    pub issue_date: String,
    pub company_name: String,
    pub category: String,
    pub source_url: String,
    pub sample_date: DateTime<Utc>,
}

impl OutputRecord {
    /// Build the record for one bank, stamped with the retrieval time.
    ///
    /// When the detail page yielded no display name (absent or empty after
    /// normalization), the listing's visible text steps in. `company_name`
    /// always duplicates the resolved name.
    pub fn new(listing: &BankListing, details: BankDetails, source_url: String) -> Self {
        let name = details
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| listing.name.clone());

        OutputRecord {
            company_name: name.clone(),
            name,
            full_name: details.full_name,
            license_number: details.license_number,
            issue_date: details.issue_date,
            category: FINANCIAL_CATEGORY.to_string(),
            source_url,
            sample_date: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> BankListing {
        BankListing {
            id: "133".to_string(),
            name: "Listing Bank".to_string(),
        }
    }

    fn details(name: Option<&str>) -> BankDetails {
        BankDetails {
            name: name.map(str::to_string),
            full_name: Some("Open Joint-Stock Company \"Listing Bank\"".to_string()),
            license_number: "17".to_string(),
            issue_date: "27.10.1999".to_string(),
        }
    }

    #[test]
    fn test_detail_name_wins_when_present() {
        let record = OutputRecord::new(&listing(), details(Some("OJSC Bank")), "u".to_string());
        assert_eq!(record.name, "OJSC Bank");
        assert_eq!(record.company_name, "OJSC Bank");
    }

    #[test]
    fn test_listing_name_fallback_on_absent_name() {
        let record = OutputRecord::new(&listing(), details(None), "u".to_string());
        assert_eq!(record.name, "Listing Bank");
        assert_eq!(record.company_name, "Listing Bank");
    }

    #[test]
    fn test_listing_name_fallback_on_empty_name() {
        let record = OutputRecord::new(&listing(), details(Some("")), "u".to_string());
        assert_eq!(record.name, "Listing Bank");
    }

    #[test]
    fn test_category_is_financial() {
        let record = OutputRecord::new(&listing(), details(None), "u".to_string());
        assert_eq!(record.category, "Financial");
    }

    #[test]
    fn test_json_round_trip_preserves_every_field() {
        let record = OutputRecord::new(
            &listing(),
            details(Some("OJSC \"Paritetbank\"")),
            "http://registry.example/register.asp?bank=133".to_string(),
        );
        let json = serde_json::to_string(&record).expect("serializes");
        let decoded: OutputRecord = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_absent_full_name_survives_round_trip() {
        let mut d = details(Some("OJSC Bank"));
        d.full_name = None;
        let record = OutputRecord::new(&listing(), d, "u".to_string());
        let json = serde_json::to_string(&record).expect("serializes");
        let decoded: OutputRecord = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(decoded.full_name, None);
    }
}
