// =============================================================================
// publisher.rs — THE STDOUT TELLER WINDOW
// =============================================================================
//
// Records leave the engine here, one JSON object per line, in exactly the
// order they are handed over. The sink is any Write implementation: stdout
// in production, a byte buffer in tests. Each line is flushed as it is
// written so records already emitted survive a later mid-run failure.
// =============================================================================

use std::io::{self, Write};

use anyhow::Context;
use tracing::debug;

use crate::models::OutputRecord;

pub struct RecordPublisher<W: Write> {
    sink: W,
    emitted: u64,
}

impl<W: Write> RecordPublisher<W> {
    pub fn new(sink: W) -> Self {
        RecordPublisher { sink, emitted: 0 }
    }

    /// Serialize one record and write it as a line.
    pub fn publish(&mut self, record: &OutputRecord) -> anyhow::Result<()> {
        let json = serde_json::to_string(record).context("failed to serialize record")?;
        writeln!(self.sink, "{json}").context("failed to write record")?;
        self.sink.flush().context("failed to flush record")?;

        self.emitted += 1;
        debug!(company = %record.company_name, emitted = self.emitted, "record emitted");
        Ok(())
    }

    /// How many records have been written so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Hand back the sink. Used by tests to inspect what was written.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

/// The production publisher: JSON lines on stdout.
pub fn stdout_publisher() -> RecordPublisher<io::Stdout> {
    RecordPublisher::new(io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankDetails, BankListing, OutputRecord};

    fn record(id: &str, name: &str) -> OutputRecord {
        let listing = BankListing {
            id: id.to_string(),
            name: name.to_string(),
        };
        let details = BankDetails {
            name: Some(name.to_string()),
            full_name: None,
            license_number: "1".to_string(),
            issue_date: "01.01.2000".to_string(),
        };
        OutputRecord::new(&listing, details, format!("http://r.example/?bank={id}"))
    }

    #[test]
    fn test_emits_one_json_line_per_record_in_order() {
        let mut publisher = RecordPublisher::new(Vec::new());
        for (id, name) in [("1", "Alpha"), ("2", "Beta"), ("3", "Gamma")] {
            publisher.publish(&record(id, name)).expect("publishes");
        }
        assert_eq!(publisher.emitted(), 3);

        let output = String::from_utf8(publisher.into_inner()).expect("utf8");
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        let names: Vec<String> = lines
            .iter()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).expect("valid JSON");
                value["company_name"].as_str().expect("has company_name").to_string()
            })
            .collect();
        assert_eq!(names, ["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_emitted_lines_carry_the_full_field_set() {
        let mut publisher = RecordPublisher::new(Vec::new());
        publisher.publish(&record("7", "Delta")).expect("publishes");

        let output = String::from_utf8(publisher.into_inner()).expect("utf8");
        let value: serde_json::Value = serde_json::from_str(output.trim()).expect("valid JSON");
        for field in [
            "name",
            "full_name",
            "license_number",
            "issue_date",
            "company_name",
            "category",
            "source_url",
            "sample_date",
        ] {
            assert!(value.get(field).is_some(), "missing field {field}");
        }
        assert_eq!(value["category"], "Financial");
        assert_eq!(value["source_url"], "http://r.example/?bank=7");
    }
}
