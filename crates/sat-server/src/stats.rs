//! Plain-text statistics report printed by `satwatch extract`.

use sat_core::RiskLevel;

use crate::service::ExtractionOutcome;

const RULE: &str = "============================================================";

/// Render counts per category and the risk breakdown of `outcome`.
#[must_use]
pub fn render(outcome: &ExtractionOutcome) -> String {
    let metadata = &outcome.report.bundle.metadata;
    let risk = &outcome.report.risk_summary;

    let mut lines = vec![
        RULE.to_string(),
        "EXTRACTION STATISTICS".to_string(),
        RULE.to_string(),
        format!(
            "Extracted at:        {}",
            metadata.extraction_timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        count_line("Active objects:", metadata.count_active),
        count_line("Debris objects:", metadata.count_debris),
        count_line("Conjunction events:", metadata.count_conjunctions),
        count_line("Total records:", metadata.count_total),
    ];

    if risk.total > 0 {
        lines.push(String::new());
        lines.push("Conjunction risk:".to_string());
        lines.extend(
            [
                (RiskLevel::High, "(PC > 1%)", risk.high_risk_count),
                (RiskLevel::Medium, "(PC > 0.1%)", risk.medium_risk_count),
                (RiskLevel::Low, "", risk.low_risk_count),
            ]
            .into_iter()
            .map(|(level, bound, count)| {
                format!("  {level:<6} {bound:<14} {:>8}", group_thousands(count))
            }),
        );
    }

    lines.push(String::new());
    lines.push(format!("Snapshot: {}", outcome.snapshot.dir.display()));
    lines.extend(outcome.snapshot.files.iter().map(|file| format!("  - {file}")));
    lines.push(RULE.to_string());
    lines.join("\n")
}

fn count_line(label: &str, count: usize) -> String {
    format!("{label:<20} {:>10}", group_thousands(count))
}

/// `1234567` -> `1,234,567`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use sat_core::{ExtractionReport, RawRecord, ResultBundle, filter};
    use sat_export::Snapshot;
    use std::path::PathBuf;

    #[test]
    fn groups_digits() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn report_lists_counts_and_risk() {
        let mut high = RawRecord::new();
        high.insert("PC".into(), "0.5".into());
        let bundle = ResultBundle::combine(
            Vec::new(),
            Vec::new(),
            vec![filter::conjunction(&high)],
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        );
        let outcome = ExtractionOutcome {
            report: ExtractionReport::from_bundle(bundle),
            snapshot: Snapshot {
                dir: PathBuf::from("out/critical_data_20240501_120000"),
                files: vec!["critical_cdm.csv".into(), "metadata.json".into()],
            },
        };

        let text = render(&outcome);
        assert!(text.contains("Extracted at:        2024-05-01 12:00:00 UTC"));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"Conjunction events:           1"));
        assert!(lines.contains(&"  high   (PC > 1%)             1"));
        assert!(lines.contains(&"  low                          0"));
        assert!(text.contains("Snapshot: out/critical_data_20240501_120000"));
        assert!(text.contains("  - metadata.json"));
    }

    #[test]
    fn report_without_conjunctions_skips_risk_section() {
        let bundle = ResultBundle::combine(
            vec![filter::active_object(&RawRecord::new())],
            Vec::new(),
            Vec::new(),
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        );
        let outcome = ExtractionOutcome {
            report: ExtractionReport::from_bundle(bundle),
            snapshot: Snapshot {
                dir: PathBuf::from("out/critical_data_20240501_120000"),
                files: vec!["active_tle.csv".into()],
            },
        };

        let text = render(&outcome);
        assert!(!text.contains("Conjunction risk:"));
        assert!(text.ends_with(RULE));
    }
}
