//! Dashboard State
//!
//! Reactive state management using Leptos signals, plus the pure record
//! preparation logic the view renders from.

use chrono::NaiveDateTime;
use leptos::*;
use std::collections::HashSet;

/// Label shown when a record carries no usable severity
pub const UNKNOWN_SEVERITY: &str = "Unknown";

/// Summary length at which the table collapses a row
pub const SUMMARY_PREVIEW_CHARS: usize = 150;

/// Sentinel the feed uses for records without a publish date
const PUBLISHED_UNKNOWN: &str = "N/A";

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// CVE ids whose table rows are currently expanded
    pub expanded: RwSignal<HashSet<String>>,
}

/// A single CVE entry as served by the feed endpoint
///
/// `summary` and `severity` are sparse upstream; both deserialize leniently
/// so one incomplete record cannot fail the whole feed.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CveRecord {
    pub id: String,
    #[serde(default)]
    pub summary: String,
    pub published: String,
    #[serde(default)]
    pub severity: Option<String>,
}

impl CveRecord {
    /// Whether the feed marked the publish date as unknown
    pub fn published_unknown(&self) -> bool {
        self.published == PUBLISHED_UNKNOWN
    }

    /// Parse the publish date, if the feed supplied a usable one
    pub fn published_at(&self) -> Option<NaiveDateTime> {
        parse_published(&self.published)
    }

    /// Display label for the severity column and the pie chart
    pub fn severity_label(&self) -> &str {
        match self.severity.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => UNKNOWN_SEVERITY,
        }
    }

    /// External detail-page link for this entry
    pub fn detail_url(&self) -> String {
        format!("https://nvd.nist.gov/vuln/detail/{}", self.id)
    }
}

/// Parse a feed publish date
///
/// The NVD feed emits fractional-second timestamps without an offset;
/// offset-carrying and date-only forms are accepted as well.
fn parse_published(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Derived view of one fetched feed snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct CveReport {
    /// Records with a known publish date, most recent first
    pub records: Vec<CveRecord>,
    /// Severity label and count, ordered by first appearance in `records`
    pub severity_counts: Vec<(String, usize)>,
}

impl CveReport {
    /// Build the report for a fetched batch: drop records with an unknown
    /// publish date, sort the rest most-recent-first (stable on ties), and
    /// tally severities in display order.
    pub fn from_records(records: Vec<CveRecord>) -> Self {
        let mut records: Vec<CveRecord> = records
            .into_iter()
            .filter(|r| !r.published_unknown())
            .collect();

        // Unparseable dates order after every parseable one; the sort is
        // stable, so fetch order breaks ties.
        records.sort_by_key(|r| std::cmp::Reverse(r.published_at()));

        let mut severity_counts: Vec<(String, usize)> = Vec::new();
        for record in &records {
            let label = record.severity_label();
            match severity_counts.iter_mut().find(|entry| entry.0 == label) {
                Some(entry) => entry.1 += 1,
                None => severity_counts.push((label.to_string(), 1)),
            }
        }

        Self {
            records,
            severity_counts,
        }
    }

    /// Whether the report has nothing to display
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collapsed form of a summary, if it is long enough to need one
///
/// Summaries shorter than [`SUMMARY_PREVIEW_CHARS`] characters render whole
/// with no toggle; anything else collapses to the first 150 characters
/// followed by "...".
pub fn summary_preview(summary: &str) -> Option<String> {
    if summary.chars().count() < SUMMARY_PREVIEW_CHARS {
        return None;
    }
    let mut preview: String = summary.chars().take(SUMMARY_PREVIEW_CHARS).collect();
    preview.push_str("...");
    Some(preview)
}

/// Provide dashboard state to the component tree
pub fn provide_dashboard_state() {
    provide_context(DashboardState {
        expanded: create_rw_signal(HashSet::new()),
    });
}

impl DashboardState {
    /// Whether the row for the given CVE id is currently expanded
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.with(|set| set.contains(id))
    }

    /// Flip the expansion flag for the row with the given CVE id
    pub fn toggle_row(&self, id: &str) {
        self.expanded.update(|set| toggle_membership(set, id));
    }
}

/// Flip `id` in and out of the expanded set
fn toggle_membership(set: &mut HashSet<String>, id: &str) {
    if !set.remove(id) {
        set.insert(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, published: &str, severity: Option<&str>) -> CveRecord {
        CveRecord {
            id: id.to_string(),
            summary: String::new(),
            published: published.to_string(),
            severity: severity.map(str::to_string),
        }
    }

    fn ids(report: &CveReport) -> Vec<&str> {
        report.records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filters_unknown_publish_dates() {
        let report = CveReport::from_records(vec![
            record("CVE-2025-0001", "2025-08-01T12:00:00.000", Some("HIGH")),
            record("CVE-2025-0002", "N/A", Some("LOW")),
        ]);

        assert_eq!(ids(&report), vec!["CVE-2025-0001"]);
        assert!(report.records.iter().all(|r| !r.published_unknown()));
    }

    #[test]
    fn test_single_na_record_yields_empty_report() {
        let report = CveReport::from_records(vec![record("CVE-2025-0002", "N/A", Some("LOW"))]);

        assert!(report.is_empty());
        assert!(report.severity_counts.is_empty());
    }

    #[test]
    fn test_sorts_most_recent_first() {
        let report = CveReport::from_records(vec![
            record("old", "2025-07-30T08:00:00.000", None),
            record("new", "2025-08-02T08:00:00.000", None),
            record("mid", "2025-08-01T08:00:00.000", None),
        ]);

        assert_eq!(ids(&report), vec!["new", "mid", "old"]);

        let dates: Vec<_> = report.records.iter().map(|r| r.published_at()).collect();
        assert!(dates.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_tie_order_is_stable() {
        let report = CveReport::from_records(vec![
            record("first", "2025-08-01T08:00:00.000", None),
            record("second", "2025-08-01T08:00:00.000", None),
        ]);

        assert_eq!(ids(&report), vec!["first", "second"]);
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let report = CveReport::from_records(vec![
            record("garbled", "yesterday-ish", None),
            record("dated", "2025-08-01T08:00:00.000", None),
        ]);

        assert_eq!(ids(&report), vec!["dated", "garbled"]);
    }

    #[test]
    fn test_severity_counts_sum_to_record_count() {
        let report = CveReport::from_records(vec![
            record("a", "2025-08-01T08:00:00.000", Some("HIGH")),
            record("b", "2025-08-02T08:00:00.000", Some("CRITICAL")),
            record("c", "2025-08-03T08:00:00.000", None),
            record("d", "N/A", Some("LOW")),
        ]);

        let total: usize = report.severity_counts.iter().map(|(_, n)| n).sum();
        assert_eq!(total, report.records.len());
    }

    #[test]
    fn test_counts_follow_first_appearance_order() {
        // Sorted order is HIGH, CRITICAL, HIGH; the HIGH bucket stays first.
        let report = CveReport::from_records(vec![
            record("a", "2025-08-03T08:00:00.000", Some("HIGH")),
            record("b", "2025-08-02T08:00:00.000", Some("CRITICAL")),
            record("c", "2025-08-01T08:00:00.000", Some("HIGH")),
        ]);

        assert_eq!(
            report.severity_counts,
            vec![("HIGH".to_string(), 2), ("CRITICAL".to_string(), 1)]
        );
    }

    #[test]
    fn test_two_high_records_share_one_bucket() {
        let report = CveReport::from_records(vec![
            record("a", "2025-08-01T08:00:00.000", Some("HIGH")),
            record("b", "2025-08-02T08:00:00.000", Some("HIGH")),
        ]);

        assert_eq!(report.severity_counts, vec![("HIGH".to_string(), 2)]);
    }

    #[test]
    fn test_missing_severity_counts_as_unknown() {
        assert_eq!(record("a", "N/A", None).severity_label(), "Unknown");
        assert_eq!(record("a", "N/A", Some("")).severity_label(), "Unknown");
        assert_eq!(record("a", "N/A", Some("HIGH")).severity_label(), "HIGH");

        let report =
            CveReport::from_records(vec![record("a", "2025-08-01T08:00:00.000", None)]);
        assert_eq!(report.severity_counts, vec![("Unknown".to_string(), 1)]);
    }

    #[test]
    fn test_parse_published_formats() {
        assert!(parse_published("2025-08-01T14:30:00.000").is_some());
        assert!(parse_published("2025-08-01T14:30:00Z").is_some());
        assert!(parse_published("2025-08-01").is_some());
        assert!(parse_published("N/A").is_none());
        assert!(parse_published("yesterday-ish").is_none());
    }

    #[test]
    fn test_summary_preview_short_text_renders_whole() {
        let short = "a".repeat(SUMMARY_PREVIEW_CHARS - 1);
        assert_eq!(summary_preview(&short), None);
    }

    #[test]
    fn test_summary_preview_truncates_at_threshold() {
        let exact = "a".repeat(SUMMARY_PREVIEW_CHARS);
        let expected = format!("{}...", "a".repeat(SUMMARY_PREVIEW_CHARS));
        assert_eq!(summary_preview(&exact), Some(expected));
    }

    #[test]
    fn test_summary_preview_counts_characters_not_bytes() {
        let long = "é".repeat(200);
        let preview = summary_preview(&long).unwrap();

        assert_eq!(preview.chars().count(), SUMMARY_PREVIEW_CHARS + 3);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_toggle_membership_is_idempotent() {
        let mut set = HashSet::new();
        set.insert("CVE-2025-0009".to_string());

        toggle_membership(&mut set, "CVE-2025-0001");
        assert!(set.contains("CVE-2025-0001"));

        toggle_membership(&mut set, "CVE-2025-0001");
        assert!(!set.contains("CVE-2025-0001"));

        // Other rows unaffected
        assert!(set.contains("CVE-2025-0009"));
    }

    #[test]
    fn test_record_deserializes_sparse_fields() {
        let sparse: CveRecord =
            serde_json::from_str(r#"{"id":"CVE-2025-0001","published":"N/A"}"#).unwrap();
        assert_eq!(sparse.summary, "");
        assert_eq!(sparse.severity, None);

        let full: CveRecord = serde_json::from_str(
            r#"{"id":"CVE-2025-0002","summary":"Heap overflow","published":"2025-08-01T14:30:00.000","severity":"CRITICAL"}"#,
        )
        .unwrap();
        assert_eq!(full.severity.as_deref(), Some("CRITICAL"));
    }

    #[test]
    fn test_detail_url() {
        assert_eq!(
            record("CVE-2025-0001", "N/A", None).detail_url(),
            "https://nvd.nist.gov/vuln/detail/CVE-2025-0001"
        );
    }
}
