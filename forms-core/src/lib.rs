use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since Unix epoch.
pub type Timestamp = i64;

/// Backend-assigned identifier. Some deployments return numbers, some
/// strings; the client only compares and displays it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormId {
    Num(i64),
    Text(String),
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormId::Num(n) => write!(f, "{n}"),
            FormId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for FormId {
    fn from(n: i64) -> Self {
        FormId::Num(n)
    }
}

impl From<&str> for FormId {
    fn from(s: &str) -> Self {
        FormId::Text(s.to_string())
    }
}

/// A single form submission as returned by the backend. Immutable in the
/// client; the only mutation is whole-record deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    pub id: FormId,
    /// Server-formatted creation timestamp; see [`parse_created_at`].
    #[serde(default)]
    pub created_at: String,
    pub manager: String,
    pub course: String,
    /// Secondary identifier, present on some deployments only.
    #[serde(default)]
    pub form_id: Option<FormId>,
}

impl FormRecord {
    /// Parsed creation time, if the server string is understood.
    pub fn created_ts(&self) -> Option<Timestamp> {
        parse_created_at(&self.created_at)
    }
}

/// Parse the backend's creation-timestamp string. The backend has emitted
/// several shapes over time; unknown shapes yield None and sort last.
pub fn parse_created_at(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(dt.and_utc().timestamp_millis());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        let dt = d.and_hms_opt(0, 0, 0)?;
        return Some(dt.and_utc().timestamp_millis());
    }
    None
}

/// The three list filters, combined with logical AND. Empty fields match
/// everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub manager: String,
    pub course: String,
    pub date: String,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.manager.trim().is_empty()
            && self.course.trim().is_empty()
            && self.date.trim().is_empty()
    }

    /// True when the record passes all three filters.
    pub fn matches(&self, record: &FormRecord) -> bool {
        contains_ci(&record.manager, &self.manager)
            && contains_ci(&record.course, &self.course)
            && date_matches(&record.created_at, &self.date)
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// The date filter matches on the date part of the record's timestamp:
/// "2024-01" matches every January 2024 record.
fn date_matches(created_at: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let date_part = created_at
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(created_at);
    date_part.starts_with(query)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "Newest first",
            SortOrder::OldestFirst => "Oldest first",
        }
    }
}

/// Sort by parsed creation time. Unparseable timestamps sort after
/// parseable ones in both directions; the sort is stable.
pub fn sort_records(records: &mut [FormRecord], order: SortOrder) {
    records.sort_by(|a, b| {
        let (ta, tb) = (a.created_ts(), b.created_ts());
        match (ta, tb) {
            (Some(ta), Some(tb)) => match order {
                SortOrder::NewestFirst => tb.cmp(&ta),
                SortOrder::OldestFirst => ta.cmp(&tb),
            },
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        }
    });
}

/// Remove one record by id. Applied to local state only after the backend
/// confirms the deletion.
pub fn remove_record(records: &mut Vec<FormRecord>, id: &FormId) {
    records.retain(|r| &r.id != id);
}

/// Filter then sort; the view recomputes this on every state change.
pub fn apply(records: &[FormRecord], filters: &FilterSet, order: SortOrder) -> Vec<FormRecord> {
    let mut out: Vec<FormRecord> = records
        .iter()
        .filter(|r| filters.matches(r))
        .cloned()
        .collect();
    sort_records(&mut out, order);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, created_at: &str, manager: &str, course: &str) -> FormRecord {
        FormRecord {
            id: FormId::Num(id),
            created_at: created_at.to_string(),
            manager: manager.to_string(),
            course: course.to_string(),
            form_id: None,
        }
    }

    fn sample() -> Vec<FormRecord> {
        vec![
            record(1, "2024-01-01", "Ana Souza", "Welding"),
            record(2, "2024-02-01", "Bruno Lima", "Welding"),
            record(3, "2024-02-15", "Ana Souza", "Electrical"),
            record(4, "2023-12-20", "Carla Dias", "Plumbing"),
        ]
    }

    #[test]
    fn form_id_accepts_numbers_and_strings() {
        let ids: Vec<FormId> = serde_json::from_str(r#"[7, "a-42"]"#).unwrap();
        assert_eq!(ids, vec![FormId::Num(7), FormId::Text("a-42".into())]);
        assert_eq!(ids[0].to_string(), "7");
        assert_eq!(ids[1].to_string(), "a-42");
    }

    #[test]
    fn record_deserializes_with_missing_optionals() {
        let json = r#"{"id": 1, "manager": "Ana", "course": "Welding"}"#;
        let rec: FormRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.created_at, "");
        assert!(rec.form_id.is_none());
    }

    #[test]
    fn parses_known_timestamp_shapes() {
        assert!(parse_created_at("2024-03-01T10:30:00Z").is_some());
        assert!(parse_created_at("2024-03-01 10:30:00").is_some());
        assert!(parse_created_at("2024-03-01").is_some());
        assert!(parse_created_at("01/03/2024").is_some());
        assert!(parse_created_at("yesterday").is_none());
        assert!(parse_created_at("").is_none());
    }

    #[test]
    fn day_month_year_matches_iso_date() {
        assert_eq!(parse_created_at("01/03/2024"), parse_created_at("2024-03-01"));
    }

    #[test]
    fn filters_are_conjunctive_and_commutative() {
        let records = sample();
        let filters = FilterSet {
            manager: "ana".into(),
            course: "weld".into(),
            date: "2024".into(),
        };
        let combined = apply(&records, &filters, SortOrder::NewestFirst);

        let only = |f: FilterSet| apply(&records, &f, SortOrder::NewestFirst);
        let by_manager = only(FilterSet {
            manager: "ana".into(),
            ..Default::default()
        });
        let by_course = only(FilterSet {
            course: "weld".into(),
            ..Default::default()
        });
        let by_date = only(FilterSet {
            date: "2024".into(),
            ..Default::default()
        });

        let intersection: Vec<FormRecord> = by_manager
            .iter()
            .filter(|r| by_course.contains(r) && by_date.contains(r))
            .cloned()
            .collect();
        assert_eq!(combined, intersection);
        assert_eq!(combined.len(), 1);
        assert_eq!(combined[0].id, FormId::Num(1));
    }

    #[test]
    fn empty_filters_match_everything() {
        let records = sample();
        let visible = apply(&records, &FilterSet::default(), SortOrder::NewestFirst);
        assert_eq!(visible.len(), records.len());
    }

    #[test]
    fn filter_is_case_insensitive() {
        let records = sample();
        let filters = FilterSet {
            manager: "ANA".into(),
            ..Default::default()
        };
        assert_eq!(apply(&records, &filters, SortOrder::NewestFirst).len(), 2);
    }

    #[test]
    fn default_order_is_newest_first() {
        let records = vec![record(1, "2024-01-01", "a", "x"), record(2, "2024-02-01", "b", "y")];
        let visible = apply(&records, &FilterSet::default(), SortOrder::NewestFirst);
        let ids: Vec<&FormId> = visible.iter().map(|r| &r.id).collect();
        assert_eq!(ids, vec![&FormId::Num(2), &FormId::Num(1)]);
    }

    #[test]
    fn toggling_order_reverses_filtered_sequence() {
        let records = sample();
        let filters = FilterSet {
            date: "2024".into(),
            ..Default::default()
        };
        let newest = apply(&records, &filters, SortOrder::NewestFirst);
        let oldest = apply(&records, &filters, SortOrder::OldestFirst);
        let reversed: Vec<FormRecord> = newest.into_iter().rev().collect();
        assert_eq!(oldest, reversed);
    }

    #[test]
    fn unparseable_timestamps_sort_last() {
        let records = vec![
            record(1, "not a date", "a", "x"),
            record(2, "2024-02-01", "b", "y"),
            record(3, "garbage too", "c", "z"),
        ];
        for order in [SortOrder::NewestFirst, SortOrder::OldestFirst] {
            let visible = apply(&records, &FilterSet::default(), order);
            assert_eq!(visible[0].id, FormId::Num(2));
            // Stable among themselves.
            assert_eq!(visible[1].id, FormId::Num(1));
            assert_eq!(visible[2].id, FormId::Num(3));
        }
    }

    #[test]
    fn remove_record_removes_exactly_one() {
        let mut records = sample();
        remove_record(&mut records, &FormId::Num(2));
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.id != FormId::Num(2)));

        // Unknown id leaves the list untouched.
        remove_record(&mut records, &FormId::Num(99));
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn sort_order_toggle_round_trips() {
        assert_eq!(SortOrder::NewestFirst.toggle(), SortOrder::OldestFirst);
        assert_eq!(SortOrder::NewestFirst.toggle().toggle(), SortOrder::NewestFirst);
    }
}
