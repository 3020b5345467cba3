//! Display Mapping
//!
//! Fixed tables from record values to labels and CSS classes.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::stats::HIGH_PRIORITY_THRESHOLD;

/// Scores at or above this (and below high) are medium priority
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 6.0;

/// Category filter options: (value, label)
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("all", "All Categories"),
    ("job", "Jobs"),
    ("freelance", "Freelance"),
    ("business", "Business"),
    ("grant", "Grants"),
    ("competition", "Competitions"),
];

/// Known lifecycle statuses; anything else is `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    New,
    Applied,
    InProgress,
    Completed,
    Rejected,
    Unknown,
}

impl StatusKind {
    /// Statuses a record can be moved to, in lifecycle order
    pub const ALL: [StatusKind; 5] = [
        StatusKind::New,
        StatusKind::Applied,
        StatusKind::InProgress,
        StatusKind::Completed,
        StatusKind::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKind::New => "new",
            StatusKind::Applied => "applied",
            StatusKind::InProgress => "in_progress",
            StatusKind::Completed => "completed",
            StatusKind::Rejected => "rejected",
            StatusKind::Unknown => "unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "new" => StatusKind::New,
            "applied" => StatusKind::Applied,
            "in_progress" => StatusKind::InProgress,
            "completed" => StatusKind::Completed,
            "rejected" => StatusKind::Rejected,
            _ => StatusKind::Unknown,
        }
    }

    /// Badge class; unknown statuses get the neutral treatment
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::New => "status-badge status-new",
            StatusKind::Applied => "status-badge status-applied",
            StatusKind::InProgress => "status-badge status-in-progress",
            StatusKind::Completed => "status-badge status-completed",
            StatusKind::Rejected => "status-badge status-rejected",
            StatusKind::Unknown => "status-badge status-default",
        }
    }
}

/// Urgency bucket derived from `priority_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_PRIORITY_THRESHOLD {
            PriorityLevel::High
        } else if score >= MEDIUM_PRIORITY_THRESHOLD {
            PriorityLevel::Medium
        } else {
            PriorityLevel::Low
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PriorityLevel::High => "priority priority-high",
            PriorityLevel::Medium => "priority priority-medium",
            PriorityLevel::Low => "priority priority-low",
        }
    }
}

/// Score out of ten, e.g. "7.5/10"; whole scores drop the fraction
pub fn format_score(score: f64) -> String {
    format!("{}/10", score)
}

/// Non-empty contact details as (label, value) pairs, sorted by key
pub fn contact_entries(contact_info: Option<&serde_json::Value>) -> Vec<(String, String)> {
    use serde_json::Value;

    match contact_info {
        Some(Value::Object(map)) => map
            .iter()
            .filter_map(|(key, value)| {
                let text = match value {
                    Value::Null => return None,
                    Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                };
                (!text.is_empty()).then(|| (category_label(&status_label(key)), text))
            })
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => {
            vec![("Contact".to_string(), s.trim().to_string())]
        }
        _ => Vec::new(),
    }
}

/// Raw status with its first underscore shown as a space
pub fn status_label(status: &str) -> String {
    status.replacen('_', " ", 1)
}

/// Capitalize each word, e.g. "job" -> "Job"
pub fn category_label(category: &str) -> String {
    category
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Short date for a deadline; unparsable values are shown as given
pub fn format_deadline(deadline: &str) -> String {
    const FORMAT: &str = "%b %-d, %Y";

    if let Ok(dt) = DateTime::parse_from_rfc3339(deadline) {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(deadline, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(deadline, "%Y-%m-%d") {
        return date.format(FORMAT).to_string();
    }
    deadline.to_string()
}
