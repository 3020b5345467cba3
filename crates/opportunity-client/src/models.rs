//! Wire Models
//!
//! Data structures matching the opportunities service.
//!
//! Most service columns are nullable, so a `null` maps to the service's own
//! default instead of failing the whole list.

use serde::{Deserialize, Deserializer, Serialize};

use crate::display::StatusKind;

/// Opportunity record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u32,
    pub title: String,
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,
    #[serde(default)]
    pub deadline: Option<String>,
    /// Conventionally 0-10; the service stores floats such as 8.5
    #[serde(default = "default_score", deserialize_with = "score_or_default")]
    pub priority_score: f64,
    #[serde(default = "default_status", deserialize_with = "status_or_default")]
    pub status: String,
    #[serde(default, deserialize_with = "string_or_default")]
    pub created_at: String,
    /// Original free text the service derived this record from
    #[serde(default)]
    pub content: Option<String>,
    /// Requirements extracted from the text
    #[serde(default, deserialize_with = "list_or_default")]
    pub requirements: Vec<String>,
    /// Extracted contact details, usually an object of name -> value
    #[serde(default)]
    pub contact_info: Option<serde_json::Value>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Opportunity {
    pub fn status_kind(&self) -> StatusKind {
        StatusKind::from_str(&self.status)
    }

    /// Serialized form of every field; changes whenever any displayed value does
    pub fn fingerprint(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Body of `POST /opportunities`; the service derives every other field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateOpportunity<'a> {
    pub content: &'a str,
}

// ========================
// Service defaults for null columns
// ========================

fn default_category() -> String {
    "general".to_string()
}

fn default_status() -> String {
    "new".to_string()
}

fn default_score() -> f64 {
    5.0
}

fn category_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

fn status_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_status))
}

fn score_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or_else(default_score))
}

fn string_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn list_or_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_service_record() {
        let json = r#"{
            "id": 3,
            "title": "Backend Engineer",
            "content": "We are hiring a backend engineer...",
            "category": "job",
            "deadline": "2025-03-01T00:00:00",
            "requirements": ["rust", "sql"],
            "contact_info": {"email": "jobs@example.com"},
            "priority_score": 7.0,
            "status": "new",
            "source": "whatsapp",
            "created_at": "2025-01-10T09:30:00",
            "updated_at": "2025-01-10T09:30:00"
        }"#;

        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.id, 3);
        assert_eq!(opp.priority_score, 7.0);
        assert_eq!(opp.deadline.as_deref(), Some("2025-03-01T00:00:00"));
        assert_eq!(opp.source.as_deref(), Some("whatsapp"));
        assert_eq!(opp.requirements, vec!["rust", "sql"]);
        assert_eq!(opp.contact_info, Some(serde_json::json!({"email": "jobs@example.com"})));
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"id":1,"title":"Grant","category":"grant","deadline":null,"priority_score":9,"status":"applied","created_at":"2025-01-01T00:00:00Z"}"#;

        let opp: Opportunity = serde_json::from_str(json).unwrap();
        assert_eq!(opp.priority_score, 9.0);
        assert!(opp.deadline.is_none());
        assert!(opp.content.is_none());
        assert!(opp.requirements.is_empty());
        assert!(opp.contact_info.is_none());
    }

    #[test]
    fn test_fractional_score_kept_as_sent() {
        let json = r#"[
            {"id":1,"title":"a","category":"job","priority_score":7.5,"status":"new","created_at":""},
            {"id":2,"title":"b","category":"job","priority_score":7.6,"status":"new","created_at":""}
        ]"#;
        let all: Vec<Opportunity> = serde_json::from_str(json).unwrap();
        assert_eq!(all[0].priority_score, 7.5);
        assert_eq!(all[1].priority_score, 7.6);
    }

    #[test]
    fn test_null_columns_use_service_defaults() {
        let json = r#"[
            {"id":1,"title":"Good","category":"job","priority_score":6,"status":"applied","created_at":"2025-01-01T00:00:00"},
            {"id":2,"title":"Legacy","category":null,"priority_score":null,"status":null,"created_at":null,"requirements":null,"contact_info":null}
        ]"#;

        let all: Vec<Opportunity> = serde_json::from_str(json).unwrap();
        assert_eq!(all.len(), 2);
        let legacy = &all[1];
        assert_eq!(legacy.category, "general");
        assert_eq!(legacy.status, "new");
        assert_eq!(legacy.priority_score, 5.0);
        assert_eq!(legacy.created_at, "");
        assert!(legacy.requirements.is_empty());
        assert!(legacy.contact_info.is_none());
    }

    #[test]
    fn test_missing_columns_use_service_defaults() {
        let opp: Opportunity = serde_json::from_str(r#"{"id":4,"title":"Bare"}"#).unwrap();
        assert_eq!(opp.category, "general");
        assert_eq!(opp.status, "new");
        assert_eq!(opp.priority_score, 5.0);
    }

    #[test]
    fn test_fingerprint_tracks_changes() {
        let opp: Opportunity = serde_json::from_str(r#"{"id":4,"title":"Bare"}"#).unwrap();
        let mut moved = opp.clone();
        moved.status = "applied".to_string();
        assert_eq!(opp.fingerprint(), opp.clone().fingerprint());
        assert_ne!(opp.fingerprint(), moved.fingerprint());
    }

    #[test]
    fn test_create_payload_is_content_only() {
        let body = serde_json::to_value(CreateOpportunity { content: "Hackathon next week" }).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "Hackathon next week" }));
    }
}
