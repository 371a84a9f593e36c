//! Frontend Models
//!
//! Data structures matching backend responses.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Longest goal text the backend accepts
pub const GOAL_TEXT_MAX_LEN: usize = 500;

/// One step of a goal's action plan (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub task_text: String,
    /// Display rank. Only comparable, not necessarily contiguous.
    pub order: i32,
    pub created_at: String,
}

/// A submitted goal with its generated plan (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub goal_text: String,
    pub complexity_score: i32,
    pub created_at: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Goal {
    pub fn complexity_tier(&self) -> ComplexityTier {
        ComplexityTier::from_score(self.complexity_score)
    }

    /// Calendar date of creation, if the timestamp parses
    pub fn created_date(&self) -> Option<NaiveDate> {
        parse_date(&self.created_at)
    }
}

/// Request body for `POST /goals`
#[derive(Debug, Serialize)]
pub struct NewGoal<'a> {
    pub goal_text: &'a str,
}

/// Badge tier derived from the server's complexity score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    /// Thresholds are exclusive: 7 is medium, 4 is low.
    pub fn from_score(score: i32) -> Self {
        if score > 7 {
            Self::High
        } else if score > 4 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Low => "badge badge-low",
            Self::Medium => "badge badge-medium",
            Self::High => "badge badge-high",
        }
    }
}

/// Accepts RFC 3339 and the offset-less ISO form the backend emits
/// (`2024-05-01T10:00:00.123456`).
pub fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_deserializes_backend_payload() {
        let json = r#"{
            "id": 7,
            "goal_text": "Run a marathon",
            "complexity_score": 9,
            "created_at": "2024-05-01T10:00:00.123456",
            "tasks": [
                {
                    "id": 70,
                    "task_text": "Buy shoes",
                    "order": 1,
                    "created_at": "2024-05-01T10:00:00"
                }
            ],
            "user_id": "ignored"
        }"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.id, 7);
        assert_eq!(goal.tasks.len(), 1);
        assert_eq!(goal.tasks[0].order, 1);
        assert_eq!(goal.complexity_tier(), ComplexityTier::High);
        assert_eq!(goal.created_date(), NaiveDate::from_ymd_opt(2024, 5, 1));
    }

    #[test]
    fn test_missing_tasks_defaults_to_empty() {
        let json =
            r#"{"id": 1, "goal_text": "x", "complexity_score": 1, "created_at": "2024-01-01"}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert!(goal.tasks.is_empty());
    }

    #[test]
    fn test_complexity_tiers() {
        assert_eq!(ComplexityTier::from_score(8), ComplexityTier::High);
        assert_eq!(ComplexityTier::from_score(7), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_score(5), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_score(4), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_score(0), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_score(10).as_str(), "high");
    }

    #[test]
    fn test_parse_date_formats() {
        let may_first = NaiveDate::from_ymd_opt(2024, 5, 1);
        assert_eq!(parse_date("2024-05-01T23:30:00Z"), may_first);
        assert_eq!(parse_date("2024-05-01T23:30:00+02:00"), may_first);
        assert_eq!(parse_date("2024-05-01T23:30:00"), may_first);
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn test_new_goal_body() {
        let body = serde_json::to_value(NewGoal { goal_text: "Learn Rust" }).unwrap();
        assert_eq!(body, serde_json::json!({"goal_text": "Learn Rust"}));
    }
}
