use serde::{Deserialize, Serialize};

/// A task as served by the backend. The client holds these as an ephemeral
/// read replica: every successful fetch replaces the whole list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,

    pub title: String,

    /// `YYYY-MM-DD`, or empty when the task has no due date.
    #[serde(default)]
    pub due: String,

    /// Free text, comma-separated by convention.
    #[serde(default)]
    pub tags: String,

    /// Backend-provided; expected to be one of the [`Priority`] labels but
    /// carried through unchanged either way.
    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub completed: bool,
}

/// The priority buckets the chart understands. Anything else the backend
/// sends stays on the task but never creates a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Chart order, top to bottom.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "High" => Some(Self::High),
            "Medium" => Some(Self::Medium),
            "Low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Fixed bar color per bucket.
    pub fn color(self) -> &'static str {
        match self {
            Self::High => "#e65151",
            Self::Medium => "#f0ad4e",
            Self::Low => "#4caf50",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Priority, Task};

    #[test]
    fn deserializes_with_absent_optional_fields() {
        let task: Task =
            serde_json::from_str(r#"{"id":"7","title":"Ship it"}"#).expect("parse task");
        assert_eq!(task.id, "7");
        assert_eq!(task.title, "Ship it");
        assert_eq!(task.due, "");
        assert_eq!(task.tags, "");
        assert!(!task.completed);
    }

    #[test]
    fn parses_known_priorities_only() {
        assert_eq!(Priority::parse("High"), Some(Priority::High));
        assert_eq!(Priority::parse("Medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("Low"), Some(Priority::Low));
        assert_eq!(Priority::parse("high"), None);
        assert_eq!(Priority::parse("Urgent"), None);
        assert_eq!(Priority::parse(""), None);
    }
}
