// Data model for the task list

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A single actionable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub name: String,
    pub priority: Priority,
    pub status: Status,
}

impl Task {
    pub fn new(id: u64, name: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            name: name.into(),
            priority,
            status: Status::Todo,
        }
    }
}

/// Task priority. Declaration order doubles as severity order:
/// `High` sorts before `Medium` sorts before `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Medium" => Ok(Priority::Medium),
            "Low" => Ok(Priority::Low),
            other => Err(format!("not a priority: {:?}", other)),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Completion status. The only transition is Todo -> Done; there is no
/// operation that reverts a done task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Todo,
    Done,
}

/// Default task list used when no persisted data is available.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(2, "Study React", Priority::Medium),
        Task::new(1, "Learn Javascript", Priority::High),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_severity_order() {
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("High".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert_eq!("Low".parse::<Priority>().unwrap(), Priority::Low);

        // Case-sensitive, matching the stored wire strings
        assert!("high".parse::<Priority>().is_err());
        assert!("".parse::<Priority>().is_err());
        assert!("Urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_priority_serialization() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"Low\"");
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(serde_json::to_string(&Status::Todo).unwrap(), "\"todo\"");
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn test_task_round_trip() {
        let task = Task::new(7, "Write tests", Priority::Low);
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }

    #[test]
    fn test_seed_tasks() {
        let seed = seed_tasks();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].name, "Study React");
        assert_eq!(seed[0].priority, Priority::Medium);
        assert_eq!(seed[1].name, "Learn Javascript");
        assert_eq!(seed[1].priority, Priority::High);
        assert!(seed.iter().all(|t| t.status == Status::Todo));
    }
}
