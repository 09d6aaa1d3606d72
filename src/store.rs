// Task list store: in-memory state plus persistence-on-change

use crate::storage::Storage;
use crate::task::{Priority, Status, Task, seed_tasks};
use tracing::{debug, warn};

/// The only error the store surfaces to callers. Everything else is either
/// recovered internally (bad persisted data falls back to the seed list) or
/// logged and ignored (slot write failures).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    InvalidPriority(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "task name must not be empty"),
            ValidationError::InvalidPriority(p) => {
                write!(f, "invalid priority {:?} (expected High, Medium or Low)", p)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Authoritative in-memory task list.
///
/// Owns the ordered task sequence, hands out derived views, and writes the
/// full list back to its [`Storage`] slot after every mutating operation.
/// The sort flag only affects [`todo_view`](Self::todo_view) and is never
/// persisted.
pub struct TaskStore<S: Storage> {
    tasks: Vec<Task>,
    next_id: u64,
    sort_by_priority: bool,
    storage: S,
}

impl<S: Storage> TaskStore<S> {
    /// Open a store over the given slot.
    ///
    /// Absent or malformed slot content falls back to the seed list; this
    /// never fails. The id counter resumes past the highest loaded id.
    pub fn open(storage: S) -> Self {
        let tasks = match storage.load() {
            Ok(Some(data)) => match serde_json::from_str::<Vec<Task>>(&data) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(error = ?e, "Malformed task list in storage, using seed list");
                    seed_tasks()
                }
            },
            Ok(None) => {
                debug!("No stored task list, using seed list");
                seed_tasks()
            }
            Err(e) => {
                warn!(error = ?e, "Failed to read task list from storage, using seed list");
                seed_tasks()
            }
        };

        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |m| m + 1);

        Self {
            tasks,
            next_id,
            // The sort toggle starts on, matching the default view
            sort_by_priority: true,
            storage,
        }
    }

    /// Append a new Todo task and return its id.
    ///
    /// Validation failures leave the list untouched and skip the slot write.
    pub fn add_task(&mut self, name: &str, priority: &str) -> Result<u64, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let priority: Priority = priority
            .parse()
            .map_err(|_| ValidationError::InvalidPriority(priority.to_string()))?;

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, name, priority));

        debug!(id, "Added task");
        self.persist();
        Ok(id)
    }

    /// Remove the task with the given id. Absent ids are a no-op, not an
    /// error, so deleting twice is fine.
    pub fn delete_task(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
        self.persist();
    }

    /// Mark a Todo task as Done, keeping its position in the sequence.
    /// No-op when the id is absent or the task is already Done.
    pub fn complete_task(&mut self, id: u64) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            if task.status == Status::Todo {
                task.status = Status::Done;
                debug!(id, "Completed task");
            }
        }
        self.persist();
    }

    /// Remove every Done task in one step; Todo tasks are untouched.
    pub fn clear_done(&mut self) {
        self.tasks.retain(|t| t.status != Status::Done);
        self.persist();
    }

    /// Flip the display-only priority sort for the todo view.
    pub fn toggle_sort(&mut self) {
        self.sort_by_priority = !self.sort_by_priority;
    }

    pub fn sort_by_priority(&self) -> bool {
        self.sort_by_priority
    }

    /// Todo tasks, in insertion order, or stable-sorted by priority severity
    /// when the sort flag is on (equal priorities keep insertion order).
    pub fn todo_view(&self) -> Vec<&Task> {
        let mut view: Vec<&Task> = self.tasks.iter().filter(|t| t.status == Status::Todo).collect();
        if self.sort_by_priority {
            view.sort_by_key(|t| t.priority);
        }
        view
    }

    /// Done tasks, in insertion order, regardless of the sort flag.
    pub fn done_view(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.status == Status::Done).collect()
    }

    /// The full underlying sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the full list to the slot. Fire-and-forget: a failed write is
    /// logged and the in-memory state proceeds uncommitted.
    fn persist(&mut self) {
        let data = match serde_json::to_string(&self.tasks) {
            Ok(data) => data,
            Err(e) => {
                warn!(error = ?e, "Failed to serialize task list");
                return;
            }
        };
        if let Err(e) = self.storage.save(&data) {
            warn!(error = ?e, "Failed to write task list to storage");
        }
    }
}
