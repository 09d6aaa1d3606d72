// todostore - persistent task list store

pub mod storage;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{TaskStore, ValidationError};
pub use task::{Priority, Status, Task, seed_tasks};
