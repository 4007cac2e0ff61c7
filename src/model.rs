//! Core task record type.

/// One to-do item owned by a [`crate::store::TaskStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id within a store, assigned at creation, immutable after.
    pub id: u32,
    /// Human-readable title, a single logical line.
    pub title: String,
    /// Free-text description, a single logical line.
    pub description: String,
    /// Priority from 1 (low) to 5 (high); the range is enforced at the
    /// menu layer, not here.
    pub priority: u8,
    /// Free-text due date; never parsed or validated.
    pub due_date: String,
    /// Completion flag; starts false and only ever transitions to true.
    pub completed: bool,
}

impl Task {
    /// Creates a pending task with the given field values.
    #[must_use]
    pub fn new(id: u32, title: &str, description: &str, priority: u8, due_date: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            priority,
            due_date: due_date.to_string(),
            completed: false,
        }
    }

    /// Marks the task as completed. The transition is one-way.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
