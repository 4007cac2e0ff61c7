//! In-memory task store, the authoritative collection for a session.
//!
//! The store owns its [`Task`] values outright: tasks move in on `add` or
//! `replace_all` and are dropped on `remove`. Queries hand out borrows that
//! cannot outlive the store. Nothing here touches the filesystem; persistence
//! lives in [`crate::codec`].

use crate::model::Task;

/// Ordered collection of tasks with unique ids, insertion order preserved.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Adds a new pending task and returns its assigned id.
    ///
    /// The id is one more than the largest id currently present (1 for an
    /// empty store). Computing from the maximum, not the last element, keeps
    /// ids unique after removals and after loading files whose record order
    /// does not match id order.
    pub fn add(&mut self, title: &str, description: &str, priority: u8, due_date: &str) -> u32 {
        let id = self.next_id();
        self.tasks.push(Task::new(id, title, description, priority, due_date));
        id
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` when no task has that id; the store is untouched in
    /// that case. Absence is a normal outcome, not an error.
    pub fn remove(&mut self, id: u32) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() < before
    }

    /// Marks the task with the given id as completed.
    ///
    /// Returns `false` when no task has that id. Marking an already-completed
    /// task is a no-op success.
    pub fn mark_completed(&mut self, id: u32) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.mark_completed();
                true
            }
            None => false,
        }
    }

    /// All tasks in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Discards the current contents and installs the given sequence.
    ///
    /// Used after a successful load; the previous in-memory state is gone
    /// regardless of what it held.
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        log::debug!("replacing {} tasks with {}", self.tasks.len(), tasks.len());
        self.tasks = tasks;
    }

    /// Tasks whose completion flag matches, insertion order preserved.
    #[must_use]
    pub fn filter_completed(&self, completed: bool) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.completed == completed).collect()
    }

    /// All tasks ordered by priority descending.
    ///
    /// Ties keep their insertion order (the sort is stable).
    #[must_use]
    pub fn sorted_by_priority_desc(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|task| std::cmp::Reverse(task.priority));
        tasks
    }

    /// Number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn next_id(&self) -> u32 {
        self.tasks.iter().map(|task| task.id).max().map_or(1, |max| max + 1)
    }
}
