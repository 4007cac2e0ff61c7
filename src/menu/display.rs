//! Plain-text rendering of task listings.

use std::io::{self, Write};

use crate::model::Task;

/// Writes each task as a labeled block, or a placeholder when there is
/// nothing to show.
///
/// # Errors
///
/// Returns an error when the output stream fails.
pub fn render_tasks<W: Write>(output: &mut W, tasks: &[&Task]) -> io::Result<()> {
    if tasks.is_empty() {
        return writeln!(output, "No tasks to display.");
    }
    for task in tasks {
        write!(output, "{}", render_task(task))?;
    }
    Ok(())
}

/// Renders one task block, one field per line, with a trailing blank line.
#[must_use]
pub fn render_task(task: &Task) -> String {
    format!(
        "Task ID: {}\nTitle: {}\nDescription: {}\nPriority: {}\nDue Date: {}\nStatus: {}\n\n",
        task.id,
        task.title,
        task.description,
        task.priority,
        task.due_date,
        format_status(task.completed),
    )
}

/// Human-readable completion status shown in listings.
#[must_use]
pub fn format_status(completed: bool) -> &'static str {
    if completed {
        "Completed"
    } else {
        "Pending"
    }
}
