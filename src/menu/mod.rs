//! Interactive menu session.
//!
//! The loop is generic over its input and output streams so whole sessions
//! can be scripted in tests. User mistakes such as an unknown menu choice or
//! a non-numeric id are reported as a one-line message and control returns
//! to a prompt; only real stream failures surface as errors. End of input
//! ends the session like the Exit choice.

pub mod display;

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::codec;
use crate::ports::filesystem::FileSystem;
use crate::store::TaskStore;

const MENU: &str = "Task Manager Menu:

1. Add Task
2. Remove Task
3. Display All Tasks
4. Display Tasks By Priority
5. Display Completed Tasks
6. Display Pending Tasks
7. Mark Task as Completed
8. Save Tasks to File
9. Load Tasks from File
0. Exit
";

/// Runs the menu loop until the user exits or input ends.
///
/// `tasks_path` is the file used by the save and load actions. The store is
/// only replaced by a load that parsed completely.
///
/// # Errors
///
/// Returns an error only when reading `input` or writing `output` fails.
pub fn run_session<R, W>(
    input: &mut R,
    output: &mut W,
    store: &mut TaskStore,
    fs: &dyn FileSystem,
    tasks_path: &Path,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output)?;
        write!(output, "{MENU}")?;
        writeln!(output)?;
        let Some(choice) = prompt(input, output, "Enter choice: ")? else { break };
        match choice.trim() {
            "1" => add_task(input, output, store)?,
            "2" => remove_task(input, output, store)?,
            "3" => display::render_tasks(output, &store.list().iter().collect::<Vec<_>>())?,
            "4" => display::render_tasks(output, &store.sorted_by_priority_desc())?,
            "5" => display::render_tasks(output, &store.filter_completed(true))?,
            "6" => display::render_tasks(output, &store.filter_completed(false))?,
            "7" => complete_task(input, output, store)?,
            "8" => save_tasks(output, store, fs, tasks_path)?,
            "9" => load_tasks(output, store, fs, tasks_path)?,
            "0" => {
                writeln!(output, "Goodbye.")?;
                break;
            }
            _ => writeln!(output, "Invalid choice. Please enter a number between 0 and 9.")?,
        }
    }
    Ok(())
}

/// Prints `label`, flushes, and reads one line without its line ending.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn add_task<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut TaskStore,
) -> io::Result<()> {
    let Some(title) = prompt(input, output, "Enter Title: ")? else { return Ok(()) };
    let Some(description) = prompt(input, output, "Enter Description: ")? else { return Ok(()) };
    let Some(priority) = prompt_priority(input, output)? else { return Ok(()) };
    let Some(due_date) = prompt(input, output, "Enter Due Date: ")? else { return Ok(()) };

    let id = store.add(&title, &description, priority, &due_date);
    writeln!(output, "Task added successfully (ID {id}).")
}

/// Prompts until a valid 1-5 priority is entered.
///
/// Returns `None` only at end of input.
fn prompt_priority<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<u8>> {
    loop {
        let Some(text) = prompt(input, output, "Enter Priority (1-5): ")? else {
            return Ok(None);
        };
        match text.trim().parse::<u8>() {
            Ok(value @ 1..=5) => return Ok(Some(value)),
            Ok(_) | Err(_) => {
                writeln!(output, "Invalid priority. Please enter a number between 1 and 5.")?;
            }
        }
    }
}

/// Prompts for a task id; a non-numeric entry aborts back to the menu.
fn prompt_task_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<u32>> {
    let Some(text) = prompt(input, output, "Enter Task ID: ")? else { return Ok(None) };
    match text.trim().parse() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(output, "Invalid Task ID. Please enter a valid number.")?;
            Ok(None)
        }
    }
}

fn remove_task<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut TaskStore,
) -> io::Result<()> {
    let Some(id) = prompt_task_id(input, output)? else { return Ok(()) };
    if store.remove(id) {
        writeln!(output, "Task removed successfully.")
    } else {
        writeln!(output, "Task not found.")
    }
}

fn complete_task<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    store: &mut TaskStore,
) -> io::Result<()> {
    let Some(id) = prompt_task_id(input, output)? else { return Ok(()) };
    if store.mark_completed(id) {
        writeln!(output, "Task marked as completed.")
    } else {
        writeln!(output, "Task not found.")
    }
}

fn save_tasks<W: Write>(
    output: &mut W,
    store: &TaskStore,
    fs: &dyn FileSystem,
    path: &Path,
) -> io::Result<()> {
    match codec::save(store, fs, path) {
        Ok(()) => writeln!(output, "Tasks saved to {}.", path.display()),
        Err(err) => {
            log::warn!("save failed: {err}");
            writeln!(output, "Error: {err}")
        }
    }
}

fn load_tasks<W: Write>(
    output: &mut W,
    store: &mut TaskStore,
    fs: &dyn FileSystem,
    path: &Path,
) -> io::Result<()> {
    match codec::load(fs, path) {
        Ok(tasks) => {
            let count = tasks.len();
            store.replace_all(tasks);
            writeln!(output, "Loaded {count} tasks from {}.", path.display())
        }
        Err(err) => {
            // The store keeps its previous contents on any load failure.
            log::warn!("load failed: {err}");
            writeln!(output, "Error: {err}")
        }
    }
}
