//! Decoder for the tasks file.
//!
//! Parsing is positional: after the two banner lines, records are consumed
//! field by field in the fixed order the encoder writes them. Labels are
//! checked and a mismatch aborts the load with the offending line number
//! rather than silently desynchronizing the way the legacy loader did.

use std::path::Path;
use std::str::FromStr;

use super::{
    CodecError, LABEL_COMPLETED, LABEL_DESCRIPTION, LABEL_DUE_DATE, LABEL_ID, LABEL_PRIORITY,
    LABEL_TITLE,
};
use crate::model::Task;
use crate::ports::filesystem::FileSystem;

/// Reads `path` and reconstructs its tasks in file order.
///
/// The caller is expected to install the result with
/// [`crate::store::TaskStore::replace_all`] only on success, so any failure
/// leaves the in-memory store exactly as it was.
///
/// # Errors
///
/// Returns [`CodecError::Io`] when the source cannot be read and
/// [`CodecError::Malformed`] when the contents do not follow the record
/// layout.
pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Vec<Task>, CodecError> {
    let contents = fs
        .read_to_string(path)
        .map_err(|source| CodecError::Io { path: path.to_path_buf(), source })?;
    let tasks = parse(&contents)?;
    log::info!("loaded {} tasks from {}", tasks.len(), path.display());
    Ok(tasks)
}

/// Parses file contents into tasks.
pub(crate) fn parse(contents: &str) -> Result<Vec<Task>, CodecError> {
    let mut cursor = LineCursor::new(contents);

    // Banner lines are cosmetic; consume up to two without looking at them.
    cursor.next_line();
    cursor.next_line();

    let mut tasks = Vec::new();
    loop {
        // Sole termination check: end of input, or a blank line where the
        // next record would start.
        let Some((line_no, line)) = cursor.next_line() else { break };
        if line.is_empty() {
            break;
        }

        let id: u32 = numeric(label_value(line, LABEL_ID, line_no)?, LABEL_ID, line_no)?;
        let (_, title) = next_field(&mut cursor, LABEL_TITLE)?;
        let (_, description) = next_field(&mut cursor, LABEL_DESCRIPTION)?;
        let (priority_line, priority_text) = next_field(&mut cursor, LABEL_PRIORITY)?;
        let priority: u8 = numeric(priority_text, LABEL_PRIORITY, priority_line)?;
        let (_, due_date) = next_field(&mut cursor, LABEL_DUE_DATE)?;
        let (_, status) = next_field(&mut cursor, LABEL_COMPLETED)?;
        // Only the exact literal "Yes" means completed; any other text is
        // treated as pending for compatibility with hand-edited files.
        let completed = status == "Yes";

        // The separator's content is filler, but its absence means the
        // record was cut off.
        if cursor.next_line().is_none() {
            return Err(CodecError::Malformed {
                line: cursor.line_no + 1,
                reason: "truncated record, missing separator line".to_string(),
            });
        }

        let mut task = Task::new(id, title, description, priority, due_date);
        if completed {
            task.mark_completed();
        }
        tasks.push(task);
    }

    Ok(tasks)
}

/// Line iterator tracking 1-based line numbers for error reporting.
struct LineCursor<'a> {
    lines: std::str::Lines<'a>,
    line_no: usize,
}

impl<'a> LineCursor<'a> {
    fn new(contents: &'a str) -> Self {
        Self { lines: contents.lines(), line_no: 0 }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = self.lines.next()?;
        self.line_no += 1;
        Some((self.line_no, line))
    }
}

/// Consumes the next line and returns its value part after the given label.
fn next_field<'a>(
    cursor: &mut LineCursor<'a>,
    label: &str,
) -> Result<(usize, &'a str), CodecError> {
    let Some((line_no, line)) = cursor.next_line() else {
        return Err(CodecError::Malformed {
            line: cursor.line_no + 1,
            reason: format!("unexpected end of file, expected `{label}` line"),
        });
    };
    Ok((line_no, label_value(line, label, line_no)?))
}

/// Splits `label` off the front of `line`.
///
/// Exactly one separating space is stripped, so field text with leading
/// whitespace survives a round trip.
fn label_value<'a>(line: &'a str, label: &str, line_no: usize) -> Result<&'a str, CodecError> {
    let rest = line.strip_prefix(label).ok_or_else(|| CodecError::Malformed {
        line: line_no,
        reason: format!("expected `{label}` label, found `{line}`"),
    })?;
    Ok(rest.strip_prefix(' ').unwrap_or(rest))
}

fn numeric<T: FromStr>(value: &str, label: &str, line_no: usize) -> Result<T, CodecError> {
    value.trim().parse().map_err(|_| CodecError::Malformed {
        line: line_no,
        reason: format!("`{label}` value is not a valid number: `{value}`"),
    })
}
