//! Encoder for the tasks file.

use std::path::Path;

use super::{
    CodecError, BANNER_RULE, BANNER_TITLE, LABEL_COMPLETED, LABEL_DESCRIPTION, LABEL_DUE_DATE,
    LABEL_ID, LABEL_PRIORITY, LABEL_TITLE, RECORD_SEPARATOR,
};
use crate::model::Task;
use crate::ports::filesystem::FileSystem;
use crate::store::TaskStore;

/// Writes the store's tasks to `path` in the banner-plus-records layout.
///
/// The whole file is rendered in memory and written in one call; a failed
/// write leaves whatever the underlying filesystem left behind, and nothing
/// in memory changes.
///
/// # Errors
///
/// Returns [`CodecError::Io`] when the destination cannot be written.
pub fn save(store: &TaskStore, fs: &dyn FileSystem, path: &Path) -> Result<(), CodecError> {
    let contents = render(store.list());
    fs.write(path, &contents)
        .map_err(|source| CodecError::Io { path: path.to_path_buf(), source })?;
    log::info!("saved {} tasks to {}", store.len(), path.display());
    Ok(())
}

/// Renders tasks to the textual file contents, banner included.
#[must_use]
pub(crate) fn render(tasks: &[Task]) -> String {
    let mut out = format!("{BANNER_TITLE}\n{BANNER_RULE}\n");
    for task in tasks {
        let completed = if task.completed { "Yes" } else { "No" };
        out.push_str(&format!(
            "{LABEL_ID} {}\n\
             {LABEL_TITLE} {}\n\
             {LABEL_DESCRIPTION} {}\n\
             {LABEL_PRIORITY} {}\n\
             {LABEL_DUE_DATE} {}\n\
             {LABEL_COMPLETED} {completed}\n\
             {RECORD_SEPARATOR}\n",
            task.id, task.title, task.description, task.priority, task.due_date,
        ));
    }
    out
}
