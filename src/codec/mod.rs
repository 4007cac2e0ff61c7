//! Persistence codec for the tasks file.
//!
//! The on-disk layout is a compatibility contract with files produced by
//! earlier versions of the program: a two-line cosmetic banner, then one
//! six-line record plus a separator line per task:
//!
//! ```text
//! Task ID: 1
//! Title: Buy milk
//! Description: 2% milk
//! Priority: 3
//! Due Date: 2024-01-01
//! Completed: No
//! ---------------------------
//! ```
//!
//! Fields are written even when empty. Labels are validated on read and a
//! mismatch fails the whole load; the banner and separator lines are
//! positional filler and their content is never inspected.

pub mod decode;
pub mod encode;

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub use decode::load;
pub use encode::save;

/// First banner line. Cosmetic only; skipped without validation on load.
pub(crate) const BANNER_TITLE: &str = "Your List Of Tasks To Do";
/// Second banner line. Cosmetic only.
pub(crate) const BANNER_RULE: &str = "==============================";
/// Separator written after every record. 27 characters wide.
pub(crate) const RECORD_SEPARATOR: &str = "---------------------------";

pub(crate) const LABEL_ID: &str = "Task ID:";
pub(crate) const LABEL_TITLE: &str = "Title:";
pub(crate) const LABEL_DESCRIPTION: &str = "Description:";
pub(crate) const LABEL_PRIORITY: &str = "Priority:";
pub(crate) const LABEL_DUE_DATE: &str = "Due Date:";
pub(crate) const LABEL_COMPLETED: &str = "Completed:";

/// Failure modes of the persistence codec.
#[derive(Debug)]
pub enum CodecError {
    /// The tasks file could not be read or written.
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying filesystem error.
        source: Box<dyn Error + Send + Sync>,
    },
    /// The file contents do not follow the record layout.
    ///
    /// A load that fails this way installs nothing; the in-memory store is
    /// only replaced after the whole file parsed.
    Malformed {
        /// 1-based line number of the offending line.
        line: usize,
        /// What was expected or found there.
        reason: String,
    },
}

impl Display for CodecError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "unable to open {}: {source}", path.display())
            }
            Self::Malformed { line, reason } => {
                write!(f, "malformed tasks file at line {line}: {reason}")
            }
        }
    }
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source.as_ref()),
            Self::Malformed { .. } => None,
        }
    }
}
