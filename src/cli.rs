//! CLI argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI parser for `taskdeck`.
#[derive(Debug, Parser)]
#[command(name = "taskdeck", version, about = "Manage a task list from a text menu")]
pub struct Cli {
    /// Tasks file used by the save and load menu actions.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

impl Cli {
    /// Resolves the tasks file path for this session.
    ///
    /// Precedence: `--file`, then the `TASKDECK_FILE` environment variable,
    /// then `tasks.txt` in the working directory.
    #[must_use]
    pub fn tasks_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(default_tasks_path)
    }
}

fn default_tasks_path() -> PathBuf {
    std::env::var("TASKDECK_FILE").map_or_else(|_| PathBuf::from("tasks.txt"), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn parses_with_no_arguments() {
        let cli = Cli::parse_from(["taskdeck"]);
        assert!(cli.file.is_none());
    }

    #[test]
    fn file_flag_takes_precedence() {
        let cli = Cli::parse_from(["taskdeck", "--file", "/tmp/my-tasks.txt"]);
        assert_eq!(cli.tasks_path(), PathBuf::from("/tmp/my-tasks.txt"));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["taskdeck", "--bogus"]).is_err());
    }
}
