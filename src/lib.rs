//! Core library for the `taskdeck` CLI.
//!
//! A session holds one in-memory [`store::TaskStore`], drives it through the
//! interactive [`menu`], and persists it on demand through the [`codec`] via
//! the [`ports::filesystem::FileSystem`] boundary.

pub mod adapters;
pub mod cli;
pub mod codec;
pub mod logging;
pub mod menu;
pub mod model;
pub mod ports;
pub mod store;

use std::io;

use clap::Parser;

use crate::adapters::live::LiveFileSystem;
use crate::store::TaskStore;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails, logging cannot be
/// initialized, or the terminal streams fail.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    logging::init()?;

    let tasks_path = cli.tasks_path();
    log::info!("session started, tasks file {}", tasks_path.display());

    let mut store = TaskStore::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    menu::run_session(&mut stdin.lock(), &mut stdout.lock(), &mut store, &LiveFileSystem, &tasks_path)
        .map_err(|err| format!("terminal I/O failed: {err}"))
}
