pub mod files;

use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;

use crate::file::operations;
pub use files::*;

/// A single file operation run from the command line
#[derive(Debug, Clone, Subcommand)]
pub enum FileCommand {
    /// Create or truncate a file and write content to it
    Write { path: PathBuf, content: String },

    /// Print every line of a file with its line number
    Read { path: PathBuf },

    /// Append content to the end of a file
    Append { path: PathBuf, content: String },

    /// Replace a single line (1-based)
    ModifyLine {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// Replace every literal occurrence of a string
    Replace {
        path: PathBuf,
        search: String,
        replace: String,
    },

    /// Show line, word and character counts
    Stats { path: PathBuf },

    /// Copy a file, overwriting the destination
    Copy { src: PathBuf, dst: PathBuf },

    /// Delete a file if it exists
    Delete { path: PathBuf },
}

impl FileCommand {
    /// Run the command and return the text to print
    pub fn run(&self) -> Result<String> {
        let output = match self {
            FileCommand::Write { path, content } => {
                operations::create_and_write(path, &unescape(content))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                format!("File created and written successfully: {}", path.display())
            }
            FileCommand::Read { path } => {
                let outcome = operations::read_all(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                render_read(&outcome, path)
            }
            FileCommand::Append { path, content } => {
                operations::append(path, &unescape(content))
                    .with_context(|| format!("Failed to append to {}", path.display()))?;
                format!("Content appended successfully to: {}", path.display())
            }
            FileCommand::ModifyLine {
                path,
                line,
                content,
            } => {
                let outcome = operations::modify_line(path, *line, content)
                    .with_context(|| format!("Failed to modify {}", path.display()))?;
                render_modify(&outcome)
            }
            FileCommand::Replace {
                path,
                search,
                replace,
            } => {
                let count = operations::search_and_replace(path, search, replace)
                    .with_context(|| format!("Failed to search and replace in {}", path.display()))?;
                render_replace(search, replace, count)
            }
            FileCommand::Stats { path } => {
                let stats = operations::stats(path)
                    .with_context(|| format!("Failed to collect stats for {}", path.display()))?;
                render_stats(stats.as_ref(), path)
            }
            FileCommand::Copy { src, dst } => {
                operations::copy(src, dst).with_context(|| {
                    format!("Failed to copy {} to {}", src.display(), dst.display())
                })?;
                format!("File copied successfully to: {}", dst.display())
            }
            FileCommand::Delete { path } => {
                let removed = operations::delete(path)
                    .with_context(|| format!("Failed to delete {}", path.display()))?;
                render_delete(path, removed)
            }
        };
        Ok(output)
    }
}
