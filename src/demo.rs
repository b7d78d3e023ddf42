use anyhow::{Context, Result};
use std::io::Write;
use tracing::{error, info};

use crate::commands::files::{render_delete, render_modify, render_read, render_replace, render_stats};
use crate::config::DemoConfig;
use crate::file::operations;

/// Summary of a demonstration run
#[derive(Debug)]
pub struct DemoReport {
    /// Steps that finished, in order
    pub completed_steps: Vec<&'static str>,
    /// The failure that stopped the run, if any
    pub error: Option<anyhow::Error>,
}

impl DemoReport {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Run the demonstration, printing to stdout and errors to stderr
pub fn run_demo(config: &DemoConfig) -> DemoReport {
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run_demo_with(config, &mut stdout.lock(), &mut stderr.lock())
}

/// Run the demonstration against the given writers
///
/// The first failure stops the sequence; the completion banner is written
/// regardless.
pub fn run_demo_with(config: &DemoConfig, out: &mut dyn Write, err: &mut dyn Write) -> DemoReport {
    info!("Starting file operations demo on {}", config.file_name.display());
    let _ = writeln!(out, "=== FILE OPERATIONS DEMONSTRATION ===\n");

    let mut completed_steps = Vec::new();
    let result = run_steps(config, out, &mut completed_steps);

    let error = match result {
        Ok(()) => None,
        Err(e) => {
            error!("Demo stopped after {} steps: {:#}", completed_steps.len(), e);
            let _ = writeln!(err, "Error occurred: {:#}", e);
            let _ = writeln!(err, "{:?}", e);
            Some(e)
        }
    };

    let _ = writeln!(out, "\n=== FILE OPERATIONS COMPLETED ===");
    info!("Demo finished ({} steps completed)", completed_steps.len());

    DemoReport {
        completed_steps,
        error,
    }
}

fn run_steps(
    config: &DemoConfig,
    out: &mut dyn Write,
    completed: &mut Vec<&'static str>,
) -> Result<()> {
    let file = config.file_name.as_path();
    let copy = config.copy_file_name.as_path();

    writeln!(out, "1. CREATING AND WRITING TO FILE")?;
    operations::create_and_write(file, &config.initial_content)
        .context("Failed to create demo file")?;
    writeln!(out, "File created and written successfully: {}", file.display())?;
    completed.push("create");

    writeln!(out, "\n2. READING FILE CONTENT:")?;
    print_file(file, out)?;
    completed.push("read");

    writeln!(out, "\n3. APPENDING TO FILE:")?;
    operations::append(file, &config.appended_content).context("Failed to append to demo file")?;
    writeln!(out, "Content appended successfully to: {}", file.display())?;
    print_file(file, out)?;
    completed.push("append");

    writeln!(out, "\n4. MODIFYING SPECIFIC LINES:")?;
    let outcome = operations::modify_line(file, config.modify_line, &config.modified_text)
        .context("Failed to modify demo file")?;
    writeln!(out, "{}", render_modify(&outcome))?;
    print_file(file, out)?;
    completed.push("modify");

    writeln!(out, "\n5. SEARCH AND REPLACE:")?;
    let count = operations::search_and_replace(file, &config.search, &config.replace)
        .context("Failed to search and replace in demo file")?;
    writeln!(out, "{}", render_replace(&config.search, &config.replace, count))?;
    print_file(file, out)?;
    completed.push("replace");

    writeln!(out, "\n6. FILE STATISTICS:")?;
    let stats = operations::stats(file).context("Failed to collect file statistics")?;
    writeln!(out, "{}", render_stats(stats.as_ref(), file))?;
    completed.push("stats");

    writeln!(out, "\n7. COPYING FILE:")?;
    operations::copy(file, copy).context("Failed to copy demo file")?;
    writeln!(out, "File copied successfully to: {}", copy.display())?;
    completed.push("copy");

    if config.cleanup {
        writeln!(out, "\n8. CLEANUP:")?;
        let removed = operations::delete(copy).context("Failed to delete copy")?;
        writeln!(out, "{}", render_delete(copy, removed))?;
        completed.push("delete");
    }

    Ok(())
}

fn print_file(file: &std::path::Path, out: &mut dyn Write) -> Result<()> {
    let outcome = operations::read_all(file).context("Failed to read demo file")?;
    writeln!(out, "{}", render_read(&outcome, file))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn run(config: &DemoConfig) -> (DemoReport, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let report = run_demo_with(config, &mut out, &mut err);
        (
            report,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_full_demo() {
        let dir = tempdir().unwrap();
        let config = DemoConfig::default().rooted_at(dir.path());

        let (report, out, err) = run(&config);

        assert!(report.succeeded());
        assert_eq!(
            report.completed_steps,
            vec!["create", "read", "append", "modify", "replace", "stats", "copy"]
        );
        assert!(err.is_empty());
        assert!(out.contains(" 1: This is a MODIFIED sample text file."));
        assert!(out.contains("File Operations Demonstration"));
        assert!(out.contains("Lines: 5"));
        assert!(out.trim_end().ends_with("=== FILE OPERATIONS COMPLETED ==="));

        let original = fs::read_to_string(&config.file_name).unwrap();
        let copied = fs::read_to_string(&config.copy_file_name).unwrap();
        assert_eq!(original, copied);
    }

    #[test]
    fn test_cleanup_removes_copy() {
        let dir = tempdir().unwrap();
        let config = DemoConfig {
            cleanup: true,
            ..DemoConfig::default()
        }
        .rooted_at(dir.path());

        let (report, out, _) = run(&config);

        assert!(report.succeeded());
        assert_eq!(report.completed_steps.last(), Some(&"delete"));
        assert!(out.contains("File deleted:"));
        assert!(!config.copy_file_name.exists());
        assert!(config.file_name.exists());
    }

    #[test]
    fn test_invalid_line_is_not_fatal() {
        let dir = tempdir().unwrap();
        let config = DemoConfig {
            modify_line: 42,
            ..DemoConfig::default()
        }
        .rooted_at(dir.path());

        let (report, out, _) = run(&config);

        assert!(report.succeeded());
        assert!(out.contains("Invalid line number: 42"));
        assert!(out.contains(" 1: Hello, World!"));
    }

    #[test]
    fn test_failure_stops_sequence_but_completes() {
        let dir = tempdir().unwrap();
        let config = DemoConfig {
            copy_file_name: dir.path().join("no_such_dir").join("copy.txt"),
            ..DemoConfig::default()
        }
        .rooted_at(dir.path());

        let (report, out, err) = run(&config);

        assert!(!report.succeeded());
        assert_eq!(report.completed_steps.last(), Some(&"stats"));
        assert!(err.starts_with("Error occurred: Failed to copy demo file"));
        assert!(out.contains("=== FILE OPERATIONS COMPLETED ==="));
    }
}
