use std::fmt::Write;
use std::path::Path;

use crate::file::{FileStats, ModifyOutcome, ReadOutcome};

const RULE: &str = "----------------------------------------";

/// Render a read result the way it is printed on the console
pub fn render_read(outcome: &ReadOutcome, path: &Path) -> String {
    match outcome {
        ReadOutcome::Missing(missing) => render_missing(missing),
        ReadOutcome::Lines(lines) => {
            let mut out = String::new();
            let _ = writeln!(out, "Content of {}:", path.display());
            let _ = writeln!(out, "{}", RULE);
            for line in lines {
                let _ = writeln!(out, "{:>2}: {}", line.number, line.text);
            }
            out.push_str(RULE);
            out
        }
    }
}

pub fn render_missing(path: &Path) -> String {
    format!("File does not exist: {}", path.display())
}

pub fn render_modify(outcome: &ModifyOutcome) -> String {
    match outcome {
        ModifyOutcome::Modified { line } => format!("Line {} modified successfully.", line),
        ModifyOutcome::InvalidLine { line, .. } => format!("Invalid line number: {}", line),
    }
}

pub fn render_replace(search: &str, replace: &str, occurrences: usize) -> String {
    format!(
        "Replaced all occurrences of '{}' with '{}' ({} found)",
        search, replace, occurrences
    )
}

/// Render stats, or the missing-file notice when there are none
pub fn render_stats(stats: Option<&FileStats>, path: &Path) -> String {
    match stats {
        None => render_missing(path),
        Some(stats) => format!(
            "File: {}\nLines: {}\nWords: {}\nCharacters: {}",
            path.display(),
            stats.line_count,
            stats.word_count,
            stats.char_count
        ),
    }
}

pub fn render_delete(path: &Path, removed: bool) -> String {
    if removed {
        format!("File deleted: {}", path.display())
    } else {
        format!("Nothing to delete: {}", path.display())
    }
}

/// Turn literal `\n` and `\t` escapes from the command line into real characters
pub fn unescape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::NumberedLine;
    use std::path::PathBuf;

    #[test]
    fn test_render_read_numbers_lines() {
        let outcome = ReadOutcome::Lines(vec![
            NumberedLine {
                number: 1,
                text: "Hello, World!".to_string(),
            },
            NumberedLine {
                number: 10,
                text: "tenth".to_string(),
            },
        ]);

        let rendered = render_read(&outcome, Path::new("demo.txt"));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Content of demo.txt:");
        assert_eq!(lines[1], RULE);
        assert_eq!(lines[2], " 1: Hello, World!");
        assert_eq!(lines[3], "10: tenth");
        assert_eq!(lines[4], RULE);
    }

    #[test]
    fn test_render_missing_and_invalid_line() {
        let outcome = ReadOutcome::Missing(PathBuf::from("gone.txt"));
        assert_eq!(
            render_read(&outcome, Path::new("gone.txt")),
            "File does not exist: gone.txt"
        );
        assert_eq!(
            render_modify(&ModifyOutcome::InvalidLine {
                line: 9,
                line_count: 3
            }),
            "Invalid line number: 9"
        );
        assert_eq!(render_stats(None, Path::new("gone.txt")), "File does not exist: gone.txt");
    }

    #[test]
    fn test_render_stats() {
        let stats = FileStats {
            line_count: 2,
            word_count: 8,
            char_count: 42,
        };
        assert_eq!(
            render_stats(Some(&stats), Path::new("demo.txt")),
            "File: demo.txt\nLines: 2\nWords: 8\nCharacters: 42"
        );
    }

    #[test]
    fn test_render_replace_reports_count() {
        assert_eq!(
            render_replace("Demo", "Demonstration", 3),
            "Replaced all occurrences of 'Demo' with 'Demonstration' (3 found)"
        );
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape(r"one\ntwo"), "one\ntwo");
        assert_eq!(unescape(r"a\tb\\n"), "a\tb\\n");
        assert_eq!(unescape(r"trailing\"), "trailing\\");
        assert_eq!(unescape(r"keep \x"), "keep \\x");
    }
}
