use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{FileOpsError, FileOpsResult};
use crate::error_handling::{fs_operation, fs_operation_if_exists};
use crate::file::lines::split_lines;
use crate::file::stats::FileStats;

/// A single line of a file together with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub number: usize,
    pub text: String,
}

/// Result of reading a whole file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// The file was not there; nothing was read
    Missing(PathBuf),
    Lines(Vec<NumberedLine>),
}

impl ReadOutcome {
    pub fn is_missing(&self) -> bool {
        matches!(self, ReadOutcome::Missing(_))
    }

    /// Plain line texts, empty when the file is missing
    pub fn texts(&self) -> Vec<&str> {
        match self {
            ReadOutcome::Missing(_) => Vec::new(),
            ReadOutcome::Lines(lines) => lines.iter().map(|l| l.text.as_str()).collect(),
        }
    }
}

/// Result of a single line modification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyOutcome {
    Modified { line: usize },
    /// Line was outside `[1, line_count]`; the file was left untouched
    InvalidLine { line: usize, line_count: usize },
}

/// Truncate or create `path` and write `content` verbatim
pub fn create_and_write(path: impl AsRef<Path>, content: &str) -> FileOpsResult<()> {
    let path = path.as_ref();
    debug!("Creating file: {}", path.display());

    let file = fs_operation(|| File::create(path), path, "create")?;
    let mut writer = BufWriter::new(file);
    fs_operation(|| writer.write_all(content.as_bytes()), path, "write")?;
    fs_operation(|| writer.flush(), path, "flush")?;

    info!("File created and written: {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Read every line of `path`, numbered from 1
///
/// A missing file is reported through [`ReadOutcome::Missing`] rather than
/// as an error.
pub fn read_all(path: impl AsRef<Path>) -> FileOpsResult<ReadOutcome> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    let file = match fs_operation_if_exists(|| File::open(path), path, "open")? {
        Some(file) => file,
        None => {
            info!("File does not exist: {}", path.display());
            return Ok(ReadOutcome::Missing(path.to_path_buf()));
        }
    };

    let content = read_content(file, path)?;
    let lines: Vec<NumberedLine> = split_lines(&content)
        .into_iter()
        .enumerate()
        .map(|(idx, text)| NumberedLine {
            number: idx + 1,
            text: text.to_string(),
        })
        .collect();

    info!("Read {} lines from {}", lines.len(), path.display());
    Ok(ReadOutcome::Lines(lines))
}

/// Append `content` to the end of `path`, creating it if needed
pub fn append(path: impl AsRef<Path>, content: &str) -> FileOpsResult<()> {
    let path = path.as_ref();
    debug!("Appending to file: {}", path.display());

    let file = fs_operation(
        || OpenOptions::new().create(true).append(true).open(path),
        path,
        "open for append",
    )?;
    let mut writer = BufWriter::new(file);
    fs_operation(|| writer.write_all(content.as_bytes()), path, "append")?;
    fs_operation(|| writer.flush(), path, "flush")?;

    info!("Appended {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Replace line `line_number` (1-based) of `path` with `new_content`
pub fn modify_line(
    path: impl AsRef<Path>,
    line_number: usize,
    new_content: &str,
) -> FileOpsResult<ModifyOutcome> {
    let path = path.as_ref();
    debug!("Modifying line {} of {}", line_number, path.display());

    let mut lines = read_lines(path)?;
    if line_number < 1 || line_number > lines.len() {
        info!(
            "Invalid line number {} for {} ({} lines)",
            line_number,
            path.display(),
            lines.len()
        );
        return Ok(ModifyOutcome::InvalidLine {
            line: line_number,
            line_count: lines.len(),
        });
    }

    lines[line_number - 1] = new_content.to_string();
    write_lines(path, &lines)?;

    info!("Line {} of {} modified", line_number, path.display());
    Ok(ModifyOutcome::Modified { line: line_number })
}

/// Replace every literal occurrence of `search` with `replace`, line by line
///
/// Returns how many occurrences were replaced.
pub fn search_and_replace(
    path: impl AsRef<Path>,
    search: &str,
    replace: &str,
) -> FileOpsResult<usize> {
    let path = path.as_ref();
    debug!(
        "Replacing '{}' with '{}' in {}",
        search,
        replace,
        path.display()
    );

    if search.is_empty() {
        return Err(FileOpsError::invalid_argument(
            "search text must not be empty",
        ));
    }

    let lines = read_lines(path)?;
    let mut occurrences = 0;
    let replaced: Vec<String> = lines
        .iter()
        .map(|line| {
            occurrences += line.matches(search).count();
            line.replace(search, replace)
        })
        .collect();

    write_lines(path, &replaced)?;

    info!(
        "Replaced {} occurrences of '{}' in {}",
        occurrences,
        search,
        path.display()
    );
    Ok(occurrences)
}

/// Line, word and character counts of `path`, or `None` if it does not exist
pub fn stats(path: impl AsRef<Path>) -> FileOpsResult<Option<FileStats>> {
    let path = path.as_ref();
    debug!("Collecting stats for {}", path.display());

    let content = match fs_operation_if_exists(|| fs::read_to_string(path), path, "read")? {
        Some(content) => content,
        None => {
            info!("File does not exist: {}", path.display());
            return Ok(None);
        }
    };

    let stats = FileStats::from_content(&content);
    debug!("Stats for {}: {:?}", path.display(), stats);
    Ok(Some(stats))
}

/// Copy `src` over `dst`, returning the number of bytes copied
///
/// Unlike [`read_all`], a missing source is a hard failure.
pub fn copy(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> FileOpsResult<u64> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    debug!("Copying {} to {}", src.display(), dst.display());

    let bytes = fs_operation(|| fs::copy(src, dst), src, "copy")?;

    info!("Copied {} bytes from {} to {}", bytes, src.display(), dst.display());
    Ok(bytes)
}

/// Remove `path` if present; returns whether a file was removed
pub fn delete(path: impl AsRef<Path>) -> FileOpsResult<bool> {
    let path = path.as_ref();
    debug!("Deleting file: {}", path.display());

    let removed = fs_operation_if_exists(|| fs::remove_file(path), path, "delete")?.is_some();

    if removed {
        info!("File deleted: {}", path.display());
    } else {
        debug!("Nothing to delete at {}", path.display());
    }
    Ok(removed)
}

/// Whole content of `path` as a string
pub fn read_to_string(path: impl AsRef<Path>) -> FileOpsResult<String> {
    let path = path.as_ref();
    debug!("Reading file to string: {}", path.display());

    fs_operation(|| fs::read_to_string(path), path, "read")
}

/// Truncate `path` and write each item followed by a line break
pub fn write_lines<S: AsRef<str>>(path: impl AsRef<Path>, lines: &[S]) -> FileOpsResult<()> {
    let path = path.as_ref();
    debug!("Writing {} lines to {}", lines.len(), path.display());

    let file = fs_operation(|| File::create(path), path, "create")?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        fs_operation(|| writeln!(writer, "{}", line.as_ref()), path, "write")?;
    }
    fs_operation(|| writer.flush(), path, "flush")
}

fn read_lines(path: &Path) -> FileOpsResult<Vec<String>> {
    let file = fs_operation(|| File::open(path), path, "open")?;
    let content = read_content(file, path)?;
    Ok(split_lines(&content).into_iter().map(str::to_string).collect())
}

fn read_content(file: File, path: &Path) -> FileOpsResult<String> {
    let mut content = String::new();
    let mut reader = BufReader::new(file);
    fs_operation(|| reader.read_to_string(&mut content), path, "read")?;
    Ok(content)
}
