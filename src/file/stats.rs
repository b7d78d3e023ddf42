use crate::file::lines::split_lines;

/// Line, word and character counts for a text file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStats {
    pub line_count: usize,
    pub word_count: usize,
    /// Unicode scalar values, not bytes
    pub char_count: usize,
}

impl FileStats {
    pub fn from_content(content: &str) -> Self {
        Self {
            line_count: split_lines(content).len(),
            word_count: content.split_whitespace().count(),
            char_count: content.chars().count(),
        }
    }
}
