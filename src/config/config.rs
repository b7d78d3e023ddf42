use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Parameters of the demonstration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// File the demo creates and edits
    pub file_name: PathBuf,
    /// Destination of the copy step
    pub copy_file_name: PathBuf,
    pub initial_content: String,
    pub appended_content: String,
    /// 1-based line replaced in the modify step
    pub modify_line: usize,
    pub modified_text: String,
    pub search: String,
    pub replace: String,
    /// Delete the copy at the end of the run
    pub cleanup: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            file_name: PathBuf::from("demo_file.txt"),
            copy_file_name: PathBuf::from("demo_file_copy.txt"),
            initial_content: "Hello, World!\nThis is a sample text file.\nFile Operations Demo\n"
                .to_string(),
            appended_content: "Appended line 1\nAppended line 2\n".to_string(),
            modify_line: 1,
            modified_text: "This is a MODIFIED sample text file.".to_string(),
            search: "Demo".to_string(),
            replace: "Demonstration".to_string(),
            cleanup: false,
        }
    }
}

impl DemoConfig {
    /// Resolve both file names against `dir`, keeping absolute paths as they are
    pub fn rooted_at(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.file_name = dir.join(&self.file_name);
        self.copy_file_name = dir.join(&self.copy_file_name);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.file_name, PathBuf::from("demo_file.txt"));
        assert_eq!(config.modify_line, 1);
        assert_eq!(config.search, "Demo");
        assert!(!config.cleanup);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: DemoConfig = toml::from_str(
            r#"
            file_name = "notes.txt"
            cleanup = true
            "#,
        )
        .unwrap();

        assert_eq!(config.file_name, PathBuf::from("notes.txt"));
        assert!(config.cleanup);
        assert_eq!(config.copy_file_name, PathBuf::from("demo_file_copy.txt"));
        assert_eq!(config.replace, "Demonstration");
    }

    #[test]
    fn test_rooted_at() {
        let config = DemoConfig {
            copy_file_name: PathBuf::from("/abs/copy.txt"),
            ..DemoConfig::default()
        }
        .rooted_at("/tmp/work");

        assert_eq!(config.file_name, PathBuf::from("/tmp/work/demo_file.txt"));
        assert_eq!(config.copy_file_name, PathBuf::from("/abs/copy.txt"));
    }
}
