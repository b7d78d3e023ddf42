use crate::error::{FileOpsError, FileOpsResult};
use std::path::Path;
use tracing::error;

/// Safely executes filesystem operations, tagging failures with the path
pub fn fs_operation<T, F>(operation: F, path: impl AsRef<Path>, operation_name: &str) -> FileOpsResult<T>
where
    F: FnOnce() -> std::io::Result<T>,
{
    let path_ref = path.as_ref();
    operation().map_err(|e| {
        error!(
            "{} failed on {}: {} (at {}:{})",
            operation_name,
            path_ref.display(),
            e,
            file!(),
            line!()
        );
        FileOpsError::io_error(e, Some(path_ref))
    })
}

/// Like [`fs_operation`], but a missing file yields `None` instead of an error
pub fn fs_operation_if_exists<T, F>(
    operation: F,
    path: impl AsRef<Path>,
    operation_name: &str,
) -> FileOpsResult<Option<T>>
where
    F: FnOnce() -> std::io::Result<T>,
{
    match operation() {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => fs_operation(|| Err(e), path, operation_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fs_operation_attaches_path() {
        let result: FileOpsResult<()> = fs_operation(
            || Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            "locked.txt",
            "write",
        );

        let err = result.unwrap_err();
        assert_eq!(err.path(), Some(Path::new("locked.txt")));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_if_exists_maps_not_found_to_none() {
        let result: FileOpsResult<Option<u8>> = fs_operation_if_exists(
            || Err(io::Error::new(io::ErrorKind::NotFound, "nope")),
            "absent.txt",
            "read",
        );
        assert!(result.unwrap().is_none());

        let result = fs_operation_if_exists(|| Ok(7u8), "present.txt", "read");
        assert_eq!(result.unwrap(), Some(7));
    }
}
