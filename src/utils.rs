use crate::errors::BackupError;
use filetime::{set_file_times, FileTime};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> Result<PathBuf, BackupError> {
    if path == "~" || path.starts_with("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| BackupError::InvalidPath("Could not find home directory".to_owned()))?;
        if path == "~" {
            return Ok(home);
        }
        return Ok(home.join(&path[2..]));
    }
    Ok(PathBuf::from(path))
}

/// Makes `path` absolute against the current directory and folds `.`/`..`
/// without touching the filesystem.
pub fn absolutize(path: &Path) -> Result<PathBuf, BackupError> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

/// Renders `path` relative to `root` with `/` separators.
pub fn relative_path_string(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}

/// Copies file bytes, permission bits and timestamps, creating parent
/// directories on demand. Symbolic links are followed. Refuses to copy a
/// file onto itself.
pub fn copy_file_with_metadata(src: &Path, dst: &Path) -> Result<u64, io::Error> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent)?;
    }
    if is_same_file(src, dst) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} and {} are the same file", src.display(), dst.display()),
        ));
    }
    let bytes = fs::copy(src, dst)?;

    let stat_src = fs::metadata(src)?;
    fs::set_permissions(dst, stat_src.permissions())?;
    set_file_times(
        dst,
        FileTime::from_last_access_time(&stat_src),
        FileTime::from_last_modification_time(&stat_src),
    )?;
    Ok(bytes)
}

fn is_same_file(src: &Path, dst: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(src), Ok(dst)) => src == dst,
        _ => false,
    }
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}
