use crate::document::Document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a source file into a [`Document`] snapshot
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(Document::new(&content))
}

/// Collect source files under `root`.
///
/// A file path is returned as-is regardless of extension. A directory is
/// scanned recursively for files whose extension is in `extensions`.
pub fn scan_source_files(root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>, IoError> {
    if !root.exists() {
        return Err(IoError::NotFound(root.to_path_buf()));
    }
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, extensions, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(
    dir: &Path,
    extensions: &[String],
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            // Dependencies are never worth folding
            if path.file_name().is_some_and(|n| n == "node_modules") {
                continue;
            }
            scan_directory_recursive(&path, extensions, files)?;
        } else if let Some(ext) = path.extension().and_then(|e| e.to_str())
            && extensions.iter().any(|wanted| wanted == ext)
        {
            files.push(path);
        }
    }

    Ok(())
}
