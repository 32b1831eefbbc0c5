//! File intake
//!
//! Turns picked or dropped paths into [`FileEntry`] values. Reading happens
//! on the async executor so the UI loop only ever sees a finished batch.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{AppError, Result};
use crate::state::data::FileEntry;

/// MIME type used when the bytes are not a recognised image format
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Guess a MIME type from the file's magic bytes
pub fn sniff_mime(bytes: &[u8]) -> &'static str {
    image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .unwrap_or(FALLBACK_MIME)
}

/// Build an entry from bytes already in memory
pub fn entry_from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> FileEntry {
    let mime = sniff_mime(&bytes);
    FileEntry::new(name, mime, bytes)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Read one file into an entry
pub async fn read_entry(path: PathBuf) -> Result<FileEntry> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| AppError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(entry_from_bytes(display_name(&path), bytes))
}

/// Read every path in order, skipping the ones that cannot be read
pub async fn load_entries(paths: Vec<PathBuf>) -> Vec<FileEntry> {
    let mut entries = Vec::with_capacity(paths.len());

    for path in paths {
        match read_entry(path).await {
            Ok(entry) => entries.push(entry),
            Err(err) => warn!(%err, "skipping unreadable file"),
        }
    }

    entries
}

/// Show the native multi-file picker and read whatever the user chose.
/// Cancelling the dialog yields an empty batch.
pub async fn pick_files(title: String) -> Vec<FileEntry> {
    let picked = rfd::AsyncFileDialog::new()
        .set_title(title)
        .pick_files()
        .await;

    let paths: Vec<PathBuf> = match picked {
        Some(handles) => handles
            .iter()
            .map(|handle| handle.path().to_path_buf())
            .collect(),
        None => return Vec::new(),
    };
    info!(count = paths.len(), "files picked");

    load_entries(paths).await
}
