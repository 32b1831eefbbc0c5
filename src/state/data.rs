//! Shared data structures for the session state
//!
//! These structs represent the data model that flows between
//! file intake, the collection, and the UI layer.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-local identity of an uploaded entry.
///
/// Selection never uses this; it only keys reference bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// A single uploaded file: its bytes and declared MIME type
#[derive(Clone, PartialEq)]
pub struct FileEntry {
    id: EntryId,
    /// Filename only (e.g., "page_12.jpg")
    name: String,
    /// MIME type such as "image/png"
    mime: String,
    bytes: Arc<[u8]>,
}

impl FileEntry {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            id: EntryId::next(),
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime(&self) -> &str {
        &self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Only `image/*` entries get a preview and can be picked in the gallery
    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

// Bytes are left out so logs stay readable
impl fmt::Debug for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileEntry")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("len", &self.bytes.len())
            .finish()
    }
}
