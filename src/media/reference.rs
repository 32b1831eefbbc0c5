//! Transient image references
//!
//! A reference wraps an entry's bytes in an iced image handle so a widget
//! can draw it. References are process-local and revocable: the allocator
//! remembers which ones are live and drops them when their entry goes away.

use std::collections::HashMap;

use iced::widget::image::Handle;
use tracing::trace;

use crate::state::data::{EntryId, FileEntry};

/// A short-lived, drawable handle to one entry's bytes
#[derive(Debug)]
pub struct TransientReference {
    token: u64,
    entry: EntryId,
    handle: Handle,
}

impl TransientReference {
    /// Allocation token, unique per `allocate` call
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn entry(&self) -> EntryId {
        self.entry
    }

    pub fn handle(&self) -> &Handle {
        &self.handle
    }
}

/// Mints and tracks transient references.
///
/// Display previews are cached per entry (allocate on display, release on
/// removal); every other allocation is handed out and must come back
/// through [`ReferenceAllocator::release`].
#[derive(Debug, Default)]
pub struct ReferenceAllocator {
    next_token: u64,
    /// token -> owning entry, for every reference not yet released
    live: HashMap<u64, EntryId>,
    previews: HashMap<EntryId, TransientReference>,
}

impl ReferenceAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `entry` in a fresh reference. Repeated calls never share a token.
    pub fn allocate(&mut self, entry: &FileEntry) -> TransientReference {
        self.next_token += 1;
        let token = self.next_token;
        self.live.insert(token, entry.id());

        trace!(token, entry = entry.id().get(), name = entry.name(), "allocated reference");

        TransientReference {
            token,
            entry: entry.id(),
            handle: Handle::from_bytes(entry.bytes().to_vec()),
        }
    }

    /// Make sure `entry` has a cached display reference
    pub fn ensure_preview(&mut self, entry: &FileEntry) {
        if self.previews.contains_key(&entry.id()) {
            return;
        }
        let reference = self.allocate(entry);
        self.previews.insert(entry.id(), reference);
    }

    pub fn preview(&self, entry: EntryId) -> Option<&TransientReference> {
        self.previews.get(&entry)
    }

    /// Give a reference back. Returns false if it was already revoked.
    pub fn release(&mut self, reference: TransientReference) -> bool {
        let released = self.live.remove(&reference.token).is_some();
        trace!(token = reference.token, released, "released reference");
        released
    }

    /// Revoke every live reference that belongs to `entry`, preview included.
    /// Returns how many were revoked.
    pub fn release_entry(&mut self, entry: EntryId) -> usize {
        self.previews.remove(&entry);

        let before = self.live.len();
        self.live.retain(|_, owner| *owner != entry);
        before - self.live.len()
    }

    pub fn is_live(&self, reference: &TransientReference) -> bool {
        self.live.contains_key(&reference.token)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
