use std::ops::Range;

use tracing::{debug, info};

use super::collection::FileCollection;
use super::data::FileEntry;
use super::handoff::{Handoff, Viewer};
use super::selection::Selection;
use crate::error::SessionError;
use crate::media::reference::{ReferenceAllocator, TransientReference};

/// The Session owns everything the gallery mutates: the uploaded files,
/// the selection/zoom cursors, and the references minted for them.
///
/// All mutation goes through here so a removal and its cursor repair
/// happen in the same call.
#[derive(Debug, Default)]
pub struct Session {
    files: FileCollection,
    selection: Selection,
    references: ReferenceAllocator,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &FileCollection {
        &self.files
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.selected()
    }

    pub fn zoomed(&self) -> Option<usize> {
        self.selection.zoomed()
    }

    pub fn references(&self) -> &ReferenceAllocator {
        &self.references
    }

    /// Append a batch of entries and mint display previews for the images.
    pub fn append(&mut self, entries: impl IntoIterator<Item = FileEntry>) -> Range<usize> {
        let added = self.files.append(entries);
        for index in added.clone() {
            if let Some(entry) = self.files.get(index).filter(|entry| entry.is_image()) {
                self.references.ensure_preview(entry);
            }
        }
        self.selection.on_appended();

        if !added.is_empty() {
            info!(added = added.len(), total = self.files.len(), "appended files");
        }
        added
    }

    /// Remove the entry at `index` and repair both cursors before returning.
    ///
    /// Out of range is reported but leaves everything untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<FileEntry, SessionError> {
        let removed = self.files.remove_at(index);
        // Also run for out-of-range indices; no valid cursor can be >= len.
        self.selection.on_removed(index);

        if let Ok(entry) = &removed {
            let revoked = self.references.release_entry(entry.id());
            info!(index, name = entry.name(), revoked, "removed file");
        }
        removed
    }

    /// Toggle selection of `index`. Indices outside the collection are ignored.
    pub fn select_toggle(&mut self, index: usize) {
        if self.in_range(index) {
            self.selection.select_toggle(index);
            debug!(selected = ?self.selection.selected(), "selection toggled");
        }
    }

    /// Toggle zoom of `index`. Indices outside the collection are ignored.
    pub fn zoom_toggle(&mut self, index: usize) {
        if self.in_range(index) {
            self.selection.zoom_toggle(index);
            debug!(zoomed = ?self.selection.zoomed(), "zoom toggled");
        }
    }

    pub fn collapse_zoom(&mut self) {
        self.selection.collapse_zoom();
    }

    /// Display reference for the entry at `index`, if it is an image
    pub fn preview(&self, index: usize) -> Option<&TransientReference> {
        let entry = self.files.get(index)?;
        self.references.preview(entry.id())
    }

    pub fn view_solution(&mut self) -> Result<Handoff, SessionError> {
        self.hand_off(Viewer::Solution)
    }

    pub fn check_solution(&mut self) -> Result<Handoff, SessionError> {
        self.hand_off(Viewer::CheckSolution)
    }

    /// Resolve the selected entry to a fresh reference for `viewer`.
    /// Without a selection nothing is allocated.
    pub fn hand_off(&mut self, viewer: Viewer) -> Result<Handoff, SessionError> {
        let index = self.selection.selected().ok_or(SessionError::NoSelection)?;
        let entry = self.files.get(index).ok_or(SessionError::IndexOutOfRange {
            index,
            len: self.files.len(),
        })?;

        let reference = self.references.allocate(entry);
        info!(?viewer, index, name = entry.name(), "handing off selection");
        Ok(Handoff::new(viewer, reference))
    }

    /// Return a finished handoff's reference to the allocator
    pub fn release(&mut self, handoff: Handoff) {
        self.references.release(handoff.into_reference());
    }

    fn in_range(&self, index: usize) -> bool {
        index < self.files.len()
    }
}
