/// The two cursors over the collection's index space.
///
/// `selected` drives navigation, `zoomed` drives the enlarged view.
/// They move independently; only removal repair touches both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<usize>,
    zoomed: Option<usize>,
}

fn toggle(cursor: Option<usize>, index: usize) -> Option<usize> {
    if cursor == Some(index) {
        None
    } else {
        Some(index)
    }
}

fn repair(cursor: Option<usize>, removed: usize) -> Option<usize> {
    match cursor {
        Some(current) if current == removed => None,
        Some(current) if current > removed => Some(current - 1),
        other => other,
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn zoomed(&self) -> Option<usize> {
        self.zoomed
    }

    pub fn select_toggle(&mut self, index: usize) {
        self.selected = toggle(self.selected, index);
    }

    pub fn zoom_toggle(&mut self, index: usize) {
        self.zoomed = toggle(self.zoomed, index);
    }

    pub fn collapse_zoom(&mut self) {
        self.zoomed = None;
    }

    /// Re-point both cursors after the entry at `index` was removed
    pub fn on_removed(&mut self, index: usize) {
        self.selected = repair(self.selected, index);
        self.zoomed = repair(self.zoomed, index);
    }

    /// Appends never invalidate existing indices.
    pub fn on_appended(&mut self) {}
}
