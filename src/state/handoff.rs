use crate::media::reference::TransientReference;

/// The two downstream viewers a selection can be handed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Solution,
    CheckSolution,
}

/// A transfer of control to a viewer.
///
/// The reference is the only state the viewer receives.
#[derive(Debug)]
pub struct Handoff {
    viewer: Viewer,
    reference: TransientReference,
}

impl Handoff {
    pub(crate) fn new(viewer: Viewer, reference: TransientReference) -> Self {
        Self { viewer, reference }
    }

    pub fn viewer(&self) -> Viewer {
        self.viewer
    }

    pub fn reference(&self) -> &TransientReference {
        &self.reference
    }

    pub fn into_reference(self) -> TransientReference {
        self.reference
    }
}
