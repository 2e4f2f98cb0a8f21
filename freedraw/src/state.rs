use crate::mode::Mode;
use crate::registry::Registry;

/// State scoped to one map attachment.
#[derive(Clone, Debug, Default)]
pub struct MapState {
    pub registry: Registry,
    pub mode: Mode,
    /// Set when an `edit` notification is held back until edit mode is left.
    pub deferred_edit: bool,
}

impl MapState {
    pub fn new() -> Self {
        Self::default()
    }
}
