// History stack - the host's back/forward list of (view, fragment) entries
use super::location::fragment_for;
use crate::model::ViewId;

/// State recorded for one navigation: the view and the fragment shown in the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub view: ViewId,
    pub fragment: String,
}

impl HistoryEntry {
    pub fn for_view(view: &ViewId) -> Self {
        Self {
            view: view.clone(),
            fragment: fragment_for(view),
        }
    }
}

/// What the host reports when the user moves back or forward.
///
/// `entry` is `None` when the slot was never written by the navigator,
/// e.g. the page-load entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopState {
    pub entry: Option<HistoryEntry>,
}

impl PopState {
    pub fn view(&self) -> Option<&str> {
        self.entry.as_ref().map(|e| e.view.as_str())
    }
}

/// The host history the navigator writes to. The navigator only ever appends
/// and reads the latest entry; moving through history belongs to the host.
pub trait HistoryStack {
    fn push(&mut self, entry: HistoryEntry);

    /// Entry at the host's current position, if the navigator wrote it.
    fn latest(&self) -> Option<&HistoryEntry>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-process history with browser semantics: a stateless landing slot,
/// forward entries dropped on push, and a movable cursor.
#[derive(Clone, Debug)]
pub struct MemoryHistory {
    slots: Vec<Option<HistoryEntry>>,
    index: usize,
    pushed: usize,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            slots: vec![None],
            index: 0,
            pushed: 0,
        }
    }

    pub fn back(&mut self) -> Option<PopState> {
        if self.index > 0 {
            self.index -= 1;
            Some(self.pop_state())
        } else {
            None
        }
    }

    pub fn forward(&mut self) -> Option<PopState> {
        if self.index + 1 < self.slots.len() {
            self.index += 1;
            Some(self.pop_state())
        } else {
            None
        }
    }

    /// Number of entries appended through `push` since creation.
    pub fn pushed(&self) -> usize {
        self.pushed
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn entries(&self) -> impl Iterator<Item = Option<&HistoryEntry>> {
        self.slots.iter().map(Option::as_ref)
    }

    fn pop_state(&self) -> PopState {
        PopState {
            entry: self.slots[self.index].clone(),
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStack for MemoryHistory {
    fn push(&mut self, entry: HistoryEntry) {
        // Remove any forward history when navigating somewhere new
        self.slots.truncate(self.index + 1);
        self.slots.push(Some(entry));
        self.index += 1;
        self.pushed += 1;
    }

    fn latest(&self) -> Option<&HistoryEntry> {
        self.slots[self.index].as_ref()
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}
