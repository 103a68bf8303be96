mod history;
mod location;

pub use history::{HistoryEntry, HistoryStack, MemoryHistory, PopState};
pub use location::{fragment_for, parse_fragment};
