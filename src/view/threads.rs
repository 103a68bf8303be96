// Thread emphasis - decorative threads that follow the active view
use super::observer::{NavEvent, ViewObserver};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Emphasis {
    /// No particular view selected: every thread at its resting level.
    Resting,
    Highlighted,
    Dimmed,
}

impl Emphasis {
    pub fn opacity(self) -> f32 {
        match self {
            Emphasis::Resting => 0.6,
            Emphasis::Highlighted => 0.8,
            Emphasis::Dimmed => 0.3,
        }
    }
}

/// Tracks which thread is highlighted. Views map to at most one thread;
/// the default view and unmapped views leave all threads resting.
pub struct ThreadEmphasis {
    threads: BTreeMap<String, Emphasis>,
    by_view: BTreeMap<String, String>,
    resting_view: String,
}

impl ThreadEmphasis {
    pub fn new(by_view: BTreeMap<String, String>, resting_view: &str) -> Self {
        let threads = by_view
            .values()
            .map(|thread| (thread.clone(), Emphasis::Resting))
            .collect();
        Self {
            threads,
            by_view,
            resting_view: resting_view.to_string(),
        }
    }

    pub fn emphasis(&self, thread: &str) -> Option<Emphasis> {
        self.threads.get(thread).copied()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.threads
            .iter()
            .find(|(_, e)| **e == Emphasis::Highlighted)
            .map(|(name, _)| name.as_str())
    }

    pub fn threads(&self) -> impl Iterator<Item = (&str, Emphasis)> {
        self.threads.iter().map(|(name, e)| (name.as_str(), *e))
    }

    fn focus(&mut self, view: &str) {
        let active = if view == self.resting_view {
            None
        } else {
            self.by_view.get(view)
        };

        for (name, emphasis) in self.threads.iter_mut() {
            *emphasis = match active {
                None => Emphasis::Resting,
                Some(thread) if thread == name => Emphasis::Highlighted,
                Some(_) => Emphasis::Dimmed,
            };
        }
    }
}

impl ViewObserver for ThreadEmphasis {
    fn on_event(&mut self, event: &NavEvent) {
        if let NavEvent::Activated(view) = event {
            self.focus(view.as_str());
        }
    }
}
