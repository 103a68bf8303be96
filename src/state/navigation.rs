// Navigation state - the active view and its synchronization with host history
use crate::io::{HistoryEntry, HistoryStack};
use crate::model::{ViewId, ViewRegistry};
use crate::view::{NavEvent, ViewChange, ViewObserver};
use tracing::{debug, trace};

/// Outcome of a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    Moved(ViewChange),
    /// Target was already the current view.
    Unchanged,
    /// Target is not a registered view; nothing happened.
    UnknownTarget,
}

impl Transition {
    pub fn moved(&self) -> bool {
        matches!(self, Transition::Moved(_))
    }
}

/// Single owner of the active view and the only writer of navigation history.
pub struct Navigator<H: HistoryStack> {
    registry: ViewRegistry,
    current: ViewId,
    history: H,
    observers: Vec<Box<dyn ViewObserver>>,
}

impl<H: HistoryStack> Navigator<H> {
    /// Seed the current view from the URL fragment read at startup.
    ///
    /// Nothing is pushed to history and no observer exists yet.
    pub fn init(registry: ViewRegistry, fragment: Option<&str>, history: H) -> Self {
        let current = registry.resolve_fragment(fragment).clone();
        debug!(view = %current, ?fragment, "navigator initialized");
        Self {
            registry,
            current,
            history,
            observers: Vec::new(),
        }
    }

    /// Register an observer. It is told about the active view right away.
    pub fn subscribe<O: ViewObserver + 'static>(&mut self, mut observer: O) {
        observer.on_event(&NavEvent::Activated(self.current.clone()));
        self.observers.push(Box::new(observer));
    }

    pub fn navigate_to(&mut self, target: &str, record_history: bool) -> Transition {
        let Some(target) = self.registry.get(target).cloned() else {
            debug!(requested = target, current = %self.current, "ignoring unknown view");
            return Transition::UnknownTarget;
        };

        if target == self.current {
            trace!(view = %target, "already active");
            return Transition::Unchanged;
        }

        let previous = std::mem::replace(&mut self.current, target.clone());
        self.broadcast(&NavEvent::Deactivated(previous.clone()));
        self.broadcast(&NavEvent::Activated(target.clone()));

        if record_history {
            self.history.push(HistoryEntry::for_view(&target));
        }

        debug!(from = %previous, to = %target, record_history, "view changed");
        let change = ViewChange {
            previous,
            current: target,
        };
        self.broadcast(&NavEvent::Changed(change.clone()));
        Transition::Moved(change)
    }

    /// React to the host moving through history. History is authoritative,
    /// so an absent or unknown state leaves the current view alone.
    pub fn handle_history_event(&mut self, popped: Option<&str>) -> Transition {
        match popped {
            Some(view) if self.registry.contains(view) => self.navigate_to(view, false),
            Some(view) => {
                debug!(view, "popped state names no registered view");
                Transition::UnknownTarget
            }
            None => {
                trace!("popped state carries no view");
                Transition::Unchanged
            }
        }
    }

    pub fn next(&mut self) -> Transition {
        let target = self.registry.next_after(&self.current).clone();
        self.navigate_to(target.as_str(), true)
    }

    pub fn previous(&mut self) -> Transition {
        let target = self.registry.previous_before(&self.current).clone();
        self.navigate_to(target.as_str(), true)
    }

    pub fn go_home(&mut self) -> Transition {
        let target = self.registry.default_view().clone();
        self.navigate_to(target.as_str(), true)
    }

    pub fn current(&self) -> &ViewId {
        &self.current
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    fn broadcast(&mut self, event: &NavEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}
