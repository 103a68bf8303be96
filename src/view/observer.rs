// Observer interface between the navigator and presentation code
use crate::model::ViewId;
use std::cell::RefCell;
use std::rc::Rc;

/// A completed transition between two distinct views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewChange {
    pub previous: ViewId,
    pub current: ViewId,
}

/// Notifications broadcast by the navigator, in emission order for one
/// transition: `Deactivated`, `Activated`, then `Changed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavEvent {
    Deactivated(ViewId),
    Activated(ViewId),
    Changed(ViewChange),
}

pub trait ViewObserver {
    fn on_event(&mut self, event: &NavEvent);
}

// Lets the host keep a handle to an observer after handing it to the navigator.
impl<T: ViewObserver> ViewObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &NavEvent) {
        self.borrow_mut().on_event(event);
    }
}

impl ViewObserver for Vec<NavEvent> {
    fn on_event(&mut self, event: &NavEvent) {
        self.push(event.clone());
    }
}
