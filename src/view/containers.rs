// View containers - which container is shown for the active view
use super::observer::{NavEvent, ViewObserver};
use crate::model::ViewId;
use std::collections::HashSet;
use tracing::warn;

/// Visibility of the page's view containers.
///
/// A registered view may lack a container; the navigator still moves to it,
/// and this observer simply shows nothing until a view with a container
/// becomes active.
pub struct ViewContainers {
    available: HashSet<String>,
    visible: Option<ViewId>,
}

impl ViewContainers {
    pub fn new<I, S>(available: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: available.into_iter().map(Into::into).collect(),
            visible: None,
        }
    }

    pub fn visible(&self) -> Option<&ViewId> {
        self.visible.as_ref()
    }

    pub fn has_container(&self, view: &str) -> bool {
        self.available.contains(view)
    }
}

impl ViewObserver for ViewContainers {
    fn on_event(&mut self, event: &NavEvent) {
        match event {
            NavEvent::Deactivated(view) => {
                if self.visible.as_ref() == Some(view) {
                    self.visible = None;
                }
            }
            NavEvent::Activated(view) => {
                if self.has_container(view.as_str()) {
                    self.visible = Some(view.clone());
                } else {
                    warn!(view = %view, "no container for active view");
                    self.visible = None;
                }
            }
            NavEvent::Changed(_) => {}
        }
    }
}
