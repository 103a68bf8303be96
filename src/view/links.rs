// Navigation links - which link carries the "current" marker
use super::observer::{NavEvent, ViewObserver};
use crate::model::{ViewId, ViewRegistry};

pub struct ActiveLinks {
    links: Vec<ViewId>,
    active: Option<ViewId>,
}

impl ActiveLinks {
    pub fn new(registry: &ViewRegistry) -> Self {
        Self {
            links: registry.iter().cloned().collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<&ViewId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, link: &str) -> bool {
        self.active.as_ref().is_some_and(|v| v == link)
    }

    /// Links in registry order, paired with their current marker.
    pub fn markers(&self) -> impl Iterator<Item = (&ViewId, bool)> {
        self.links
            .iter()
            .map(move |link| (link, self.active.as_ref() == Some(link)))
    }
}

impl ViewObserver for ActiveLinks {
    fn on_event(&mut self, event: &NavEvent) {
        if let NavEvent::Activated(view) = event {
            self.active = Some(view.clone());
        }
    }
}
