use crate::config::Config;
use crate::error::AppError;
use crate::io::{HistoryStack, MemoryHistory};
use crate::message::Message;
use crate::model::ViewId;
use crate::state::{Navigator, Transition};
use crate::subscription::{KeyBindings, KonamiTracker};
use crate::view::{ActiveLinks, Emphasis, ThreadEmphasis, ViewContainers};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

pub struct Crossroads {
    // Navigation
    navigator: Navigator<MemoryHistory>,

    // Input
    bindings: KeyBindings,
    konami: KonamiTracker,

    // Presentation observers
    links: Rc<RefCell<ActiveLinks>>,
    containers: Rc<RefCell<ViewContainers>>,
    threads: Rc<RefCell<ThreadEmphasis>>,

    easter_eggs: usize,
}

impl Crossroads {
    /// Build the page state from configuration and the startup URL fragment.
    pub fn new(config: &Config, fragment: Option<&str>) -> Result<Self, AppError> {
        let registry = config.views.build_registry()?;
        let bindings = KeyBindings::from_config(&config.keys)?;

        let links = Rc::new(RefCell::new(ActiveLinks::new(&registry)));
        let containers = Rc::new(RefCell::new(ViewContainers::new(
            config.views.container_ids(),
        )));
        let threads = Rc::new(RefCell::new(ThreadEmphasis::new(
            config.threads.by_view.clone(),
            registry.default_view().as_str(),
        )));

        for view in registry.iter() {
            if !containers.borrow().has_container(view.as_str()) {
                warn!(view = %view, "registered view has no container");
            }
        }

        let mut navigator = Navigator::init(registry, fragment, MemoryHistory::new());
        navigator.subscribe(Rc::clone(&links));
        navigator.subscribe(Rc::clone(&containers));
        navigator.subscribe(Rc::clone(&threads));

        Ok(Self {
            navigator,
            bindings,
            konami: KonamiTracker::new(),
            links,
            containers,
            threads,
            easter_eggs: 0,
        })
    }

    pub fn update(&mut self, message: Message) -> Transition {
        match message {
            Message::KeyPressed(key) => {
                let egg = self.konami.press(&key);
                let transition = match self.bindings.handle_key(&key) {
                    Some(msg) => self.update(msg),
                    None => Transition::Unchanged,
                };
                if egg {
                    self.update(Message::EasterEgg);
                }
                transition
            }
            Message::Navigate(target) => self.navigator.navigate_to(&target, true),
            Message::Next => self.navigator.next(),
            Message::Previous => self.navigator.previous(),
            Message::Home => self.navigator.go_home(),
            Message::Back => match self.navigator.history_mut().back() {
                Some(state) => self.navigator.handle_history_event(state.view()),
                None => {
                    debug!("no earlier history entry");
                    Transition::Unchanged
                }
            },
            Message::Forward => match self.navigator.history_mut().forward() {
                Some(state) => self.navigator.handle_history_event(state.view()),
                None => {
                    debug!("no later history entry");
                    Transition::Unchanged
                }
            },
            Message::PopState(view) => self.navigator.handle_history_event(view.as_deref()),
            Message::EasterEgg => {
                self.easter_eggs += 1;
                info!("You found the easter egg! The crossroads shine brighter.");
                Transition::Unchanged
            }
        }
    }

    pub fn current(&self) -> &ViewId {
        self.navigator.current()
    }

    pub fn navigator(&self) -> &Navigator<MemoryHistory> {
        &self.navigator
    }

    pub fn active_link(&self) -> Option<ViewId> {
        self.links.borrow().active().cloned()
    }

    pub fn visible_container(&self) -> Option<ViewId> {
        self.containers.borrow().visible().cloned()
    }

    pub fn highlighted_thread(&self) -> Option<String> {
        self.threads.borrow().highlighted().map(String::from)
    }

    pub fn thread_emphasis(&self) -> Vec<(String, Emphasis)> {
        self.threads
            .borrow()
            .threads()
            .map(|(name, e)| (name.to_string(), e))
            .collect()
    }

    pub fn history_len(&self) -> usize {
        self.navigator.history().len()
    }

    pub fn easter_eggs(&self) -> usize {
        self.easter_eggs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Key, Named};
    use pretty_assertions::assert_eq;

    fn app(fragment: Option<&str>) -> Crossroads {
        Crossroads::new(&Config::default(), fragment).unwrap()
    }

    fn press(app: &mut Crossroads, named: Named) -> Transition {
        app.update(Message::KeyPressed(Key::Named(named)))
    }

    #[test]
    fn test_observers_follow_startup_view() {
        let app = app(Some("#venture"));
        assert_eq!(app.current(), "venture");
        assert_eq!(app.active_link().unwrap(), "venture");
        assert_eq!(app.visible_container().unwrap(), "venture");
        assert_eq!(app.highlighted_thread().as_deref(), Some("venture"));
        assert_eq!(app.history_len(), 1);
    }

    #[test]
    fn test_keyboard_scenario() {
        let mut app = app(None);
        press(&mut app, Named::ArrowRight);
        press(&mut app, Named::ArrowRight);
        assert_eq!(app.current(), "venture");

        app.update(Message::PopState(Some("home".into())));
        assert_eq!(app.current(), "home");
        assert_eq!(app.highlighted_thread(), None);

        press(&mut app, Named::ArrowLeft);
        assert_eq!(app.current(), "events");
        assert_eq!(app.highlighted_thread().as_deref(), Some("event"));
        assert_eq!(app.navigator().history().pushed(), 3);
    }

    #[test]
    fn test_home_key() {
        let mut app = app(Some("#thought"));
        assert!(press(&mut app, Named::Home).moved());
        assert_eq!(app.current(), "home");
        assert_eq!(press(&mut app, Named::Home), Transition::Unchanged);
    }

    #[test]
    fn test_back_and_forward() {
        let mut app = app(None);
        app.update(Message::Navigate("diplomacy".into()));
        app.update(Message::Navigate("thought".into()));

        app.update(Message::Back);
        assert_eq!(app.current(), "diplomacy");
        assert_eq!(app.history_len(), 3);

        // Landing entry carries no state, so the view stays put
        assert_eq!(app.update(Message::Back), Transition::Unchanged);
        assert_eq!(app.current(), "diplomacy");
        assert_eq!(app.update(Message::Back), Transition::Unchanged);

        app.update(Message::Forward);
        app.update(Message::Forward);
        assert_eq!(app.current(), "thought");
        assert_eq!(app.active_link().unwrap(), "thought");
        assert_eq!(app.navigator().history().pushed(), 2);
    }

    #[test]
    fn test_unknown_navigation_keeps_view() {
        let mut app = app(Some("#events"));
        assert_eq!(
            app.update(Message::Navigate("no-such-view".into())),
            Transition::UnknownTarget
        );
        assert_eq!(app.current(), "events");
        assert_eq!(app.visible_container().unwrap(), "events");
    }

    #[test]
    fn test_missing_container_still_navigates() {
        let mut config = Config::default();
        config.views.containers = Some(vec!["home".into(), "venture".into()]);
        let mut app = Crossroads::new(&config, None).unwrap();

        app.update(Message::Navigate("thought".into()));
        assert_eq!(app.current(), "thought");
        assert_eq!(app.visible_container(), None);
        assert_eq!(app.active_link().unwrap(), "thought");
    }

    #[test]
    fn test_konami_code() {
        let mut app = app(None);
        use Named::*;
        for named in [ArrowUp, ArrowUp, ArrowDown, ArrowDown, ArrowLeft, ArrowRight, ArrowLeft, ArrowRight] {
            press(&mut app, named);
        }
        app.update(Message::KeyPressed(Key::character('b')));
        app.update(Message::KeyPressed(Key::character('a')));
        assert_eq!(app.easter_eggs(), 1);
        // The arrow keys in the code also navigate: left, right, left, right nets out
        assert_eq!(app.current(), "home");
    }

    #[test]
    fn test_completing_key_still_navigates() {
        let mut config = Config::default();
        config.keys.next = "a".into();
        config.keys.previous = "z".into();
        let mut app = Crossroads::new(&config, Some("#diplomacy")).unwrap();
        use Named::*;
        for named in [ArrowUp, ArrowUp, ArrowDown, ArrowDown, ArrowLeft, ArrowRight, ArrowLeft, ArrowRight] {
            press(&mut app, named);
        }
        app.update(Message::KeyPressed(Key::character('b')));
        assert_eq!(app.current(), "diplomacy");

        let transition = app.update(Message::KeyPressed(Key::character('a')));
        assert_eq!(app.easter_eggs(), 1);
        assert!(transition.moved());
        assert_eq!(app.current(), "venture");
    }

    #[test]
    fn test_thread_emphasis_levels() {
        let mut app = app(None);
        assert!(app
            .thread_emphasis()
            .iter()
            .all(|(_, e)| *e == Emphasis::Resting));

        app.update(Message::Navigate("thought".into()));
        let levels = app.thread_emphasis();
        assert_eq!(levels.len(), 4);
        for (name, emphasis) in levels {
            let expected = if name == "thought" {
                Emphasis::Highlighted
            } else {
                Emphasis::Dimmed
            };
            assert_eq!(emphasis, expected, "thread {name}");
        }
    }

    #[test]
    fn test_invalid_config() {
        let mut config = Config::default();
        config.views.default = "lobby".into();
        assert!(matches!(
            Crossroads::new(&config, None),
            Err(AppError::Registry(_))
        ));

        let mut config = Config::default();
        config.keys.home = "Hyper".into();
        assert!(matches!(Crossroads::new(&config, None), Err(AppError::Config(_))));
    }
}
