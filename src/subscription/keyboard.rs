use crate::config::KeyConfig;
use crate::error::ConfigError;
use crate::message::Message;
use crate::model::{Key, Named};

/// Keys that drive sequential navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyBindings {
    pub next: Key,
    pub previous: Key,
    pub home: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            next: Key::Named(Named::ArrowRight),
            previous: Key::Named(Named::ArrowLeft),
            home: Key::Named(Named::Home),
        }
    }
}

impl KeyBindings {
    pub fn from_config(config: &KeyConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            next: Key::parse(&config.next)?,
            previous: Key::parse(&config.previous)?,
            home: Key::parse(&config.home)?,
        })
    }

    pub fn handle_key(&self, key: &Key) -> Option<Message> {
        if *key == self.next {
            Some(Message::Next)
        } else if *key == self.previous {
            Some(Message::Previous)
        } else if *key == self.home {
            Some(Message::Home)
        } else {
            None
        }
    }
}
