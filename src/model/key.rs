use crate::error::ConfigError;

/// Named keys the page reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Named {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Enter,
    Escape,
    Space,
}

/// A key press as delivered by the host, using DOM key names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Named(Named),
    Character(String),
}

impl Key {
    pub fn parse(name: &str) -> Result<Self, ConfigError> {
        let named = match name {
            "ArrowUp" => Named::ArrowUp,
            "ArrowDown" => Named::ArrowDown,
            "ArrowLeft" => Named::ArrowLeft,
            "ArrowRight" => Named::ArrowRight,
            "Home" => Named::Home,
            "End" => Named::End,
            "Enter" => Named::Enter,
            "Escape" | "Esc" => Named::Escape,
            " " | "Space" => Named::Space,
            other if other.chars().count() == 1 => return Ok(Key::Character(other.to_string())),
            other => return Err(ConfigError::InvalidKey(other.to_string())),
        };
        Ok(Key::Named(named))
    }

    pub fn character(c: char) -> Self {
        Key::Character(c.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_names() {
        assert_eq!(Key::parse("ArrowRight").unwrap(), Key::Named(Named::ArrowRight));
        assert_eq!(Key::parse("Home").unwrap(), Key::Named(Named::Home));
        assert_eq!(Key::parse("b").unwrap(), Key::character('b'));
        assert!(matches!(
            Key::parse("Hyper"),
            Err(ConfigError::InvalidKey(name)) if name == "Hyper"
        ));
    }
}
