// URL fragment handling
use crate::model::ViewId;

/// Extract a view identifier from a URL fragment such as `#venture`.
///
/// Returns `None` for an empty fragment.
pub fn parse_fragment(fragment: &str) -> Option<&str> {
    let trimmed = fragment.trim();
    let id = trimmed.strip_prefix('#').unwrap_or(trimmed).trim();
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

pub fn fragment_for(view: &ViewId) -> String {
    format!("#{}", view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        assert_eq!(parse_fragment("#venture"), Some("venture"));
        assert_eq!(parse_fragment("  #events "), Some("events"));
        assert_eq!(parse_fragment("home"), Some("home"));
        assert_eq!(parse_fragment("#"), None);
        assert_eq!(parse_fragment(""), None);
    }

    #[test]
    fn test_fragment_for() {
        let view = ViewId::new("thought").unwrap();
        assert_eq!(fragment_for(&view), "#thought");
        assert_eq!(parse_fragment(&fragment_for(&view)), Some("thought"));
    }
}
