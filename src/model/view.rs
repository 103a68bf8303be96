use crate::error::RegistryError;
use std::collections::HashSet;
use std::fmt;

/// Identifier of one named view on the page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: &str) -> Result<Self, RegistryError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(RegistryError::InvalidIdentifier(id.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ViewId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ViewId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Ordered, immutable set of views. Order drives next/previous navigation.
#[derive(Clone, Debug)]
pub struct ViewRegistry {
    views: Vec<ViewId>,
    default: usize,
}

impl ViewRegistry {
    /// Validate and freeze the registry. The default view must be a member.
    pub fn new<I, S>(ids: I, default: &str) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut views = Vec::new();
        let mut seen = HashSet::new();
        for id in ids {
            let view = ViewId::new(id.as_ref())?;
            if !seen.insert(view.clone()) {
                return Err(RegistryError::Duplicate(view.0));
            }
            views.push(view);
        }

        if views.is_empty() {
            return Err(RegistryError::Empty);
        }

        let default = views
            .iter()
            .position(|v| v == default)
            .ok_or_else(|| RegistryError::UnknownDefault(default.to_string()))?;

        Ok(Self { views, default })
    }

    pub fn default_view(&self) -> &ViewId {
        &self.views[self.default]
    }

    pub fn get(&self, id: &str) -> Option<&ViewId> {
        self.views.iter().find(|v| *v == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.views.iter().position(|v| v == id)
    }

    /// The view after `view`, wrapping from the last back to the first.
    pub fn next_after(&self, view: &ViewId) -> &ViewId {
        let idx = self.position(view.as_str()).unwrap_or(self.default);
        &self.views[(idx + 1) % self.views.len()]
    }

    /// The view before `view`, wrapping from the first to the last.
    pub fn previous_before(&self, view: &ViewId) -> &ViewId {
        let idx = self.position(view.as_str()).unwrap_or(self.default);
        &self.views[(idx + self.views.len() - 1) % self.views.len()]
    }

    /// Pick the startup view from a URL fragment, falling back to the default
    /// when the fragment is absent, empty or names no registered view.
    pub fn resolve_fragment(&self, fragment: Option<&str>) -> &ViewId {
        fragment
            .and_then(crate::io::parse_fragment)
            .and_then(|id| self.get(id))
            .unwrap_or_else(|| self.default_view())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewId> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossroads() -> ViewRegistry {
        ViewRegistry::new(["home", "diplomacy", "venture", "thought", "events"], "home").unwrap()
    }

    #[test]
    fn test_rejects_bad_registries() {
        assert_eq!(
            ViewRegistry::new(Vec::<&str>::new(), "home").unwrap_err(),
            RegistryError::Empty
        );
        assert_eq!(
            ViewRegistry::new(["home", "home"], "home").unwrap_err(),
            RegistryError::Duplicate("home".into())
        );
        assert_eq!(
            ViewRegistry::new(["home", "Venture"], "home").unwrap_err(),
            RegistryError::InvalidIdentifier("Venture".into())
        );
        assert_eq!(
            ViewRegistry::new(["home"], "lobby").unwrap_err(),
            RegistryError::UnknownDefault("lobby".into())
        );
    }

    #[test]
    fn test_wraparound() {
        let registry = crossroads();
        let home = registry.get("home").unwrap().clone();
        let events = registry.get("events").unwrap().clone();

        assert_eq!(registry.next_after(&events), "home");
        assert_eq!(registry.previous_before(&home), "events");
        assert_eq!(registry.next_after(&home), "diplomacy");
    }

    #[test]
    fn test_resolve_fragment() {
        let registry = crossroads();
        assert_eq!(registry.resolve_fragment(Some("#venture")), "venture");
        assert_eq!(registry.resolve_fragment(Some("thought")), "thought");
        assert_eq!(registry.resolve_fragment(Some("#")), "home");
        assert_eq!(registry.resolve_fragment(Some("")), "home");
        assert_eq!(registry.resolve_fragment(Some("#nowhere")), "home");
        assert_eq!(registry.resolve_fragment(None), "home");
    }

    #[test]
    fn test_non_first_default() {
        let registry = ViewRegistry::new(["a", "b", "c"], "b").unwrap();
        assert_eq!(registry.default_view(), "b");
        assert_eq!(registry.resolve_fragment(None), "b");
    }
}
