// Konami code recognizer for the page's easter egg
use crate::model::{Key, Named};

enum Step {
    Named(Named),
    Char(&'static str),
}

const SEQUENCE: [Step; 10] = [
    Step::Named(Named::ArrowUp),
    Step::Named(Named::ArrowUp),
    Step::Named(Named::ArrowDown),
    Step::Named(Named::ArrowDown),
    Step::Named(Named::ArrowLeft),
    Step::Named(Named::ArrowRight),
    Step::Named(Named::ArrowLeft),
    Step::Named(Named::ArrowRight),
    Step::Char("b"),
    Step::Char("a"),
];

#[derive(Debug, Default)]
pub struct KonamiTracker {
    progress: usize,
}

impl KonamiTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one key press. Returns true when the sequence completes.
    ///
    /// A wrong key resets progress without being retried as a new start.
    pub fn press(&mut self, key: &Key) -> bool {
        if Self::expected(self.progress, key) {
            self.progress += 1;
            if self.progress == SEQUENCE.len() {
                self.progress = 0;
                return true;
            }
        } else {
            self.progress = 0;
        }
        false
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    fn expected(step: usize, key: &Key) -> bool {
        match (&SEQUENCE[step], key) {
            (Step::Named(want), Key::Named(got)) => want == got,
            (Step::Char(want), Key::Character(got)) => want == got,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code() -> Vec<Key> {
        use Named::*;
        let mut keys: Vec<Key> = [
            ArrowUp, ArrowUp, ArrowDown, ArrowDown, ArrowLeft, ArrowRight, ArrowLeft, ArrowRight,
        ]
        .into_iter()
        .map(Key::Named)
        .collect();
        keys.push(Key::character('b'));
        keys.push(Key::character('a'));
        keys
    }

    #[test]
    fn test_full_sequence_fires_once() {
        let mut tracker = KonamiTracker::new();
        let fired: Vec<bool> = code().iter().map(|k| tracker.press(k)).collect();
        assert_eq!(fired.iter().filter(|f| **f).count(), 1);
        assert!(fired[9]);
        assert_eq!(tracker.progress(), 0);
    }

    #[test]
    fn test_wrong_key_resets() {
        let mut tracker = KonamiTracker::new();
        for key in &code()[..4] {
            tracker.press(key);
        }
        assert_eq!(tracker.progress(), 4);
        tracker.press(&Key::character('x'));
        assert_eq!(tracker.progress(), 0);
    }

    #[test]
    fn test_mismatch_is_not_retried_as_start() {
        let mut tracker = KonamiTracker::new();
        tracker.press(&Key::Named(Named::ArrowUp));
        tracker.press(&Key::Named(Named::ArrowDown));
        assert_eq!(tracker.progress(), 0);
    }

    #[test]
    fn test_letters_must_match() {
        let mut tracker = KonamiTracker::new();
        let mut keys = code();
        keys[9] = Key::character('b');
        assert!(!keys.iter().any(|k| tracker.press(k)));
    }
}
