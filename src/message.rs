use crate::model::Key;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Keyboard
    KeyPressed(Key),

    // Navigation
    Navigate(String),
    Next,
    Previous,
    Home,

    // Host history
    Back,
    Forward,
    PopState(Option<String>),

    EasterEgg,
}
