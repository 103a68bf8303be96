mod keyboard;
mod konami;

pub use keyboard::KeyBindings;
pub use konami::KonamiTracker;
