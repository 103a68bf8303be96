pub mod navigation;

pub use navigation::{Navigator, Transition};
