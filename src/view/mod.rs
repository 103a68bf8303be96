mod containers;
mod links;
mod observer;
mod threads;

pub use containers::ViewContainers;
pub use links::ActiveLinks;
pub use observer::{NavEvent, ViewChange, ViewObserver};
pub use threads::{Emphasis, ThreadEmphasis};
