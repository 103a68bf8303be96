mod key;
mod view;

pub use key::{Key, Named};
pub use view::{ViewId, ViewRegistry};
