pub mod keyboard;
pub mod pointer;
pub mod resize;

pub use keyboard::wire_toggle_keys;
pub use pointer::wire_pointer;
pub use resize::{wire_resize, ResizeWiring};
