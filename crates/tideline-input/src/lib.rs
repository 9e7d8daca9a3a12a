//! Input capture: keyboard and pointer state folded into a per-tick
//! [`InputSnapshot`] through configurable keybindings.

pub mod bindings;
pub mod keyboard;
pub mod pointer;
pub mod snapshot;
pub mod viewport;

pub use bindings::{BindingError, Control, KeyBindings, KeyName, key_from_name};
pub use keyboard::{KeyboardState, RawKeyEvent};
pub use pointer::PointerState;
pub use snapshot::{HeldControls, InputSnapshot};
pub use viewport::Viewport;
