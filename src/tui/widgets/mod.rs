//! Reusable widgets for the TUI

pub mod input;
pub mod type_selector;

pub use input::TextInput;
pub use type_selector::{visual_style, TypeButton, TypeSelector, VisualStyle};
