//! Command-line surface: one-shot commands, the interactive menu, and output styling.

pub mod commands;
pub mod input;
pub mod menu;
pub mod render;

pub use input::{EditorInput, LineInput, ReaderInput};
pub use menu::Menu;
pub use render::{Color, Style, Tone};
