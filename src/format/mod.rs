//! Text file I/O for bulk graph initialization.

pub mod loader;
pub mod script;

pub use loader::GraphLoader;
pub use script::{GraphScript, Instruction, LoadReport, Rejection, Step};
