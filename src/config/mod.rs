//! Configuration for the `wgraph` binary.

pub mod loader;

pub use loader::{load_config, load_or_default, resolve_config_path, AppConfig};
