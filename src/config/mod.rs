//! Configuration model for lslocks.
//!
//! Settings come from an optional YAML file (`--config`) with command-line
//! flags layered on top. Unknown keys in the file are ignored for forward
//! compatibility and every field has a default, so an empty file is valid.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use operations::Overrides;
pub use types::{DeviceMatching, OutputFormat};
