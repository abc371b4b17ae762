//! Quadtree command processor library.

pub mod config;
pub mod processor;

// Re-export commonly used types
pub use config::{Config, IndexConfig, OutputConfig, RootKind};
pub use processor::{CommandProcessor, ProcessError, Summary};
