// Public modules
pub mod error;
pub mod host;
pub mod panel;
pub mod project;
pub mod rename;

// Internal modules - not part of public API
pub(crate) mod local_files;

// Public modules for CLI access
pub mod defaults;
pub mod paths;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
