//! Writer implementations

pub mod console;
pub mod file;

pub use console::ConsoleWriter;
pub use file::FileWriter;

// Re-export the capability trait next to its implementations
pub use crate::core::MessageWriter;
