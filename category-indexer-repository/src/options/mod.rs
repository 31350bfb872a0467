//! Options store implementations.

mod json_file;
mod memory;

pub use json_file::JsonFileOptionsStore;
pub use memory::MemoryOptionsStore;
