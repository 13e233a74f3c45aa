//! User store adapters.

mod json_file;
mod memory;
mod table;

pub use json_file::JsonFileUserStore;
pub use memory::InMemoryUserStore;
