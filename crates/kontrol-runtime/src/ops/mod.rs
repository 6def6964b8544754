mod memory;
mod sessions;

pub use memory::MemoryArchiveBuilder;
pub use sessions::SessionArchiveBuilder;
