pub mod archive;
pub mod memory;
pub mod session;
mod util;

pub use archive::{MemoryArchive, SessionArchive};
pub use memory::MemoryEntry;
pub use session::{LIVENESS_WINDOW_MS, MessagePreview, SessionRecord, SessionStatus};
pub use util::*;
