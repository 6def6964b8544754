//! Archive generation for the Mission Kontrol dashboard.
//!
//! Each run rebuilds two JSON snapshots from scratch:
//! - `sessions-archive.json`: one record per agent session log
//! - `memory-archive.json`: one entry per dated memory note
//!
//! Both documents pass through the [`RedactionPolicy`] before they are written.
//!
//! # Example
//!
//! ```no_run
//! use kontrol_runtime::{ArchiveConfig, generate};
//!
//! let config = ArchiveConfig::default();
//! let report = generate(&config)?;
//! println!("{}", report);
//! # Ok::<(), kontrol_runtime::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod generate;
pub mod ops;
pub mod redact;
pub mod writer;

pub use config::{ArchiveConfig, ConfigOverrides, RedactionConfig, RedactionRuleConfig};
pub use error::{Error, Result};
pub use generate::{Clock, FixedClock, GenerateReport, SystemClock, generate, generate_with_clock};
pub use ops::{MemoryArchiveBuilder, SessionArchiveBuilder};
pub use redact::{REDACTION_MARKER, RedactionPolicy, RedactionRule};
pub use writer::write_archive;
