mod args;
mod commands;
mod logging;
pub mod types;

pub use args::Cli;
pub use commands::run;
pub use logging::init_logging;
