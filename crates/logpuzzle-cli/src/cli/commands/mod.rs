//! CLI command handlers, one per file.

mod fetch;
mod print;

pub use fetch::run_fetch;
pub use print::run_print;
