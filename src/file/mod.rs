// File operations for the demo: create, read, append, edit, stats, copy, delete

pub mod lines;
pub mod operations;
pub mod stats;

pub use operations::{ModifyOutcome, NumberedLine, ReadOutcome};
pub use stats::FileStats;
