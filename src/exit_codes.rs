//! Exit code constants for the hunkcheck CLI.
//!
//! - 0: Review completed (regardless of how many issues were found)
//! - 1: User error (diff not found, bad config, bad patterns)
//! - 2: Output failure (report could not be rendered or written)

/// Review completed.
pub const SUCCESS: i32 = 0;

/// User error: missing diff input, invalid config, invalid rule or glob patterns.
pub const USER_ERROR: i32 = 1;

/// The report could not be serialized or written to its destination.
pub const OUTPUT_FAILURE: i32 = 2;
