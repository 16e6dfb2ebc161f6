//! exit codes for xit
//!
//! 0 on success, 1 for every failure xit detects itself. after a layout
//! command runs, the process exits with the display tool's own status

/// command completed successfully (also used for --help)
pub const SUCCESS: i32 = 0;

/// usage, selection, parsing, query or config error
pub const ERROR: i32 = 1;
