// library crate for xit
// exposes modules needed by auxiliary binaries (e.g., generate-man)

pub mod actions;
pub mod cli;
pub mod config;
pub mod display;
pub mod layout;
pub mod tool;
pub mod version;
