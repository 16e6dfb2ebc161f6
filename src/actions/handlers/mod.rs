//! action handlers - implementation of each action type

pub mod common;
pub mod config;
pub mod layout;
pub mod list;
pub mod system;
