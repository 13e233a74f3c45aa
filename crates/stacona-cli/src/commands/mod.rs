//! Command handlers.
//!
//! Each handler translates parsed arguments into a core call and renders
//! the outcome through `OutputManager`.

pub mod completions;
pub mod config;
pub mod init;
pub mod login;
pub mod prompt;
pub mod refresh;
pub mod register;
pub mod seed;
pub mod whoami;
