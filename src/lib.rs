//! vsixfetch library
//!
//! Lists the extensions installed in VS Code and downloads their VSIX
//! packages from Open VSX. The `vsixfetch` binary is a thin wrapper.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
