//! akari command-line tools
//!
//! Library half of the `vault-get` and `notify-slack` binaries: argument
//! definitions, error-to-exit-code mapping, tracing setup and the command
//! bodies. The binaries only parse arguments, run a command on a
//! current-thread runtime and print the result.

/// Argument parsing, CLI errors and exit codes.
pub mod cli;
/// Command implementations.
pub mod commands;
/// Tracing and logging configuration.
pub mod tracing;
