//! AirTravel CLI library.
//!
//! Subcommand handlers, output formatting and terminal styling for the
//! `airtravel-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
