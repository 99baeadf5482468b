//! Subcommand handlers.
//!
//! `main.rs` parses arguments and loads the network; each module here renders
//! one family of subcommands.

pub mod network;
pub mod query;
pub mod suggest;
