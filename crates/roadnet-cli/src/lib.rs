//! roadnet CLI library.
//!
//! This crate provides the command handlers, configuration resolution,
//! terminal styling, and output formatting behind the `roadnet-cli` binary.

pub mod commands;
pub mod config;
pub mod output;
pub mod terminal;
