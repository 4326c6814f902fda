//! Labyrinth CLI library.
//!
//! This crate provides the command handlers, terminal styling, and output
//! formatting behind the `labyrinth-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
