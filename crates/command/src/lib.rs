//! Command grammar for the quadtree processor.
//!
//! This crate contains:
//! - A whitespace token reader for one command line
//! - The [`Command`] definitions and parser

mod command;
mod error;
mod reader;

pub use command::{Command, CommandKind};
pub use error::CommandError;
pub use reader::TokenReader;
