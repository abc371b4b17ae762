//! Token reading utilities for command lines.
//!
//! Tokens are separated by any run of whitespace.

use std::str::SplitWhitespace;

use crate::CommandError;

/// A reader over the tokens of a single command line.
#[derive(Debug)]
pub struct TokenReader<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> TokenReader<'a> {
    /// Create a reader over `line`.
    pub fn new(line: &'a str) -> Self {
        Self {
            command: "",
            tokens: line.split_whitespace(),
        }
    }

    /// Name the command being read, used in error messages.
    #[inline]
    pub fn set_command(&mut self, command: &'static str) {
        self.command = command;
    }

    /// Next raw token, if any.
    #[inline]
    pub fn next_token(&mut self) -> Option<&'a str> {
        self.tokens.next()
    }

    /// Read the next token as an integer.
    pub fn next_i32(&mut self, argument: &'static str) -> Result<i32, CommandError> {
        let token = self.require(argument)?;
        parse_i32(argument, token)
    }

    /// Read the line's final argument, stripping `;` terminators around it.
    pub fn last_i32(&mut self, argument: &'static str) -> Result<i32, CommandError> {
        let token = self.require(argument)?;
        parse_i32(argument, token.trim_matches(';'))
    }

    fn require(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.tokens.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }
}

fn parse_i32(argument: &'static str, token: &str) -> Result<i32, CommandError> {
    token
        .parse::<i32>()
        .map_err(|source| CommandError::InvalidInteger {
            argument,
            token: token.to_string(),
            source,
        })
}
