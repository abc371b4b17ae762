//! Command parsing error types.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("`{command}` is missing its `{argument}` argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid integer for `{argument}`: {token:?}")]
    InvalidInteger {
        argument: &'static str,
        token: String,
        #[source]
        source: ParseIntError,
    },
}
