//! Command definitions and parsing.

use std::fmt;

use crate::{CommandError, TokenReader};

/// Command keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// `insert x y length width;`
    Insert,
    /// `find x y;`
    Find,
    /// `delete x y;`
    Delete,
    /// `update x y length width;`
    Update,
    /// `dump`
    Dump,
}

impl CommandKind {
    /// Match a keyword, ignoring ASCII case.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_lowercase().as_str() {
            "insert" => Some(CommandKind::Insert),
            "find" => Some(CommandKind::Find),
            "delete" => Some(CommandKind::Delete),
            "update" => Some(CommandKind::Update),
            "dump" => Some(CommandKind::Dump),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Insert => "insert",
            CommandKind::Find => "find",
            CommandKind::Delete => "delete",
            CommandKind::Update => "update",
            CommandKind::Dump => "dump",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert { x: i32, y: i32, length: i32, width: i32 },
    Find { x: i32, y: i32 },
    Delete { x: i32, y: i32 },
    Update { x: i32, y: i32, length: i32, width: i32 },
    Dump,
}

impl Command {
    /// Parse one line of a command file.
    ///
    /// Blank lines and unknown keywords yield `Ok(None)`. Tokens after the
    /// last expected argument are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut reader = TokenReader::new(line);
        let Some(kind) = reader.next_token().and_then(CommandKind::from_keyword) else {
            return Ok(None);
        };
        reader.set_command(kind.name());

        let command = match kind {
            CommandKind::Insert => {
                let (x, y, length, width) = read_extents(&mut reader)?;
                Command::Insert { x, y, length, width }
            }
            CommandKind::Find => {
                let (x, y) = read_anchor(&mut reader)?;
                Command::Find { x, y }
            }
            CommandKind::Delete => {
                let (x, y) = read_anchor(&mut reader)?;
                Command::Delete { x, y }
            }
            CommandKind::Update => {
                let (x, y, length, width) = read_extents(&mut reader)?;
                Command::Update { x, y, length, width }
            }
            CommandKind::Dump => Command::Dump,
        };
        Ok(Some(command))
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Insert { .. } => CommandKind::Insert,
            Command::Find { .. } => CommandKind::Find,
            Command::Delete { .. } => CommandKind::Delete,
            Command::Update { .. } => CommandKind::Update,
            Command::Dump => CommandKind::Dump,
        }
    }
}

fn read_anchor(reader: &mut TokenReader<'_>) -> Result<(i32, i32), CommandError> {
    let x = reader.next_i32("x")?;
    let y = reader.last_i32("y")?;
    Ok((x, y))
}

fn read_extents(reader: &mut TokenReader<'_>) -> Result<(i32, i32, i32, i32), CommandError> {
    let x = reader.next_i32("x")?;
    let y = reader.next_i32("y")?;
    let length = reader.next_i32("length")?;
    let width = reader.last_i32("width")?;
    Ok((x, y, length, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert() {
        let cmd = Command::parse("insert 1 -2 30 40;").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Insert { x: 1, y: -2, length: 30, width: 40 })
        );
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            Command::parse("FIND 3 4;").unwrap(),
            Some(Command::Find { x: 3, y: 4 })
        );
        assert_eq!(
            Command::parse("Delete 3 4").unwrap(),
            Some(Command::Delete { x: 3, y: 4 })
        );
        assert_eq!(Command::parse("DuMp").unwrap(), Some(Command::Dump));
    }

    #[test]
    fn test_parse_update() {
        let cmd = Command::parse("update 0 0 -1 0;").unwrap().unwrap();
        assert_eq!(cmd.kind(), CommandKind::Update);
        assert_eq!(cmd, Command::Update { x: 0, y: 0, length: -1, width: 0 });
    }

    #[test]
    fn test_unknown_and_blank_lines_ignored() {
        assert_eq!(Command::parse("").unwrap(), None);
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("move 1 2;").unwrap(), None);
        assert_eq!(Command::parse("dump;").unwrap(), None);
    }

    #[test]
    fn test_extra_tokens_ignored() {
        assert_eq!(
            Command::parse("find 1 2; trailing words").unwrap(),
            Some(Command::Find { x: 1, y: 2 })
        );
        assert_eq!(Command::parse("dump now").unwrap(), Some(Command::Dump));
    }

    #[test]
    fn test_missing_argument() {
        let err = Command::parse("insert 1 2 3").unwrap_err();
        assert!(matches!(
            err,
            CommandError::MissingArgument { command: "insert", argument: "width" }
        ));
    }

    #[test]
    fn test_non_numeric_argument() {
        let err = Command::parse("delete one 2;").unwrap_err();
        match err {
            CommandError::InvalidInteger { argument, token, .. } => {
                assert_eq!(argument, "x");
                assert_eq!(token, "one");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
