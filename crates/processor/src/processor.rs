//! Command execution against the index.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use command::{Command, CommandError};
use quadtree::{QuadTree, Rectangle};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::Config;

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("Line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: CommandError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines read.
    pub lines: usize,
    /// Lines that parsed to a command.
    pub executed: usize,
    /// Blank lines and unknown commands.
    pub ignored: usize,
}

/// Applies commands to a [`QuadTree`] and writes user-facing results.
#[derive(Debug)]
pub struct CommandProcessor<W> {
    tree: QuadTree,
    indent: String,
    out: W,
}

impl<W: Write> CommandProcessor<W> {
    /// Processor over a default index writing to `out`.
    pub fn new(out: W) -> Self {
        Self::with_config(&Config::default(), out)
    }

    pub fn with_config(config: &Config, out: W) -> Self {
        Self {
            tree: config.index.build(),
            indent: config.output.indent.clone(),
            out,
        }
    }

    #[inline]
    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }

    /// Consume the processor, returning the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Execute one command.
    pub fn execute(&mut self, command: &Command) -> io::Result<()> {
        debug!("Executing {:?}", command);
        match *command {
            Command::Insert { x, y, length, width } => {
                if !self.tree.insert(Rectangle::new(x, y, length, width)) {
                    warn!("Leaf at capacity, rejected insert at {}, {}", x, y);
                    writeln!(self.out, "You cannot double insert at {}, {}.", x, y)?;
                }
            }
            Command::Find { x, y } => match self.tree.find(x, y) {
                Some(rect) => writeln!(self.out, "{}", rect)?,
                None => writeln!(self.out, "Nothing is at {}, {}.", x, y)?,
            },
            Command::Delete { x, y } => {
                if !self.tree.delete(x, y) {
                    writeln!(self.out, "Nothing to delete at {}, {}.", x, y)?;
                }
            }
            Command::Update { x, y, length, width } => {
                if !self.tree.update(x, y, length, width) {
                    writeln!(self.out, "Nothing to update at {}, {}.", x, y)?;
                }
            }
            Command::Dump => {
                for line in self.tree.dump_lines(&self.indent) {
                    writeln!(self.out, "{}", line)?;
                }
            }
        }
        Ok(())
    }

    /// Process every line of `input` in order.
    ///
    /// A malformed line stops the run; effects of earlier lines remain.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<Summary, ProcessError> {
        let mut summary = Summary::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            summary.lines += 1;
            let parsed = Command::parse(&line).map_err(|source| ProcessError::Command {
                line: idx + 1,
                source,
            })?;
            match parsed {
                Some(command) => {
                    self.execute(&command)?;
                    summary.executed += 1;
                }
                None => {
                    debug!("Ignoring line {}: {:?}", idx + 1, line);
                    summary.ignored += 1;
                }
            }
        }
        self.out.flush()?;
        Ok(summary)
    }

    /// Open a command file and process it.
    pub fn run_file(&mut self, path: &Path) -> Result<Summary, ProcessError> {
        info!("Processing {:?}", path);
        let file = File::open(path)?;
        self.run(BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RootKind;

    fn run(input: &str) -> (String, Summary) {
        let mut processor = CommandProcessor::new(Vec::new());
        let summary = processor.run(input.as_bytes()).unwrap();
        (String::from_utf8(processor.into_inner()).unwrap(), summary)
    }

    #[test]
    fn test_insert_find() {
        let (out, summary) = run("insert 1 2 3 4;\nfind 1 2;\n");
        assert_eq!(out, "Rectangle at 1, 2: 3x4\n");
        assert_eq!(summary, Summary { lines: 2, executed: 2, ignored: 0 });
    }

    #[test]
    fn test_sixth_double_insert_rejected() {
        let input = "insert 5 5 1 1;\n".repeat(6);
        let (out, _) = run(&input);
        assert_eq!(out, "You cannot double insert at 5, 5.\n");
    }

    #[test]
    fn test_missing_messages() {
        let (out, _) = run("find 9 9;\ndelete 9 9;\nupdate 9 9 1 1;\n");
        assert_eq!(
            out,
            "Nothing is at 9, 9.\nNothing to delete at 9, 9.\nNothing to update at 9, 9.\n"
        );
    }

    #[test]
    fn test_update_then_find() {
        let (out, _) = run("insert -4 8 1 1;\nupdate -4 8 10 20;\nfind -4 8;\n");
        assert_eq!(out, "Rectangle at -4, 8: 10x20\n");
    }

    #[test]
    fn test_delete_then_find() {
        let (out, _) = run("insert 0 0 1 1;\ndelete 0 0;\nfind 0 0;\n");
        assert_eq!(out, "Nothing is at 0, 0.\n");
    }

    #[test]
    fn test_dump_flat() {
        let (out, _) = run("insert 1 1 1 1;\ninsert 2 2 2 2;\nfind 2 2;\ndump\n");
        assert_eq!(
            out,
            "Rectangle at 2, 2: 2x2\nRectangle at 1, 1: 1x1\nRectangle at 2, 2: 2x2\n"
        );
    }

    #[test]
    fn test_dump_internal_root_indents() {
        let mut config = Config::default();
        config.index.root = RootKind::Internal;
        let mut processor = CommandProcessor::with_config(&config, Vec::new());
        processor
            .run("insert 10 -10 1 1;\ninsert -10 10 2 2;\nDUMP\n".as_bytes())
            .unwrap();
        let out = String::from_utf8(processor.into_inner()).unwrap();
        assert_eq!(out, "\tRectangle at -10, 10: 2x2\n\tRectangle at 10, -10: 1x1\n");
    }

    #[test]
    fn test_unknown_lines_ignored() {
        let (out, summary) = run("hello world\n\nfind 1 1;\n");
        assert_eq!(out, "Nothing is at 1, 1.\n");
        assert_eq!(summary, Summary { lines: 3, executed: 1, ignored: 2 });
    }

    #[test]
    fn test_malformed_line_stops_run() {
        let mut processor = CommandProcessor::new(Vec::new());
        let err = processor
            .run("insert 1 1 1 1;\nfind 1;\nfind 1 1;\n".as_bytes())
            .unwrap_err();
        assert!(matches!(err, ProcessError::Command { line: 2, .. }));
        assert_eq!(processor.tree().len(), 1);
        assert!(processor.into_inner().is_empty());
    }

    #[test]
    fn test_run_file_missing() {
        let mut processor = CommandProcessor::new(Vec::new());
        let err = processor
            .run_file(Path::new("/nonexistent/commands.txt"))
            .unwrap_err();
        assert!(matches!(err, ProcessError::Io(_)));
    }
}
