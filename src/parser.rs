/*!
 * Transcript parsing: reconstructs the directory tree from a shell session log
 */

use std::sync::Arc;

use indicatif::ProgressBar;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ReplayFsError, Result};
use crate::types::{FsTree, NodeId};

/// `$ cd <name>` with an arbitrary target (checked after the literal forms)
static CD_COMMAND: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$ cd (.+)$").unwrap());

/// `dir <name>` inside a listing
static DIR_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^dir (.+)$").unwrap());

/// `<size> <name>` inside a listing; the name may contain spaces
static FILE_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) (.+)$").unwrap());

/// Parser statistics
#[derive(Debug, Clone, Default)]
pub struct ParserStatistics {
    /// Number of transcript lines consumed
    pub lines_processed: usize,
    /// Number of file entries discovered
    pub files_discovered: usize,
    /// Number of directory declarations seen
    pub directories_discovered: usize,
    /// Number of lines matching no recognized form
    pub lines_ignored: usize,
}

/// Whether the parser is currently inside an `ls` listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Between commands; listing entries are not expected
    Idle,
    /// An `ls` was issued; bare lines describe the cursor's contents
    Listing,
}

/// Parser for shell-session transcripts
///
/// Consumes the transcript one line at a time, keeping a cursor into the
/// tree under construction. The transcript is assumed to be a depth-first
/// walk: every `cd <name>` target was declared by an earlier listing.
pub struct TranscriptParser {
    /// Tree under construction
    tree: FsTree,
    /// Current directory
    cursor: NodeId,
    /// Listing state
    mode: Mode,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Parser statistics
    statistics: ParserStatistics,
}

impl TranscriptParser {
    /// Create a parser with no visible progress reporting
    pub fn new() -> Self {
        Self::with_progress(Arc::new(ProgressBar::hidden()))
    }

    /// Create a parser that advances `progress` once per line
    pub fn with_progress(progress: Arc<ProgressBar>) -> Self {
        let tree = FsTree::new();
        let cursor = tree.root();
        Self {
            tree,
            cursor,
            mode: Mode::Idle,
            progress,
            statistics: ParserStatistics::default(),
        }
    }

    /// Get parser statistics
    pub fn statistics(&self) -> ParserStatistics {
        self.statistics.clone()
    }

    /// The tree built so far
    pub fn tree(&self) -> &FsTree {
        &self.tree
    }

    /// The parser's current directory
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    /// The parser's listing state
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Parse a complete transcript and return the finished tree
    pub fn parse(mut self, input: &str) -> Result<FsTree> {
        for (idx, line) in input.lines().enumerate() {
            self.process_line(line, idx + 1)?;
        }
        Ok(self.tree)
    }

    /// Consume the parser and return the tree built so far
    pub fn finish(self) -> FsTree {
        self.tree
    }

    /// Process a single transcript line
    ///
    /// `line_no` is 1-based and is carried into any fatal error. Lines
    /// matching none of the recognized forms are dropped silently.
    pub fn process_line(&mut self, line: &str, line_no: usize) -> Result<()> {
        self.progress.inc(1);
        self.statistics.lines_processed += 1;

        let line = line.trim();
        if line.starts_with('$') {
            // Any command ends the current listing, recognized or not.
            self.mode = Mode::Idle;
            return self.process_command(line, line_no);
        }

        if self.mode != Mode::Listing {
            self.statistics.lines_ignored += 1;
            return Ok(());
        }

        if let Some(caps) = DIR_ENTRY.captures(line) {
            self.tree.add_directory(self.cursor, &caps[1]);
            self.statistics.directories_discovered += 1;
            return Ok(());
        }

        if let Some(caps) = FILE_ENTRY.captures(line) {
            // A size too large for u64 falls through to the ignored bucket.
            if let Ok(size) = caps[1].parse::<u64>() {
                self.tree.add_file(self.cursor, &caps[2], size);
                self.statistics.files_discovered += 1;
                return Ok(());
            }
        }

        self.statistics.lines_ignored += 1;
        Ok(())
    }

    /// Handle a `$`-prefixed command line
    fn process_command(&mut self, line: &str, line_no: usize) -> Result<()> {
        match line {
            "$ cd /" => {
                self.cursor = self.tree.root();
            }
            "$ cd .." => {
                self.cursor = self
                    .tree
                    .node(self.cursor)
                    .parent
                    .ok_or(ReplayFsError::NavigateAboveRoot { line: line_no })?;
            }
            "$ ls" => {
                self.mode = Mode::Listing;
            }
            _ => {
                if let Some(caps) = CD_COMMAND.captures(line) {
                    let name = &caps[1];
                    self.cursor = self.tree.child(self.cursor, name).ok_or_else(|| {
                        ReplayFsError::UnknownChild {
                            line: line_no,
                            name: name.to_string(),
                        }
                    })?;
                } else {
                    self.statistics.lines_ignored += 1;
                }
            }
        }
        Ok(())
    }
}

impl Default for TranscriptParser {
    fn default() -> Self {
        Self::new()
    }
}
