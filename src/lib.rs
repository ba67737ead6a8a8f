/*!
 * ReplayFS - Reconstruct a directory tree from shell-session transcripts
 *
 * This library replays a transcript of `cd`/`ls` commands into a directory
 * tree with incrementally maintained aggregate sizes, then answers a
 * threshold-bounded aggregate query over the finished tree.
 */

pub mod aggregate;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use aggregate::{sum_within_cap, sum_within_cap_parallel};
pub use config::Config;
pub use error::{ReplayFsError, Result};
pub use parser::{Mode, ParserStatistics, TranscriptParser};
pub use report::{ReplayReport, ReportFormat, Reporter};
pub use types::{DirectoryNode, FileEntry, FsTree, NodeId};
pub use utils::{directory_paths, format_file_size};
pub use writer::XmlWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
