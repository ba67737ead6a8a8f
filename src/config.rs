/*!
 * Configuration handling for ReplayFS
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::ensure;

/// Default threshold for the within-cap directory sum
pub const DEFAULT_SIZE_CAP: u64 = 100_000;

/// Command-line arguments for ReplayFS
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "replayfs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Reconstruct a directory tree from a shell-session transcript",
    long_about = "Replays a transcript of cd/ls commands into a directory tree with \
                  incrementally maintained aggregate sizes, then reports the sum of \
                  every directory total at or below a size cap."
)]
pub struct Args {
    /// Transcript file to replay ("-" reads from stdin)
    #[clap(default_value = "-")]
    pub transcript_path: String,

    /// Output XML file name
    #[clap(default_value = ".replayfs.tree.xml")]
    pub output_file: String,

    /// Directory size cap for the aggregate sum
    #[clap(long, default_value_t = DEFAULT_SIZE_CAP)]
    pub size_cap: u64,

    /// Skip writing the XML tree
    #[clap(long)]
    pub no_xml: bool,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Transcript source; `None` means stdin
    pub transcript_path: Option<PathBuf>,

    /// Output XML file path
    pub output_file: PathBuf,

    /// Directory size cap for the aggregate sum
    pub size_cap: u64,

    /// Whether to write the XML tree
    pub write_xml: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        let transcript_path = match args.transcript_path.as_str() {
            "-" => None,
            path => Some(PathBuf::from(path)),
        };
        Self {
            transcript_path,
            output_file: PathBuf::from(args.output_file),
            size_cap: args.size_cap,
            write_xml: !args.no_xml,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.transcript_path {
            ensure!(
                path.exists() && path.is_file(),
                Config,
                "Transcript file not found: {}",
                path.display()
            );
        }

        if self.write_xml {
            if let Some(parent) = self.output_file.parent() {
                ensure!(
                    parent.exists() || parent == PathBuf::from(""),
                    Config,
                    "Output directory not found: {}",
                    parent.display()
                );
            }
        }

        Ok(())
    }
}
