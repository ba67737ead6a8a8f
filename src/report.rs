/*!
 * Reporting functionality for ReplayFS
 *
 * Provides functionality for generating formatted reports of replay results
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Statistics for a transcript replay
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Output file path, if an XML tree was written
    pub output_file: Option<String>,
    /// Time taken to replay and aggregate
    pub duration: Duration,
    /// Number of transcript lines consumed
    pub lines_processed: usize,
    /// Number of files discovered
    pub files_discovered: usize,
    /// Number of directories in the tree (root included)
    pub directories: usize,
    /// Aggregate size of the root directory
    pub root_total: u64,
    /// Size cap applied to the aggregate query
    pub size_cap: u64,
    /// Sum of directory totals at or below the cap
    pub within_cap_sum: u64,
    /// Full path and total size for each directory
    pub directory_sizes: Vec<(String, u64)>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
    // JSON, HTML, etc.
}

/// Report generator for replay results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string based on replay statistics
    pub fn generate_report(&self, report: &ReplayReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ReplayReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create a summary table using the tabled crate
    fn create_summary_table(&self, report: &ReplayReport) -> String {
        // Define the summary table data structure
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = Vec::new();

        if let Some(output_file) = &report.output_file {
            rows.push(SummaryRow {
                key: "📂 Output File".to_string(),
                value: output_file.clone(),
            });
        }

        rows.push(SummaryRow {
            key: "⏱️ Replay Time".to_string(),
            value: format!("{:.4?}", report.duration),
        });

        rows.push(SummaryRow {
            key: "📝 Lines Processed".to_string(),
            value: self.format_number(report.lines_processed),
        });

        rows.push(SummaryRow {
            key: "📄 Files Discovered".to_string(),
            value: self.format_number(report.files_discovered),
        });

        rows.push(SummaryRow {
            key: "📁 Directories".to_string(),
            value: self.format_number(report.directories),
        });

        rows.push(SummaryRow {
            key: "🌳 Root Total".to_string(),
            value: format_file_size(report.root_total),
        });

        rows.push(SummaryRow {
            key: "🎯 Size Cap".to_string(),
            value: format_file_size(report.size_cap),
        });

        rows.push(SummaryRow {
            key: "∑ Within-Cap Sum".to_string(),
            value: report.within_cap_sum.to_string(),
        });

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create a directories table using the tabled crate
    fn create_directories_table(&self, report: &ReplayReport) -> String {
        // Define the directories table data structure
        #[derive(Tabled)]
        struct DirectoryRow {
            #[tabled(rename = "Directory")]
            path: String,

            #[tabled(rename = "Total Size")]
            size: String,

            #[tabled(rename = "Within Cap")]
            within_cap: String,
        }

        // Sort directories by total size, largest first
        let mut dirs: Vec<_> = report.directory_sizes.iter().collect();
        dirs.sort_by(|(_, a), (_, b)| b.cmp(a));

        // Determine if we show all directories or just top 10
        let dirs_to_show = if report.directory_sizes.len() > 15 {
            &dirs[0..10]
        } else {
            &dirs[..]
        };

        // Generate rows for the table
        let rows: Vec<DirectoryRow> = dirs_to_show
            .iter()
            .map(|(path, size)| DirectoryRow {
                path: path.clone(),
                size: format_file_size(*size),
                within_cap: if *size <= report.size_cap {
                    "✓".to_string()
                } else {
                    String::new()
                },
            })
            .collect();

        // Create and style the table
        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &ReplayReport) -> String {
        // Generate directories and summary tables
        let directories_table = self.create_directories_table(report);
        let summary_table = self.create_summary_table(report);

        // Create proper section titles
        let summary_title = "✅  REPLAY COMPLETE";
        let directories_title = if report.directory_sizes.len() > 15 {
            "📋  TOP 10 LARGEST DIRECTORIES  📋"
        } else {
            "📋  DIRECTORY SIZES"
        };

        // Combine them with appropriate spacing and titles, directories first
        format!(
            "{}\n{}\n\n{}\n{}",
            directories_title, directories_table, summary_title, summary_table
        )
    }
}
