/*!
 * Command-line interface for ReplayFS
 */

use std::fs;
use std::io::Read;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use replayfs::aggregate::sum_within_cap;
use replayfs::config::{Args, Config};
use replayfs::error::Result;
use replayfs::parser::TranscriptParser;
use replayfs::report::{ReplayReport, ReportFormat, Reporter};
use replayfs::utils::directory_paths;
use replayfs::writer::XmlWriter;

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    // Read the full transcript up front; parsing is single-pass over lines
    let input = match &config.transcript_path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    // Create progress bar over transcript lines
    let total_lines = input.lines().count() as u64;
    let progress = ProgressBar::new(total_lines);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Replaying");
    progress.set_message(match &config.transcript_path {
        Some(path) => format!("📂 Transcript: {}", path.display()),
        None => "📂 Transcript: <stdin>".to_string(),
    });

    // Start timing replay and aggregation together
    let start_time = Instant::now();

    // Replay the transcript into a tree
    let mut parser = TranscriptParser::with_progress(Arc::new(progress.clone()));
    for (idx, line) in input.lines().enumerate() {
        parser.process_line(line, idx + 1)?;
    }
    let parser_stats = parser.statistics();
    let tree = parser.finish();

    // Write XML output
    if config.write_xml {
        let writer = XmlWriter::new(config.clone());
        writer.write(&tree)?;
    }

    // Run the threshold-bounded aggregate query
    let within_cap_sum = sum_within_cap(&tree, tree.root(), config.size_cap);

    let total_duration = start_time.elapsed();

    // Clear the progress bar
    progress.finish_and_clear();

    // Prepare the replay report
    let root_total = tree.node(tree.root()).total_size;
    let directory_sizes = directory_paths(&tree)
        .into_iter()
        .map(|(id, path)| (path, tree.node(id).total_size))
        .collect();

    let replay_report = ReplayReport {
        output_file: config
            .write_xml
            .then(|| config.output_file.display().to_string()),
        duration: total_duration,
        lines_processed: parser_stats.lines_processed,
        files_discovered: parser_stats.files_discovered,
        directories: tree.len(),
        root_total,
        size_cap: config.size_cap,
        within_cap_sum,
        directory_sizes,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&replay_report);

    // The single integer answer, on its own line for scripting
    println!("{}", within_cap_sum);

    Ok(())
}
