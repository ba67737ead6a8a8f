/*!
 * End-to-end tests: transcript file in, XML tree and report out
 */

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::tempdir;

use replayfs::aggregate::sum_within_cap;
use replayfs::config::Config;
use replayfs::parser::TranscriptParser;
use replayfs::report::{ReplayReport, ReportFormat, Reporter};
use replayfs::utils::directory_paths;
use replayfs::writer::XmlWriter;

const TRANSCRIPT: &str = "\
$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
";

#[test]
fn test_replay_writes_xml_tree() {
    let temp_dir = tempdir().unwrap();

    let transcript_path = temp_dir.path().join("session.log");
    let mut transcript = fs::File::create(&transcript_path).unwrap();
    write!(transcript, "{}", TRANSCRIPT).unwrap();

    let output_file = temp_dir.path().join("tree.xml");
    let config = Config {
        transcript_path: Some(transcript_path.clone()),
        output_file: output_file.clone(),
        size_cap: 100_000,
        write_xml: true,
    };
    config.validate().unwrap();

    let input = fs::read_to_string(&transcript_path).unwrap();
    let tree = TranscriptParser::new().parse(&input).unwrap();

    let writer = XmlWriter::new(config);
    writer.write(&tree).unwrap();

    // Check that the output file exists
    assert!(output_file.exists());

    // Read the XML file to verify structure
    let xml_content = fs::read_to_string(&output_file).unwrap();

    assert!(xml_content.contains("<transcript_replay"));
    assert!(xml_content.contains("size_cap=\"100000\""));
    assert!(xml_content.contains("<directory name=\"/\" total_size=\"48381165\">"));
    assert!(xml_content.contains("<directory name=\"a\" total_size=\"94853\">"));
    assert!(xml_content.contains("<directory name=\"e\" total_size=\"584\">"));
    assert!(xml_content.contains("<directory name=\"d\" total_size=\"24933642\">"));
    assert!(xml_content.contains("<file name=\"b.txt\" size=\"14848514\"/>"));
    assert!(xml_content.contains("<file name=\"i\" size=\"584\"/>"));
}

#[test]
fn test_report_renders_directories_and_answer() {
    let tree = TranscriptParser::new().parse(TRANSCRIPT).unwrap();
    let within_cap_sum = sum_within_cap(&tree, tree.root(), 100_000);
    assert_eq!(within_cap_sum, 95_437);

    let directory_sizes = directory_paths(&tree)
        .into_iter()
        .map(|(id, path)| (path, tree.node(id).total_size))
        .collect();

    let report = ReplayReport {
        output_file: Some(PathBuf::from("tree.xml").display().to_string()),
        duration: Duration::from_millis(3),
        lines_processed: TRANSCRIPT.lines().count(),
        files_discovered: 10,
        directories: tree.len(),
        root_total: tree.node(tree.root()).total_size,
        size_cap: 100_000,
        within_cap_sum,
        directory_sizes,
    };

    let rendered = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report);

    // All four directories fit on the untruncated table
    assert!(rendered.contains("DIRECTORY SIZES"));
    assert!(rendered.contains("/a/e"));
    assert!(rendered.contains("/d"));
    assert!(rendered.contains("95437"));
    assert!(rendered.contains("REPLAY COMPLETE"));
}

#[test]
fn test_validate_rejects_missing_transcript() {
    let temp_dir = tempdir().unwrap();

    let config = Config {
        transcript_path: Some(temp_dir.path().join("does-not-exist.log")),
        output_file: temp_dir.path().join("tree.xml"),
        size_cap: 100_000,
        write_xml: true,
    };

    assert!(config.validate().is_err());
}
