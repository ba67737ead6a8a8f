/*!
 * XML writer for the reconstructed directory tree
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};

use chrono::Local;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::config::Config;
use crate::types::{FileEntry, FsTree, NodeId};

/// XML writer for a replayed tree
pub struct XmlWriter {
    /// Writer configuration
    config: Config,
}

impl XmlWriter {
    /// Create a new XML writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the directory tree to an XML file
    pub fn write(&self, tree: &FsTree) -> io::Result<()> {
        let file = File::create(&self.config.output_file)?;
        let writer = BufWriter::new(file);
        let mut xml_writer = Writer::new_with_indent(writer, b' ', 2);

        // Write XML declaration
        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        // Start transcript_replay element with timestamp and cap
        let mut start_tag = BytesStart::new("transcript_replay");
        let timestamp = Local::now().to_rfc3339();
        start_tag.push_attribute(("timestamp", timestamp.as_str()));
        start_tag.push_attribute(("size_cap", self.config.size_cap.to_string().as_str()));
        xml_writer.write_event(Event::Start(start_tag))?;

        // Write directory structure from the root
        self.write_directory(tree, tree.root(), &mut xml_writer)?;

        // End transcript_replay element
        xml_writer.write_event(Event::End(BytesEnd::new("transcript_replay")))?;

        Ok(())
    }

    /// Write a directory node and its contents to XML
    fn write_directory<W: Write>(
        &self,
        tree: &FsTree,
        id: NodeId,
        writer: &mut Writer<W>,
    ) -> io::Result<()> {
        let dir = tree.node(id);

        let mut start_tag = BytesStart::new("directory");
        start_tag.push_attribute(("name", dir.name.as_str()));
        start_tag.push_attribute(("total_size", dir.total_size.to_string().as_str()));
        writer.write_event(Event::Start(start_tag))?;

        for file in &dir.files {
            self.write_file(file, writer)?;
        }

        for &child in &dir.children {
            self.write_directory(tree, child, writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("directory")))?;

        Ok(())
    }

    /// Write a file entry as an empty element
    fn write_file<W: Write>(&self, file: &FileEntry, writer: &mut Writer<W>) -> io::Result<()> {
        let mut tag = BytesStart::new("file");
        tag.push_attribute(("name", file.name.as_str()));
        tag.push_attribute(("size", file.size.to_string().as_str()));
        writer.write_event(Event::Empty(tag))?;

        Ok(())
    }
}
