use crate::error::Error;
use crate::record::{Record, RecordBody};
use crate::rules::RuleSet;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { path: PathBuf, records: usize },
    /// No records qualified; no file was created.
    NothingToWrite,
}

/// Serialize `records` as a `<documents>` tree into `sink`.
///
/// Paths and placeholders are escaped. Payloads already carry their CDATA
/// envelope and are written verbatim.
pub fn write_document<W: Write>(sink: W, records: &[Record], indent: usize) -> Result<W, Error> {
    let mut writer = Writer::new_with_indent(sink, b' ', indent);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("documents")))?;

    for record in records {
        let index = record.index.to_string();
        let mut document = BytesStart::new("document");
        document.push_attribute(("index", index.as_str()));
        writer.write_event(Event::Start(document))?;

        writer.write_event(Event::Start(BytesStart::new("source")))?;
        writer.write_event(Event::Text(BytesText::new(&record.source)))?;
        writer.write_event(Event::End(BytesEnd::new("source")))?;

        let content = match &record.body {
            RecordBody::Payload(payload) => BytesText::from_escaped(payload.as_str()),
            RecordBody::Placeholder(text) => BytesText::new(text),
        };
        writer.write_event(Event::Start(BytesStart::new("document_content")))?;
        writer.write_event(Event::Text(content))?;
        writer.write_event(Event::End(BytesEnd::new("document_content")))?;

        writer.write_event(Event::End(BytesEnd::new("document")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("documents")))?;

    let mut sink = writer.into_inner();
    sink.write_all(b"\n")?;
    Ok(sink)
}

/// Writes the snapshot file, or reports why there is nothing to write.
pub struct DocumentWriter<'a> {
    rules: &'a RuleSet,
    indent: usize,
}

impl<'a> DocumentWriter<'a> {
    pub fn new(rules: &'a RuleSet, indent: usize) -> Self {
        Self { rules, indent }
    }

    pub fn write(&self, root: &Path, output_path: &Path, records: &[Record]) -> Result<WriteOutcome, Error> {
        if records.is_empty() {
            warn!("No files were processed under {}! Check the following:", root.display());
            warn!("1. Are there any files with supported extensions?");
            warn!("2. Are all files being ignored by the filters?");
            warn!("3. Is the project path correct?");
            warn!(
                "Supported extensions: {}",
                self.rules.supported_extensions().join(", ")
            );
            return Ok(WriteOutcome::NothingToWrite);
        }

        let file = File::create(output_path)?;
        let mut sink = write_document(BufWriter::new(file), records, self.indent)?;
        sink.flush()?;

        info!("XML file created at: {}", output_path.display());
        Ok(WriteOutcome::Written {
            path: output_path.to_path_buf(),
            records: records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn render(records: &[Record]) -> String {
        let bytes = write_document(Vec::new(), records, 2).unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_document_layout() {
        let records = vec![Record {
            index: 1,
            source: "src/main.py".to_string(),
            body: RecordBody::Payload("<![CDATA[print(1)]]>".to_string()),
        }];
        let xml = render(&records);
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<documents>\n  <document index=\"1\">\n    <source>src/main.py</source>\n    \
<document_content><![CDATA[print(1)]]></document_content>\n  </document>\n</documents>\n";
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_source_and_placeholder_are_escaped() {
        let records = vec![Record {
            index: 1,
            source: "a&b/<x>.txt".to_string(),
            body: RecordBody::Placeholder("File too large to include: a&b".to_string()),
        }];
        let xml = render(&records);
        assert!(xml.contains("<source>a&amp;b/&lt;x&gt;.txt</source>"));
        assert!(xml.contains("<document_content>File too large to include: a&amp;b</document_content>"));
    }

    #[test]
    fn test_empty_records_write_nothing() {
        let tmp = tempdir().unwrap();
        let rules = RuleSet::default();
        let output = tmp.path().join("out.xml");
        let outcome = DocumentWriter::new(&rules, 2)
            .write(tmp.path(), &output, &[])
            .unwrap();
        assert_eq!(outcome, WriteOutcome::NothingToWrite);
        assert!(!output.exists());
    }

    #[test]
    fn test_write_creates_file() {
        let tmp = tempdir().unwrap();
        let rules = RuleSet::default();
        let output = tmp.path().join("out.xml");
        let records = vec![Record {
            index: 1,
            source: "README.md".to_string(),
            body: RecordBody::Payload("<![CDATA[# Title]]>".to_string()),
        }];
        let outcome = DocumentWriter::new(&rules, 2)
            .write(tmp.path(), &output, &records)
            .unwrap();
        assert_eq!(
            outcome,
            WriteOutcome::Written {
                path: output.clone(),
                records: 1
            }
        );
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("<![CDATA[# Title]]>"));
    }
}
