#![doc(hidden)]

use anyhow::{Context, Error, anyhow, bail, ensure};
use html2warc::{
    date::WarcDate,
    directory::{self, ArchiveSummary, SearchOptions},
    target_uri::RootUrl,
    warc::{Writer, WriterOptions},
};
use std::{path::PathBuf, str, sync::Once};

/// Fixed timestamp for tests, 26 bytes long.
pub const DATE: &str = "2015-12-30T14:05:09.123456";

// path to data/site
pub fn site_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("site")
}

pub fn logger_init() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        simple_logger::init_with_level(log::Level::Debug).unwrap();
    });
}

// archives directory into memory with default options and fixed timestamp
pub fn archive_to_memory(
    path: &std::path::Path,
    root_url: &str,
    options: WriterOptions,
) -> Result<(ArchiveSummary, Vec<u8>), Error> {
    let mut writer = Writer::new(
        Vec::new(),
        "test.warc",
        WarcDate::from_string(DATE.to_owned()),
        options,
    )?;
    let summary = directory::archive(
        &mut writer,
        path,
        &RootUrl::new(root_url),
        &SearchOptions::default(),
    )?;
    let output = writer.into_inner()?;

    Ok((summary, output))
}

/// Single record parsed back from output. `Content-Length` of WARC header is
/// not used for parsing, as the legacy value is not the real block length.
#[derive(Debug)]
pub struct Record {
    pub warc_fields: Vec<(String, String)>,
    /// http status line, response records only
    pub http_status: Option<String>,
    pub http_fields: Vec<(String, String)>,
    /// warcinfo field lines or response payload
    pub block: Vec<u8>,
}
impl Record {
    pub fn warc_field(
        &self,
        name: &str,
    ) -> Option<&str> {
        field(&self.warc_fields, name)
    }
    pub fn http_field(
        &self,
        name: &str,
    ) -> Option<&str> {
        field(&self.http_fields, name)
    }
}

fn field<'a>(
    fields: &'a [(String, String)],
    name: &str,
) -> Option<&'a str> {
    fields
        .iter()
        .find(|(field_name, _)| field_name == name)
        .map(|(_, value)| value.as_str())
}

struct Reader<'a> {
    content: &'a [u8],
    position: usize,
}
impl<'a> Reader<'a> {
    fn is_empty(&self) -> bool {
        self.position >= self.content.len()
    }

    fn line(&mut self) -> Result<&'a str, Error> {
        let content: &'a [u8] = self.content;
        let rest = &content[self.position..];
        let end = rest
            .windows(2)
            .position(|window| window == b"\r\n")
            .ok_or_else(|| anyhow!("missing line terminator at {}", self.position))?;
        self.position += end + 2;

        let line = str::from_utf8(&rest[..end]).context("line is not utf-8")?;
        Ok(line)
    }

    fn fields(&mut self) -> Result<Vec<(String, String)>, Error> {
        let mut fields = Vec::new();
        loop {
            let line = self.line()?;
            if line.is_empty() {
                break;
            }
            let (name, value) = line
                .split_once(": ")
                .ok_or_else(|| anyhow!("invalid field line {:?}", line))?;
            fields.push((name.to_owned(), value.to_owned()));
        }
        Ok(fields)
    }

    fn bytes(
        &mut self,
        length: usize,
    ) -> Result<&'a [u8], Error> {
        ensure!(
            self.position + length <= self.content.len(),
            "premature data termination"
        );
        let content: &'a [u8] = self.content;
        let bytes = &content[self.position..self.position + length];
        self.position += length;
        Ok(bytes)
    }

    fn expect(
        &mut self,
        expected: &[u8],
    ) -> Result<(), Error> {
        let bytes = self.bytes(expected.len())?;
        ensure!(bytes == expected, "expected {:?}, got {:?}", expected, bytes);
        Ok(())
    }
}

/// Parses all records written by html2warc.
pub fn read_records(content: &[u8]) -> Result<Box<[Record]>, Error> {
    let mut reader = Reader {
        content,
        position: 0,
    };

    let mut records = Vec::new();
    while !reader.is_empty() {
        let version = reader.line()?;
        ensure!(version == "WARC/1.0", "missing record version");
        let warc_fields = reader.fields()?;

        let record_type = field(&warc_fields, "WARC-Type").map(|record_type| record_type.to_owned());
        let record = match record_type.as_deref() {
            Some("warcinfo") => {
                let mut block = Vec::new();
                loop {
                    let line = reader.line()?;
                    if line.is_empty() {
                        break;
                    }
                    block.extend_from_slice(line.as_bytes());
                    block.extend_from_slice(b"\r\n");
                }
                reader.expect(b"\r\n\r\n")?;

                Record {
                    warc_fields,
                    http_status: None,
                    http_fields: Vec::new(),
                    block,
                }
            }
            Some("response") => {
                let http_status = reader.line()?.to_owned();
                let http_fields = reader.fields()?;
                let length = field(&http_fields, "Content-Length")
                    .ok_or_else(|| anyhow!("missing http Content-Length"))?
                    .parse::<usize>()?;
                let block = reader.bytes(length)?.to_vec();
                reader.expect(b"\r\n\r\n")?;

                Record {
                    warc_fields,
                    http_status: Some(http_status),
                    http_fields,
                    block,
                }
            }
            other => bail!("unexpected record type {:?}", other),
        };
        records.push(record);
    }

    Ok(records.into_boxed_slice())
}
