//! The `warcinfo` record, describing the archive itself. It is always the first
//! record of a file.

use crate::{
    date::WarcDate,
    error::ErrorKind,
    record::{CRLF, ContentLengthPolicy, header_block, record_id},
};
use anyhow::{Context, Error};
use std::io::Write;

/// Provenance fields, written as the warcinfo record block.
pub const FIELDS: [&str; 4] = [
    "software: html2warc http://hub.darcs.net/ampoffcom/html2warc",
    "format: WARC File Format 1.0",
    "conformsTo: http://bibnum.bnf.fr/WARC/WARC_ISO_28500_version1_latestdraft.pdf",
    "description: warc file created from offline data",
];

/// `Content-Length` of the warcinfo record.
///
/// [ContentLengthPolicy::Legacy] counts each field with a single byte line
/// terminator, plus 2.
pub fn block_length(content_length_policy: ContentLengthPolicy) -> u64 {
    match content_length_policy {
        ContentLengthPolicy::Legacy => {
            2 + FIELDS
                .iter()
                .map(|field| field.len() as u64 + 1)
                .sum::<u64>()
        }
        ContentLengthPolicy::Exact => FIELDS
            .iter()
            .map(|field| (field.len() + CRLF.len()) as u64)
            .sum(),
    }
}

/// Writes the warcinfo record into `writer`.
///
/// `file_name` is stored as `WARC-Filename`.
pub fn write_warcinfo(
    mut writer: impl Write,
    file_name: &str,
    date: &WarcDate,
    content_length_policy: ContentLengthPolicy,
) -> Result<(), Error> {
    let header = header_block([
        "WARC/1.0",
        "WARC-Type: warcinfo",
        format!("WARC-Date: {date}").as_str(),
        format!("WARC-Filename: {file_name}").as_str(),
        format!("WARC-Record-ID: {}", record_id()).as_str(),
        "Content-Type: application/warc-fields",
        format!("Content-Length: {}", block_length(content_length_policy)).as_str(),
        "",
    ]);
    let block = header_block(FIELDS);

    writer
        .write_all(header.as_bytes())
        .context(ErrorKind::Write)?;
    writer
        .write_all(block.as_bytes())
        .context(ErrorKind::Write)?;
    writer
        .write_all(CRLF.repeat(3).as_bytes())
        .context(ErrorKind::Write)?;

    Ok(())
}
