//! Response record serialization. Contains [write_response], writing a single
//! WARC `response` record with a synthesized http header, and
//! [ContentLengthPolicy] deciding what goes into its `Content-Length`.

use crate::{date::WarcDate, error::ErrorKind, file::FileEntry, target_uri::TargetUri};
use anyhow::{Context, Error};
use std::io::Write;
use uuid::Uuid;

/// Line terminator used by all header lines and separators.
pub(crate) const CRLF: &str = "\r\n";

/// Fixed part of the legacy `Content-Length`, see
/// [ContentLengthPolicy::Legacy].
pub const LEGACY_BLOCK_LENGTH_BASE: u64 = 110;

/// How WARC header `Content-Length` field is calculated.
///
/// If not sure what to set here, use [Default].
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ContentLengthPolicy {
    /// Value compatible with archives produced by html2warc up to 0.7:
    /// `110 + file size + content type length + timestamp length` for
    /// response records and `2 + sum of (line length + 1)` for the warcinfo
    /// record.
    ///
    /// This is NOT the real number of bytes in the record block, warc
    /// validators will complain about it.
    #[default]
    Legacy,
    /// Real number of bytes in the record block (http header + payload for
    /// response records), as required by WARC 1.0.
    Exact,
}
impl ContentLengthPolicy {
    /// `Content-Length` of a response record.
    ///
    /// `http_header_length` is the byte length of the http header block,
    /// including terminating blank line.
    pub fn response_block_length(
        self,
        http_header_length: usize,
        file_size: u64,
        content_type: &str,
        date: &WarcDate,
    ) -> u64 {
        match self {
            Self::Legacy => {
                LEGACY_BLOCK_LENGTH_BASE + file_size + content_type.len() as u64 + date.len() as u64
            }
            Self::Exact => http_header_length as u64 + file_size,
        }
    }
}

/// Renders each line terminated with [CRLF].
pub(crate) fn header_block<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    lines
        .into_iter()
        .flat_map(|line| [line, CRLF])
        .collect()
}

/// New unique `WARC-Record-ID` value, eg. `<urn:uuid:...>`.
pub(crate) fn record_id() -> String {
    format!("<{}>", Uuid::new_v4().urn())
}

/// Writes complete `response` record for `target_uri` into `writer`.
///
/// `content` is the file content, it is copied verbatim. Trailing separator
/// (two empty lines) is appended after it.
///
/// Fails with [ErrorKind::Write] if `writer` fails. Nothing is rolled back, a
/// partial record may stay in the output.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::path::PathBuf;
/// # use html2warc::{
/// #     date::WarcDate,
/// #     file::FileEntry,
/// #     record::{write_response, ContentLengthPolicy},
/// #     target_uri::TargetUri,
/// # };
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let file_entry = FileEntry {
///     path: PathBuf::from("/site/index.html"),
///     relative_path: PathBuf::from("index.html"),
///     size: 6,
///     content_type: Some("text/html".to_owned()),
/// };
///
/// let mut output = Vec::new();
/// write_response(
///     &mut output,
///     &TargetUri::from_string("http://example.com/index.html".to_owned()),
///     &file_entry,
///     b"<html>",
///     &WarcDate::from_string("2015-12-30T14:05:09.123456".to_owned()),
///     ContentLengthPolicy::Legacy,
/// )?;
///
/// let output = String::from_utf8(output)?;
/// assert!(output.starts_with("WARC/1.0\r\nWARC-Type: response\r\n"));
/// // 110 + 6 + len("text/html") + len("2015-12-30T14:05:09.123456")
/// assert!(output.contains("\r\nContent-Length: 151\r\n"));
/// assert!(output.ends_with("\r\n\r\n<html>\r\n\r\n"));
/// #
/// # Ok(())
/// # }
/// ```
pub fn write_response(
    mut writer: impl Write,
    target_uri: &TargetUri,
    file_entry: &FileEntry,
    content: &[u8],
    date: &WarcDate,
    content_length_policy: ContentLengthPolicy,
) -> Result<(), Error> {
    let content_type = file_entry.content_type_or_none();

    // network protocol information
    let http_header = header_block([
        "HTTP/1.1 200 OK",
        format!("DATE: {date}").as_str(),
        "Accept-Ranges: bytes",
        "Connection: close",
        format!("Content-Type: {content_type}").as_str(),
        format!("Content-Length: {}", file_entry.size).as_str(),
        "",
    ]);

    let block_length = content_length_policy.response_block_length(
        http_header.len(),
        file_entry.size,
        content_type,
        date,
    );

    let warc_header = header_block([
        "WARC/1.0",
        "WARC-Type: response",
        format!("WARC-Target-URI: {target_uri}").as_str(),
        format!("WARC-Record-ID: {}", record_id()).as_str(),
        format!("WARC-Date: {date}").as_str(),
        "Content-Type: application/http;msgtype=response",
        format!("WARC-Identified-Payload-Type: {content_type}").as_str(),
        format!("Content-Length: {block_length}").as_str(),
        "",
    ]);

    log::debug!(
        "writing response record {target_uri}: content_type={content_type}, size={}, block_length={block_length}",
        file_entry.size,
    );

    writer
        .write_all(warc_header.as_bytes())
        .context(ErrorKind::Write)?;
    writer
        .write_all(http_header.as_bytes())
        .context(ErrorKind::Write)?;
    writer.write_all(content).context(ErrorKind::Write)?;
    writer
        .write_all(CRLF.repeat(2).as_bytes())
        .context(ErrorKind::Write)?;

    Ok(())
}
