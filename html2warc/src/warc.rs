//! WARC output helpers. Contains [Writer], owning the output for the whole
//! run, and [create_file] / [finalize_file] to use it with fs.

use crate::{
    date::WarcDate,
    error::ErrorKind,
    file::FileEntry,
    record::{self, ContentLengthPolicy},
    target_uri::{self, RootUrl, TargetUri},
    warcinfo,
};
use anyhow::{Context, Error};
use std::{
    fs,
    io::{BufWriter, Write},
    path::Path,
};

/// Settings for [Writer].
///
/// If not sure what to set here, use [Default].
#[derive(Default, Debug)]
pub struct WriterOptions {
    /// How `Content-Length` of records is calculated.
    pub content_length: ContentLengthPolicy,
}

/// Sequential WARC writer.
///
/// Writes warcinfo record when created, then response records one after
/// another. The creation timestamp is fixed for the writer lifetime, so all
/// records share the same date.
#[derive(Debug)]
pub struct Writer<W: Write> {
    writer: W,
    date: WarcDate,
    options: WriterOptions,
    records_written: usize,
}
impl<W: Write> Writer<W> {
    /// Creates [self] and writes the warcinfo record, with `file_name` as
    /// `WARC-Filename`.
    pub fn new(
        mut writer: W,
        file_name: &str,
        date: WarcDate,
        options: WriterOptions,
    ) -> Result<Self, Error> {
        warcinfo::write_warcinfo(&mut writer, file_name, &date, options.content_length)
            .context("warcinfo")?;

        Ok(Self {
            writer,
            date,
            options,
            records_written: 0,
        })
    }

    /// Creation timestamp used for all records.
    pub fn date(&self) -> &WarcDate {
        &self.date
    }

    /// Number of response records written so far.
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Appends single response record.
    pub fn response_add(
        &mut self,
        target_uri: &TargetUri,
        file_entry: &FileEntry,
        content: &[u8],
    ) -> Result<(), Error> {
        record::write_response(
            &mut self.writer,
            target_uri,
            file_entry,
            content,
            &self.date,
            self.options.content_length,
        )?;
        self.records_written += 1;

        Ok(())
    }

    /// Appends response records for all target uris of the file.
    ///
    /// File content is read once, then written for every uri. Returns the
    /// target uris used.
    pub fn file_entry_add(
        &mut self,
        root_url: &RootUrl,
        file_entry: &FileEntry,
    ) -> Result<Box<[TargetUri]>, Error> {
        let target_uris =
            target_uri::from_file_base_relative_path(root_url, &file_entry.relative_path)?;

        let content = file_entry.content()?;

        for target_uri in target_uris.iter() {
            log::info!(
                "{}\t[{}]\t{}b",
                target_uri,
                file_entry.content_type_or_none(),
                file_entry.size
            );

            self.response_add(target_uri, file_entry, &content)?;
        }

        Ok(target_uris)
    }

    /// Flushes and returns the inner writer.
    pub fn into_inner(mut self) -> Result<W, Error> {
        self.writer.flush().context(ErrorKind::Write)?;

        Ok(self.writer)
    }
}

/// Creates (or truncates) the file at `path` and returns [Writer] with the
/// warcinfo record already written.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use html2warc::{
/// #     date::WarcDate,
/// #     warc::{create_file, finalize_file, WriterOptions},
/// # };
/// #
/// # fn main() -> Result<(), Error> {
/// # let directory = tempfile::tempdir()?;
/// let path = directory.path().join("empty.warc");
///
/// let writer = create_file(&path, WarcDate::now(), WriterOptions::default())?;
/// finalize_file(writer)?;
///
/// let content = std::fs::read_to_string(&path)?;
/// assert!(content.starts_with("WARC/1.0\r\nWARC-Type: warcinfo\r\n"));
/// #
/// # Ok(())
/// # }
/// ```
pub fn create_file(
    path: &Path,
    date: WarcDate,
    options: WriterOptions,
) -> Result<Writer<BufWriter<fs::File>>, Error> {
    let file = fs::File::create(path)
        .context(ErrorKind::Write)
        .with_context(|| path.to_string_lossy().into_owned())?;

    Writer::new(
        BufWriter::new(file),
        &path.to_string_lossy(),
        date,
        options,
    )
}

/// Flushes everything written with `writer` and syncs file to disk.
pub fn finalize_file(writer: Writer<BufWriter<fs::File>>) -> Result<(), Error> {
    let file = writer
        .into_inner()?
        .into_inner()
        .map_err(|error| error.into_error())
        .context(ErrorKind::Write)?;

    file.sync_all().context(ErrorKind::Write)?;
    drop(file);

    Ok(())
}
