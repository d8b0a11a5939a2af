//! File helpers. Contains [FileEntry], a single file found below the source
//! directory, and [FileEntry::build_from_path] to create it from fs.

use crate::error::ErrorKind;
use anyhow::{Context, Error, ensure};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Single file to be archived.
///
/// Only metadata is kept here. Content is read with [FileEntry::content] when
/// records are written, once per file regardless of how many records it
/// produces.
#[derive(Debug)]
pub struct FileEntry {
    /// Full path of the file, used for reading.
    pub path: PathBuf,
    /// Path relative to the source directory, used to build target uris.
    pub relative_path: PathBuf,
    /// File size in bytes, as reported by fs metadata.
    pub size: u64,
    /// Guessed `content-type`, [None] if it could not be guessed from
    /// extension.
    pub content_type: Option<String>,
}
impl FileEntry {
    /// Creates [self] for file `path` placed below `base_directory_path`.
    ///
    /// File is not read, only its metadata is queried (following symlinks).
    /// `content-type` is guessed from extension.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Error;
    /// # use std::{fs, path::Path};
    /// # use html2warc::file::FileEntry;
    /// #
    /// # fn main() -> Result<(), Error> {
    /// # let directory = tempfile::tempdir()?;
    /// # fs::create_dir(directory.path().join("a"))?;
    /// # fs::write(directory.path().join("a").join("index.html"), b"<html/>\r\n")?;
    /// #
    /// let file_entry = FileEntry::build_from_path(
    ///     &directory.path().join("a").join("index.html"),
    ///     directory.path(),
    /// )?;
    /// assert_eq!(file_entry.relative_path, Path::new("a/index.html"));
    /// assert_eq!(file_entry.size, 9);
    /// assert_eq!(file_entry.content_type.as_deref(), Some("text/html"));
    /// #
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_from_path(
        path: &Path,
        base_directory_path: &Path,
    ) -> Result<Self, Error> {
        // strip prefix, so relative_path is relative to search root
        let relative_path = path
            .strip_prefix(base_directory_path)
            .context("resolve file_base_relative_path")?
            .to_path_buf();

        let metadata =
            fs::metadata(path).with_context(|| ErrorKind::Read(path.to_path_buf()))?;
        ensure!(
            metadata.is_file(),
            "{} should be regular file, but is not",
            path.display()
        );

        let content_type = content_type_from_path(path);

        Ok(Self {
            path: path.to_path_buf(),
            relative_path,
            size: metadata.len(),
            content_type,
        })
    }

    /// `content-type` as written to headers, the literal `None` if unknown.
    pub fn content_type_or_none(&self) -> &str {
        self.content_type.as_deref().unwrap_or("None")
    }

    /// Reads whole file content.
    ///
    /// Fails with [ErrorKind::Read] if file cannot be read or if its size
    /// changed since [self] was built.
    pub fn content(&self) -> Result<Box<[u8]>, Error> {
        let content = fs::read(&self.path)
            .with_context(|| ErrorKind::Read(self.path.clone()))?
            .into_boxed_slice();

        if content.len() as u64 != self.size {
            return Err(Error::msg(format!(
                "read returned different number of bytes ({}) than file metadata ({})",
                content.len(),
                self.size
            ))
            .context(ErrorKind::Read(self.path.clone())));
        }

        Ok(content)
    }
}

/// Guesses `content-type` from file path.
///
/// Only path is used, file content is not read. Returns [None] if file type
/// cannot be guessed.
fn content_type_from_path(path: &Path) -> Option<String> {
    let mut content_type = mime_guess::from_path(path).first()?.as_ref().to_owned();

    // NOTE: temporary workaround for https://github.com/abonander/mime_guess/issues/90
    if content_type == "application/javascript" {
        content_type = "text/javascript".to_owned();
    }

    Some(content_type)
}
