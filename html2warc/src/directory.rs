//! Directory helpers. Contains [search] function, used to gather files from
//! directory recursively, and [archive], writing all of them into a
//! [Writer].

use crate::{file::FileEntry, target_uri::RootUrl, warc::Writer};
use anyhow::{Context, Error};
use std::{cmp::Ordering, io::Write, path::Path};
use walkdir::{DirEntry, WalkDir};

/// Settings for [search] function.
///
/// If not sure what to set here, use [Default].
#[derive(Debug)]
pub struct SearchOptions {
    /// Whether to descend into symlinked directories. Other symlinks are
    /// always included, dangling ones fail when their metadata is queried.
    pub follow_links: bool,
}
impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
        }
    }
}

/// Totals of a single [archive] run.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct ArchiveSummary {
    /// Number of files found.
    pub files: usize,
    /// Number of response records written, including index directory aliases.
    pub records: usize,
}

// files go before directories, both by name, so directory is completed before
// its subdirectories are visited
fn entry_order(
    a: &DirEntry,
    b: &DirEntry,
) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Searches fs recursively and builds [FileEntry] for each file.
///
/// Traverses directory specified in `path` using [SearchOptions]. Files are
/// yielded lazily, in a stable order: inside every directory files come
/// first, then subdirectories, each sorted by name. Relative paths are created
/// by stripping `path` from full file path.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::{fs, path::PathBuf};
/// # use html2warc::directory::{search, SearchOptions};
/// #
/// # fn main() -> Result<(), Error> {
/// # let directory = tempfile::tempdir()?;
/// # fs::create_dir_all(directory.path().join("b"))?;
/// # fs::write(directory.path().join("b").join("photo.jpg"), [0u8; 500])?;
/// # fs::write(directory.path().join("index.html"), b"<html></html>")?;
/// #
/// let file_entries = search(directory.path(), &SearchOptions::default())
///     .collect::<Result<Vec<_>, Error>>()?;
///
/// assert_eq!(
///     file_entries
///         .iter()
///         .map(|file_entry| file_entry.relative_path.clone())
///         .collect::<Vec<_>>(),
///     [PathBuf::from("index.html"), PathBuf::from("b/photo.jpg")],
/// );
/// #
/// # Ok(())
/// # }
/// ```
pub fn search<'p>(
    path: &'p Path,
    options: &SearchOptions,
) -> impl Iterator<Item = Result<FileEntry, Error>> + use<'p> {
    WalkDir::new(path)
        .follow_links(options.follow_links)
        .sort_by(entry_order)
        .into_iter()
        .map(move |dir_entry| -> Result<Option<FileEntry>, Error> {
            // detect search errors
            let dir_entry = dir_entry?;

            // directories (and links to them, if not followed) are only
            // traversed, everything else is a file, including dangling links
            let file_type = dir_entry.file_type();
            if file_type.is_dir() || (file_type.is_symlink() && dir_entry.path().is_dir()) {
                log::trace!("skipping {}", dir_entry.path().display());
                return Ok(None);
            }

            let file_entry = FileEntry::build_from_path(dir_entry.path(), path)
                .with_context(|| dir_entry.path().to_string_lossy().into_owned())?;

            // yield for processing
            Ok(Some(file_entry))
        })
        .filter_map(|entry_result| entry_result.transpose()) // strips Ok(None)
}

/// Writes every file found by [search] in `path` into `writer`, using
/// `root_url` as base of target uris.
///
/// Processing stops on the first error, records written so far stay in
/// `writer`.
pub fn archive<W: Write>(
    writer: &mut Writer<W>,
    path: &Path,
    root_url: &RootUrl,
    options: &SearchOptions,
) -> Result<ArchiveSummary, Error> {
    let mut summary = ArchiveSummary::default();

    for file_entry in search(path, options) {
        let file_entry = file_entry?;

        let target_uris = writer
            .file_entry_add(root_url, &file_entry)
            .with_context(|| file_entry.path.to_string_lossy().into_owned())?;

        summary.files += 1;
        summary.records += target_uris.len();
    }

    Ok(summary)
}
