//! Target uri helpers. Contains [RootUrl] and [TargetUri] types and
//! [from_file_base_relative_path], which maps a file below the source root to
//! the uri (or uris) it will be archived under.

use anyhow::{Error, anyhow, ensure};
use std::{
    borrow::Borrow,
    fmt,
    ops::Deref,
    path::{Component, Path},
};

/// Url prefix supplied by the operator, eg. `http://example.com/`.
///
/// Always ends with exactly one `/`. If the operator did not provide one, it
/// is appended.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RootUrl {
    inner: String,
}
impl RootUrl {
    /// Creates [self], appending trailing `/` if missing and collapsing
    /// repeated ones.
    ///
    /// # Examples
    ///
    /// ```
    /// # use html2warc::target_uri::RootUrl;
    /// assert_eq!(&*RootUrl::new("http://example.com"), "http://example.com/");
    /// assert_eq!(&*RootUrl::new("http://example.com/"), "http://example.com/");
    /// assert_eq!(&*RootUrl::new("http://example.com//"), "http://example.com/");
    /// ```
    pub fn new(root_url: impl Into<String>) -> Self {
        let mut inner = root_url.into();
        let trimmed_length = inner.trim_end_matches('/').len();
        inner.truncate(trimmed_length);
        inner.push('/');
        Self { inner }
    }
}
impl Deref for RootUrl {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl fmt::Display for RootUrl {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// [TargetUri] is the `WARC-Target-URI` of a single response record.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct TargetUri {
    inner: String,
}
impl TargetUri {
    /// Construct uri from string representation. No validation is performed.
    pub fn from_string(inner: String) -> Self {
        Self { inner }
    }
}
impl Deref for TargetUri {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl Borrow<str> for TargetUri {
    fn borrow(&self) -> &str {
        self.inner.as_str()
    }
}
impl fmt::Display for TargetUri {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

/// Names of index files, served when directory uri is requested. Listed in
/// order of preference as `(stem, extensions)`, matched case-insensitive.
const INDEX_FILE_NAMES: &[(&str, &[&str])] = &[
    ("index", &["htm", "html", "asp", "php"]), // most common
    ("welcome", &["htm", "html"]),             // AOL server
];

/// Checks whether `file_name` is recognized as a directory index, eg.
/// `index.html` or `Welcome.HTM`.
pub fn is_index_file_name(file_name: &str) -> bool {
    INDEX_FILE_NAMES.iter().any(|(stem, extensions)| {
        let Some((file_stem, file_extension)) = file_name.split_once('.') else {
            return false;
        };
        file_stem.eq_ignore_ascii_case(stem)
            && extensions
                .iter()
                .any(|extension| file_extension.eq_ignore_ascii_case(extension))
    })
}

/// Creates target uris from relative fs path (eg. "dir1/dir2/index.html").
///
/// First uri is always the file itself (eg.
/// "http://example.com/dir1/dir2/index.html"). If file name is an index file
/// (see [is_index_file_name]) the directory uri (eg.
/// "http://example.com/dir1/dir2/") is added as the second one. There are
/// never more than two.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use std::path::PathBuf;
/// # use html2warc::target_uri::{from_file_base_relative_path, RootUrl};
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let target_uris = from_file_base_relative_path(
///     &RootUrl::new("http://example.com"),
///     &PathBuf::from("a/index.html"),
/// )?;
/// assert_eq!(&*target_uris[0], "http://example.com/a/index.html");
/// assert_eq!(&*target_uris[1], "http://example.com/a/");
/// #
/// # Ok(())
/// # }
/// ```
pub fn from_file_base_relative_path(
    root_url: &RootUrl,
    file_base_relative_path: &Path,
) -> Result<Box<[TargetUri]>, Error> {
    ensure!(
        file_base_relative_path.is_relative(),
        "path must be relative to source directory, got {:?}",
        file_base_relative_path
    );

    // list of path components, eg. ["dir1", "dir2", "file.bin"]
    let mut components = file_base_relative_path
        .components()
        .map(|component| {
            // we cannot handle things like '/' or '.' or '..' here
            ensure!(
                matches!(component, Component::Normal(_)),
                "relative path must contain only standard path items, got {:?}",
                component
            );

            component
                .as_os_str()
                .to_str()
                .ok_or_else(|| anyhow!("cannot convert path component to string"))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let file_name = components
        .pop()
        .ok_or_else(|| anyhow!("relative path must not be empty"))?;

    // "dir1/dir2" or "" for files placed directly in source directory
    let relative_directory = itertools::join(components, "/");
    let directory_uri = if relative_directory.is_empty() {
        root_url.to_string()
    } else {
        format!("{root_url}{relative_directory}/")
    };

    let file_uri = TargetUri::from_string(format!("{directory_uri}{file_name}"));
    let target_uris = if is_index_file_name(file_name) {
        vec![file_uri, TargetUri::from_string(directory_uri)]
    } else {
        vec![file_uri]
    };

    Ok(target_uris.into_boxed_slice())
}
