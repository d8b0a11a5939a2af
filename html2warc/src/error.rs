//! Error kinds attached to [anyhow::Error] as context.
//!
//! All fallible operations in this crate return [anyhow::Error]. Places where
//! the caller may want to tell a failing source file from a failing output
//! attach an [ErrorKind] with [anyhow::Context], so it can be recovered with
//! `error.downcast_ref::<ErrorKind>()`.

use std::{error, fmt, path::PathBuf};

/// Category of a fatal failure.
#[derive(Debug)]
pub enum ErrorKind {
    /// Source file could not be read (or changed size while being read).
    Read(PathBuf),
    /// Output archive could not be created or written to.
    Write,
}
impl fmt::Display for ErrorKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Read(path) => write!(f, "cannot read source file {}", path.display()),
            Self::Write => write!(f, "cannot write to target warc"),
        }
    }
}
impl error::Error for ErrorKind {}
