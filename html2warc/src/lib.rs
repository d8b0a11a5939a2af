//! html2warc creates WARC (Web ARChive) files from local web resources.
//!
//! Typical input is a website saved to disk (html pages, images, styles,
//! scripts), for which no captured http traffic exists. Every file found in
//! the source directory is stored as a WARC `response` record with a
//! synthesized `HTTP/1.1 200 OK` header, under an uri built from its path
//! relative to the source directory, prefixed with a root url.
//!
//! Index files (`index.html`, `index.htm`, `index.asp`, `index.php`,
//! `welcome.html`, `welcome.htm`, case-insensitive) are stored twice: under
//! their own name and under the directory uri (eg. `http://example.com/a/`),
//! so that both forms resolve when the archive is replayed.
//!
//! This crate can be used in two ways:
//! - As a standalone application, run as `html2warc ROOTURL SOURCEDIR
//!   TARGETWARC`. `.warc` is appended to `TARGETWARC`.
//! - As a library, when more control is needed, eg. to write into something
//!   else than a file or to produce WARC-compliant `Content-Length` fields
//!   (see [record::ContentLengthPolicy]).
//!
//! # Format compatibility
//!
//! By default records are byte compatible with archives produced by
//! html2warc 0.7. In particular `Content-Length` of the WARC header is NOT the
//! real block length, see [record::ContentLengthPolicy::Legacy].
//!
//! # Examples
//!
//! ```no_run
//! # use anyhow::Error;
//! # use std::path::PathBuf;
//! # use html2warc::{
//! #     date::WarcDate,
//! #     directory::{archive, SearchOptions},
//! #     target_uri::RootUrl,
//! #     warc::{create_file, finalize_file, WriterOptions},
//! # };
//!
//! # fn main() -> Result<(), Error> {
//! // create output, warcinfo record is written immediately
//! let mut writer = create_file(
//!     &PathBuf::from("my-site.warc"),
//!     WarcDate::now(),
//!     WriterOptions::default(),
//! )?;
//!
//! // add all files from directory
//! archive(
//!     &mut writer,
//!     &PathBuf::from("my-site"),
//!     &RootUrl::new("http://example.com"),
//!     &SearchOptions::default(),
//! )?;
//!
//! // flush and sync to disk
//! finalize_file(writer)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod date;
pub mod directory;
pub mod error;
pub mod file;
pub mod record;
pub mod target_uri;
pub mod warc;
pub mod warcinfo;
