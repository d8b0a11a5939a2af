//! Main html2warc executable, to be used as cli tool. For help run this command
//! with `-h`.

#![warn(missing_docs)]

use anyhow::{Error, ensure};
use clap::{CommandFactory, Parser, error::ErrorKind as ClapErrorKind};
use html2warc::{date::WarcDate, directory, target_uri::RootUrl, warc};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

/// Creates warc files from local web resources.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// Url prefix for all records, eg. `http://example.com/`.
    #[arg(value_name = "ROOTURL")]
    pub root_url: String,

    /// Directory with the web resources to be archived.
    #[arg(value_name = "SOURCEDIR")]
    pub source_directory: PathBuf,

    /// Output file name, `.warc` is appended.
    #[arg(value_name = "TARGETWARC")]
    pub target_warc: PathBuf,
}
impl Arguments {
    /// Output path, with `.warc` appended.
    pub fn target_warc_path(&self) -> PathBuf {
        let mut target_warc_path = self.target_warc.clone().into_os_string();
        target_warc_path.push(".warc");
        PathBuf::from(target_warc_path)
    }
}

fn main() -> Result<(), Error> {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error)
            if matches!(
                error.kind(),
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion
            ) =>
        {
            error.exit()
        }
        Err(_) => {
            // wrong arguments are not considered an error, just print usage
            println!("\n{}\n", Arguments::command().render_usage());
            return Ok(());
        }
    };

    SimpleLogger::new().with_level(LevelFilter::Info).init()?;

    ensure!(
        arguments.source_directory.is_dir(),
        "{} is not a directory",
        arguments.source_directory.display()
    );

    let root_url = RootUrl::new(arguments.root_url.clone());
    let target_warc_path = arguments.target_warc_path();

    let mut writer = warc::create_file(
        &target_warc_path,
        WarcDate::now(),
        warc::WriterOptions::default(),
    )?;
    let summary = directory::archive(
        &mut writer,
        &arguments.source_directory,
        &root_url,
        &directory::SearchOptions::default(),
    )?;
    warc::finalize_file(writer)?;

    log::info!(
        "archived {} files as {} records into {}",
        summary.files,
        summary.records,
        target_warc_path.display()
    );

    Ok(())
}
