use crate::errors::{CliError, CliResult};
use clap::Args;
use rpub::Epub;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CatCommand {
    /// An EPUB file or directory containing the contents of an unzipped EPUB
    pub ebook_path: PathBuf,

    /// Resource path, relative to the package document unless `--raw` is set
    pub resource: String,

    /// Use the path as-is, relative to the archive root (e.g., `META-INF/container.xml`)
    #[arg(long)]
    raw: bool,
}

impl CatCommand {
    pub fn cat(&self) -> CliResult<()> {
        self.write_to(&mut io::stdout().lock())
    }

    fn write_to(&self, out: &mut impl Write) -> CliResult<()> {
        let mut epub = Epub::open(&self.ebook_path)?;
        let mut reader = if self.raw {
            epub.open_raw(&self.resource)?
        } else {
            epub.open_resource(&self.resource)?
        };
        log::debug!("writing `{}`", reader.path());

        io::copy(&mut reader, out).map_err(CliError::Output)?;
        out.flush().map_err(CliError::Output)?;

        epub.close();
        Ok(())
    }
}
