use rpub::errors::EpubError;
use std::io;

pub type CliResult<T> = Result<T, CliError>;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Opening the epub or one of its resources has failed.
    #[error(transparent)]
    Epub(#[from] EpubError),

    /// Writing to the output (typically stdout) has failed.
    #[error("Unable to write output: {0}")]
    Output(#[source] io::Error),
}
