//! Error-related types for an [`Epub`](crate::Epub).

pub use crate::archive::errors::{ArchiveError, ArchiveResult};
pub use crate::util::utf::UtfError;
use std::error::Error;

/// Alias for `Result<T, EpubError>`.
pub type EpubResult<T> = Result<T, EpubError>;

/// Unified error type.
///
/// Returned when opening an [`Epub`](crate::Epub) fails, when a resource
/// cannot be accessed, and recorded within an
/// [`Invalid`](crate::epub::Document::Invalid) optional document.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum EpubError {
    /// Resource access within the archive or directory has failed.
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// A document was present although could not be decoded.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl EpubError {
    /// Returns `true` if the error originates from a resource that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Archive(error) if error.is_not_found())
    }
}

/// Possible decoding errors for the documents of an [`Epub`](crate::Epub).
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum FormatError {
    /// Document content unexpectedly causes an internal decoder error.
    ///
    /// This originates from malformed content, such as improper XML or JSON.
    #[error(transparent)]
    Unparsable(#[from] Box<dyn Error + Send + Sync + 'static>),

    /// The container lists no `rootfile` entry.
    ///
    /// Error Source: `META-INF/container.xml`
    #[error("Missing `rootfile` element in `META-INF/container.xml`")]
    NoRootfile,

    /// The `package` element is not found.
    ///
    /// Error Source: `.opf` file
    #[error("Missing `package` element")]
    NoPackageFound,

    /// The `ncx` root element is not found.
    ///
    /// Error Source: `.ncx` file
    #[error("Missing `ncx` element")]
    NoNcxFound,

    /// The `body` element of a media overlay is not found.
    ///
    /// Error Source: `.smil` file
    #[error("Missing `body` element")]
    NoSmilBody,
}
