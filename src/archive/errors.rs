use crate::util::utf::UtfError;
use std::io;
use std::path::PathBuf;

/// Alias for `Result<T, ArchiveError>`.
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Possible errors from the [`Archive`](crate::archive::Archive) backing an
/// [`Epub`](crate::Epub).
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ArchiveError {
    /// No entry (zip) or file (directory) exists at the requested path.
    #[error("[NotFound - `{path}`]: Can't find file or directory")]
    NotFound {
        /// The archive path that was requested.
        path: String,
    },

    /// The resource exists, although is unable to be read, typically I/O.
    #[error("[CannotRead - `{path}`]: {source}")]
    CannotRead {
        /// The root cause of the error.
        source: io::Error,
        /// The archive path that was requested.
        path: String,
    },

    /// The resource exists, although is unable to be read as UTF-8.
    #[error("[InvalidUtf8 - `{path}`]: Resource cannot be read as UTF-8")]
    InvalidUtf8 {
        /// The root cause of the error.
        source: UtfError,
        /// The archive path that was requested.
        path: String,
    },

    /// The archive itself is unreadable due to not existing,
    /// unsupported format, or malformed state.
    ///
    /// Path *is* [`None`] when the archive was supplied as a reader or handle
    /// rather than opened from the filesystem.
    #[error("[UnreadableArchive - `{path:?}`]: {source}")]
    UnreadableArchive {
        /// The root cause of this error.
        source: io::Error,
        /// The path responsible for triggering the error, if applicable.
        path: Option<PathBuf>,
    },

    /// The archive handle was released by [`Epub::close`](crate::Epub::close).
    #[error("[Closed]: The archive handle has been released")]
    Closed,
}

impl ArchiveError {
    /// Returns `true` if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
