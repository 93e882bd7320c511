//! Resource stores backing an [`Epub`](crate::Epub).
//!
//! An [`Archive`] resolves an archive-root-relative path to a readable
//! [`ResourceReader`]. Two implementations exist:
//! - [`ZipArchive`]: entries of a zip-compressed EPUB, matched by exact name.
//! - [`DirectoryArchive`]: files of an already-expanded EPUB directory.
//!
//! The implementation is chosen once when an [`Epub`](crate::Epub) is opened.

mod directory;
pub(crate) mod errors;
mod zip;

pub use self::directory::DirectoryArchive;
pub use self::zip::ZipArchive;

use crate::archive::errors::{ArchiveError, ArchiveResult};
use crate::util::sync::SendAndSync;
use crate::util::utf;
use std::any::Any;
use std::fmt::{Debug, Formatter};
use std::fs::File;
use std::io::{self, BufReader, Cursor, Read};
use std::path::Path;

/// A store of publication resources addressed by archive-root-relative paths.
///
/// Paths are used as given; no percent-decoding or directory resolution
/// happens at this level.
pub trait Archive: SendAndSync + Any {
    /// Opens the resource at `path`, returning a fresh byte stream.
    ///
    /// # Errors
    /// - [`ArchiveError::NotFound`]: No entry or file exists at `path`.
    /// - [`ArchiveError::CannotRead`]: The resource exists but cannot be read.
    /// - [`ArchiveError::Closed`]: The underlying handle has been released.
    fn open(&self, path: &str) -> ArchiveResult<ResourceReader>;

    /// Releases the underlying handle, if any.
    ///
    /// Calling this more than once has no further effect.
    fn close(&mut self) {}

    /// Returns `true` if [`Self::close`] released a handle.
    fn is_closed(&self) -> bool {
        false
    }

    /// Upcast used to reach the concrete store, see [`Epub::zip_archive`](crate::Epub::zip_archive).
    fn as_any(&self) -> &dyn Any;

    /// Returns the entire content of the resource at `path`.
    fn read_bytes(&self, path: &str) -> ArchiveResult<Vec<u8>> {
        let mut reader = self.open(path)?;
        let mut buf = Vec::new();

        reader
            .read_to_end(&mut buf)
            .map(|_| buf)
            .map_err(|source| ArchiveError::CannotRead {
                source,
                path: path.to_owned(),
            })
    }

    /// Same as [`Self::read_bytes`], with UTF-16 content (detected by its BOM)
    /// transcoded to UTF-8.
    fn read_bytes_utf8(&self, path: &str) -> ArchiveResult<Vec<u8>> {
        utf::into_utf8(self.read_bytes(path)?).map_err(|source| ArchiveError::InvalidUtf8 {
            source,
            path: path.to_owned(),
        })
    }

    /// Returns the content of the resource at `path` as a string.
    fn read_str(&self, path: &str) -> ArchiveResult<String> {
        utf::into_utf8_str(self.read_bytes(path)?).map_err(|source| ArchiveError::InvalidUtf8 {
            source,
            path: path.to_owned(),
        })
    }
}

impl Debug for dyn Archive {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("Archive")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

/// A byte stream over a single resource, returned by [`Archive::open`].
///
/// Directory-backed streams hold their own file handle, which is closed
/// once the reader is dropped.
pub struct ResourceReader {
    path: String,
    source: ReaderSource,
}

enum ReaderSource {
    File(BufReader<File>),
    Memory(Cursor<Vec<u8>>),
}

impl ResourceReader {
    pub(crate) fn file(path: &str, file: File) -> Self {
        Self {
            path: path.to_owned(),
            source: ReaderSource::File(BufReader::new(file)),
        }
    }

    pub(crate) fn memory(path: &str, data: Vec<u8>) -> Self {
        Self {
            path: path.to_owned(),
            source: ReaderSource::Memory(Cursor::new(data)),
        }
    }

    /// The archive path this reader was opened from.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl Read for ResourceReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.source {
            ReaderSource::File(file) => file.read(buf),
            ReaderSource::Memory(cursor) => cursor.read(buf),
        }
    }
}

impl Debug for ResourceReader {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        let kind = match self.source {
            ReaderSource::File(_) => "file",
            ReaderSource::Memory(_) => "memory",
        };
        fmt.debug_struct("ResourceReader")
            .field("path", &self.path)
            .field("source", &kind)
            .finish()
    }
}

/// Maps a filesystem error onto the archive taxonomy,
/// keeping not-found distinct from other I/O failures.
fn io_error(source: io::Error, path: &str) -> ArchiveError {
    if source.kind() == io::ErrorKind::NotFound {
        ArchiveError::NotFound {
            path: path.to_owned(),
        }
    } else {
        ArchiveError::CannotRead {
            source,
            path: path.to_owned(),
        }
    }
}

/// Unzip the file if it is not a directory.
///
/// If it is, the contents can be accessed directly,
/// which makes using a zip file unnecessary.
pub(crate) fn get_archive(path: &Path) -> ArchiveResult<Box<dyn Archive>> {
    Ok(if path.is_file() {
        let file = File::open(path).map_err(|error| ArchiveError::UnreadableArchive {
            source: error,
            path: Some(path.to_path_buf()),
        })?;
        Box::new(ZipArchive::new(BufReader::new(file), Some(path))?)
    } else {
        Box::new(DirectoryArchive::new(path)?)
    })
}
