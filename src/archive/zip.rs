use crate::archive::errors::{ArchiveError, ArchiveResult};
use crate::archive::{Archive, ResourceReader};
use crate::util::sync::Lock;
use ::zip::ZipArchive as Zip;
use ::zip::result::ZipError;
use std::any::Any;
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};

/// Zip-backed resource store.
///
/// Entries are looked up by exact, case-sensitive name.
/// The archive stays open until [`Archive::close`] is called or the store is dropped.
pub struct ZipArchive<R> {
    zip: Lock<Option<Zip<R>>>,
    path: Option<PathBuf>,
}

impl<R: Read + Seek> ZipArchive<R> {
    /// `reader` (and optional `path` for a more descriptive error message).
    pub(crate) fn new(reader: R, path: Option<&Path>) -> ArchiveResult<Self> {
        Zip::new(reader)
            .map(|zip| Self {
                zip: Lock::new(Some(zip)),
                path: path.map(Path::to_path_buf),
            })
            .map_err(|error| ArchiveError::UnreadableArchive {
                source: io::Error::from(error),
                path: path.map(Path::to_path_buf),
            })
    }

    pub(crate) fn from_zip(zip: Zip<R>) -> Self {
        Self {
            zip: Lock::new(Some(zip)),
            path: None,
        }
    }

    /// The filesystem location of the archive, if it was opened from one.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Grants scoped access to the underlying [`zip::ZipArchive`] handle.
    ///
    /// # Errors
    /// - [`ArchiveError::Closed`]: The handle has been released.
    /// - [`ArchiveError::UnreadableArchive`]: The handle is poisoned.
    pub fn with_zip<T>(&self, f: impl FnOnce(&mut Zip<R>) -> T) -> ArchiveResult<T> {
        let mut lock = self.zip.lock().map_err(|_| ArchiveError::UnreadableArchive {
            source: io::Error::other("Poisoned ZipArchive"),
            path: self.path.clone(),
        })?;

        match lock.as_mut() {
            Some(zip) => Ok(f(zip)),
            None => Err(ArchiveError::Closed),
        }
    }

    fn read_entry(zip: &mut Zip<R>, path: &str) -> ArchiveResult<Vec<u8>> {
        let mut entry = zip.by_name(path).map_err(|error| match error {
            ZipError::FileNotFound => ArchiveError::NotFound {
                path: path.to_owned(),
            },
            error => ArchiveError::CannotRead {
                source: io::Error::from(error),
                path: path.to_owned(),
            },
        })?;
        let mut buf = Vec::new();

        entry
            .read_to_end(&mut buf)
            .map(|_| buf)
            .map_err(|source| ArchiveError::CannotRead {
                source,
                path: path.to_owned(),
            })
    }
}

impl<#[cfg(feature = "threadsafe")] R: Send + Sync, #[cfg(not(feature = "threadsafe"))] R> Archive
    for ZipArchive<R>
where
    R: Read + Seek + 'static,
{
    fn open(&self, path: &str) -> ArchiveResult<ResourceReader> {
        log::trace!("opening zip entry `{path}`");
        let data = self.with_zip(|zip| Self::read_entry(zip, path))??;

        Ok(ResourceReader::memory(path, data))
    }

    fn close(&mut self) {
        // Dropping the handle closes the underlying reader
        if self.zip.get_mut().take().is_some() {
            log::debug!("released zip archive {:?}", self.path);
        }
    }

    fn is_closed(&self) -> bool {
        self.with_zip(|_| ()).is_err()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
