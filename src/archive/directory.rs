use crate::archive::errors::{ArchiveError, ArchiveResult};
use crate::archive::{self, Archive, ResourceReader};
use std::any::Any;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Directory-backed resource store for an already-expanded EPUB.
///
/// Every [`Archive::open`] opens a fresh file handle; no handle is held
/// between calls, so [`Archive::close`] is a no-op.
#[derive(Debug)]
pub struct DirectoryArchive(PathBuf);

impl DirectoryArchive {
    pub(crate) fn new(directory: &Path) -> ArchiveResult<Self> {
        match directory.canonicalize() {
            Ok(dir) if dir.is_dir() => Ok(Self(dir)),
            Ok(_) => Err(ArchiveError::UnreadableArchive {
                path: Some(directory.to_path_buf()),
                source: io::Error::from(io::ErrorKind::NotADirectory),
            }),
            Err(source) => Err(ArchiveError::UnreadableArchive {
                path: Some(directory.to_path_buf()),
                source,
            }),
        }
    }

    /// The canonical base directory resources are resolved under.
    pub fn base(&self) -> &Path {
        &self.0
    }

    fn get_path(&self, path: &str) -> ArchiveResult<PathBuf> {
        // Archive paths always use `/`; push segment-wise for the host separator.
        let joined = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .fold(self.0.clone(), |mut buf, segment| {
                buf.push(segment);
                buf
            });
        let resolved = joined
            .canonicalize()
            .map_err(|source| archive::io_error(source, path))?;

        // Path traversal mitigation
        if resolved.starts_with(&self.0) && resolved.is_file() {
            Ok(resolved)
        } else {
            Err(ArchiveError::NotFound {
                path: path.to_owned(),
            })
        }
    }
}

impl Archive for DirectoryArchive {
    fn open(&self, path: &str) -> ArchiveResult<ResourceReader> {
        let resolved = self.get_path(path)?;
        log::trace!("opening file {resolved:?}");

        File::open(&resolved)
            .map(|file| ResourceReader::file(path, file))
            .map_err(|source| archive::io_error(source, path))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
