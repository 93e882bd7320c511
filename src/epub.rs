//! The Electronic Publication ([`Epub`]) module.
//!
//! Provides the records decoded while opening an EPUB
//! and the [`EpubSettings`] that control how it is opened.
//!
//! For more information regarding the EPUB spec, see:
//! <https://www.w3.org/TR/epub>

mod consts;
mod container;
mod document;
mod encryption;
mod license;
mod ncx;
mod package;
mod parser;
mod smil;

pub use self::container::{Container, Rootfile};
pub use self::document::Document;
pub use self::encryption::{Compression, EncryptedData, Encryption};
pub use self::license::{
    ContentKey, License, LicenseEncryption, LicenseLink, LicenseRights, LicenseSignature,
    LicenseUser, UserKey,
};
pub use self::ncx::{NavList, NavPoint, NavTarget, Ncx, PageTarget};
pub use self::package::{
    GuideReference, Itemref, Manifest, ManifestItem, MetaEntry, Metadata, Opf, Spine,
};
pub use self::smil::{Smil, SmilAudio, SmilNode, SmilPar, SmilSeq};

use crate::archive::{self, Archive, ResourceReader, ZipArchive};
use crate::epub::parser::{EpubParser, ParsedContent};
use crate::errors::{EpubError, EpubResult};
use crate::util::uri;
use std::fmt::{Debug, Formatter};
use std::io::{Read, Seek};
use std::path::Path;

/// An opened EPUB publication, zipped or expanded.
///
/// Provides access to the following documents:
/// - [`Container`]: `META-INF/container.xml`, listing the package documents.
/// - [`Opf`]: The primary package document (metadata, manifest, spine).
/// - [`Ncx`]: The navigation document referenced by the spine, if any.
/// - [`Encryption`] and [`License`]: Optional DRM metadata.
///
/// Arbitrary resources are read with [`Self::open_resource`]
/// (relative to the package document) or [`Self::open_raw`]
/// (relative to the archive root).
///
/// # Configuration
/// Opening can be configured using [`EpubSettings`].
///
/// Enabling `threadsafe` (default) makes [`Epub`] implement `Send + Sync`:
/// ```toml
/// [dependencies]
/// rpub = { version = "...", features = ["threadsafe"] }
/// ```
/// # Renditions
/// Multi-rendition EPUBs are not ranked;
/// the first `rootfile` is always selected.
///
/// # Examples
/// - Reading the first chapter of an epub:
/// ```
/// # use rpub::Epub;
/// # use rpub::errors::EpubResult;
/// # fn main() -> EpubResult<()> {
/// let epub = Epub::open("tests/ebooks/example_epub")?;
///
/// assert_eq!("OEBPS/content.opf", epub.package_file());
/// assert_eq!(Some("Example EPUB"), epub.opf().metadata.title());
///
/// // Manifest hrefs are relative to the package document
/// let chapter = epub.opf().manifest.by_id("chap1").unwrap();
/// let xhtml = epub.read_str(&chapter.href)?;
///
/// assert!(xhtml.contains("Chapter 1"));
/// # Ok(())
/// # }
/// ```
pub struct Epub {
    archive: Box<dyn Archive>,
    container: Container,
    package_file: String,
    opf: Opf,
    navigation_path: Option<String>,
    navigation: Document<Ncx>,
    encryption: Document<Encryption>,
    license: Document<License>,
}

impl Epub {
    /// Opens an [`Epub`] from the given [`Path`] with default [`EpubSettings`].
    ///
    /// The provided path may be an EPUB **file** or **directory** containing the
    /// contents of an unzipped EPUB.
    ///
    /// # Errors
    /// - [`ArchiveError`](EpubError::Archive): Unreadable archive,
    ///   or missing container/package document.
    /// - [`FormatError`](EpubError::Format): Malformed container or package document.
    ///
    /// # See Also
    /// - [`Self::open_with`] to specify settings.
    /// - [`Self::read`] to open from a byte buffer.
    ///
    /// # Examples
    /// - Opening from an EPUB file:
    ///   ```no_run
    ///   # use rpub::Epub;
    ///   let epub = Epub::open("/ebooks/zipped.epub");
    ///   ```
    /// - Opening from a directory containing the contents of an unzipped EPUB:
    ///   ```no_run
    ///   # use rpub::Epub;
    ///   let epub = Epub::open("/ebooks/unzipped_epub_dir");
    ///   ```
    pub fn open(path: impl AsRef<Path>) -> EpubResult<Self> {
        Self::open_with(path, EpubSettings::default())
    }

    /// Opens an [`Epub`] from the given [`Path`] with the specified [`EpubSettings`].
    ///
    /// See [`Self::open`] for more details.
    ///
    /// # Examples
    /// - Opening an EPUB with settings:
    /// ```
    /// # use rpub::errors::EpubResult;
    /// # use rpub::epub::EpubSettings;
    /// # use rpub::Epub;
    /// # fn main() -> EpubResult<()> {
    /// let epub = Epub::open_with(
    ///     "tests/ebooks/example_epub",
    ///     EpubSettings::builder()
    ///         .strict(true)
    ///         .load_license(false),
    /// )?;
    ///
    /// assert!(epub.license().is_absent());
    /// # Ok(())
    /// # }
    /// ```
    pub fn open_with(
        path: impl AsRef<Path>,
        settings: impl Into<EpubSettings>,
    ) -> EpubResult<Self> {
        let path = path.as_ref();
        log::debug!("opening `{}`", path.display());

        Self::new(settings.into(), archive::get_archive(path)?)
    }

    /// With the specified [`EpubSettings`],
    /// opens a zipped EPUB from any implementation of [`Read`] + [`Seek`]
    /// (and [`Send`] + [`Sync`] if the `threadsafe` feature is enabled).
    ///
    /// # Errors
    /// Same as [`Self::open`].
    ///
    /// # Examples
    /// - Opening from a [`Cursor`](std::io::Cursor) with an underlying [`Vec`] containing bytes:
    /// ```no_run
    /// # use rpub::errors::EpubResult;
    /// # use rpub::epub::EpubSettings;
    /// # use rpub::Epub;
    /// # fn main() -> EpubResult<()> {
    /// # let epub_bytes = b"";
    /// let cursor = std::io::Cursor::new(Vec::from(epub_bytes));
    /// let epub = Epub::read(cursor, EpubSettings::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn read<
        #[cfg(feature = "threadsafe")] R: 'static + Read + Seek + Send + Sync,
        #[cfg(not(feature = "threadsafe"))] R: 'static + Read + Seek,
    >(
        reader: R,
        settings: impl Into<EpubSettings>,
    ) -> EpubResult<Self> {
        Self::new(settings.into(), Box::new(ZipArchive::new(reader, None)?))
    }

    /// With the specified [`EpubSettings`],
    /// opens an EPUB from an already-open [`zip::ZipArchive`] handle.
    ///
    /// The handle is owned by the returned [`Epub`] and released by
    /// [`Self::close`] or once dropped.
    pub fn from_zip<
        #[cfg(feature = "threadsafe")] R: 'static + Read + Seek + Send + Sync,
        #[cfg(not(feature = "threadsafe"))] R: 'static + Read + Seek,
    >(
        zip: zip::ZipArchive<R>,
        settings: impl Into<EpubSettings>,
    ) -> EpubResult<Self> {
        Self::new(settings.into(), Box::new(ZipArchive::from_zip(zip)))
    }

    fn new(settings: EpubSettings, archive: Box<dyn Archive>) -> EpubResult<Self> {
        let ParsedContent {
            container,
            package_file,
            opf,
            navigation_path,
            navigation,
            encryption,
            license,
        } = EpubParser::new(&settings, archive.as_ref()).parse()?;

        Ok(Self {
            archive,
            container,
            package_file,
            opf,
            navigation_path,
            navigation,
            encryption,
            license,
        })
    }

    /// The decoded `META-INF/container.xml`.
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The decoded primary package document.
    pub fn opf(&self) -> &Opf {
        &self.opf
    }

    /// The navigation document referenced by the spine's `toc` attribute.
    ///
    /// [`Document::Absent`] when no manifest item matches the spine's
    /// navigation id, or when the matched resource does not exist.
    pub fn navigation(&self) -> &Document<Ncx> {
        &self.navigation
    }

    /// The archive path of the navigation document,
    /// recorded whenever a manifest item matches the spine's navigation id.
    pub fn navigation_path(&self) -> Option<&str> {
        self.navigation_path.as_deref()
    }

    /// The decoded `META-INF/encryption.xml`.
    pub fn encryption(&self) -> &Document<Encryption> {
        &self.encryption
    }

    /// The decoded `META-INF/license.lcpl`.
    pub fn license(&self) -> &Document<License> {
        &self.license
    }

    /// The archive-root-relative location of the primary package `.opf` file.
    ///
    /// This is ***not*** a filesystem path.
    ///
    /// # Examples
    /// - Retrieving the package file:
    /// ```
    /// # use rpub::Epub;
    /// # use rpub::errors::EpubResult;
    /// # fn main() -> EpubResult<()> {
    /// let epub = Epub::open("tests/ebooks/example_epub")?;
    ///
    /// assert_eq!("OEBPS/content.opf", epub.package_file());
    /// # Ok(())
    /// # }
    /// ```
    pub fn package_file(&self) -> &str {
        &self.package_file
    }

    /// The directory containing the package file,
    /// against which manifest hrefs are resolved.
    ///
    /// Empty when the package file resides at the archive root.
    ///
    /// # Examples
    /// - Retrieving the package directory:
    /// ```
    /// # use rpub::Epub;
    /// # use rpub::errors::EpubResult;
    /// # fn main() -> EpubResult<()> {
    /// let epub = Epub::open("tests/ebooks/example_epub")?;
    ///
    /// assert_eq!("OEBPS", epub.package_directory());
    /// # Ok(())
    /// # }
    /// ```
    pub fn package_directory(&self) -> &str {
        uri::parent(&self.package_file)
    }

    /// Resolves `path` against [`Self::package_directory`].
    ///
    /// `.` and `..` segments are removed; the result never
    /// climbs above the archive root.
    pub fn resolve(&self, path: &str) -> String {
        uri::join(self.package_directory(), path)
    }

    /// Opens the resource at `path`, relative to the package directory.
    ///
    /// # Errors
    /// - [`ArchiveError::NotFound`](crate::errors::ArchiveError::NotFound):
    ///   No resource exists at the resolved path, which is reported.
    /// - [`ArchiveError::Closed`](crate::errors::ArchiveError::Closed):
    ///   [`Self::close`] has been called on a zip-backed instance.
    pub fn open_resource(&self, path: &str) -> EpubResult<ResourceReader> {
        self.open_raw(&self.resolve(path))
    }

    /// Opens the resource at `path`, relative to the archive root.
    ///
    /// The path is used unchanged, e.g. `META-INF/container.xml`.
    pub fn open_raw(&self, path: &str) -> EpubResult<ResourceReader> {
        self.archive.open(path).map_err(EpubError::Archive)
    }

    /// Reads the entire resource at `path`, relative to the package directory.
    ///
    /// A missing resource is an error; an empty buffer is only returned
    /// for a resource that exists and is empty.
    pub fn read_bytes(&self, path: &str) -> EpubResult<Vec<u8>> {
        self.archive
            .read_bytes(&self.resolve(path))
            .map_err(EpubError::Archive)
    }

    /// Same as [`Self::read_bytes`], decoded as UTF-8
    /// (UTF-16 is transcoded when a byte order mark is present).
    pub fn read_str(&self, path: &str) -> EpubResult<String> {
        self.archive
            .read_str(&self.resolve(path))
            .map_err(EpubError::Archive)
    }

    /// Decodes the media overlay (`.smil`) document at `path`.
    ///
    /// The path is used unchanged, relative to the archive root;
    /// a manifest href must first go through [`Self::resolve`].
    /// The result is not cached.
    ///
    /// # Examples
    /// - Decoding the overlay of a chapter:
    /// ```
    /// # use rpub::Epub;
    /// # use rpub::errors::EpubResult;
    /// # fn main() -> EpubResult<()> {
    /// let epub = Epub::open("tests/ebooks/example_epub")?;
    /// let manifest = &epub.opf().manifest;
    ///
    /// let chapter = manifest.by_id("chap1").unwrap();
    /// let overlay = manifest.by_id(chapter.media_overlay.as_deref().unwrap()).unwrap();
    /// let smil = epub.media_overlay(&epub.resolve(&overlay.href))?;
    ///
    /// assert_eq!(Some("chapter1.xhtml#p1"), smil.pars()[0].text.as_deref());
    /// # Ok(())
    /// # }
    /// ```
    pub fn media_overlay(&self, path: &str) -> EpubResult<Smil> {
        log::trace!("decoding media overlay `{path}`");
        let data = self.archive.read_bytes_utf8(path)?;

        Ok(parser::parse_smil(&data)?)
    }

    /// Releases the underlying archive handle.
    ///
    /// Calling this more than once, or on a directory-backed instance, has no effect.
    /// Afterward, reads from a zip-backed instance fail with
    /// [`ArchiveError::Closed`](crate::errors::ArchiveError::Closed).
    pub fn close(&mut self) {
        self.archive.close();
    }

    /// The underlying resource store.
    pub fn archive(&self) -> &dyn Archive {
        self.archive.as_ref()
    }

    /// The underlying store as a [`ZipArchive`] over `R`,
    /// if this instance is zip-backed with that reader type.
    ///
    /// # Examples
    /// - Listing the entries of a zipped epub:
    /// ```no_run
    /// # use rpub::Epub;
    /// # use std::error::Error;
    /// # use std::fs::File;
    /// # use std::io::BufReader;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// let epub = Epub::open("example.epub")?;
    /// let zip = epub.zip_archive::<BufReader<File>>().unwrap();
    ///
    /// let names = zip.with_zip(|zip| zip.file_names().map(str::to_owned).collect::<Vec<_>>())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn zip_archive<R: 'static>(&self) -> Option<&ZipArchive<R>> {
        self.archive.as_any().downcast_ref::<ZipArchive<R>>()
    }
}

impl Debug for Epub {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("Epub")
            .field("archive", &self.archive)
            .field("package_file", &self.package_file)
            .field("container", &self.container)
            .field("opf", &self.opf)
            .field("navigation_path", &self.navigation_path)
            .field("navigation", &self.navigation)
            .field("encryption", &self.encryption)
            .field("license", &self.license)
            .finish()
    }
}

/// EPUB-specific settings upon opening an [`Epub`].
///
/// To create a mutable settings instance, see
/// [`EpubSettings::builder`] or [`EpubSettings::default`].
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct EpubSettings {
    /// When set to `true`, a navigation document that is referenced
    /// by the spine although cannot be read or decoded
    /// makes opening the [`Epub`] fail.
    ///
    /// Otherwise, it is recorded as [`Document::Invalid`].
    /// A navigation document that does not exist is always [`Document::Absent`].
    ///
    /// Default: `false`
    pub strict: bool,
    /// Load `META-INF/encryption.xml`.
    ///
    /// When `false`, [`Epub::encryption`] is always [`Document::Absent`].
    ///
    /// Default: `true`
    pub load_encryption: bool,
    /// Load `META-INF/license.lcpl`.
    ///
    /// When `false`, [`Epub::license`] is always [`Document::Absent`].
    ///
    /// Default: `true`
    pub load_license: bool,
}

impl EpubSettings {
    /// Returns a builder to create an [`EpubSettings`] instance.
    pub fn builder() -> EpubSettingsBuilder {
        EpubSettingsBuilder(Self::default())
    }
}

impl Default for EpubSettings {
    fn default() -> Self {
        Self {
            strict: false,
            load_encryption: true,
            load_license: true,
        }
    }
}

impl From<EpubSettingsBuilder> for EpubSettings {
    fn from(value: EpubSettingsBuilder) -> Self {
        value.build()
    }
}

/// Builder to construct an [`EpubSettings`] instance.
///
/// # Examples
/// - Passing a builder to open an [`Epub`] with:
/// ```
/// # use rpub::errors::EpubResult;
/// # use rpub::epub::EpubSettings;
/// # use rpub::Epub;
/// # fn main() -> EpubResult<()> {
/// let epub = Epub::open_with(
///     "tests/ebooks/example_epub",
///     EpubSettings::builder()
///         .load_encryption(false)
///         .load_license(false),
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EpubSettingsBuilder(EpubSettings);

impl EpubSettingsBuilder {
    /// Turn this builder into an [`EpubSettings`] instance.
    pub fn build(self) -> EpubSettings {
        self.0
    }

    /// See [`EpubSettings::strict`].
    pub fn strict(mut self, strict: bool) -> Self {
        self.0.strict = strict;
        self
    }

    /// See [`EpubSettings::load_encryption`].
    pub fn load_encryption(mut self, load_encryption: bool) -> Self {
        self.0.load_encryption = load_encryption;
        self
    }

    /// See [`EpubSettings::load_license`].
    pub fn load_license(mut self, load_license: bool) -> Self {
        self.0.load_license = load_license;
        self
    }
}
