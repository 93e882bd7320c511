mod container;
mod encryption;
mod ncx;
mod package;
mod smil;

use crate::archive::Archive;
use crate::epub::EpubSettings;
use crate::epub::consts;
use crate::epub::container::Container;
use crate::epub::document::Document;
use crate::epub::encryption::Encryption;
use crate::epub::license::License;
use crate::epub::ncx::Ncx;
use crate::epub::package::Opf;
use crate::errors::{ArchiveResult, EpubError, EpubResult, FormatError};
use crate::parser::ParserResult;
use crate::util::uri;

pub(super) use smil::parse_smil;

pub(super) struct ParsedContent {
    pub(super) container: Container,
    pub(super) package_file: String,
    pub(super) opf: Opf,
    pub(super) navigation_path: Option<String>,
    pub(super) navigation: Document<Ncx>,
    pub(super) encryption: Document<Encryption>,
    pub(super) license: Document<License>,
}

/// Runs the resolution pipeline over an [`Archive`]:
/// container -> package -> navigation -> auxiliary documents.
pub(super) struct EpubParser<'a> {
    settings: &'a EpubSettings,
    archive: &'a dyn Archive,
}

impl<'a> EpubParser<'a> {
    pub(super) fn new(settings: &'a EpubSettings, archive: &'a dyn Archive) -> Self {
        Self { settings, archive }
    }

    pub(super) fn parse(&self) -> EpubResult<ParsedContent> {
        // Parse "META-INF/container.xml"
        log::debug!("reading container `{}`", consts::CONTAINER);
        let container = container::parse_container(&self.read_resource(consts::CONTAINER)?)?;
        let package_file = container
            .primary()
            .map(|rootfile| rootfile.path.clone())
            .ok_or(FormatError::NoRootfile)?;

        if container.rootfiles().len() > 1 {
            log::debug!(
                "{} rootfiles declared; using `{package_file}`",
                container.rootfiles().len()
            );
        }

        // Parse "package.opf"; used as-is, it is already archive-root-relative
        log::debug!("reading package document `{package_file}`");
        let opf = package::parse_opf(&self.read_resource(&package_file)?)?;

        // Parse "toc.ncx"
        let (navigation_path, navigation) = self.load_navigation(&package_file, &opf)?;

        // Best-effort DRM metadata
        let encryption = self.load_optional(
            self.settings.load_encryption,
            consts::ENCRYPTION,
            encryption::parse_encryption,
        );
        let license = self.load_optional(self.settings.load_license, consts::LICENSE, parse_license);

        Ok(ParsedContent {
            container,
            package_file,
            opf,
            navigation_path,
            navigation,
            encryption,
            license,
        })
    }

    fn read_resource(&self, path: &str) -> ArchiveResult<Vec<u8>> {
        self.archive.read_bytes_utf8(path)
    }

    /// Resolves the spine's navigation id against the manifest
    /// and decodes the referenced document.
    ///
    /// Returns the resolved path whenever a manifest item matches,
    /// even if the document itself turns out absent or invalid.
    fn load_navigation(
        &self,
        package_file: &str,
        opf: &Opf,
    ) -> EpubResult<(Option<String>, Document<Ncx>)> {
        let Some(item) = opf
            .spine
            .navigation_id()
            .and_then(|id| opf.manifest.by_id(id))
        else {
            log::debug!(
                "no manifest item matches spine toc {:?}; navigation absent",
                opf.spine.navigation_id()
            );
            return Ok((None, Document::Absent));
        };

        let path = uri::join(uri::parent(package_file), &item.decoded_href());
        log::debug!("reading navigation document `{path}`");

        let document = Document::from_result(
            self.read_resource(&path)
                .map_err(EpubError::from)
                .and_then(|data| ncx::parse_ncx(&data).map_err(EpubError::from)),
        );

        match document {
            Document::Invalid(error) if self.settings.strict => Err(error),
            Document::Invalid(error) => {
                log::warn!("navigation document `{path}` is invalid: {error}");
                Ok((Some(path), Document::Invalid(error)))
            }
            document => Ok((Some(path), document)),
        }
    }

    /// Loads a document at a fixed location; no failure propagates.
    fn load_optional<T>(
        &self,
        enabled: bool,
        path: &str,
        decode: impl FnOnce(&[u8]) -> ParserResult<T>,
    ) -> Document<T> {
        if !enabled {
            return Document::Absent;
        }

        let document = Document::from_result(
            self.read_resource(path)
                .map_err(EpubError::from)
                .and_then(|data| decode(&data).map_err(EpubError::from)),
        );

        match &document {
            Document::Present(_) => log::debug!("loaded `{path}`"),
            Document::Absent => log::debug!("`{path}` absent"),
            Document::Invalid(error) => log::warn!("ignoring invalid `{path}`: {error}"),
        }
        document
    }
}

fn parse_license(data: &[u8]) -> ParserResult<License> {
    serde_json::from_slice(data).map_err(|error| FormatError::Unparsable(Box::new(error)))
}
