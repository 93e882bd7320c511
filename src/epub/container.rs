//! Records decoded from `META-INF/container.xml`.

/// The container descriptor, listing every package document (rootfile).
///
/// Rootfiles retain document order; the first is the primary one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Container {
    rootfiles: Vec<Rootfile>,
}

impl Container {
    pub(crate) fn new(rootfiles: Vec<Rootfile>) -> Self {
        Self { rootfiles }
    }

    /// All rootfile entries in document order.
    pub fn rootfiles(&self) -> &[Rootfile] {
        &self.rootfiles
    }

    /// The first rootfile in document order.
    ///
    /// Multiple renditions are not ranked; the first entry always wins.
    /// For a [`Container`] owned by an [`Epub`](crate::Epub), this is never [`None`].
    pub fn primary(&self) -> Option<&Rootfile> {
        self.rootfiles.first()
    }
}

/// A `rootfile` entry pointing to a package document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rootfile {
    /// Archive-root-relative location of the package document (`full-path`).
    pub path: String,
    /// Declared `media-type`, typically `application/oebps-package+xml`.
    pub media_type: String,
    /// Declared `version`, empty if unspecified.
    pub version: String,
}
