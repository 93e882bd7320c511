//! Records decoded from the package (`.opf`) document.

use crate::util::uri;
use std::borrow::Cow;

/// The package document: metadata, manifest, spine and legacy guide.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Opf {
    /// The `version` attribute of the `package` element.
    pub version: String,
    /// The `unique-identifier` attribute of the `package` element.
    pub unique_identifier: String,
    pub metadata: Metadata,
    pub manifest: Manifest,
    pub spine: Spine,
    /// EPUB 2 `guide` references, in document order.
    pub guide: Vec<GuideReference>,
}

/// Publication metadata, kept as the ordered list of `metadata` children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Metadata {
    pub entries: Vec<MetaEntry>,
}

impl Metadata {
    /// All entries with the given qualified element name (e.g., `dc:creator`).
    pub fn by_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MetaEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.name == name)
    }

    /// The first entry with the given qualified element name.
    pub fn first(&self, name: &str) -> Option<&MetaEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// The first `dc:title`.
    pub fn title(&self) -> Option<&str> {
        self.value_of(super::consts::opf::DC_TITLE)
    }

    /// The first `dc:language`.
    pub fn language(&self) -> Option<&str> {
        self.value_of(super::consts::opf::DC_LANGUAGE)
    }

    /// The first `dc:identifier`.
    pub fn identifier(&self) -> Option<&str> {
        self.value_of(super::consts::opf::DC_IDENTIFIER)
    }

    fn value_of(&self, name: &str) -> Option<&str> {
        self.first(name).map(|entry| entry.value.as_str())
    }
}

/// A single `metadata` child element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaEntry {
    /// Qualified element name, such as `dc:title` or `meta`.
    pub name: String,
    /// Text content with whitespace collapsed.
    pub value: String,
    /// Attributes as `(qualified name, value)` pairs in document order.
    pub attributes: Vec<(String, String)>,
}

impl MetaEntry {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Every resource of the publication, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Manifest {
    pub items: Vec<ManifestItem>,
}

impl Manifest {
    /// The item with the given `id`.
    ///
    /// Ids are expected to be unique; with duplicates the first match wins.
    pub fn by_id(&self, id: &str) -> Option<&ManifestItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// The first item whose raw `href` equals `href`.
    pub fn by_href(&self, href: &str) -> Option<&ManifestItem> {
        self.items.iter().find(|item| item.href == href)
    }

    /// The first item with the given space-separated `properties` token (e.g., `nav`).
    pub fn by_property(&self, property: &str) -> Option<&ManifestItem> {
        self.items.iter().find(|item| item.has_property(property))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManifestItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestItem;
    type IntoIter = std::slice::Iter<'a, ManifestItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A manifest `item`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestItem {
    pub id: String,
    /// Location relative to the package document's directory, as written.
    pub href: String,
    /// Declared media type, lowercased.
    pub media_type: String,
    pub properties: Option<String>,
    pub fallback: Option<String>,
    /// Id of the media overlay (SMIL) item synchronised with this resource.
    pub media_overlay: Option<String>,
}

impl ManifestItem {
    /// The percent-decoded [`Self::href`] (`my%20file.xhtml` -> `my file.xhtml`).
    pub fn decoded_href(&self) -> Cow<'_, str> {
        uri::decode(&self.href)
    }

    pub fn has_property(&self, property: &str) -> bool {
        self.properties
            .as_deref()
            .is_some_and(|properties| properties.split_whitespace().any(|p| p == property))
    }
}

/// The reading order, plus the id of the navigation (NCX) resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Spine {
    pub items: Vec<Itemref>,
    /// The `toc` attribute, naming a [`ManifestItem::id`].
    pub toc: Option<String>,
    pub page_progression_direction: Option<String>,
}

impl Spine {
    /// The manifest id of the navigation document, if declared.
    pub fn navigation_id(&self) -> Option<&str> {
        self.toc.as_deref()
    }
}

/// A spine `itemref`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Itemref {
    pub idref: String,
    /// `false` only when declared `linear="no"`.
    pub linear: bool,
    pub properties: Option<String>,
}

/// An EPUB 2 `guide` reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuideReference {
    /// The `type` attribute (e.g., `cover`, `toc`, `text`).
    pub kind: String,
    pub title: Option<String>,
    pub href: String,
}
