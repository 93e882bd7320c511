use rpub::Epub;
use rpub::epub::{EpubSettings, EpubSettingsBuilder};
use rpub::errors::EpubResult;
use std::io::{Cursor, Write};
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const EXAMPLE_EPUB: &str = "tests/ebooks/example_epub";

#[derive(Copy, Clone, Debug)]
pub enum TestEpub {
    /// Unzipped directory
    ///
    /// Mapped to: [`EXAMPLE_EPUB`]
    Dir,
    /// [`EXAMPLE_EPUB`] zipped in memory
    File,
}

impl TestEpub {
    pub const ALL: [TestEpub; 2] = [TestEpub::Dir, TestEpub::File];

    pub fn open(self) -> Epub {
        self.build(|b| b)
    }

    pub fn build(self, builder: impl Fn(EpubSettingsBuilder) -> EpubSettingsBuilder) -> Epub {
        let settings = builder(EpubSettings::builder());

        match self {
            Self::Dir => Epub::open_with(EXAMPLE_EPUB, settings).unwrap(),
            Self::File => {
                Epub::read(Cursor::new(zip_dir(Path::new(EXAMPLE_EPUB))), settings).unwrap()
            }
        }
    }
}

/// Zips every file under `root`, named by its `/`-separated relative path.
pub fn zip_dir(root: &Path) -> Vec<u8> {
    fn collect(root: &Path, dir: &Path, files: &mut Vec<(String, Vec<u8>)>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();

            if path.is_dir() {
                collect(root, &path, files);
            } else {
                let name = path
                    .strip_prefix(root)
                    .unwrap()
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/");
                files.push((name, std::fs::read(&path).unwrap()));
            }
        }
    }

    let mut files = Vec::new();
    collect(root, root, &mut files);
    // `mimetype` must be the first entry
    files.sort_by_key(|(name, _)| name != "mimetype");

    zip_entries(
        &files
            .iter()
            .map(|(name, data)| (name.as_str(), data.as_slice()))
            .collect::<Vec<_>>(),
    )
}

/// Builds an in-memory zip archive containing the given entries in order.
pub fn zip_entries(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);

    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Opens an epub zipped in memory from the given entries.
pub fn open_entries(entries: &[(&str, &[u8])]) -> EpubResult<Epub> {
    open_entries_with(entries, EpubSettings::default())
}

pub fn open_entries_with(
    entries: &[(&str, &[u8])],
    settings: impl Into<EpubSettings>,
) -> EpubResult<Epub> {
    Epub::read(Cursor::new(zip_entries(entries)), settings)
}

/// The public constructors an epub can be opened through.
#[derive(Copy, Clone, Debug)]
pub enum EntryPoint {
    /// [`Epub::open_with`] over an expanded directory
    Dir,
    /// [`Epub::read`] over an in-memory zip
    Read,
    /// [`Epub::from_zip`] over an already-open zip handle
    FromZip,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 3] = [EntryPoint::Dir, EntryPoint::Read, EntryPoint::FromZip];

    /// Opens the given entries through this entry point.
    ///
    /// For [`EntryPoint::Dir`], files are written beneath `dir`.
    pub fn open_entries(
        self,
        dir: &Path,
        entries: &[(&str, &[u8])],
        settings: impl Into<EpubSettings>,
    ) -> EpubResult<Epub> {
        match self {
            Self::Dir => {
                write_dir(dir, entries);
                Epub::open_with(dir, settings)
            }
            Self::Read => open_entries_with(entries, settings),
            Self::FromZip => {
                let zip = zip::ZipArchive::new(Cursor::new(zip_entries(entries))).unwrap();
                Epub::from_zip(zip, settings)
            }
        }
    }
}

/// Writes the given entries as files under `root`.
pub fn write_dir(root: &Path, entries: &[(&str, &[u8])]) {
    for (name, data) in entries {
        let path = root.join(name);

        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, data).unwrap();
    }
}

pub fn container_xml(rootfiles: &[&str]) -> Vec<u8> {
    let rootfiles = rootfiles
        .iter()
        .map(|path| {
            format!(r#"<rootfile full-path="{path}" media-type="application/oebps-package+xml"/>"#)
        })
        .collect::<String>();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0" xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>{rootfiles}</rootfiles>
</container>"#
    )
    .into_bytes()
}

/// A minimal package document with the given title, manifest `(id, href)` items
/// and spine `toc` attribute.
pub fn package_opf(title: &str, items: &[(&str, &str)], toc: Option<&str>) -> Vec<u8> {
    let items = items
        .iter()
        .map(|(id, href)| {
            format!(r#"<item id="{id}" href="{href}" media-type="application/xhtml+xml"/>"#)
        })
        .collect::<String>();
    let toc = toc.map(|toc| format!(r#" toc="{toc}""#)).unwrap_or_default();

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<package xmlns="http://www.idpf.org/2007/opf" version="2.0" unique-identifier="uid">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/"><dc:title>{title}</dc:title></metadata>
  <manifest>{items}</manifest>
  <spine{toc}></spine>
</package>"#
    )
    .into_bytes()
}

pub const NCX: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/" version="2005-1">
  <docTitle><text>Navigation</text></docTitle>
  <navMap>
    <navPoint id="np1" playOrder="1">
      <navLabel><text>Start</text></navLabel>
      <content src="c1.xhtml"/>
    </navPoint>
  </navMap>
</ncx>"#;
