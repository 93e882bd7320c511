use crate::epub::util::{EXAMPLE_EPUB, TestEpub, container_xml, open_entries, package_opf, write_dir};
use rpub::Epub;
use rpub::errors::{ArchiveError, EpubError};
use std::io::Read;
use std::path::Path;

#[test]
fn test_resolved_open() {
    for test_epub in TestEpub::ALL {
        let epub = test_epub.open();
        let mut reader = epub.open_resource("chapter1.xhtml").unwrap();
        let mut content = String::new();
        reader.read_to_string(&mut content).unwrap();

        assert_eq!("OEBPS/chapter1.xhtml", reader.path());
        assert!(content.contains("<h1>Chapter 1</h1>"));
    }
}

#[test]
fn test_raw_open() {
    for test_epub in TestEpub::ALL {
        let epub = test_epub.open();
        let mut reader = epub.open_raw("META-INF/container.xml").unwrap();
        let mut content = Vec::new();
        reader.read_to_end(&mut content).unwrap();

        assert_eq!("META-INF/container.xml", reader.path());
        assert_eq!(
            std::fs::read(Path::new(EXAMPLE_EPUB).join("META-INF/container.xml")).unwrap(),
            content
        );
        // Resolved against the package directory instead
        assert!(epub.open_resource("META-INF/container.xml").is_err());
    }
}

#[test]
fn test_read_resources() {
    let location = Path::new(EXAMPLE_EPUB);

    for test_epub in TestEpub::ALL {
        let epub = test_epub.open();

        for item in &epub.opf().manifest {
            let actual_file = location.join(epub.resolve(&item.decoded_href()));

            let content_a = std::fs::read(&actual_file).unwrap();
            let content_b = epub.read_bytes(&item.href).unwrap();
            assert_eq!(content_a, content_b);

            let text_a = std::fs::read_to_string(&actual_file).unwrap();
            let text_b = epub.read_str(&item.href).unwrap();
            assert_eq!(text_a, text_b);
        }
    }
}

#[test]
fn test_not_found() {
    for test_epub in TestEpub::ALL {
        let epub = test_epub.open();

        let error = epub.open_resource("missing.xhtml").unwrap_err();
        assert!(error.is_not_found());
        assert!(matches!(
            error,
            EpubError::Archive(ArchiveError::NotFound { path }) if path == "OEBPS/missing.xhtml"
        ));

        let error = epub.read_bytes("text/missing.xhtml").unwrap_err();
        assert!(matches!(
            error,
            EpubError::Archive(ArchiveError::NotFound { path }) if path == "OEBPS/text/missing.xhtml"
        ));
    }
}

#[test]
fn test_zip_exact_match() {
    let epub = TestEpub::File.open();

    assert!(epub.open_raw("META-INF/container.xml").is_ok());
    assert!(epub.open_raw("meta-inf/container.xml").unwrap_err().is_not_found());
    assert!(epub.open_raw("/META-INF/container.xml").unwrap_err().is_not_found());
    assert!(epub.open_raw("./META-INF/container.xml").unwrap_err().is_not_found());
}

#[test]
fn test_read_empty_resource() {
    let container = container_xml(&["OEBPS/content.opf"]);
    let package = package_opf("Empty", &[("empty", "empty.xhtml")], None);
    let epub = open_entries(&[
        ("META-INF/container.xml", &container),
        ("OEBPS/content.opf", &package),
        ("OEBPS/empty.xhtml", b""),
    ])
    .unwrap();

    assert_eq!(Vec::<u8>::new(), epub.read_bytes("empty.xhtml").unwrap());
    assert_eq!("", epub.read_str("empty.xhtml").unwrap());
}

#[test]
fn test_read_str_utf16() {
    let container = container_xml(&["OEBPS/content.opf"]);
    let package = package_opf("Utf16", &[("c1", "c1.xhtml")], None);
    let utf16 = std::iter::once(0xFEFF)
        .chain("<p>hé</p>".encode_utf16())
        .flat_map(u16::to_le_bytes)
        .collect::<Vec<_>>();
    let epub = open_entries(&[
        ("META-INF/container.xml", &container),
        ("OEBPS/content.opf", &package),
        ("OEBPS/c1.xhtml", &utf16),
    ])
    .unwrap();

    assert_eq!("<p>hé</p>", epub.read_str("c1.xhtml").unwrap());
    // Bytes are returned as stored
    assert_eq!(utf16, epub.read_bytes("c1.xhtml").unwrap());
}

#[test]
fn test_resolve() {
    let epub = TestEpub::Dir.open();

    assert_eq!("OEBPS/chapter1.xhtml", epub.resolve("chapter1.xhtml"));
    assert_eq!("OEBPS/chapter1.xhtml", epub.resolve("./text/../chapter1.xhtml"));
    assert_eq!("OEBPS/chapter1.xhtml", epub.resolve("/chapter1.xhtml"));
    assert_eq!("META-INF/container.xml", epub.resolve("../META-INF/container.xml"));
    assert_eq!("mimetype", epub.resolve("../../../mimetype"));
}

#[test]
fn test_directory_traversal() {
    let dir = tempfile::tempdir().unwrap();
    let container = container_xml(&["OEBPS/content.opf"]);
    let package = package_opf("Traversal", &[], None);

    write_dir(
        &dir.path().join("book"),
        &[
            ("META-INF/container.xml", &container),
            ("OEBPS/content.opf", &package),
        ],
    );
    std::fs::write(dir.path().join("secret.txt"), "secret").unwrap();

    let epub = Epub::open(dir.path().join("book")).unwrap();

    // The resolved path never climbs above the root
    assert!(epub.read_bytes("../../secret.txt").unwrap_err().is_not_found());
    // Raw paths are confined to the base directory
    let error = epub.open_raw("../secret.txt").unwrap_err();
    assert!(matches!(
        error,
        EpubError::Archive(ArchiveError::NotFound { path }) if path == "../secret.txt"
    ));
    // Directories are not resources
    assert!(epub.open_raw("OEBPS").unwrap_err().is_not_found());
}
