use crate::epub::util::{EXAMPLE_EPUB, TestEpub, container_xml, open_entries, package_opf, zip_dir};
use rpub::Epub;
use rpub::epub::EpubSettings;
use rpub::errors::{ArchiveError, EpubError, FormatError};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

#[test]
fn test_primary_rootfile() {
    for test_epub in TestEpub::ALL {
        let epub = test_epub.open();
        let rootfiles = epub.container().rootfiles();

        assert_eq!(1, rootfiles.len());
        assert_eq!("OEBPS/content.opf", rootfiles[0].path);
        assert_eq!("application/oebps-package+xml", rootfiles[0].media_type);
        assert_eq!("", rootfiles[0].version);
        assert_eq!(Some(&rootfiles[0]), epub.container().primary());
        assert_eq!("OEBPS/content.opf", epub.package_file());
        assert_eq!("OEBPS", epub.package_directory());
    }
}

#[test]
fn test_first_of_two_rootfiles() {
    let container = container_xml(&["first/package.opf", "second/package.opf"]);
    let first = package_opf("First", &[], None);
    let second = package_opf("Second", &[], None);
    let entries: &[(&str, &[u8])] = &[
        ("META-INF/container.xml", &container),
        ("first/package.opf", &first),
        ("second/package.opf", &second),
    ];

    for _ in 0..3 {
        let epub = open_entries(entries).unwrap();

        assert_eq!(2, epub.container().rootfiles().len());
        assert_eq!("first/package.opf", epub.package_file());
        assert_eq!(Some("First"), epub.opf().metadata.title());
    }
}

#[test]
fn test_rootfile_at_archive_root() {
    let container = container_xml(&["package.opf"]);
    let package = package_opf("Root", &[("c1", "c1.xhtml")], None);
    let epub = open_entries(&[
        ("META-INF/container.xml", &container),
        ("package.opf", &package),
        ("c1.xhtml", b"<html/>"),
    ])
    .unwrap();

    assert_eq!("", epub.package_directory());
    assert_eq!("c1.xhtml", epub.resolve("c1.xhtml"));
    assert_eq!(b"<html/>".to_vec(), epub.read_bytes("c1.xhtml").unwrap());

    // A leading `/` joins onto the package directory, here the archive root
    assert_eq!("c1.xhtml", epub.resolve("/c1.xhtml"));
    assert_eq!(b"<html/>".to_vec(), epub.read_bytes("/c1.xhtml").unwrap());
}

#[test]
fn test_missing_container() {
    let package = package_opf("Title", &[], None);
    let error = open_entries(&[("OEBPS/content.opf", &package)]).unwrap_err();

    assert!(error.is_not_found());
    assert!(matches!(
        error,
        EpubError::Archive(ArchiveError::NotFound { path }) if path == "META-INF/container.xml"
    ));
}

#[test]
fn test_truncated_container() {
    let package = package_opf("Title", &[], None);
    let error = open_entries(&[
        (
            "META-INF/container.xml",
            br#"<container><rootfiles><rootfile full-path="package.opf"/>"#,
        ),
        ("package.opf", &package),
    ])
    .unwrap_err();

    assert!(matches!(error, EpubError::Format(FormatError::Unparsable(_))));
}

#[test]
fn test_no_rootfile() {
    let container = container_xml(&[]);
    let error = open_entries(&[("META-INF/container.xml", &container)]).unwrap_err();

    assert!(matches!(error, EpubError::Format(FormatError::NoRootfile)));
}

#[test]
fn test_malformed_container() {
    let error = open_entries(&[(
        "META-INF/container.xml",
        b"<container><rootfiles><rootfile full-path=\"a.opf\"></container>",
    )])
    .unwrap_err();

    assert!(matches!(error, EpubError::Format(FormatError::Unparsable(_))));
}

#[test]
fn test_missing_package() {
    let container = container_xml(&["OEBPS/content.opf"]);
    let error = open_entries(&[("META-INF/container.xml", &container)]).unwrap_err();

    assert!(matches!(
        error,
        EpubError::Archive(ArchiveError::NotFound { path }) if path == "OEBPS/content.opf"
    ));
}

#[test]
fn test_package_without_package_element() {
    let container = container_xml(&["OEBPS/content.opf"]);
    let error = open_entries(&[
        ("META-INF/container.xml", &container),
        ("OEBPS/content.opf", b"<?xml version=\"1.0\"?><html/>"),
    ])
    .unwrap_err();

    assert!(matches!(error, EpubError::Format(FormatError::NoPackageFound)));
}

#[test]
fn test_unreadable_archive() {
    let missing = Epub::open("tests/ebooks/does_not_exist").unwrap_err();
    assert!(matches!(
        missing,
        EpubError::Archive(ArchiveError::UnreadableArchive { .. })
    ));

    let not_a_zip = Epub::read(Cursor::new(b"not a zip".to_vec()), EpubSettings::default()).unwrap_err();
    assert!(matches!(
        not_a_zip,
        EpubError::Archive(ArchiveError::UnreadableArchive { path: None, .. })
    ));
}

#[test]
fn test_open_zipped_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.epub");
    std::fs::write(&path, zip_dir(Path::new(EXAMPLE_EPUB))).unwrap();

    let epub = Epub::open(&path).unwrap();

    assert_eq!("OEBPS/content.opf", epub.package_file());
    assert_eq!(
        Some(path.as_path()),
        epub.zip_archive::<BufReader<File>>()
            .and_then(|zip| zip.path())
    );
}
