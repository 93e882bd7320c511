use crate::epub::util::{EXAMPLE_EPUB, TestEpub, zip_dir};
use rpub::Epub;
use rpub::epub::EpubSettings;
use rpub::errors::{ArchiveError, EpubError};
use std::io::Cursor;
use std::path::Path;

#[test]
fn test_close_zip() {
    let mut epub = TestEpub::File.open();
    assert!(!epub.archive().is_closed());

    epub.close();
    epub.close();

    assert!(epub.archive().is_closed());
    assert!(matches!(
        epub.open_resource("chapter1.xhtml"),
        Err(EpubError::Archive(ArchiveError::Closed))
    ));
    assert!(matches!(
        epub.media_overlay("OEBPS/chapter1.smil"),
        Err(EpubError::Archive(ArchiveError::Closed))
    ));
    // Already decoded documents remain available
    assert_eq!("OEBPS/content.opf", epub.package_file());
    assert!(epub.navigation().is_present());
}

#[test]
fn test_close_directory() {
    let mut epub = TestEpub::Dir.open();

    epub.close();
    epub.close();

    assert!(!epub.archive().is_closed());
    assert!(epub.read_bytes("chapter1.xhtml").is_ok());
}

#[test]
fn test_zip_handle_access() {
    let epub = TestEpub::File.open();
    let zip = epub.zip_archive::<Cursor<Vec<u8>>>().unwrap();

    assert_eq!(None, zip.path());
    let names = zip
        .with_zip(|zip| zip.file_names().map(str::to_owned).collect::<Vec<_>>())
        .unwrap();
    assert!(names.iter().any(|name| name == "META-INF/container.xml"));
    assert!(names.iter().any(|name| name == "OEBPS/toc.ncx"));

    // Mismatched reader type or backend
    assert!(epub.zip_archive::<std::fs::File>().is_none());
    assert!(TestEpub::Dir.open().zip_archive::<Cursor<Vec<u8>>>().is_none());
}

#[test]
fn test_closed_zip_handle() {
    let mut epub = TestEpub::File.open();
    epub.close();

    let zip = epub.zip_archive::<Cursor<Vec<u8>>>().unwrap();
    assert!(matches!(zip.with_zip(|zip| zip.len()), Err(ArchiveError::Closed)));
}

#[test]
fn test_from_zip() {
    let bytes = zip_dir(Path::new(EXAMPLE_EPUB));
    let zip = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let entries = zip.len();

    let mut epub = Epub::from_zip(zip, EpubSettings::default()).unwrap();

    assert_eq!("OEBPS/content.opf", epub.package_file());
    assert_eq!(
        entries,
        epub.zip_archive::<Cursor<Vec<u8>>>()
            .unwrap()
            .with_zip(|zip| zip.len())
            .unwrap()
    );

    epub.close();
    assert!(epub.archive().is_closed());
}

#[test]
fn test_backends_agree() {
    let dir = TestEpub::Dir.open();
    let file = TestEpub::File.open();

    assert_eq!(dir.container(), file.container());
    assert_eq!(dir.opf(), file.opf());
    assert_eq!(dir.navigation(), file.navigation());
    assert_eq!(dir.navigation_path(), file.navigation_path());
}

#[cfg(feature = "threadsafe")]
#[test]
fn test_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Epub>();

    let epub = TestEpub::File.open();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                assert!(epub.read_str("chapter1.xhtml").unwrap().contains("Chapter 1"));
            });
        }
    });
}
