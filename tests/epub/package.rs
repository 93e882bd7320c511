use crate::epub::util::TestEpub;

#[test]
fn test_metadata() {
    for test_epub in TestEpub::ALL {
        let epub = test_epub.open();
        let opf = epub.opf();

        assert_eq!("3.0", opf.version);
        assert_eq!("uid", opf.unique_identifier);
        assert_eq!(Some("Example EPUB"), opf.metadata.title());
        assert_eq!(Some("en"), opf.metadata.language());
        assert_eq!(
            Some("urn:uuid:9e3f7a52-3c1d-4b8e-a1f0-5d2c6b7e8f90"),
            opf.metadata.identifier()
        );

        let creator = opf.metadata.first("dc:creator").unwrap();
        assert_eq!("Jane Doe", creator.value);
        assert_eq!(Some("creator01"), creator.attribute("id"));
        assert_eq!(2, opf.metadata.by_name("meta").count());
    }
}

#[test]
fn test_manifest() {
    let epub = TestEpub::File.open();
    let manifest = &epub.opf().manifest;
    let ids = manifest.iter().map(|item| item.id.as_str()).collect::<Vec<_>>();

    assert_eq!(["ncx", "style", "chap1", "chap1-smil", "chap2"], ids.as_slice());

    let chapter = manifest.by_id("chap1").unwrap();
    assert_eq!("chapter1.xhtml", chapter.href);
    assert_eq!("application/xhtml+xml", chapter.media_type);
    assert_eq!(Some("chap1-smil"), chapter.media_overlay.as_deref());
    assert_eq!(Some(chapter), manifest.by_href("chapter1.xhtml"));
    assert!(manifest.by_id("missing").is_none());
}

#[test]
fn test_spine() {
    let epub = TestEpub::Dir.open();
    let spine = &epub.opf().spine;
    let idrefs = spine
        .items
        .iter()
        .map(|itemref| itemref.idref.as_str())
        .collect::<Vec<_>>();

    assert_eq!(Some("ncx"), spine.navigation_id());
    assert_eq!(["chap1", "chap2"], idrefs.as_slice());
    assert!(spine.items.iter().all(|itemref| itemref.linear));

    // Every spine entry references a manifest item
    for itemref in &spine.items {
        assert!(epub.opf().manifest.by_id(&itemref.idref).is_some());
    }
}

#[test]
fn test_guide() {
    let epub = TestEpub::Dir.open();
    let guide = &epub.opf().guide;

    assert_eq!(1, guide.len());
    assert_eq!("text", guide[0].kind);
    assert_eq!(Some("Beginning"), guide[0].title.as_deref());
    assert_eq!("chapter1.xhtml", guide[0].href);
}
