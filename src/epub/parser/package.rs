use crate::epub::consts::{self, opf};
use crate::epub::package::{
    GuideReference, Itemref, Manifest, ManifestItem, MetaEntry, Metadata, Opf, Spine,
};
use crate::errors::FormatError;
use crate::parser::ParserResult;
use crate::parser::xml::{XmlEvent, XmlReader, XmlStartElement};

/// Parses the package `.opf` file.
///
/// Only the `package` element is mandatory; any other missing section
/// is left empty.
pub(super) fn parse_opf(data: &[u8]) -> ParserResult<Opf> {
    let mut reader = XmlReader::from_bytes(data);
    let mut package = None;

    while let Some(event) = reader.next() {
        let XmlEvent::Start(el) = event? else {
            continue;
        };

        match el.local_name() {
            opf::PACKAGE => {
                package.replace(Opf {
                    version: el.attribute(consts::VERSION)?.unwrap_or_default(),
                    unique_identifier: el.attribute(opf::UNIQUE_ID)?.unwrap_or_default(),
                    ..Opf::default()
                });
            }
            opf::METADATA => {
                let metadata = parse_metadata(&mut reader)?;
                package.get_or_insert_with(Opf::default).metadata = metadata;
            }
            opf::MANIFEST => {
                let manifest = parse_manifest(&mut reader)?;
                package.get_or_insert_with(Opf::default).manifest = manifest;
            }
            opf::SPINE => {
                let spine = parse_spine(&mut reader, &el)?;
                package.get_or_insert_with(Opf::default).spine = spine;
            }
            opf::GUIDE => {
                let guide = parse_guide(&mut reader)?;
                package.get_or_insert_with(Opf::default).guide = guide;
            }
            _ => {}
        }
    }

    package.ok_or(FormatError::NoPackageFound)
}

fn parse_metadata(reader: &mut XmlReader) -> ParserResult<Metadata> {
    let mut entries = Vec::new();

    while let Some(event) = reader.next() {
        match event? {
            XmlEvent::Start(el) => {
                let name = el.name();
                let attributes = el.attributes()?.into();
                // Consumes the element up to its end tag
                let value = reader.element_text()?;

                entries.push(MetaEntry {
                    name,
                    value,
                    attributes,
                });
            }
            XmlEvent::End(el) if el.is_local_name(opf::METADATA) => break,
            _ => {}
        }
    }
    Ok(Metadata { entries })
}

fn parse_manifest(reader: &mut XmlReader) -> ParserResult<Manifest> {
    let mut items = Vec::new();

    while let Some(el) = next_child(reader, opf::MANIFEST, opf::ITEM)? {
        let mut attributes = el.attributes()?;
        let mut media_type = attributes.remove(consts::MEDIA_TYPE).unwrap_or_default();

        // Set media_type to lowercase to enforce uniformity.
        media_type.make_ascii_lowercase();
        items.push(ManifestItem {
            id: attributes.remove(consts::ID).unwrap_or_default(),
            href: attributes.remove(consts::HREF).unwrap_or_default(),
            media_type,
            properties: attributes.remove(opf::PROPERTIES),
            fallback: attributes.remove(opf::FALLBACK),
            media_overlay: attributes.remove(opf::MEDIA_OVERLAY),
        });
    }
    Ok(Manifest { items })
}

fn parse_spine(reader: &mut XmlReader, spine: &XmlStartElement) -> ParserResult<Spine> {
    let toc = spine.attribute(opf::TOC)?;
    let page_progression_direction = spine.attribute(opf::PAGE_PROGRESSION_DIRECTION)?;
    let mut items = Vec::new();

    while let Some(el) = next_child(reader, opf::SPINE, opf::ITEMREF)? {
        let mut attributes = el.attributes()?;

        items.push(Itemref {
            idref: attributes.remove(opf::IDREF).unwrap_or_default(),
            linear: attributes
                .remove(opf::LINEAR)
                .is_none_or(|linear| linear.trim() != "no"),
            properties: attributes.remove(opf::PROPERTIES),
        });
    }

    Ok(Spine {
        items,
        toc,
        page_progression_direction,
    })
}

fn parse_guide(reader: &mut XmlReader) -> ParserResult<Vec<GuideReference>> {
    let mut references = Vec::new();

    while let Some(el) = next_child(reader, opf::GUIDE, opf::REFERENCE)? {
        let mut attributes = el.attributes()?;

        references.push(GuideReference {
            kind: attributes.remove(consts::TYPE).unwrap_or_default(),
            title: attributes.remove(opf::TITLE),
            href: attributes.remove(consts::HREF).unwrap_or_default(),
        });
    }
    Ok(references)
}

/// Advances to the next `child` element, stopping at the end of `parent`.
fn next_child<'a>(
    reader: &mut XmlReader<'a>,
    parent: &[u8],
    child: &[u8],
) -> ParserResult<Option<XmlStartElement<'a>>> {
    while let Some(event) = reader.next() {
        match event? {
            XmlEvent::Start(el) if el.is_local_name(child) => return Ok(Some(el)),
            XmlEvent::End(el) if el.is_local_name(parent) => break,
            _ => {}
        }
    }
    Ok(None)
}
