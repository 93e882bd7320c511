use crate::epub::consts::{self, ocf};
use crate::epub::container::{Container, Rootfile};
use crate::errors::FormatError;
use crate::parser::ParserResult;
use crate::parser::xml::{XmlEvent, XmlReader};

/// Parses `META-INF/container.xml`, retaining every `rootfile` in document order.
///
/// Neither `media-type` nor `version` is inspected; renditions are not ranked.
pub(super) fn parse_container(data: &[u8]) -> ParserResult<Container> {
    let mut reader = XmlReader::from_bytes(data);
    let mut rootfiles = Vec::new();

    while let Some(event) = reader.next() {
        let el = match event? {
            XmlEvent::Start(el) if el.is_local_name(ocf::ROOT_FILE) => el,
            _ => continue,
        };

        rootfiles.push(Rootfile {
            path: el.attribute(ocf::FULL_PATH)?.unwrap_or_default(),
            media_type: el.attribute(consts::MEDIA_TYPE)?.unwrap_or_default(),
            version: el.attribute(consts::VERSION)?.unwrap_or_default(),
        });
    }

    if rootfiles.is_empty() {
        Err(FormatError::NoRootfile)
    } else {
        Ok(Container::new(rootfiles))
    }
}
