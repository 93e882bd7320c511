use crate::errors::FormatError;
use crate::parser::ParserResult;
use crate::util::str::{self, StringExt};
use quick_xml::Reader;
use quick_xml::escape;
use quick_xml::events::{BytesStart, Event};
use std::error::Error;
use std::io;

/// Pull-based reader over an in-memory XML document.
///
/// Self-closing elements (`<a/>`) are reported as a [`XmlEvent::Start`]
/// immediately followed by a matching [`XmlEvent::End`],
/// so callers never need to special-case them.
///
/// A document that ends while elements are still open is reported as
/// [`FormatError::Unparsable`].
pub(crate) struct XmlReader<'a> {
    reader: Reader<&'a [u8]>,
    /// Local name of a self-closing element whose end is still to be reported.
    pending_end: Option<Vec<u8>>,
    /// Number of currently open (non self-closing) elements.
    depth: usize,
}

pub(crate) enum XmlEvent<'a> {
    Start(XmlStartElement<'a>),
    End(XmlEndElement),
    /// Unescaped character data (text, CDATA or a resolved reference).
    Text(String),
    Other,
}

impl<'a> XmlReader<'a> {
    pub(crate) fn from_bytes(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::from_reader(data),
            pending_end: None,
            depth: 0,
        }
    }

    /// Iterator-like method to read the next [`XmlEvent`].
    ///
    /// Returns [`None`] once the end of the document is reached.
    /// If elements are still open at that point, an error is returned first.
    pub(crate) fn next(&mut self) -> Option<ParserResult<XmlEvent<'a>>> {
        if let Some(local_name) = self.pending_end.take() {
            return Some(Ok(XmlEvent::End(XmlEndElement(local_name))));
        }

        let event = match self.reader.read_event() {
            Ok(Event::Eof) if self.depth > 0 => {
                let open = std::mem::take(&mut self.depth);
                return Some(Err(unparsable(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("document ended with {open} unclosed element(s)"),
                ))));
            }
            Ok(Event::Eof) => return None,
            Ok(event) => event,
            Err(error) => return Some(Err(unparsable(error))),
        };

        Some(match event {
            Event::Start(el) => {
                self.depth += 1;
                Ok(XmlEvent::Start(XmlStartElement::new(el)))
            }
            Event::Empty(el) => {
                self.pending_end = Some(el.local_name().as_ref().to_vec());
                Ok(XmlEvent::Start(XmlStartElement::new(el)))
            }
            Event::End(el) => {
                self.depth = self.depth.saturating_sub(1);
                Ok(XmlEvent::End(XmlEndElement(
                    el.local_name().as_ref().to_vec(),
                )))
            }
            Event::Text(text) => decode_str(&text).map(XmlEvent::Text),
            Event::CData(cdata) => Ok(XmlEvent::Text(
                String::from_utf8_lossy(&cdata).into_owned(),
            )),
            Event::GeneralRef(reference) => resolve_reference(&reference).map(XmlEvent::Text),
            _ => Ok(XmlEvent::Other),
        })
    }

    /// Retrieve consolidated text of the element just started, up to its end tag.
    ///
    /// Text of nested elements is included; whitespace is collapsed.
    pub(crate) fn element_text(&mut self) -> ParserResult<String> {
        let mut value = String::new();
        let mut depth = 1usize;

        while let Some(event) = self.next() {
            match event? {
                XmlEvent::Start(_) => depth += 1,
                XmlEvent::End(_) => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                XmlEvent::Text(text) => value.push_str(&text),
                XmlEvent::Other => {}
            }
        }
        Ok(str::collapse_whitespace(&value))
    }
}

pub(crate) struct XmlStartElement<'a> {
    inner: BytesStart<'a>,
}

impl<'a> XmlStartElement<'a> {
    fn new(inner: BytesStart<'a>) -> Self {
        Self { inner }
    }

    pub(crate) fn local_name(&self) -> &[u8] {
        self.inner.local_name().into_inner()
    }

    pub(crate) fn is_local_name(&self, local_name: impl AsRef<[u8]>) -> bool {
        self.local_name() == local_name.as_ref()
    }

    /// Qualified name, including any prefix (e.g., `dc:title`).
    pub(crate) fn name(&self) -> String {
        String::from_utf8_lossy(self.inner.name().into_inner()).into_owned()
    }

    /// Unescaped, trimmed value of the attribute with the exact (qualified) `key`.
    pub(crate) fn attribute(&self, key: &str) -> ParserResult<Option<String>> {
        self.inner
            .try_get_attribute(key)
            .map_err(unparsable)?
            .map(|attribute| decode_value(&attribute.value))
            .transpose()
    }

    pub(crate) fn attributes(&self) -> ParserResult<XmlAttributes> {
        let mut attributes = Vec::new();

        for attribute in self.inner.attributes() {
            let attribute = attribute.map_err(unparsable)?;
            let key = String::from_utf8_lossy(attribute.key.into_inner()).into_owned();

            attributes.push((key, decode_value(&attribute.value)?));
        }
        Ok(XmlAttributes(attributes))
    }
}

pub(crate) struct XmlEndElement(Vec<u8>);

impl XmlEndElement {
    pub(crate) fn local_name(&self) -> &[u8] {
        &self.0
    }

    pub(crate) fn is_local_name(&self, local_name: impl AsRef<[u8]>) -> bool {
        self.0 == local_name.as_ref()
    }
}

/// Attributes of an element as `(qualified name, value)` pairs in document order.
pub(crate) struct XmlAttributes(Vec<(String, String)>);

impl XmlAttributes {
    /// Removes and returns the value of the attribute by `name`.
    pub(crate) fn remove(&mut self, name: &str) -> Option<String> {
        self.0
            .iter()
            .position(|(key, _)| key == name)
            .map(|i| self.0.remove(i).1)
    }
}

impl From<XmlAttributes> for Vec<(String, String)> {
    fn from(attributes: XmlAttributes) -> Self {
        attributes.0
    }
}

fn unparsable(error: impl Error + Send + Sync + 'static) -> FormatError {
    FormatError::Unparsable(Box::new(error))
}

fn decode_str(raw: &[u8]) -> ParserResult<String> {
    let raw = std::str::from_utf8(raw).map_err(unparsable)?;

    escape::unescape(raw)
        .map(|unescaped| unescaped.into_owned())
        .map_err(unparsable)
}

fn decode_value(raw: &[u8]) -> ParserResult<String> {
    let mut value = decode_str(raw)?;
    value.trim_in_place();
    Ok(value)
}

/// Resolves `&name;` references; unknown entities are kept verbatim.
fn resolve_reference(name: &[u8]) -> ParserResult<String> {
    let reference = format!("&{};", std::str::from_utf8(name).map_err(unparsable)?);

    Ok(match escape::unescape(&reference) {
        Ok(resolved) => resolved.into_owned(),
        Err(_) => reference,
    })
}
