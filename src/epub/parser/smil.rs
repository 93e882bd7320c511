use crate::epub::consts::{self, smil};
use crate::epub::smil::{Smil, SmilAudio, SmilNode, SmilPar, SmilSeq};
use crate::errors::FormatError;
use crate::parser::ParserResult;
use crate::parser::xml::{XmlEvent, XmlReader, XmlStartElement};

/// Parses a media overlay (`.smil`) document.
///
/// Text and audio references are kept as written,
/// relative to the overlay document.
pub(crate) fn parse_smil(data: &[u8]) -> ParserResult<Smil> {
    let mut reader = XmlReader::from_bytes(data);
    let mut version = None;
    let mut body = None;

    while let Some(event) = reader.next() {
        let XmlEvent::Start(el) = event? else {
            continue;
        };

        match el.local_name() {
            smil::SMIL => version = el.attribute(consts::VERSION)?,
            smil::BODY if body.is_none() => body = Some(parse_seq(&mut reader, &el)?),
            _ => {}
        }
    }

    Ok(Smil {
        version,
        body: body.ok_or(FormatError::NoSmilBody)?,
    })
}

/// Reads the children of a `body` or `seq` element up to its end tag.
fn parse_seq(reader: &mut XmlReader, start: &XmlStartElement) -> ParserResult<SmilSeq> {
    let mut seq = new_seq(start)?;
    let mut stack: Vec<SmilSeq> = Vec::new();
    let mut par: Option<SmilPar> = None;

    while let Some(event) = reader.next() {
        match event? {
            XmlEvent::Start(el) => match el.local_name() {
                smil::SEQ => stack.push(std::mem::replace(&mut seq, new_seq(&el)?)),
                smil::PAR => {
                    par = Some(SmilPar {
                        id: el.attribute(consts::ID)?,
                        ..SmilPar::default()
                    });
                }
                smil::TEXT => {
                    if let Some(par) = &mut par {
                        par.text = el.attribute(consts::SRC)?;
                    }
                }
                smil::AUDIO => {
                    if let Some(par) = &mut par {
                        par.audio = Some(SmilAudio {
                            src: el.attribute(consts::SRC)?.unwrap_or_default(),
                            clip_begin: el.attribute(smil::CLIP_BEGIN)?,
                            clip_end: el.attribute(smil::CLIP_END)?,
                        });
                    }
                }
                _ => {}
            },
            XmlEvent::End(el) => match el.local_name() {
                smil::PAR => seq.children.extend(par.take().map(SmilNode::Par)),
                smil::SEQ => {
                    if let Some(parent) = stack.pop() {
                        let child = std::mem::replace(&mut seq, parent);
                        seq.children.push(SmilNode::Seq(child));
                    }
                }
                smil::BODY => break,
                _ => {}
            },
            _ => {}
        }
    }

    Ok(seq)
}

fn new_seq(el: &XmlStartElement) -> ParserResult<SmilSeq> {
    Ok(SmilSeq {
        id: el.attribute(consts::ID)?,
        text_ref: el.attribute(smil::TEXT_REF)?,
        kind: el.attribute(smil::EPUB_TYPE)?,
        children: Vec::new(),
    })
}
