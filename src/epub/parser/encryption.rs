use crate::epub::consts::encryption as enc;
use crate::epub::encryption::{Compression, EncryptedData, Encryption};
use crate::parser::ParserResult;
use crate::parser::xml::{XmlEvent, XmlReader};

/// Parses `META-INF/encryption.xml`.
///
/// Elements are matched by local name, so both the `enc:` and
/// default-namespace spellings are accepted.
pub(super) fn parse_encryption(data: &[u8]) -> ParserResult<Encryption> {
    let mut reader = XmlReader::from_bytes(data);
    let mut encryption = Encryption::default();
    let mut current: Option<EncryptedData> = None;

    while let Some(event) = reader.next() {
        match event? {
            XmlEvent::Start(el) if el.is_local_name(enc::ENCRYPTED_DATA) => {
                current = Some(EncryptedData {
                    id: el.attribute(enc::ID)?,
                    ..EncryptedData::default()
                });
            }
            XmlEvent::Start(el) => {
                let Some(entry) = &mut current else {
                    continue;
                };

                match el.local_name() {
                    enc::ENCRYPTION_METHOD => {
                        entry.algorithm = el.attribute(enc::ALGORITHM)?.unwrap_or_default();
                    }
                    enc::RETRIEVAL_METHOD => entry.retrieval_method = el.attribute(enc::URI)?,
                    enc::KEY_NAME => entry.key_name = Some(reader.element_text()?),
                    enc::CIPHER_REFERENCE => {
                        entry.cipher_reference = el.attribute(enc::URI)?.unwrap_or_default();
                    }
                    enc::COMPRESSION => {
                        entry.compression = Some(Compression {
                            method: el.attribute(enc::METHOD)?.unwrap_or_default(),
                            original_length: el
                                .attribute(enc::ORIGINAL_LENGTH)?
                                .and_then(|length| length.trim().parse().ok()),
                        });
                    }
                    _ => {}
                }
            }
            XmlEvent::End(el) if el.is_local_name(enc::ENCRYPTED_DATA) => {
                encryption.data.extend(current.take());
            }
            _ => {}
        }
    }
    Ok(encryption)
}
