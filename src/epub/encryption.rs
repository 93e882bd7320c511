//! Records decoded from `META-INF/encryption.xml`.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Encryption {
    /// Every `EncryptedData` entry in document order.
    pub data: Vec<EncryptedData>,
}

impl Encryption {
    /// The entry whose cipher reference equals `uri`.
    pub fn by_uri(&self, uri: &str) -> Option<&EncryptedData> {
        self.data.iter().find(|data| data.cipher_reference == uri)
    }
}

/// A single encrypted resource.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EncryptedData {
    pub id: Option<String>,
    /// `EncryptionMethod@Algorithm`.
    pub algorithm: String,
    /// `KeyInfo/RetrievalMethod@URI`, e.g. the license document's key.
    pub retrieval_method: Option<String>,
    /// `KeyInfo/KeyName`.
    pub key_name: Option<String>,
    /// `CipherData/CipherReference@URI`: the archive path of the encrypted resource.
    pub cipher_reference: String,
    pub compression: Option<Compression>,
}

/// Compression applied before encryption.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compression {
    /// `0` (stored) or `8` (deflate).
    pub method: String,
    pub original_length: Option<u64>,
}
