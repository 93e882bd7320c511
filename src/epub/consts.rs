// Paths
pub(crate) const CONTAINER: &str = "META-INF/container.xml";
pub(crate) const ENCRYPTION: &str = "META-INF/encryption.xml";
pub(crate) const LICENSE: &str = "META-INF/license.lcpl";

// General attributes
pub(crate) const ID: &str = "id";
pub(crate) const HREF: &str = "href";
pub(crate) const SRC: &str = "src";
pub(crate) const TYPE: &str = "type";
pub(crate) const VERSION: &str = "version";
pub(crate) const MEDIA_TYPE: &str = "media-type";

pub(crate) mod ocf {
    // Elements
    pub(crate) const ROOT_FILE: &[u8] = b"rootfile";

    // Rootfile attributes
    pub(crate) const FULL_PATH: &str = "full-path";
}

pub(crate) mod opf {
    // Elements
    pub(crate) const PACKAGE: &[u8] = b"package";
    pub(crate) const METADATA: &[u8] = b"metadata";
    pub(crate) const MANIFEST: &[u8] = b"manifest";
    pub(crate) const SPINE: &[u8] = b"spine";
    pub(crate) const GUIDE: &[u8] = b"guide";
    pub(crate) const ITEM: &[u8] = b"item";
    pub(crate) const ITEMREF: &[u8] = b"itemref";
    pub(crate) const REFERENCE: &[u8] = b"reference";

    // Package attributes
    pub(crate) const UNIQUE_ID: &str = "unique-identifier";

    // Manifest attributes
    pub(crate) const PROPERTIES: &str = "properties";
    pub(crate) const FALLBACK: &str = "fallback";
    pub(crate) const MEDIA_OVERLAY: &str = "media-overlay";

    // Spine attributes
    pub(crate) const TOC: &str = "toc";
    pub(crate) const IDREF: &str = "idref";
    pub(crate) const LINEAR: &str = "linear";
    pub(crate) const PAGE_PROGRESSION_DIRECTION: &str = "page-progression-direction";

    // Guide attributes
    pub(crate) const TITLE: &str = "title";

    // Metadata names
    pub(crate) const DC_TITLE: &str = "dc:title";
    pub(crate) const DC_LANGUAGE: &str = "dc:language";
    pub(crate) const DC_IDENTIFIER: &str = "dc:identifier";
}

pub(crate) mod ncx {
    // Elements
    pub(crate) const NCX: &[u8] = b"ncx";
    pub(crate) const DOC_TITLE: &[u8] = b"docTitle";
    pub(crate) const NAV_POINT: &[u8] = b"navPoint";
    pub(crate) const NAV_LABEL: &[u8] = b"navLabel";
    pub(crate) const CONTENT: &[u8] = b"content";
    pub(crate) const PAGE_TARGET: &[u8] = b"pageTarget";
    pub(crate) const NAV_LIST: &[u8] = b"navList";
    pub(crate) const NAV_TARGET: &[u8] = b"navTarget";

    // Attributes
    pub(crate) const PLAY_ORDER: &str = "playOrder";
    pub(crate) const VALUE: &str = "value";
}

pub(crate) mod encryption {
    // Elements
    pub(crate) const ENCRYPTED_DATA: &[u8] = b"EncryptedData";
    pub(crate) const ENCRYPTION_METHOD: &[u8] = b"EncryptionMethod";
    pub(crate) const RETRIEVAL_METHOD: &[u8] = b"RetrievalMethod";
    pub(crate) const KEY_NAME: &[u8] = b"KeyName";
    pub(crate) const CIPHER_REFERENCE: &[u8] = b"CipherReference";
    pub(crate) const COMPRESSION: &[u8] = b"Compression";

    // Attributes
    pub(crate) const ID: &str = "Id";
    pub(crate) const ALGORITHM: &str = "Algorithm";
    pub(crate) const URI: &str = "URI";
    pub(crate) const METHOD: &str = "Method";
    pub(crate) const ORIGINAL_LENGTH: &str = "OriginalLength";
}

pub(crate) mod smil {
    // Elements
    pub(crate) const SMIL: &[u8] = b"smil";
    pub(crate) const BODY: &[u8] = b"body";
    pub(crate) const SEQ: &[u8] = b"seq";
    pub(crate) const PAR: &[u8] = b"par";
    pub(crate) const TEXT: &[u8] = b"text";
    pub(crate) const AUDIO: &[u8] = b"audio";

    // Attributes
    pub(crate) const CLIP_BEGIN: &str = "clipBegin";
    pub(crate) const CLIP_END: &str = "clipEnd";
    pub(crate) const TEXT_REF: &str = "epub:textref";
    pub(crate) const EPUB_TYPE: &str = "epub:type";
}
