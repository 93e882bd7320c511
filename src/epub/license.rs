//! Records decoded from the LCP license document (`META-INF/license.lcpl`).

use serde::Deserialize;

/// A Readium LCP license.
///
/// Missing fields take their default value; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct License {
    pub id: String,
    pub issued: String,
    pub updated: Option<String>,
    pub provider: String,
    pub encryption: LicenseEncryption,
    pub links: Vec<LicenseLink>,
    pub user: LicenseUser,
    pub rights: LicenseRights,
    pub signature: LicenseSignature,
}

impl License {
    /// The first link with the given `rel`, such as `hint` or `status`.
    pub fn link(&self, rel: &str) -> Option<&LicenseLink> {
        self.links.iter().find(|link| link.rel == rel)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LicenseEncryption {
    pub profile: String,
    pub content_key: ContentKey,
    pub user_key: UserKey,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ContentKey {
    pub algorithm: String,
    /// Base64 encoded.
    pub encrypted_value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct UserKey {
    pub algorithm: String,
    pub text_hint: String,
    /// Base64 encoded.
    pub key_check: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LicenseLink {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub title: Option<String>,
    pub length: Option<u64>,
    pub hash: Option<String>,
    pub templated: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LicenseUser {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    /// Names of the fields above that are encrypted with the user key.
    pub encrypted: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LicenseRights {
    pub print: Option<u32>,
    pub copy: Option<u32>,
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LicenseSignature {
    pub algorithm: String,
    pub certificate: String,
    pub value: String,
}
