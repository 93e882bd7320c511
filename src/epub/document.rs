use crate::errors::{EpubError, EpubResult};

/// Outcome of loading an optional document.
///
/// Distinguishes a document that does not exist from one that exists
/// although cannot be read or decoded. Opening an [`Epub`](crate::Epub)
/// never fails because of an optional document, unless
/// [`EpubSettings::strict`](super::EpubSettings::strict) is enabled
/// for the navigation document.
///
/// # Examples
/// - Inspecting the license outcome:
/// ```no_run
/// # use rpub::Epub;
/// # use rpub::errors::EpubResult;
/// # fn main() -> EpubResult<()> {
/// let epub = Epub::open("protected.epub")?;
///
/// match epub.license() {
///     rpub::epub::Document::Present(license) => println!("Licensed by {}", license.provider),
///     rpub::epub::Document::Absent => println!("No license"),
///     rpub::epub::Document::Invalid(error) => println!("Malformed license: {error}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub enum Document<T> {
    /// The document exists and was decoded.
    Present(T),
    /// The document does not exist or was not requested.
    Absent,
    /// The document exists although could not be read or decoded.
    Invalid(EpubError),
}

impl<T> Document<T> {
    /// Classifies a load attempt: not-found becomes [`Document::Absent`],
    /// any other error [`Document::Invalid`].
    pub(crate) fn from_result(result: EpubResult<T>) -> Self {
        match result {
            Ok(document) => Self::Present(document),
            Err(error) if error.is_not_found() => Self::Absent,
            Err(error) => Self::Invalid(error),
        }
    }

    /// The decoded document, if present.
    pub fn get(&self) -> Option<&T> {
        match self {
            Self::Present(document) => Some(document),
            _ => None,
        }
    }

    /// The error that made the document invalid, if any.
    pub fn error(&self) -> Option<&EpubError> {
        match self {
            Self::Invalid(error) => Some(error),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }

    /// Collapses the outcome, discarding the difference between absent and invalid.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(document) => Some(document),
            _ => None,
        }
    }
}

impl<T> Default for Document<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: PartialEq> PartialEq for Document<T> {
    /// Invalid outcomes compare equal regardless of their error.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Present(a), Self::Present(b)) => a == b,
            (Self::Absent, Self::Absent) | (Self::Invalid(_), Self::Invalid(_)) => true,
            _ => false,
        }
    }
}
