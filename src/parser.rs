pub(crate) mod xml;

use crate::errors::FormatError;

pub(crate) type ParserResult<T> = Result<T, FormatError>;
