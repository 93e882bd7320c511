//! # rpub
//! A read-side access layer for EPUB publications.
//!
//! An [`Epub`] is opened from a zipped `.epub` file, an expanded directory,
//! or any [`Read`](std::io::Read) + [`Seek`](std::io::Seek) source.
//! Opening resolves the document chain of the publication in order:
//! 1. `META-INF/container.xml`: lists the package documents (rootfiles).
//! 2. The primary package document: metadata, manifest and spine.
//! 3. The navigation (`.ncx`) document named by the spine, if any.
//! 4. `META-INF/encryption.xml` and `META-INF/license.lcpl`, if present.
//!
//! The first two are required; failing to read or decode either makes opening fail.
//! The others are reported as a [`Document`](epub::Document) outcome.
//!
//! ## Features
//! - `threadsafe` (default): Makes [`Epub`] implement `Send + Sync`.
//!
//! ## Logging
//! Diagnostics are emitted through the [`log`] facade;
//! no logger is installed by this crate.
//!
//! ## Examples
//! Opening an epub and reading a chapter:
//! ```
//! # use rpub::Epub;
//! # use rpub::errors::EpubResult;
//! # fn main() -> EpubResult<()> {
//! let epub = Epub::open("tests/ebooks/example_epub")?;
//!
//! // Retrieving the title
//! println!("Title = {:?}", epub.opf().metadata.title());
//!
//! // Printing the contents of each spine entry
//! for itemref in &epub.opf().spine.items {
//!     if let Some(item) = epub.opf().manifest.by_id(&itemref.idref) {
//!         println!("{}", epub.read_str(&item.href)?);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//! Walking the table of contents:
//! ```
//! # use rpub::Epub;
//! # use rpub::errors::EpubResult;
//! # fn main() -> EpubResult<()> {
//! let epub = Epub::open("tests/ebooks/example_epub")?;
//!
//! if let Some(ncx) = epub.navigation().get() {
//!     for point in ncx.flatten() {
//!         println!("{} -> {}", point.label, point.src);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod epub;
pub mod errors;
mod parser;
mod util;

pub use self::epub::Epub;
