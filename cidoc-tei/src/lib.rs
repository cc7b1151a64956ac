//! # cidoc-tei
//!
//! Read-only TEI/XML access for the registry pipelines: an element tree built
//! with `quick-xml`, entity extraction by tag and `xml:id`, and the small
//! pointer helpers used when wiring cross-references.
//!
//! ```
//! use cidoc_tei::{get_xmlid, TeiDocument};
//!
//! let doc = TeiDocument::parse(
//!     r#"<listPlace><place xml:id="p1"><placeName>Vienna</placeName></place><place/></listPlace>"#,
//! )?;
//! let places = doc.entities("place");
//! assert_eq!(places.len(), 1);
//! assert_eq!(get_xmlid(&places[0]), Some("p1"));
//! # Ok::<(), cidoc_tei::TeiError>(())
//! ```

mod document;
pub mod error;
mod text;

pub use document::{Descendants, ElementRef, TeiDocument};
pub use error::{Result, TeiError};
pub use text::{check_for_hash, normalize_space};

/// The element's `xml:id`
pub fn get_xmlid<'a>(element: &ElementRef<'a>) -> Option<&'a str> {
    element.xml_id()
}
