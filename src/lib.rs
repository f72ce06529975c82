//! Split container image references such as `quay.io/nitrate/web:4.13` into
//! registry, namespace, repository, tag and digest.
//!
//! ```
//! let image = imgref::parse("localhost:5000/nitrate/web:4.13").unwrap();
//! assert_eq!(image.registry(), Some("localhost:5000"));
//! assert_eq!(image.namespace(), Some("nitrate"));
//! assert_eq!(image.repository(), "web");
//! assert_eq!(image.tag(), Some("4.13"));
//! assert_eq!(image.digest(), None);
//! ```

pub mod digest;
pub mod error;
pub mod grammar;
pub mod media_types;
pub mod parser;
pub mod reference;

pub use digest::Digest;
pub use error::{Field, ReferenceError};
pub use parser::{Mode, Parser, parse, rough_parse};
pub use reference::ImageReference;
