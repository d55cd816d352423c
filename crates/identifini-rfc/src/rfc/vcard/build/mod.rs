//! vCard serialization.
//!
//! - Properties are written in insertion order
//! - Lines end in CRLF and are never folded
//! - Only `Text` and `Address` values are escaped, and only for line breaks

mod escape;
mod serializer;

pub use escape::escape_newlines;
pub use serializer::serialize_single;
