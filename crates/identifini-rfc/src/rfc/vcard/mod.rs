//! vCard implementation (RFC 2426 / RFC 6350).
//!
//! This module provides the document model and serializer used to export
//! business cards as `.vcf` files.
//!
//! ## Usage
//!
//! ```rust
//! use identifini_rfc::rfc::vcard::{VCard, VCardProperty, serialize_single};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::raw("FN", "Jane Doe"));
//! card.add_property(VCardProperty::raw("EMAIL", "jane@example.com"));
//!
//! let output = serialize_single(&card);
//! assert!(output.contains("FN:Jane Doe\r\n"));
//! ```
//!
//! ## Output Stability
//!
//! Properties are written in insertion order and lines are never folded.
//! Contact importers on phones are sensitive to both, so the byte layout of
//! a serialized card is part of its contract.
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`build`] - Serialization functions

pub mod build;
pub mod core;

pub use build::serialize_single;
pub use core::{
    Address, StructuredName, VCARD_VERSION, VCard, VCardParameter, VCardProperty, VCardValue,
};
