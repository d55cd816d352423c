//! vCard core types.
//!
//! - [`VCard`] - Complete vCard representation
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`VCardParameter`] - Property parameters
//! - [`VCardValue`] - Property value variants
//! - [`StructuredName`] / [`Address`] - Structured N and ADR values

mod parameter;
mod property;
mod structured;
mod value;
mod vcard;

pub use parameter::{VCardParameter, types};
pub use property::{VCardProperty, names};
pub use structured::{Address, StructuredName};
pub use value::VCardValue;
pub use vcard::{VCARD_VERSION, VCard};
