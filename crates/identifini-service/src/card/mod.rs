//! Business cards and their contact export.
//!
//! - [`record`] - The validated card shape the exporter works from
//! - [`vcard`] - Card to vCard 3.0 mapping
//! - [`service`] - Repository lookups, canonical URLs and download names

pub mod record;
pub mod service;
pub mod vcard;

pub use record::{CardRecord, FloatingAction, FloatingActionKind, FloatingActionsInput};
pub use service::{VCardExport, card_view_url, export_vcard, load_card_by_id, load_card_by_username};
pub use vcard::{generate_vcard, render_vcard};
