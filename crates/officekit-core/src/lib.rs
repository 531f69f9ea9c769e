//! # officekit-core
//!
//! The logic underneath a personal desk-automation toolkit: a spreadsheet
//! column-letter codec and a calendar free-slot finder, plus the HTML table
//! builder used to drop tabular data into mail bodies.
//!
//! The application glue that drives an actual office suite lives elsewhere;
//! this crate is pure computation over its inputs and can be tested without
//! any office application installed.
//!
//! ## Quick start
//!
//! ```rust
//! use officekit_core::{decode_column, encode_column};
//!
//! assert_eq!(encode_column(28).unwrap(), "AB");
//! assert_eq!(decode_column("ab").unwrap(), 28);
//! ```
//!
//! ## Modules
//!
//! - [`columns`] -- 1-based column index <-> bijective base-26 letter label
//! - [`schedule`] -- a day's appointments -> merged free time ranges
//! - [`render`] -- free ranges -> printable report lines
//! - [`html`] -- rows of cells -> styled HTML table markup
//! - [`error`] -- error types

pub mod columns;
pub mod error;
pub mod html;
pub mod render;
pub mod schedule;

pub use columns::{decode_column, encode_column};
pub use error::OfficeError;
pub use html::{rows_to_table, style_block, TableStyle};
pub use render::render_free_ranges;
pub use schedule::{find_open_slots, Appointment, BoundaryPolicy, FreeRange, SlotConfig};
