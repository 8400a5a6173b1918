//! Headless testing helpers: Pilot, document outlines.
//!
//! Use the [`Pilot`] to drive a [`Page`](crate::page::Page) by selector and
//! inspect what the user would see. Use [`outline`] to capture the document
//! (classes, attributes, inline styles) as plain text for snapshot-style
//! assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::outline;
