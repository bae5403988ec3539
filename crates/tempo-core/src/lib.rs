//! Tempo Core — shared date-time abstractions.
//!
//! This crate defines the value model and the construction protocol that the
//! facade crate builds on: zones, locale tags, the [`value::DateTimeValue`]
//! snapshot type, the pluggable [`creator::Creator`] trait with its standard
//! implementations, and the [`time_source::TimeSource`] seam for
//! deterministic "now".

pub mod creator;
pub mod error;
pub mod locale;
pub mod parse;
pub mod time_source;
pub mod translate;
pub mod value;
pub mod zone;
