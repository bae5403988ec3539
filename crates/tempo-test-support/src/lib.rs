//! Shared test doubles for the tempo workspace.

mod creator;
mod time_source;
mod translate;

pub use creator::OffsetCreator;
pub use time_source::{FixedTimeSource, SteppingTimeSource};
pub use translate::RecordingTranslator;
