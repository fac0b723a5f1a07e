//! Models module for the SDK
//!
//! Defines the generic ingestion model ([`IngestionEntry`], [`RawRecord`]) produced by
//! the CSV pipeline and the five typed records the data store owns.

pub mod entry;
pub mod enums;
pub mod evaluation;
pub mod gps;
pub mod injury;
pub mod player;
pub mod record;
pub mod statistics;

pub use entry::{HistoryEntry, IngestionEntry, RawRecord};
pub use enums::*;
pub use evaluation::Evaluation;
pub use gps::GpsData;
pub use injury::Injury;
pub use player::Player;
pub use record::{AthleteRecord, Record};
pub use statistics::Statistics;
