//! Domain types for the station range search.
//!
//! All types enforce their invariants at construction time: a
//! [`ResolvedCondition`] can only be built from a validated station code
//! and an in-range time budget.

mod condition;
mod error;
mod station;

pub use condition::{
    MAX_UPPER_MINUTE, MIN_UPPER_MINUTE, ResolvedCondition, SearchCondition, UpperMinute,
};
pub use error::ValidationError;
pub use station::{InvalidStationCode, StationCode, StationRecord, StationType};
