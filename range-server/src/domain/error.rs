//! Validation errors for search conditions.
//!
//! The `Display` text of each variant is the message shown to the user,
//! prefixed by the orchestrator with the position of the failing condition.

use super::condition::{MAX_UPPER_MINUTE, MIN_UPPER_MINUTE};

/// Why a single search condition was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// No base station name was supplied
    #[error("起点駅を入力してください")]
    EmptyBaseStation,

    /// The base station is not in the station directory
    #[error("{name}駅は存在しません")]
    UnknownStation { name: String },

    /// No time budget was supplied
    #[error("上限時間を入力してください")]
    EmptyUpperMinute,

    /// The time budget contains something other than ASCII digits
    #[error("上限時間には半角数字を入力してください")]
    NonNumericUpperMinute,

    /// The time budget is outside the accepted range
    #[error(
        "上限時間には{min}分以上{max}分以内を指定してください",
        min = MIN_UPPER_MINUTE,
        max = MAX_UPPER_MINUTE
    )]
    UpperMinuteOutOfRange,
}
