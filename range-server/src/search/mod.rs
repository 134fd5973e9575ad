//! Range search pipeline.
//!
//! ```text
//! request body
//!   -> ConditionValidator (per condition, fail-fast)
//!   -> QueryBuilder
//!   -> RangeApi (at most one key rotation)
//!   -> normalize
//!   -> HandlerOutcome
//! ```

mod error;
mod execute;
mod normalize;
mod orchestrator;
mod query;
mod validate;

pub use error::{MissingApiKey, NormalizeError, SearchError};
pub use execute::fetch_with_rotation;
pub use normalize::{RangeSearchResult, StationHit, coerce_to_list, normalize};
pub use orchestrator::{HandlerOutcome, RangeSearchRequest, SearchOrchestrator};
pub use query::{ApiKeys, FALLBACK_KEY, PRIMARY_KEY, QueryBuilder};
pub use validate::{ConditionValidator, ValidateError};
