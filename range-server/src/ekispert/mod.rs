//! Ekispert multiple-range search API.
//!
//! This module provides the HTTP client for the Ekispert route API and a
//! scripted stand-in for tests. Both sit behind [`RangeApi`]: a request
//! descriptor goes in, the raw JSON payload comes out.
//!
//! Key characteristics of the API:
//! - Errors are reported in the body as `ResultSet.Error.code`, also on
//!   non-2xx replies
//! - An exhausted key is reported with code `W403`
//! - Single results are sent as a bare object instead of a one-element list

mod client;
mod error;
mod mock;
mod request;
pub mod response;

use std::future::Future;

use serde_json::Value;

pub use client::{EkispertClient, EkispertConfig};
pub use error::RangeApiError;
pub use mock::MockRangeApi;
pub use request::RangeQuery;

/// A single range search call against the external API.
pub trait RangeApi: Send + Sync {
    /// Issue one request and return the decoded payload.
    fn fetch(
        &self,
        query: &RangeQuery,
    ) -> impl Future<Output = Result<Value, RangeApiError>> + Send;
}
