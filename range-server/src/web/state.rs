//! Application state for the web layer.

use std::sync::Arc;

use crate::directory::StationDirectory;
use crate::ekispert::RangeApi;
use crate::search::{ApiKeys, SearchOrchestrator};

/// Shared application state.
///
/// Contains all the services needed to handle requests.
pub struct AppState<D, A> {
    /// Station lookup, shared with the search pipeline
    pub directory: Arc<D>,

    /// Range search pipeline
    pub search: Arc<SearchOrchestrator<D, A>>,
}

impl<D: StationDirectory, A: RangeApi> AppState<D, A> {
    /// Create a new app state.
    pub fn new(directory: D, api: A, api_keys: ApiKeys) -> Self {
        let directory = Arc::new(directory);
        let search = SearchOrchestrator::new(directory.clone(), api, api_keys);

        Self {
            directory,
            search: Arc::new(search),
        }
    }
}

// Manual impl: neither `D` nor `A` needs to be `Clone`.
impl<D, A> Clone for AppState<D, A> {
    fn clone(&self) -> Self {
        Self {
            directory: self.directory.clone(),
            search: self.search.clone(),
        }
    }
}
