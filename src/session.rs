//! Search session: owns the catalog and tracks the current query's state.

use crate::catalog::{Catalog, CatalogSource};
use crate::error::SearchError;
use crate::search::{perform_search, KeywordRouter, Query, SearchResult};
use tracing::{debug, error};

/// Lifecycle of one submitted query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    #[default]
    Idle,
    Loading,
    Success(usize),
    Error(SearchError),
}

/// Catalog owner and query driver. Searches are rejected until a catalog
/// has been installed.
#[derive(Debug, Default)]
pub struct SearchSession {
    catalog: Option<Catalog>,
    router: KeywordRouter,
    state: QueryState,
    load_error: Option<SearchError>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session with a custom trigger table.
    pub fn with_router(router: KeywordRouter) -> Self {
        Self {
            router,
            ..Self::default()
        }
    }

    /// Load from `source`, replacing any catalog on success. On failure the
    /// previous catalog (if any) is kept and the error is remembered.
    pub fn load(&mut self, source: &CatalogSource) -> Result<(), SearchError> {
        match source.load() {
            Ok(catalog) => {
                self.set_catalog(catalog);
                Ok(())
            }
            Err(e) => {
                self.record_load_failure(e.clone());
                Err(e)
            }
        }
    }

    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = Some(catalog);
        self.load_error = None;
    }

    pub fn record_load_failure(&mut self, err: SearchError) {
        error!(error = %err, "catalog load failed");
        self.load_error = Some(err);
    }

    /// Ready once a catalog with at least one top-level section is installed.
    /// A bare `{}` document counts as not loaded.
    pub fn is_ready(&self) -> bool {
        self.ready_catalog().is_some()
    }

    fn ready_catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref().filter(|c| c.has_sections())
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    /// The last load failure, cleared by a successful load.
    pub fn load_error(&self) -> Option<&SearchError> {
        self.load_error.as_ref()
    }

    pub fn router(&self) -> &KeywordRouter {
        &self.router
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Validate a query and move to `Loading`.
    ///
    /// Blank input is rejected before readiness is checked, so it never
    /// reaches the matcher. Callers that pace results sleep between this and
    /// [`SearchSession::complete`].
    pub fn begin(&mut self, raw: &str) -> Result<Query, SearchError> {
        let query = match Query::parse(raw) {
            Ok(q) => q,
            Err(e) => return Err(self.fail(e)),
        };
        if !self.is_ready() {
            return Err(self.fail(SearchError::CatalogNotReady));
        }
        self.state = QueryState::Loading;
        Ok(query)
    }

    /// Run a query accepted by [`SearchSession::begin`].
    pub fn complete(&mut self, query: &Query) -> Result<Vec<SearchResult>, SearchError> {
        let Some(catalog) = self.ready_catalog() else {
            return Err(self.fail(SearchError::CatalogNotReady));
        };
        let results = perform_search(catalog, &self.router, query);
        debug!(query = %query, hits = results.len(), "search complete");
        self.state = QueryState::Success(results.len());
        Ok(results)
    }

    /// `begin` followed immediately by `complete`.
    pub fn search(&mut self, raw: &str) -> Result<Vec<SearchResult>, SearchError> {
        let query = self.begin(raw)?;
        self.complete(&query)
    }

    fn fail(&mut self, err: SearchError) -> SearchError {
        self.state = QueryState::Error(err.clone());
        err
    }
}
