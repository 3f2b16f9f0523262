//! Built-figure caching using Moka.
//!
//! Tables never change after startup, so a figure built once for a graph id
//! stays valid for the process lifetime.

use std::sync::Arc;

use moka::sync::Cache;

use super::build::build_figure;
use super::catalogue::ChartSpec;
use super::error::ChartError;
use super::figure::Figure;
use crate::store::LedgerSet;

/// Default cache capacity (number of figures).
const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// A figure together with whether it came from the cache.
#[derive(Debug, Clone)]
pub struct FigureLookup {
    /// The figure.
    pub figure: Arc<Figure>,
    /// True when no build was needed.
    pub cached: bool,
}

/// Cache of built figures keyed by graph id.
#[derive(Clone)]
pub struct FigureCache {
    cache: Cache<&'static str, Arc<Figure>>,
}

impl FigureCache {
    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Creates a cache holding at most `max_capacity` figures.
    #[must_use]
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Returns the figure for `spec`, building it on a miss.
    ///
    /// Failed builds are not cached.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::MissingTable` if the source table is absent, or
    /// any error from [`build_figure`].
    pub fn get_or_build(
        &self,
        spec: &'static ChartSpec,
        tables: &LedgerSet,
    ) -> Result<FigureLookup, ChartError> {
        if let Some(figure) = self.cache.get(spec.id) {
            return Ok(FigureLookup {
                figure,
                cached: true,
            });
        }

        let table = tables
            .get(spec.dataset)
            .ok_or(ChartError::MissingTable(spec.dataset))?;
        let figure = Arc::new(build_figure(spec, table)?);
        self.cache.insert(spec.id, Arc::clone(&figure));

        Ok(FigureLookup {
            figure,
            cached: false,
        })
    }

    /// Drops every cached figure.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for FigureCache {
    fn default() -> Self {
        Self::new()
    }
}
