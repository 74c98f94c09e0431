//! Remote-first exercise lookup with a local fallback.
//!
//! Each request makes at most one remote attempt. Any API failure or an
//! empty answer sends the same lookup to the local cache; only when that is
//! empty too does the caller see `NotFound`. API errors are logged here and
//! never returned.
//!
//! ```text
//! Start ─┬─ no API key ───────────────────────────────┐
//!        └─ RemoteInFlight ─┬─ non-empty ─ Done(remote) │
//!                           └─ empty / error ─ LocalLookup ─┬─ Done(local)
//!                                                           └─ Done(NotFound)
//! ```

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::api::{ApiError, RemoteClient};
use crate::auth::Credentials;
use crate::models::{Category, CategoryError, ExerciseView};
use crate::store::{ExerciseStore, StoreError};

/// What the caller is asking for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    ById(String),
    ByCategory(Category),
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::ById(id) => write!(f, "exercise {:?}", id),
            Lookup::ByCategory(category) => write!(f, "body part {}", category),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Local,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Remote => write!(f, "remote"),
            Source::Local => write!(f, "local"),
        }
    }
}

/// A successful lookup. `exercises` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub source: Source,
    pub exercises: Vec<ExerciseView>,
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("No exercises found for {0}")]
    NotFound(Lookup),

    #[error(transparent)]
    UnknownCategory(#[from] CategoryError),

    #[error("Local exercise cache failed: {0}")]
    Store(#[from] StoreError),
}

enum RemoteOutcome {
    NonEmpty(Vec<ExerciseView>),
    Empty,
    Failed(ApiError),
}

pub struct FallbackResolver {
    store: ExerciseStore,
    remote: Arc<dyn RemoteClient>,
    credentials: Option<Credentials>,
}

impl FallbackResolver {
    pub fn new(
        store: ExerciseStore,
        remote: Arc<dyn RemoteClient>,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            store,
            remote,
            credentials,
        }
    }

    pub fn store(&self) -> &ExerciseStore {
        &self.store
    }

    /// Resolve with the credentials given at construction.
    pub async fn resolve(&self, lookup: &Lookup) -> Result<Resolved, ResolveError> {
        self.resolve_with(lookup, self.credentials.as_ref()).await
    }

    pub async fn exercise(&self, id: &str) -> Result<Resolved, ResolveError> {
        self.resolve(&Lookup::ById(id.to_string())).await
    }

    pub async fn category(&self, category: Category) -> Result<Resolved, ResolveError> {
        self.resolve(&Lookup::ByCategory(category)).await
    }

    /// Resolve a body part given by its remote name ("back", "full body").
    /// Unknown names fail before anything is fetched.
    pub async fn resolve_category_name(&self, name: &str) -> Result<Resolved, ResolveError> {
        let category = Category::from_remote(name)?;
        self.category(category).await
    }

    pub async fn resolve_with(
        &self,
        lookup: &Lookup,
        credentials: Option<&Credentials>,
    ) -> Result<Resolved, ResolveError> {
        match credentials.filter(|c| c.is_usable()) {
            None => {
                debug!(lookup = %lookup, "No API key configured, using local cache");
            }
            Some(credentials) => match self.fetch_remote(lookup, credentials).await {
                RemoteOutcome::NonEmpty(exercises) => {
                    info!(lookup = %lookup, count = exercises.len(), "Loaded exercises from API");
                    return Ok(Resolved {
                        source: Source::Remote,
                        exercises,
                    });
                }
                RemoteOutcome::Empty => {
                    debug!(lookup = %lookup, "API returned no exercises, falling back to local cache");
                }
                RemoteOutcome::Failed(e) => {
                    warn!(
                        lookup = %lookup,
                        status = ?e.status_code(),
                        error = %e,
                        "API request failed, falling back to local cache"
                    );
                }
            },
        }

        self.resolve_local(lookup).await
    }

    async fn fetch_remote(&self, lookup: &Lookup, credentials: &Credentials) -> RemoteOutcome {
        let result = match lookup {
            Lookup::ById(id) => self
                .remote
                .fetch_by_id(id, credentials)
                .await
                .map(|record| record.into_iter().collect::<Vec<_>>()),
            Lookup::ByCategory(category) => {
                self.remote.fetch_by_category(*category, credentials).await
            }
        };

        match result {
            Ok(records) if records.is_empty() => RemoteOutcome::Empty,
            Ok(records) => {
                RemoteOutcome::NonEmpty(records.into_iter().map(ExerciseView::from).collect())
            }
            Err(e) => RemoteOutcome::Failed(e),
        }
    }

    async fn resolve_local(&self, lookup: &Lookup) -> Result<Resolved, ResolveError> {
        let records = match lookup {
            Lookup::ById(id) => self.store.get_by_id(id).await?.into_iter().collect(),
            Lookup::ByCategory(category) => self.store.get_by_category(*category).await?,
        };

        if records.is_empty() {
            info!(lookup = %lookup, "No exercises found in local cache");
            return Err(ResolveError::NotFound(lookup.clone()));
        }

        debug!(lookup = %lookup, count = records.len(), "Loaded exercises from local cache");
        Ok(Resolved {
            source: Source::Local,
            exercises: records.into_iter().map(ExerciseView::from).collect(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
