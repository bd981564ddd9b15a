//! Latest schema snapshot for the bound (connection, database) pair.
//!
//! Readers get an `Arc` to a whole snapshot and never block on a fetch. The
//! refresh path is the single writer: it captures the binding generation
//! before awaiting the provider and only commits if the generation is still
//! current afterwards.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::{CacheKey, ConnectionId, SchemaSnapshot, SchemaState};
use crate::ports::{SchemaError, SchemaProvider};

#[derive(Debug, Default)]
struct Binding {
    key: CacheKey,
    generation: u64,
}

pub struct SchemaCache {
    provider: Arc<dyn SchemaProvider>,
    binding: Mutex<Binding>,
    snapshot: watch::Sender<Arc<SchemaSnapshot>>,
    state: watch::Sender<SchemaState>,
    empty: Arc<SchemaSnapshot>,
}

impl SchemaCache {
    pub fn new(provider: Arc<dyn SchemaProvider>) -> Self {
        let empty = Arc::new(SchemaSnapshot::empty());
        let (snapshot, _) = watch::channel(Arc::clone(&empty));
        let (state, _) = watch::channel(SchemaState::NotLoaded);
        Self {
            provider,
            binding: Mutex::new(Binding::default()),
            snapshot,
            state,
            empty,
        }
    }

    pub fn current(&self) -> Arc<SchemaSnapshot> {
        Arc::clone(&self.snapshot.borrow())
    }

    /// Snapshot and the key it belongs to. Both are read under the binding
    /// lock, which every commit and clear also holds.
    pub fn current_with_key(&self) -> (Arc<SchemaSnapshot>, CacheKey) {
        let binding = self.lock();
        (Arc::clone(&self.snapshot.borrow()), binding.key.clone())
    }

    pub fn state(&self) -> SchemaState {
        self.state.borrow().clone()
    }

    pub fn key(&self) -> CacheKey {
        self.lock().key.clone()
    }

    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Receiver notified on every committed or cleared snapshot.
    pub fn subscribe(&self) -> watch::Receiver<Arc<SchemaSnapshot>> {
        self.snapshot.subscribe()
    }

    /// Returns true when the binding changed and the snapshot was dropped.
    pub fn set_connection(&self, connection_id: Option<ConnectionId>) -> bool {
        let mut binding = self.lock();
        if binding.key.connection_id == connection_id {
            return false;
        }
        binding.key.connection_id = connection_id;
        binding.generation += 1;
        debug!(key = %binding.key, generation = binding.generation, "connection changed");
        self.clear(SchemaState::NotLoaded);
        true
    }

    /// Rebinds the database and starts a background refresh for it.
    /// Returns `None` when the database did not change or no runtime is available.
    pub fn set_database(self: &Arc<Self>, database: Option<String>) -> Option<JoinHandle<()>> {
        {
            let mut binding = self.lock();
            if binding.key.database == database {
                return None;
            }
            binding.key.database = database;
            binding.generation += 1;
            debug!(key = %binding.key, generation = binding.generation, "database changed");
            self.clear(SchemaState::NotLoaded);
        }
        self.spawn_refresh()
    }

    /// Fetches a snapshot for the current key.
    ///
    /// A result that arrives after the binding changed is discarded and
    /// reported as `Ok`. On failure the snapshot is cleared and the error
    /// returned for the caller to log.
    pub async fn refresh(&self) -> Result<(), SchemaError> {
        let (key, connection_id, generation) = {
            let binding = self.lock();
            let Some(connection_id) = binding.key.connection_id.clone() else {
                debug!("no connection bound, skipping schema fetch");
                self.clear(SchemaState::NotLoaded);
                return Ok(());
            };
            self.state.send_replace(SchemaState::Loading);
            (binding.key.clone(), connection_id, binding.generation)
        };

        let result = self
            .provider
            .fetch_schema(&connection_id, key.database.clone())
            .await;

        let binding = self.lock();
        if binding.generation != generation {
            debug!(
                %key,
                fetched_generation = generation,
                current_generation = binding.generation,
                "discarding schema fetched for a stale key"
            );
            return Ok(());
        }

        match result {
            Ok(snapshot) => {
                info!(
                    %key,
                    databases = snapshot.databases().len(),
                    tables = snapshot.table_count(),
                    "schema snapshot loaded"
                );
                self.snapshot.send_replace(Arc::new(snapshot));
                self.state.send_replace(SchemaState::Loaded);
                Ok(())
            }
            Err(e) => {
                self.clear(SchemaState::Error(e.to_string()));
                Err(e)
            }
        }
    }

    /// Runs `refresh` on the ambient tokio runtime, logging failures.
    pub fn spawn_refresh(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let Ok(handle) = Handle::try_current() else {
            warn!("no tokio runtime available, schema refresh not started");
            return None;
        };
        {
            let binding = self.lock();
            if binding.key.is_bound() {
                self.state.send_replace(SchemaState::Loading);
            }
        }
        let cache = Arc::clone(self);
        Some(handle.spawn(async move {
            if let Err(e) = cache.refresh().await {
                warn!(error = %e, "schema refresh failed, suggestions limited to keywords");
            }
        }))
    }

    /// True when a bound cache has nothing loaded yet, or its snapshot is at
    /// least `max_age` old. Loading and failed caches wait for an explicit
    /// refresh.
    pub fn needs_refresh(&self, max_age: Option<Duration>) -> bool {
        if !self.lock().key.is_bound() {
            return false;
        }
        match &*self.state.borrow() {
            SchemaState::NotLoaded => true,
            SchemaState::Loaded => max_age
                .is_some_and(|max_age| self.snapshot.borrow().fetched_at().elapsed() >= max_age),
            SchemaState::Loading | SchemaState::Error(_) => false,
        }
    }

    fn clear(&self, state: SchemaState) {
        self.snapshot.send_replace(Arc::clone(&self.empty));
        self.state.send_replace(state);
    }

    fn lock(&self) -> MutexGuard<'_, Binding> {
        self.binding.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
