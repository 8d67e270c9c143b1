//! Watched-set predicate provider.
//!
//! This module contains the provider that owns the membership set and
//! exposes the two predicates gating event propagation. It is the
//! Rust-side analog of a controller-runtime predicate provider: the
//! write predicate is attached to the primary watch, the read predicate
//! to secondary/generic watches.

use crate::event::ResourceEvent;
use crate::key::ResourceKey;
use kube::ResourceExt;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace};

/// Tracks which resources the primary watch has observed and gates
/// event propagation on that membership.
///
/// The set itself is private: all mutation funnels through
/// [`write_predicate`](Self::write_predicate) and all queries through
/// [`read_predicate`](Self::read_predicate). Both predicates are total,
/// never panic, and are safe to call from any number of tasks
/// concurrently; readers run in parallel, writers exclude everyone.
#[derive(Debug, Default)]
pub struct WatchedSetProvider {
    watched: RwLock<HashSet<ResourceKey>>,
}

impl WatchedSetProvider {
    /// Creates a provider with an empty watched set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Predicate for primary watches.
    ///
    /// Records the membership change before returning, then always
    /// allows create, update, and delete events to propagate. Inserting
    /// an already-watched resource and deleting an unknown one are
    /// no-ops. Generic events are not served by this predicate and are
    /// rejected without touching the set.
    pub fn write_predicate<K: ResourceExt>(&self, event: &ResourceEvent<'_, K>) -> bool {
        match event {
            ResourceEvent::Created(obj) => {
                let key = ResourceKey::from_object(*obj);
                debug!("watching resource: {}", key);
                self.write_set().insert(key);
                true
            }
            ResourceEvent::Updated(obj) => {
                let key = ResourceKey::from_object(*obj);
                trace!("refreshing watched resource: {}", key);
                self.write_set().insert(key);
                true
            }
            ResourceEvent::Deleted(obj) => {
                let key = ResourceKey::from_object(*obj);
                debug!("unwatching resource: {}", key);
                self.write_set().remove(&key);
                true
            }
            ResourceEvent::Generic(_) => false,
        }
    }

    /// Predicate for secondary/generic watches.
    ///
    /// Allows a generic event to propagate only while its resource is
    /// in the watched set. Never mutates. Create/update/delete events
    /// are not served by this predicate and are rejected.
    pub fn read_predicate<K: ResourceExt>(&self, event: &ResourceEvent<'_, K>) -> bool {
        match event {
            ResourceEvent::Generic(obj) => {
                let key = ResourceKey::from_object(*obj);
                let watched = self.read_set().contains(&key);
                trace!("generic event for {}: watched={}", key, watched);
                watched
            }
            _ => false,
        }
    }

    /// Number of resources currently watched (test introspection only).
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.read_set().len()
    }

    // The predicates are total: a guard poisoned by a panicking caller
    // is still structurally valid, since every mutation is a single
    // insert or remove.
    fn read_set(&self) -> RwLockReadGuard<'_, HashSet<ResourceKey>> {
        self.watched.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_set(&self) -> RwLockWriteGuard<'_, HashSet<ResourceKey>> {
        self.watched.write().unwrap_or_else(PoisonError::into_inner)
    }
}
