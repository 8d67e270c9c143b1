//! Watch-stream gating.
//!
//! Attaches the provider's predicates to `kube_runtime::watcher`
//! streams so a controller can register one primary (recording) watch
//! and any number of membership-gated secondary watches. This module
//! is glue only: it owns no state of its own.

use crate::event::ResourceEvent;
use crate::provider::WatchedSetProvider;
use futures::{Stream, StreamExt, future};
use kube::ResourceExt;
use kube_runtime::watcher;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by gated watch streams.
#[derive(Debug, Error)]
pub enum WatchGateError {
    /// Underlying watcher stream failed
    #[error("watch stream error: {0}")]
    Watch(#[from] watcher::Error),
}

/// Gates a primary watch stream through the write predicate.
///
/// `Apply` events are fed to the provider as updates, `InitApply`
/// events as creations, and `Delete` events as deletions, so the
/// watched set tracks the stream as it flows. `Init`/`InitDone`
/// bookkeeping events pass through untouched. Events the predicate
/// rejects are dropped; watcher errors propagate unchanged.
pub fn gate_primary<K, S>(
    stream: S,
    provider: Arc<WatchedSetProvider>,
) -> impl Stream<Item = Result<watcher::Event<K>, WatchGateError>>
where
    K: ResourceExt,
    S: Stream<Item = Result<watcher::Event<K>, watcher::Error>>,
{
    stream.filter_map(move |result| {
        let gated = match result {
            Err(e) => Some(Err(WatchGateError::Watch(e))),
            Ok(event) => {
                let keep = match &event {
                    watcher::Event::Apply(obj) => {
                        provider.write_predicate(&ResourceEvent::Updated(obj))
                    }
                    watcher::Event::InitApply(obj) => {
                        provider.write_predicate(&ResourceEvent::Created(obj))
                    }
                    watcher::Event::Delete(obj) => {
                        provider.write_predicate(&ResourceEvent::Deleted(obj))
                    }
                    watcher::Event::Init | watcher::Event::InitDone => true,
                };
                keep.then_some(Ok(event))
            }
        };
        future::ready(gated)
    })
}

/// Gates a secondary stream of generic notifications through the read
/// predicate.
///
/// Yields only the objects whose identity is currently in the watched
/// set. The membership check happens per object at delivery time, so
/// an object deleted upstream stops passing as soon as the primary
/// watch has seen the deletion.
pub fn gate_secondary<K, S>(stream: S, provider: Arc<WatchedSetProvider>) -> impl Stream<Item = K>
where
    K: ResourceExt,
    S: Stream<Item = K>,
{
    stream.filter(move |obj| future::ready(provider.read_predicate(&ResourceEvent::Generic(obj))))
}
