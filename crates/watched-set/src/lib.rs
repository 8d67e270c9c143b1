//! Watched-Set Event Filtering
//!
//! Tracks which resources a controller has observed through its primary
//! watch and gates secondary/generic watches on that membership.
//!
//! The primary watch feeds [`WatchedSetProvider::write_predicate`]: its
//! create/update/delete events record membership and always propagate.
//! Secondary watches feed [`WatchedSetProvider::read_predicate`]: their
//! generic events only propagate while the resource is in the set.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use k8s_openapi::api::core::v1::ConfigMap;
//! use kube::{Api, Client};
//! use kube_runtime::watcher;
//! use watched_set::{gate_primary, WatchedSetProvider};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::try_default().await?;
//! let api: Api<ConfigMap> = Api::namespaced(client, "default");
//!
//! let provider = Arc::new(WatchedSetProvider::new());
//!
//! // The primary watch records membership as events flow through.
//! let mut primary = Box::pin(gate_primary(
//!     watcher(api, watcher::Config::default()),
//!     Arc::clone(&provider),
//! ));
//!
//! while let Some(event) = primary.next().await {
//!     let _event = event?;
//!     // hand off to the reconciler
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Guarantees
//!
//! - **Write events always propagate**: the write predicate returns
//!   `true` for every create/update/delete, after the set is updated
//! - **Reads reflect membership exactly**: a generic event passes iff
//!   the last write-side event for its resource was not a delete
//! - **Concurrency-safe**: both predicates may be called from any
//!   number of tasks without external locking

pub mod event;
pub mod key;
pub mod provider;
pub mod stream;


pub use event::ResourceEvent;
pub use key::ResourceKey;
pub use provider::WatchedSetProvider;
pub use stream::{WatchGateError, gate_primary, gate_secondary};
