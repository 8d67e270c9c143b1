//! Tests for the watcher-stream gating adapters

use futures::{StreamExt, stream};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::ResourceExt;
use kube::api::ObjectMeta;
use kube_runtime::watcher;
use std::sync::Arc;
use watched_set::{ResourceEvent, WatchedSetProvider, gate_primary, gate_secondary};

fn config_map(name: &str, namespace: &str) -> ConfigMap {
    ConfigMap {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..ObjectMeta::default()
        },
        ..ConfigMap::default()
    }
}

#[tokio::test]
async fn test_primary_gate_records_membership_and_passes_events() {
    let provider = Arc::new(WatchedSetProvider::new());
    let events: Vec<Result<watcher::Event<ConfigMap>, watcher::Error>> = vec![
        Ok(watcher::Event::Init),
        Ok(watcher::Event::InitApply(config_map("a", "ns1"))),
        Ok(watcher::Event::InitDone),
        Ok(watcher::Event::Apply(config_map("b", "ns1"))),
        Ok(watcher::Event::Delete(config_map("a", "ns1"))),
    ];

    let passed: Vec<_> = gate_primary(stream::iter(events), Arc::clone(&provider))
        .collect()
        .await;

    // Write-side events always propagate, init bookkeeping included
    assert_eq!(passed.len(), 5);
    assert!(passed.iter().all(Result::is_ok));

    // "a" was deleted after its initial listing, "b" is still watched
    let a = config_map("a", "ns1");
    let b = config_map("b", "ns1");
    assert!(!provider.read_predicate(&ResourceEvent::Generic(&a)));
    assert!(provider.read_predicate(&ResourceEvent::Generic(&b)));
}

#[tokio::test]
async fn test_secondary_gate_yields_only_watched_objects() {
    let provider = Arc::new(WatchedSetProvider::new());
    let watched = config_map("watched", "ns1");
    assert!(provider.write_predicate(&ResourceEvent::Created(&watched)));

    let notifications = stream::iter(vec![
        config_map("watched", "ns1"),
        config_map("stranger", "ns1"),
        config_map("watched", "ns2"),
    ]);
    let passed: Vec<ConfigMap> = gate_secondary(notifications, Arc::clone(&provider))
        .collect()
        .await;

    assert_eq!(passed.len(), 1);
    assert_eq!(passed[0].name_any(), "watched");
    assert_eq!(passed[0].namespace().as_deref(), Some("ns1"));
}

#[tokio::test]
async fn test_deletion_on_primary_closes_the_secondary_gate() {
    let provider = Arc::new(WatchedSetProvider::new());

    let primary: Vec<Result<watcher::Event<ConfigMap>, watcher::Error>> = vec![
        Ok(watcher::Event::Apply(config_map("a", "ns1"))),
        Ok(watcher::Event::Delete(config_map("a", "ns1"))),
    ];
    let passed: Vec<_> = gate_primary(stream::iter(primary), Arc::clone(&provider))
        .collect()
        .await;
    assert_eq!(passed.len(), 2);

    let passed: Vec<ConfigMap> =
        gate_secondary(stream::iter(vec![config_map("a", "ns1")]), provider)
            .collect()
            .await;
    assert!(passed.is_empty());
}
