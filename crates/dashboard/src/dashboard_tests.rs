use crate::controller::Outcome;
use crate::dashboard::Dashboard;
use crate::test_support::FakeSource;

fn h(id: &str) -> Option<String> {
    Some(id.to_owned())
}

#[tokio::test]
async fn test_mount_loads_directory_and_first_page() {
    let dash = Dashboard::new(FakeSource::new().with_house(None, 50).with_house(Some("H1"), 10));

    assert_eq!(dash.mount().await.unwrap(), Outcome::Applied);

    let houses = dash.houses().await;
    assert_eq!(houses.len(), 2);
    assert_eq!(houses[0].filter(), None);

    let snap = dash.snapshot().await;
    assert_eq!(snap.state.page, 1);
    assert_eq!(snap.state.records.len(), 20);
    assert!(snap.state.has_next);
    assert_eq!(snap.known_pages, 2);
}

#[tokio::test]
async fn test_broken_directory_does_not_block_listing() {
    let dash = Dashboard::new(FakeSource::new().with_house(None, 5).with_broken_directory());

    assert_eq!(dash.mount().await.unwrap(), Outcome::Applied);
    assert!(dash.houses().await.is_empty());
    assert_eq!(dash.snapshot().await.state.records.len(), 5);
}

#[tokio::test]
async fn test_walks_to_last_page() {
    let dash = Dashboard::new(FakeSource::new().with_house(Some("H1"), 45));
    dash.set_filter(h("H1")).await.unwrap();

    dash.next_page().await.unwrap();
    dash.next_page().await.unwrap();

    let snap = dash.snapshot().await;
    assert_eq!(snap.state.page, 3);
    assert_eq!(snap.state.records.len(), 5);
    assert!(!snap.state.has_next);
    assert_eq!(dash.cached_cursors().await, 3);

    assert!(dash.next_page().await.unwrap_err().is_invalid_page());
    assert_eq!(dash.source().requests().len(), 3);
}

#[tokio::test]
async fn test_skipping_ahead_sends_nothing() {
    let dash = Dashboard::new(FakeSource::new().with_house(None, 100));
    dash.set_filter(None).await.unwrap();
    let sent = dash.source().requests().len();

    let err = dash.go_to_page(3).await.unwrap_err();
    assert!(err.is_invalid_page());
    assert_eq!(dash.source().requests().len(), sent);
}

#[tokio::test]
async fn test_back_and_forth_reuses_cached_cursor() {
    let dash = Dashboard::new(FakeSource::new().with_house(None, 100));
    dash.set_filter(None).await.unwrap();

    dash.go_to_page(2).await.unwrap();
    dash.go_to_page(1).await.unwrap();
    dash.go_to_page(2).await.unwrap();

    let requests = dash.source().requests();
    assert_eq!(requests.len(), 4);
    assert_eq!(requests[0].cursor, None);
    assert_eq!(requests[2].cursor, None);
    assert!(requests[1].cursor.is_some());
    assert_eq!(requests[1].cursor, requests[3].cursor);
    assert_eq!(dash.cached_cursors().await, 3);
}

#[tokio::test]
async fn test_refresh_is_idempotent_for_cache() {
    let dash = Dashboard::new(FakeSource::new().with_house(None, 100));
    dash.set_filter(None).await.unwrap();
    dash.next_page().await.unwrap();
    let before = dash.cached_cursors().await;

    for _ in 0..10 {
        assert_eq!(dash.refresh().await.unwrap(), Outcome::Applied);
    }

    assert_eq!(dash.cached_cursors().await, before);
    assert_eq!(dash.snapshot().await.state.page, 2);
}

#[tokio::test]
async fn test_transport_failure_keeps_last_page() {
    let dash = Dashboard::new(FakeSource::new().with_house(None, 100));
    dash.set_filter(None).await.unwrap();
    let shown = dash.snapshot().await.state.records;

    dash.source().fail_next(1);
    let err = dash.next_page().await.unwrap_err();
    assert!(err.is_transport());

    let snap = dash.snapshot().await;
    assert_eq!(snap.state.page, 1);
    assert_eq!(snap.state.records, shown);
    assert!(snap.state.last_error.is_some());

    // no hidden retry: the caller retries
    assert_eq!(dash.next_page().await.unwrap(), Outcome::Applied);
    let snap = dash.snapshot().await;
    assert_eq!(snap.state.page, 2);
    assert!(snap.state.last_error.is_none());
}

#[tokio::test]
async fn test_slow_previous_filter_is_discarded() {
    let source = FakeSource::new().with_house(None, 60).with_house(Some("H2"), 4);
    let release_all = source.gate(None);
    let dash = Dashboard::new(source);

    let (slow, fast) = tokio::join!(dash.set_filter(None), async {
        let outcome = dash.set_filter(h("H2")).await;
        release_all.send(()).unwrap();
        outcome
    });

    assert_eq!(fast.unwrap(), Outcome::Applied);
    assert_eq!(slow.unwrap(), Outcome::Stale);

    let snap = dash.snapshot().await;
    assert_eq!(snap.state.filter.as_deref(), Some("H2"));
    assert_eq!(snap.state.records.len(), 4);
    assert!(snap.state.records.iter().all(|r| r.house_id.as_deref() == Some("H2")));
    assert_eq!(snap.known_pages, 1);
}

#[tokio::test]
async fn test_latest_filter_wins_whatever_arrives_first() {
    let source = FakeSource::new().with_house(Some("H1"), 40).with_house(Some("H2"), 4);
    let release_h1 = source.gate(Some("H1"));
    let release_h2 = source.gate(Some("H2"));
    let dash = Dashboard::new(source);

    let (first, second, ()) = tokio::join!(
        dash.set_filter(h("H1")),
        dash.set_filter(h("H2")),
        async {
            release_h2.send(()).unwrap();
            tokio::task::yield_now().await;
            release_h1.send(()).unwrap();
        }
    );

    assert_eq!(first.unwrap(), Outcome::Stale);
    assert_eq!(second.unwrap(), Outcome::Applied);
    let snap = dash.snapshot().await;
    assert_eq!(snap.state.filter.as_deref(), Some("H2"));
    assert_eq!(snap.state.records.len(), 4);
    assert!(!snap.state.loading);
}

#[tokio::test]
async fn test_latest_filter_wins_when_old_response_arrives_first() {
    let source = FakeSource::new().with_house(Some("H1"), 40).with_house(Some("H2"), 4);
    let release_h1 = source.gate(Some("H1"));
    let release_h2 = source.gate(Some("H2"));
    let dash = Dashboard::new(source);

    let (first, second, ()) = tokio::join!(
        dash.set_filter(h("H1")),
        dash.set_filter(h("H2")),
        async {
            release_h1.send(()).unwrap();
            for _ in 0..3 {
                tokio::task::yield_now().await;
            }
            // H1 landed and was dropped, H2 is still pending
            let snap = dash.snapshot().await;
            assert!(snap.state.loading);
            assert_eq!(snap.state.filter.as_deref(), Some("H2"));
            assert!(snap.state.records.is_empty());
            assert_eq!(snap.known_pages, 1);
            release_h2.send(()).unwrap();
        }
    );

    assert_eq!(first.unwrap(), Outcome::Stale);
    assert_eq!(second.unwrap(), Outcome::Applied);
    let snap = dash.snapshot().await;
    assert_eq!(snap.state.filter.as_deref(), Some("H2"));
    assert_eq!(snap.state.records.len(), 4);
    assert!(snap.state.records.iter().all(|r| r.house_id.as_deref() == Some("H2")));
    assert!(!snap.state.loading);
}

#[tokio::test]
async fn test_cache_never_shrinks_during_navigation() {
    let dash = Dashboard::new(FakeSource::new().with_house(None, 200));
    dash.set_filter(None).await.unwrap();

    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut furthest = 1;
    let mut previous_len = dash.cached_cursors().await;

    for _ in 0..200 {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        let page = dash.snapshot().await.state.page;
        let target = 1 + usize::try_from(seed >> 33).unwrap() % (page + 1);

        match dash.go_to_page(target).await {
            Ok(outcome) => assert_eq!(outcome, Outcome::Applied),
            // forward onto the empty tail page is the only rejection in range
            Err(e) => assert!(e.is_invalid_page()),
        }

        furthest = furthest.max(dash.snapshot().await.state.page);
        let len = dash.cached_cursors().await;
        assert!(len >= previous_len, "cache shrank from {previous_len} to {len}");
        assert!(len <= furthest + 1, "cache length {len} beyond page {furthest} + 1");
        previous_len = len;
    }
}
