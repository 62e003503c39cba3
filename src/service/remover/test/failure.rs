use super::*;

/// Tests a failing search without skip-on-failure.
///
/// Expected: SearchFailed after one search, nothing deleted
#[tokio::test(start_paused = true)]
async fn search_failure_stops_session() {
    let fake = FakeDiscord::with_pages(vec![search_error()]);
    let config = config();

    let report = RemovalEngine::new(&fake, &config).run().await;

    assert_eq!(report.status, RemovalStatus::SearchFailed);
    assert!(fake.deletes().is_empty());
}

/// Tests a failing search with skip-on-failure.
///
/// Expected: search retried at the same offset, then Ok
#[tokio::test(start_paused = true)]
async fn search_failure_is_retried_when_skipping() {
    let fake = FakeDiscord::with_pages(vec![search_error(), page(0, vec![])]);
    let mut config = config();
    config.skip_if_fail = true;

    let report = RemovalEngine::new(&fake, &config).run().await;

    assert_eq!(report.status, RemovalStatus::Ok);
    assert_eq!(fake.searches(), vec![0, 0]);
}

/// Tests a failing delete without skip-on-failure.
///
/// Expected: DeleteFailed, later messages on the page not attempted
#[tokio::test(start_paused = true)]
async fn delete_failure_stops_session() {
    let fake = FakeDiscord::with_corpus(vec![message("a", 0), message("x", 0), message("b", 0)])
        .failing("x");
    let config = config();

    let report = RemovalEngine::new(&fake, &config).run().await;

    assert_eq!(report.status, RemovalStatus::DeleteFailed);
    assert_eq!(report.deleted, 1);
    assert_eq!(fake.deletes(), vec!["a", "x"]);
}

/// Tests a failing delete with skip-on-failure.
///
/// Verifies the failed message is skipped for the rest of the session instead of being
/// retried on every page.
///
/// Expected: Ok, failed message attempted once and counted as skipped
#[tokio::test(start_paused = true)]
async fn delete_failure_is_skipped_when_configured() {
    let fake = FakeDiscord::with_corpus(vec![message("a", 0), message("x", 0), message("b", 0)])
        .failing("x");
    let mut config = config();
    config.skip_if_fail = true;

    let report = RemovalEngine::new(&fake, &config).run().await;

    assert_eq!(report.status, RemovalStatus::Ok);
    assert_eq!(report.deleted, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(fake.deletes(), vec!["a", "x", "b"]);
}

/// Tests an archived-thread message.
///
/// Verifies the engine moves on to the next message and never retries the archived one.
///
/// Expected: Ok, "y" attempted once, following message deleted
#[tokio::test(start_paused = true)]
async fn archived_thread_message_is_skipped_for_session() {
    let fake = FakeDiscord::with_corpus(vec![message("y", 0), message("z", 0)]).archived("y");
    let config = config();

    let report = RemovalEngine::new(&fake, &config).run().await;

    assert_eq!(report.status, RemovalStatus::Ok);
    assert_eq!(report.deleted, 1);
    assert_eq!(report.skipped, 1);
    assert_eq!(fake.deletes(), vec!["y", "z"]);
}
