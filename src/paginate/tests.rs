//! Tests for the paginate module

use super::*;
use crate::error::{Error, Result};
use futures::{StreamExt, TryStreamExt};
use std::collections::VecDeque;
use std::sync::Mutex;
use test_case::test_case;

/// Replays a script of page results and records every request made
struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<Page<u32>>>>,
    requests: Mutex<Vec<PageRequest>>,
}

impl ScriptedFetcher {
    fn new(script: Vec<Result<Page<u32>>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn requests(&self) -> Vec<PageRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl PageFetcher for &ScriptedFetcher {
    type Response = Page<u32>;

    async fn fetch_page(&self, request: PageRequest) -> Result<Page<u32>> {
        self.requests.lock().unwrap().push(request);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("fetch past end of script")
    }
}

fn page(items: &[u32], next_token: Option<&str>) -> Result<Page<u32>> {
    Ok(Page {
        items: items.to_vec(),
        next_token: next_token.map(String::from),
    })
}

fn service_error() -> Result<Page<u32>> {
    Err(Error::http_status(503, "service unavailable"))
}

#[tokio::test]
async fn concatenates_all_pages_without_budget() {
    // Second page returns an empty-string token, which means "no more
    // pages"; a third fetch must never be issued.
    let fetcher = ScriptedFetcher::new(vec![
        page(&[1, 2, 3], Some("t1")),
        page(&[4, 5, 6, 7], Some("")),
    ]);

    let result = Pager::new(&fetcher, PagerConfig::new(100)).run().await.unwrap();

    assert_eq!(result.items, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(result.page_count(), 2);
    assert_eq!(result.next_token, None);
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn budget_caps_emitted_items() {
    let fetcher = ScriptedFetcher::new(vec![
        page(&[1, 2, 3], Some("t1")),
        page(&[4, 5, 6], Some("t2")),
    ]);

    let config = PagerConfig::new(100).with_max_items(Some(5));
    let result = Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(result.items, vec![1, 2, 3, 4, 5]);
    assert_eq!(fetcher.calls(), 2);
    // Partial result: the token to resume from is still surfaced
    assert_eq!(result.next_token, Some("t2".to_string()));

    // Page size hints track the remaining budget
    let hints: Vec<_> = fetcher.requests().iter().map(|r| r.page_size).collect();
    assert_eq!(hints, vec![Some(5), Some(2)]);
}

#[tokio::test]
async fn budget_hint_capped_by_server_page_max() {
    let fetcher = ScriptedFetcher::new(vec![page(&[1, 2], None)]);

    let config = PagerConfig::new(100).with_max_items(Some(5000));
    Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(fetcher.requests()[0].page_size, Some(100));
}

#[tokio::test]
async fn user_page_size_caps_budgeted_hint() {
    let fetcher = ScriptedFetcher::new(vec![page(&[1, 2], None)]);

    let config = PagerConfig::new(100)
        .with_max_items(Some(500))
        .with_page_size(Some(10));
    Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(fetcher.requests()[0].page_size, Some(10));
}

#[tokio::test]
async fn no_budget_passes_user_page_size_through() {
    let fetcher = ScriptedFetcher::new(vec![page(&[1], None)]);

    let config = PagerConfig::new(100).with_page_size(Some(25));
    Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(fetcher.requests()[0].page_size, Some(25));
}

#[tokio::test]
async fn budget_of_zero_performs_no_fetches() {
    let fetcher = ScriptedFetcher::new(vec![]);

    let config = PagerConfig::new(100)
        .with_max_items(Some(0))
        .with_starting_token(Some("resume".to_string()));
    let result = Pager::new(&fetcher, config).run().await.unwrap();

    assert!(result.items.is_empty());
    assert_eq!(result.next_token, Some("resume".to_string()));
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn budget_larger_than_available_terminates_on_empty_cursor() {
    let fetcher = ScriptedFetcher::new(vec![page(&[1, 2, 3], Some("t1")), page(&[4, 5], None)]);

    let config = PagerConfig::new(100).with_max_items(Some(100));
    let result = Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(result.items, vec![1, 2, 3, 4, 5]);
    assert_eq!(result.next_token, None);
    assert_eq!(fetcher.calls(), 2);
}

#[test_case(None ; "without budget")]
#[test_case(Some(50) ; "with budget")]
#[tokio::test]
async fn manual_paging_issues_exactly_one_fetch(max_items: Option<usize>) {
    let fetcher = ScriptedFetcher::new(vec![page(&[1, 2, 3], Some("next"))]);

    let config = PagerConfig::new(100)
        .with_starting_token(Some("start".to_string()))
        .with_max_items(max_items)
        .with_manual_paging(true);
    let result = Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(result.items, vec![1, 2, 3]);
    assert_eq!(result.next_token, Some("next".to_string()));
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(fetcher.requests()[0].token, Some("start".to_string()));
}

#[test_case(None ; "without budget")]
#[test_case(Some(10) ; "with budget")]
#[tokio::test]
async fn first_page_error_always_propagates(max_items: Option<usize>) {
    let fetcher = ScriptedFetcher::new(vec![service_error()]);

    let config = PagerConfig::new(100).with_max_items(max_items);
    let result = Pager::new(&fetcher, config).run().await;

    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 503, .. })
    ));
}

#[tokio::test]
async fn later_error_without_budget_propagates() {
    let fetcher = ScriptedFetcher::new(vec![page(&[1, 2], Some("t1")), service_error()]);

    let result = Pager::new(&fetcher, PagerConfig::new(100)).run().await;

    assert!(result.is_err());
    assert_eq!(fetcher.calls(), 2);
}

#[tokio::test]
async fn later_error_with_budget_keeps_partial_result() {
    let fetcher = ScriptedFetcher::new(vec![
        page(&[1, 2, 3], Some("t1")),
        page(&[4, 5, 6, 7], Some("t2")),
        service_error(),
    ]);

    let config = PagerConfig::new(100).with_max_items(Some(20));
    let result = Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(result.items, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(result.page_count(), 2);
    assert_eq!(result.next_token, Some("t2".to_string()));
    assert_eq!(fetcher.calls(), 3);
}

#[tokio::test]
async fn starting_token_used_on_first_fetch() {
    let fetcher = ScriptedFetcher::new(vec![page(&[1], None)]);

    let config = PagerConfig::new(100).with_starting_token(Some("resume-here".to_string()));
    Pager::new(&fetcher, config).run().await.unwrap();

    assert_eq!(fetcher.requests()[0].token, Some("resume-here".to_string()));
}

#[tokio::test]
async fn dropping_item_stream_stops_fetching() {
    let fetcher = ScriptedFetcher::new(vec![
        page(&[1, 2, 3], Some("t1")),
        page(&[4, 5, 6], Some("t2")),
    ]);

    let items: Vec<u32> = Pager::new(&fetcher, PagerConfig::new(100))
        .into_items()
        .take(3)
        .try_collect()
        .await
        .unwrap();

    assert_eq!(items, vec![1, 2, 3]);
    // The consumer stopped after the first page, so no second fetch
    assert_eq!(fetcher.calls(), 1);
}

#[tokio::test]
async fn page_stream_yields_full_responses() {
    let fetcher = ScriptedFetcher::new(vec![page(&[1, 2], Some("t1")), page(&[3], None)]);

    let pages: Vec<_> = Pager::new(&fetcher, PagerConfig::new(100))
        .pages()
        .try_collect()
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].items, vec![1, 2]);
    assert_eq!(pages[0].next_token, Some("t1".to_string()));
    assert_eq!(pages[1].items, vec![3]);
    assert_eq!(pages[1].next_token, None);
}

#[test]
fn pager_config_builder() {
    let config = PagerConfig::new(1000)
        .with_starting_token(Some("tok".to_string()))
        .with_max_items(Some(10))
        .with_page_size(Some(50))
        .with_manual_paging(true);

    assert_eq!(config.server_page_max, 1000);
    assert_eq!(config.starting_token, Some("tok".to_string()));
    assert_eq!(config.max_items, Some(10));
    assert_eq!(config.page_size, Some(50));
    assert!(config.manual);
}

#[test]
fn page_request_with_token() {
    let request = PageRequest::with_token("abc");
    assert_eq!(request.token, Some("abc".to_string()));
    assert_eq!(request.page_size, None);
}
