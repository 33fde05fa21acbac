//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use charfeed::config::FeedConfig;
use charfeed::query::{Character, QueryClient, QueryError};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

pub const NOT_FOUND: &str = "404: Not Found";

pub type PageResult = Result<Vec<Character>, String>;

enum Scripted {
    Ready(PageResult),
    Gated(oneshot::Receiver<PageResult>),
}

/// In-memory [`QueryClient`] that answers from a script and records calls.
///
/// When the script runs out it answers with an empty page.
#[derive(Default)]
pub struct ScriptedClient {
    calls: Mutex<Vec<u32>>,
    script: Mutex<VecDeque<Scripted>>,
}

impl ScriptedClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond(&self, result: PageResult) {
        self.script.lock().push_back(Scripted::Ready(result));
    }

    pub fn respond_ok(&self, characters: Vec<Character>) {
        self.respond(Ok(characters));
    }

    pub fn respond_err(&self, message: &str) {
        self.respond(Err(message.to_string()));
    }

    /// Queue a response that resolves only when the returned sender fires.
    pub fn respond_gated(&self) -> oneshot::Sender<PageResult> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().push_back(Scripted::Gated(rx));
        tx
    }

    /// Pages requested so far, in call order.
    pub fn calls(&self) -> Vec<u32> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl QueryClient for ScriptedClient {
    async fn fetch_page(&self, page: u32) -> Result<Vec<Character>, QueryError> {
        self.calls.lock().push(page);
        let next = self.script.lock().pop_front();
        let result = match next {
            Some(Scripted::Ready(result)) => result,
            Some(Scripted::Gated(rx)) => rx.await.unwrap_or_else(|_| Ok(Vec::new())),
            None => Ok(Vec::new()),
        };
        result.map_err(QueryError::GraphQl)
    }
}

pub fn character(id: &str, name: &str) -> Character {
    Character::new(id, name, "Alive", format!("https://img.test/{id}.jpeg"))
}

pub fn rick() -> Character {
    Character::new("1", "Rick", "Alive", "u1")
}

/// `count` characters with ids starting after `page`'s offset (20 per page).
pub fn page_of(page: u32, count: usize) -> Vec<Character> {
    (0..count)
        .map(|i| {
            let id = (page as usize - 1) * 20 + i + 1;
            character(&id.to_string(), &format!("Character {id}"))
        })
        .collect()
}

pub fn feed_config() -> FeedConfig {
    FeedConfig::default()
}

/// Poll `condition` until it holds or one second passes.
pub async fn wait_until<F: Fn() -> bool>(condition: F) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(1);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not met within 1s"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Give spawned tasks a chance to run.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(30)).await;
}
