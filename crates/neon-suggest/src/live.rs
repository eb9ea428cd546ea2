//! Latest-request-wins suggestion state
//!
//! Each request takes a token when it is issued. When its fetch completes
//! the result is applied only if no newer request has been issued since;
//! stale results are dropped, the transport is not cancelled.

use parking_lot::RwLock;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::suggester::{Suggester, Suggestion};

#[derive(Debug, Default)]
struct Visible {
    token: u64,
    query: String,
    items: Vec<Suggestion>,
}

pub struct LiveSuggestions {
    suggester: Arc<Suggester>,
    latest: AtomicU64,
    visible: RwLock<Visible>,
}

impl LiveSuggestions {
    pub fn new(suggester: Arc<Suggester>) -> Self {
        Self {
            suggester,
            latest: AtomicU64::new(0),
            visible: RwLock::new(Visible::default()),
        }
    }

    pub fn suggester(&self) -> &Suggester {
        &self.suggester
    }

    /// Issue a request for `raw`.
    ///
    /// The token is taken here, before the returned future is first polled,
    /// so issue order decides which request is newest. Resolves to `None`
    /// when a newer request superseded this one.
    pub fn update<'a>(
        &'a self,
        raw: &'a str,
    ) -> impl Future<Output = Option<Vec<Suggestion>>> + 'a {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        async move {
            let items = self.suggester.suggest(raw).await;
            self.apply(token, raw, items)
        }
    }

    /// Drop any visible suggestions and invalidate in-flight requests
    pub fn clear(&self) {
        let token = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let mut visible = self.visible.write();
        *visible = Visible {
            token,
            ..Default::default()
        };
    }

    pub fn current(&self) -> Vec<Suggestion> {
        self.visible.read().items.clone()
    }

    pub fn current_query(&self) -> String {
        self.visible.read().query.clone()
    }

    fn apply(&self, token: u64, raw: &str, items: Vec<Suggestion>) -> Option<Vec<Suggestion>> {
        let mut visible = self.visible.write();
        if token != self.latest.load(Ordering::SeqCst) || token < visible.token {
            tracing::debug!(token, query = raw, "Discarding stale suggestions");
            return None;
        }

        visible.token = token;
        visible.query = raw.to_string();
        visible.items = items.clone();
        Some(items)
    }
}
