//! Route definitions and the navigation seam used by row actions.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Liquidity tokens listing
pub const ROUTE_LIQUIDITY_TOKENS: &str = "/liquidity/tokens";

/// Single-sided add liquidity form
pub const ROUTE_LIQUIDITY_ADD_LIQUIDITY_SINGLE_SIDED: &str = "/liquidity/add-liquidity/single-sided";

/// State attached to a history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Route the navigation originated from
    pub from: Option<String>,
}

/// A route push with query parameters and history state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub state: HistoryState,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
            state: HistoryState::default(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn from_route(mut self, route: impl Into<String>) -> Self {
        self.state.from = Some(route.into());
        self
    }

    /// Value of a query parameter
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path with the query string appended, e.g. `/a?token0=KDA`
    pub fn href(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", encode_component(k), encode_component(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.path, query)
    }
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b':' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// Receives route pushes from components.
pub trait Navigator {
    fn push(&mut self, request: NavigationRequest);
}

/// In-memory history stack.
#[derive(Debug, Clone, Default)]
pub struct HistoryNavigator {
    entries: Vec<NavigationRequest>,
}

impl HistoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&NavigationRequest> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pop the current entry, returning it
    pub fn back(&mut self) -> Option<NavigationRequest> {
        self.entries.pop()
    }
}

impl Navigator for HistoryNavigator {
    fn push(&mut self, request: NavigationRequest) {
        debug!(href = %request.href(), from = ?request.state.from, "Navigating");
        self.entries.push(request);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href() {
        let request = NavigationRequest::new(ROUTE_LIQUIDITY_ADD_LIQUIDITY_SINGLE_SIDED)
            .with_query("token0", "KDA")
            .from_route(ROUTE_LIQUIDITY_TOKENS);
        assert_eq!(
            request.href(),
            "/liquidity/add-liquidity/single-sided?token0=KDA"
        );
        assert_eq!(request.query_param("token0"), Some("KDA"));
        assert_eq!(request.state.from.as_deref(), Some(ROUTE_LIQUIDITY_TOKENS));
    }

    #[test]
    fn test_href_encodes_values() {
        let request = NavigationRequest::new("/x").with_query("token0", "a b&c");
        assert_eq!(request.href(), "/x?token0=a%20b%26c");
    }

    #[test]
    fn test_history_navigator() {
        let mut nav = HistoryNavigator::new();
        nav.push(NavigationRequest::new("/a"));
        nav.push(NavigationRequest::new("/b"));
        assert_eq!(nav.current().map(|r| r.path.as_str()), Some("/b"));
        assert_eq!(nav.back().map(|r| r.path), Some("/b".to_string()));
        assert_eq!(nav.len(), 1);
    }
}
