//! Cursor-based pagination state machine behind every list screen.
//!
//! A [`PagedQuery`] owns the query text, the 1-based fetch window, the
//! accumulated result sequence, and the loading/error flags for one list.
//! It never performs I/O itself: intent methods return a [`PageRequest`]
//! for the caller to hand to a fetch worker, and [`PagedQuery::apply`]
//! consumes the worker's outcome. Request/outcome pairs are correlated by
//! a monotonic ticket so a completion that arrives after the controller
//! moved on (new query, reset, screen change) is ignored instead of
//! corrupting state.

use crate::state::{Lane, PageRequest};

/// Pagination controller for one list screen, generic over the record type.
///
/// Instantiated once per lane (recipes search, shopping search, home feeds,
/// category products) and owned by [`crate::state::AppState`]; all mutation
/// goes through the intent methods below.
#[derive(Debug)]
pub struct PagedQuery<R> {
    /// Lane stamped onto every emitted request.
    lane: Lane,
    /// Active query text; blank means no active query.
    query: String,
    /// 1-based offset of the most recently dispatched window.
    window_start: u32,
    /// Fixed page size for this controller instance.
    window_size: u32,
    /// Accumulated records, append-only within one query lifetime.
    results: Vec<R>,
    /// `true` from request dispatch until its outcome is applied.
    loading: bool,
    /// Last fetch failure message; cleared by the next successful fetch.
    last_error: Option<String>,
    /// Set once an appended page comes back empty; no further windows exist.
    end_reached: bool,
    /// Current request generation; outcomes with an older ticket are stale.
    ticket: u64,
    /// Whether the in-flight request replaces (page 1) or appends.
    replace_pending: bool,
}

impl<R> PagedQuery<R> {
    /// Create an idle controller for `lane` fetching `window_size` records
    /// per page.
    #[must_use]
    pub fn new(lane: Lane, window_size: u32) -> Self {
        Self {
            lane,
            query: String::new(),
            window_start: 1,
            window_size: window_size.max(1),
            results: Vec::new(),
            loading: false,
            last_error: None,
            end_reached: false,
            ticket: 0,
            replace_pending: false,
        }
    }

    /// Start a fresh query from page 1.
    ///
    /// Blank or whitespace-only text is a no-op returning `None`. Otherwise
    /// the result buffer is cleared, the window rewinds to the first page,
    /// and one request is emitted; its successful outcome replaces
    /// `results` wholesale.
    pub fn new_query(&mut self, text: &str) -> Option<PageRequest> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.query = trimmed.to_owned();
        self.window_start = 1;
        self.results.clear();
        self.end_reached = false;
        self.replace_pending = true;
        Some(self.dispatch())
    }

    /// Request the next window of the active query.
    ///
    /// No-op while a fetch is in flight, when no query is active, or after
    /// the source signalled the end of its results. The window advances
    /// BEFORE dispatch, so a failed page is not silently refetched; retry
    /// is the caller's decision.
    pub fn load_next_page(&mut self) -> Option<PageRequest> {
        if self.loading || self.query.is_empty() || self.end_reached {
            return None;
        }
        self.window_start += self.window_size;
        self.replace_pending = false;
        Some(self.dispatch())
    }

    /// Clear the accumulated results without touching the query text or
    /// window offset. Any in-flight fetch is orphaned: its outcome will
    /// carry a stale ticket and be discarded by [`Self::apply`].
    pub fn reset(&mut self) {
        self.results.clear();
        self.ticket += 1;
        self.loading = false;
        self.replace_pending = false;
    }

    /// Apply a fetch outcome.
    ///
    /// Returns `false` (state untouched) when `ticket` does not match the
    /// current generation — the request was superseded or the controller
    /// was reset while it was in flight. On success the page replaces or
    /// extends `results` and clears `last_error`; on failure the error is
    /// recorded and `results` is left as-is.
    pub fn apply(&mut self, ticket: u64, outcome: Result<Vec<R>, String>) -> bool {
        if ticket != self.ticket || !self.loading {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(page) => {
                self.last_error = None;
                if self.replace_pending {
                    self.results = page;
                } else {
                    if page.is_empty() {
                        self.end_reached = true;
                    }
                    self.results.extend(page);
                }
            }
            Err(message) => {
                self.last_error = Some(message);
            }
        }
        self.replace_pending = false;
        true
    }

    /// Stamp the loading flag, bump the ticket, and build the request for
    /// the current window.
    fn dispatch(&mut self) -> PageRequest {
        self.loading = true;
        self.ticket += 1;
        PageRequest {
            lane: self.lane,
            ticket: self.ticket,
            query: self.query.clone(),
            start: self.window_start,
            size: self.window_size,
        }
    }

    /// Accumulated records for rendering.
    #[must_use]
    pub fn results(&self) -> &[R] {
        &self.results
    }

    /// Whether a fetch is currently in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last recorded fetch failure, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Active query text; empty when no query is active.
    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query
    }

    /// 1-based offset of the most recently dispatched window.
    #[must_use]
    pub const fn window_start(&self) -> u32 {
        self.window_start
    }

    /// Fixed page size of this controller.
    #[must_use]
    pub const fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Whether the source reported that no further windows exist.
    #[must_use]
    pub const fn end_reached(&self) -> bool {
        self.end_reached
    }

    /// Lane owned by this controller.
    #[must_use]
    pub const fn lane(&self) -> Lane {
        self.lane
    }
}

#[cfg(test)]
mod tests {
    use super::PagedQuery;
    use crate::state::Lane;

    /// Build a small controller with a 3-record window for the tests.
    fn pager() -> PagedQuery<&'static str> {
        PagedQuery::new(Lane::ShoppingSearch, 3)
    }

    #[test]
    /// What: Blank query text never mutates the controller
    ///
    /// - Input: Empty and whitespace-only `new_query` calls
    /// - Output: No request, no loading, window untouched
    fn pager_blank_query_is_noop() {
        let mut p = pager();
        assert!(p.new_query("").is_none());
        assert!(p.new_query("   ").is_none());
        assert!(!p.is_loading());
        assert_eq!(p.window_start(), 1);
        assert!(p.results().is_empty());
    }

    #[test]
    /// What: A successful first page replaces the result buffer
    ///
    /// - Input: `new_query` then an Ok outcome with three records
    /// - Output: Results equal exactly the returned page
    fn pager_first_page_replaces() {
        let mut p = pager();
        let req = p.new_query("고양이집").expect("request");
        assert_eq!(req.start, 1);
        assert_eq!(req.size, 3);
        assert!(p.is_loading());
        assert!(p.apply(req.ticket, Ok(vec!["a", "b", "c"])));
        assert!(!p.is_loading());
        assert_eq!(p.results(), ["a", "b", "c"]);
    }

    #[test]
    /// What: The next page is appended in order after the first
    ///
    /// - Input: Page 1 then `load_next_page` with page 2
    /// - Output: Results are page1 ++ page2; offset advanced by the window size
    fn pager_next_page_appends() {
        let mut p = pager();
        let r1 = p.new_query("q").expect("request");
        assert!(p.apply(r1.ticket, Ok(vec!["a", "b", "c"])));
        let r2 = p.load_next_page().expect("request");
        assert_eq!(r2.start, 4);
        assert!(p.apply(r2.ticket, Ok(vec!["d", "e"])));
        assert_eq!(p.results(), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    /// What: Paging is refused while a fetch is in flight
    ///
    /// - Input: `load_next_page` before the first outcome arrives
    /// - Output: No second request and the window offset is unchanged
    fn pager_no_second_dispatch_while_loading() {
        let mut p = pager();
        let _r1 = p.new_query("q").expect("request");
        assert!(p.is_loading());
        assert!(p.load_next_page().is_none());
        assert_eq!(p.window_start(), 1);
    }

    #[test]
    /// What: Paging without an active query is refused
    ///
    /// - Input: `load_next_page` on a fresh controller
    /// - Output: None
    fn pager_next_page_requires_query() {
        let mut p = pager();
        assert!(p.load_next_page().is_none());
    }

    #[test]
    /// What: A failed next page keeps results and the advanced offset
    ///
    /// - Input: Page 1 Ok, page 2 Err
    /// - Output: Results unchanged, error recorded, offset stays advanced
    fn pager_failed_page_keeps_results_and_offset() {
        let mut p = pager();
        let r1 = p.new_query("q").expect("request");
        assert!(p.apply(r1.ticket, Ok(vec!["a"])));
        let r2 = p.load_next_page().expect("request");
        assert!(p.apply(r2.ticket, Err("timeout".into())));
        assert_eq!(p.results(), ["a"]);
        assert_eq!(p.last_error(), Some("timeout"));
        // No rollback: the next window starts after the failed one.
        assert_eq!(p.window_start(), 4);
    }

    #[test]
    /// What: The error message is cleared by the next successful fetch
    ///
    /// - Input: Failed page followed by a successful retry via new_query
    /// - Output: `last_error` is None again
    fn pager_error_cleared_on_success() {
        let mut p = pager();
        let r1 = p.new_query("q").expect("request");
        assert!(p.apply(r1.ticket, Err("boom".into())));
        assert_eq!(p.last_error(), Some("boom"));
        let r2 = p.new_query("q").expect("request");
        assert!(p.apply(r2.ticket, Ok(vec!["a"])));
        assert!(p.last_error().is_none());
    }

    #[test]
    /// What: Outcomes from a superseded request generation are discarded
    ///
    /// - Input: Query A in flight, then query B dispatched; A's outcome arrives
    /// - Output: A's page is ignored; B's page lands
    fn pager_stale_outcome_discarded() {
        let mut p = pager();
        let ra = p.new_query("a").expect("request");
        let rb = p.new_query("b").expect("request");
        assert!(!p.apply(ra.ticket, Ok(vec!["old"])));
        assert!(p.results().is_empty());
        assert!(p.apply(rb.ticket, Ok(vec!["new"])));
        assert_eq!(p.results(), ["new"]);
    }

    #[test]
    /// What: Reset clears results and orphans the in-flight fetch
    ///
    /// - Input: Query dispatched, reset, then the outcome arrives
    /// - Output: Outcome discarded; query text and offset survive the reset
    fn pager_reset_orphans_inflight() {
        let mut p = pager();
        let r1 = p.new_query("q").expect("request");
        p.reset();
        assert!(!p.is_loading());
        assert!(!p.apply(r1.ticket, Ok(vec!["late"])));
        assert!(p.results().is_empty());
        assert_eq!(p.query_text(), "q");
        assert_eq!(p.window_start(), 1);
    }

    #[test]
    /// What: An empty appended page marks the end of the result stream
    ///
    /// - Input: Page 1 with records, page 2 empty, then another page attempt
    /// - Output: `end_reached` set and no further request emitted
    fn pager_empty_page_terminates() {
        let mut p = pager();
        let r1 = p.new_query("q").expect("request");
        assert!(p.apply(r1.ticket, Ok(vec!["a", "b", "c"])));
        let r2 = p.load_next_page().expect("request");
        assert!(p.apply(r2.ticket, Ok(Vec::new())));
        assert!(p.end_reached());
        assert!(p.last_error().is_none());
        assert!(p.load_next_page().is_none());
    }

    #[test]
    /// What: An empty first page is a normal result, not an error
    ///
    /// - Input: `new_query` resolving to zero records
    /// - Output: Empty results, no error, controller idle
    fn pager_empty_first_page_is_not_error() {
        let mut p = pager();
        let r1 = p.new_query("없는검색어").expect("request");
        assert!(p.apply(r1.ticket, Ok(Vec::new())));
        assert!(p.results().is_empty());
        assert!(p.last_error().is_none());
        assert!(!p.is_loading());
    }
}
