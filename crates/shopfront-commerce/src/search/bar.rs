//! Search bar controller: query text, suggestion dropdown, delayed hide.
//!
//! The controller never sleeps. The host passes the current [`Instant`]
//! into [`SearchBar::on_blur`] and calls [`SearchBar::tick`] from its event
//! loop; a pending hide fires on the first tick at or after its deadline.

use crate::catalog::Product;
use crate::config::SearchBarConfig;
use crate::ids::ProductId;
use crate::navigation::{Navigator, Route};
use crate::search::listing::pluralize;
use crate::search::{suggest_with_limit, Suggestion, SUGGESTION_LIMIT};
use std::time::{Duration, Instant};

/// A single cancellable delayed hide.
///
/// Scheduling while a hide is pending replaces it, so at most one is ever
/// outstanding.
#[derive(Debug, Clone)]
pub struct HideTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl HideTimer {
    /// Create an idle timer.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule a hide `delay` after `now`, superseding any pending one.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the pending hide. Returns true if one was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    /// Fire if due. Returns true exactly once per scheduled hide.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Check if a hide is pending.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

}

/// Search input with a live suggestion dropdown.
#[derive(Debug, Clone)]
pub struct SearchBar {
    config: SearchBarConfig,
    query: String,
    suggestions: Vec<Suggestion>,
    visible: bool,
    hide_timer: HideTimer,
}

impl SearchBar {
    /// Create an empty search bar.
    ///
    /// A configured `suggestion_limit` above [`SUGGESTION_LIMIT`] is clamped.
    pub fn new(mut config: SearchBarConfig) -> Self {
        config.suggestion_limit = config.suggestion_limit.min(SUGGESTION_LIMIT);
        let hide_timer = HideTimer::new(config.hide_delay());
        Self {
            config,
            query: String::new(),
            suggestions: Vec::new(),
            visible: false,
            hide_timer,
        }
    }

    /// Keystroke: replace the query text and recompute suggestions.
    pub fn on_input(&mut self, text: impl Into<String>, products: &[Product]) {
        self.cancel_pending_hide();
        self.query = text.into();

        if self.query.trim().is_empty() {
            self.suggestions.clear();
            self.visible = false;
            return;
        }

        self.suggestions = suggest_with_limit(products, &self.query, self.config.suggestion_limit)
            .into_iter()
            .map(Suggestion::from)
            .collect();
        self.visible = true;
    }

    /// Input focused: re-show the dropdown if there is text.
    pub fn on_focus(&mut self) {
        self.cancel_pending_hide();
        if !self.query.trim().is_empty() {
            self.visible = true;
        }
    }

    /// Input blurred: hide after the grace delay unless something intervenes.
    pub fn on_blur(&mut self, now: Instant) {
        self.hide_timer.schedule(now);
        tracing::trace!(delay_ms = self.config.hide_delay_ms, "scheduled suggestion hide");
    }

    /// Advance time. Returns true if a pending hide fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.hide_timer.poll(now) {
            self.visible = false;
            tracing::trace!("suggestion dropdown hidden after blur");
            true
        } else {
            false
        }
    }

    /// A suggestion was clicked: go to that product and reset.
    pub fn on_suggestion_click(&mut self, id: ProductId, navigator: &mut impl Navigator) {
        self.cancel_pending_hide();
        navigator.navigate(Route::ProductDetail(id));
        self.reset();
    }

    /// Form submitted (Enter or button).
    ///
    /// A blank query does nothing and returns false. Otherwise navigates to
    /// the filtered listing, resets, and returns true.
    pub fn on_submit(&mut self, navigator: &mut impl Navigator) -> bool {
        let term = self.query.trim();
        if term.is_empty() {
            return false;
        }
        let route = Route::search(term);

        self.cancel_pending_hide();
        tracing::debug!(path = %route, "search submitted");
        navigator.navigate(route);
        self.reset();
        true
    }

    /// Current input text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current suggestions.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Whether the dropdown area is open.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the dropdown lists suggestions.
    pub fn shows_suggestions(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    /// Whether the dropdown shows the "no results" panel.
    pub fn shows_no_results(&self) -> bool {
        self.visible && !self.query.is_empty() && self.suggestions.is_empty()
    }

    /// Check if a blur hide is pending.
    pub fn has_pending_hide(&self) -> bool {
        self.hide_timer.is_pending()
    }

    /// Dropdown header, e.g. `Found 3 products`.
    pub fn dropdown_header(&self) -> String {
        format!("Found {}", pluralize(self.suggestions.len(), "product"))
    }

    /// Dropdown footer hint.
    pub fn dropdown_footer(&self) -> String {
        format!("Press Enter to see all results for \"{}\"", self.query)
    }

    /// Text of the "no results" panel.
    pub fn no_results_message(&self) -> String {
        format!("No products found for \"{}\"", self.query)
    }

    fn cancel_pending_hide(&mut self) {
        if self.hide_timer.cancel() {
            tracing::trace!("cancelled pending suggestion hide");
        }
    }

    fn reset(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.visible = false;
    }
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new(SearchBarConfig::default())
    }
}
