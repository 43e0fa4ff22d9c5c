//! Home view logic: fetch-random and save-current

use std::time::Instant;

use super::App;
use crate::types::{tick_banner, ApiEvent, Banner, Quote, QuotePayload};
use eframe::egui;
use tracing::debug;

/// State for the home screen. One `loading` flag covers both the fetch
/// and the save request; the buttons disable off it.
pub struct HomeView {
    pub quote: Option<Quote>,
    pub loading: bool,
    pub message: Option<Banner>,
    pub error: Option<Banner>,
    pub saved_visible: bool,
}

impl HomeView {
    pub fn new() -> Self {
        Self {
            quote: None,
            loading: false,
            message: None,
            error: None,
            saved_visible: false,
        }
    }

    pub fn can_save(&self) -> bool {
        self.quote.is_some() && !self.loading
    }

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
        self.message = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Quote, String>) {
        self.loading = false;
        match result {
            Ok(quote) => self.quote = Some(quote),
            Err(e) => {
                // A failed refresh leaves no stale quote behind
                self.quote = None;
                self.error = Some(Banner::error(e));
            }
        }
    }

    pub fn begin_save(&mut self) {
        self.loading = true;
        self.error = None;
        self.message = None;
    }

    pub fn finish_save(&mut self, result: Result<Quote, String>) {
        self.loading = false;
        match result {
            Ok(_) => self.message = Some(Banner::success("Quote Saved Successfully!")),
            Err(e) => self.error = Some(Banner::error(e)),
        }
    }

    /// Called when the authoring modal reports a created quote.
    pub fn quote_created(&mut self) {
        self.message = Some(Banner::success("Quote created successfully!"));
    }

    /// Expire banners. Returns true while any banner is still showing.
    pub fn tick(&mut self, now: Instant) -> bool {
        let msg = tick_banner(&mut self.message, now);
        let err = tick_banner(&mut self.error, now);
        msg || err
    }
}

impl App {
    pub fn fetch_quote(&mut self, ctx: &egui::Context) {
        if self.home.loading {
            return;
        }
        self.home.begin_fetch();

        let api = self.api.clone();
        let inbox = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.random().await.map_err(|e| e.to_string());
            inbox.lock().unwrap().push(ApiEvent::RandomFetched(result));
            ctx.request_repaint();
        });
    }

    pub fn save_current(&mut self, ctx: &egui::Context) {
        if !self.home.can_save() {
            return;
        }
        let Some(quote) = &self.home.quote else {
            return;
        };
        let payload = QuotePayload {
            text: quote.text.clone(),
            author: quote.author.clone(),
        };
        debug!(author = %payload.author, "Saving displayed quote");
        self.home.begin_save();

        let api = self.api.clone();
        let inbox = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.save(&payload).await.map_err(|e| e.to_string());
            inbox.lock().unwrap().push(ApiEvent::QuoteSaved(result));
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    fn quote(text: &str) -> Quote {
        Quote {
            id: None,
            text: text.to_string(),
            author: "Unknown".to_string(),
        }
    }

    #[test]
    fn test_fetch_success_replaces_quote() {
        let mut view = HomeView::new();
        view.quote = Some(quote("old"));
        view.begin_fetch();
        assert!(view.loading);
        view.finish_fetch(Ok(quote("new")));
        assert!(!view.loading);
        assert_eq!(view.quote.as_ref().unwrap().text, "new");
        assert!(view.error.is_none());
    }

    #[test]
    fn test_fetch_failure_clears_quote_and_sets_error() {
        let mut view = HomeView::new();
        view.quote = Some(quote("old"));
        view.begin_fetch();
        view.finish_fetch(Err("connection refused".to_string()));
        assert!(view.quote.is_none());
        assert_eq!(view.error.as_ref().unwrap().text, "connection refused");
    }

    #[test]
    fn test_save_success_banner_gone_after_three_seconds() {
        let mut view = HomeView::new();
        view.quote = Some(quote("q"));
        view.begin_save();
        view.finish_save(Ok(quote("q")));
        let shown_at = view.message.as_ref().unwrap().shown_at;

        assert!(view.tick(shown_at + Duration::from_secs(1)));
        assert!(view.message.is_some());

        view.tick(shown_at + Duration::from_millis(3100));
        assert!(view.message.is_none());
    }

    #[test]
    fn test_save_failure_keeps_displayed_quote() {
        let mut view = HomeView::new();
        view.quote = Some(quote("q"));
        view.begin_save();
        view.finish_save(Err("HTTP 500".to_string()));
        assert_eq!(view.quote.as_ref().unwrap().text, "q");
        assert!(view.error.is_some());
        assert!(view.message.is_none());
    }

    #[test]
    fn test_cannot_save_without_quote_or_while_loading() {
        let mut view = HomeView::new();
        assert!(!view.can_save());
        view.quote = Some(quote("q"));
        assert!(view.can_save());
        view.loading = true;
        assert!(!view.can_save());
    }
}
