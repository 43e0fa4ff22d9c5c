//! Saved-collection logic: load, delete, add-random

use std::time::Instant;

use super::App;
use crate::types::{tick_banner, ApiEvent, Banner, Quote, SavedRandom};
use eframe::egui;
use tracing::{debug, info};

/// State for the saved-quotes list. The collection is refreshed wholesale
/// from the backend after "Add Random"; delete prunes locally by id.
pub struct SavedList {
    pub quotes: Vec<Quote>,
    pub loading: bool,
    /// Timed success banner ("Add Random" confirmation)
    pub message: Option<Banner>,
    /// Sticky error, cleared by the next operation
    pub error: Option<String>,
    /// Set on show transitions and after add-random; the update loop
    /// turns it into a load
    pub needs_reload: bool,
}

impl SavedList {
    pub fn new() -> Self {
        Self {
            quotes: Vec::new(),
            loading: false,
            message: None,
            error: None,
            needs_reload: false,
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_load(&mut self, result: Result<Vec<Quote>, String>) {
        self.loading = false;
        match result {
            Ok(quotes) => self.quotes = quotes,
            Err(e) => {
                self.quotes.clear();
                self.error = Some(e);
            }
        }
    }

    pub fn begin_add_random(&mut self) {
        self.loading = true;
        self.error = None;
        self.message = None;
    }

    /// Returns true when the list should be reloaded from the backend.
    pub fn finish_add_random(&mut self, result: Result<SavedRandom, String>) -> bool {
        self.loading = false;
        match result {
            Ok(saved) => {
                debug!(author = %saved.quote.author, "Random quote persisted");
                let text = saved
                    .message
                    .unwrap_or_else(|| "New quote added!".to_string());
                self.message = Some(Banner::success(text));
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    /// A confirmed delete prunes exactly the matching id; a failed one
    /// leaves the item in place.
    pub fn finish_delete(&mut self, id: &str, result: Result<(), String>) {
        match result {
            Ok(()) => self.quotes.retain(|q| q.id.as_deref() != Some(id)),
            Err(e) => self.error = Some(e),
        }
    }

    /// Expire the timed banner. Returns true while it is still showing.
    pub fn tick(&mut self, now: Instant) -> bool {
        tick_banner(&mut self.message, now)
    }
}

impl App {
    pub fn load_saved(&mut self, ctx: &egui::Context) {
        self.saved.begin_load();

        let api = self.api.clone();
        let inbox = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.saved().await.map_err(|e| e.to_string());
            inbox.lock().unwrap().push(ApiEvent::SavedLoaded(result));
            ctx.request_repaint();
        });
    }

    pub fn delete_quote(&mut self, ctx: &egui::Context, id: String) {
        debug!(%id, "Deleting saved quote");

        let api = self.api.clone();
        let inbox = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.delete(&id).await.map_err(|e| e.to_string());
            inbox
                .lock()
                .unwrap()
                .push(ApiEvent::QuoteDeleted { id, result });
            ctx.request_repaint();
        });
    }

    pub fn add_random_quote(&mut self, ctx: &egui::Context) {
        if self.saved.loading {
            return;
        }
        info!("Adding random quote server-side");
        self.saved.begin_add_random();

        let api = self.api.clone();
        let inbox = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.save_random().await.map_err(|e| e.to_string());
            inbox.lock().unwrap().push(ApiEvent::RandomSaved(result));
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn saved_quote(id: &str, text: &str) -> Quote {
        Quote {
            id: Some(id.to_string()),
            text: text.to_string(),
            author: "Unknown".to_string(),
        }
    }

    #[test]
    fn test_delete_removes_exactly_the_matching_id() {
        let mut list = SavedList::new();
        list.quotes = vec![
            saved_quote("1", "one"),
            saved_quote("2", "two"),
            saved_quote("3", "three"),
        ];
        list.finish_delete("2", Ok(()));
        let ids: Vec<_> = list.quotes.iter().filter_map(|q| q.id.as_deref()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_failed_delete_keeps_the_item() {
        let mut list = SavedList::new();
        list.quotes = vec![saved_quote("1", "one")];
        list.finish_delete("1", Err("HTTP 500".to_string()));
        assert_eq!(list.quotes.len(), 1);
        assert!(list.error.is_some());
    }

    #[test]
    fn test_load_replaces_collection_wholesale() {
        let mut list = SavedList::new();
        list.quotes = vec![saved_quote("stale", "stale")];
        list.begin_load();
        list.finish_load(Ok(vec![saved_quote("1", "one"), saved_quote("2", "two")]));
        assert_eq!(list.quotes.len(), 2);
        assert_eq!(list.quotes[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn test_load_failure_clears_collection() {
        let mut list = SavedList::new();
        list.quotes = vec![saved_quote("1", "one")];
        list.begin_load();
        list.finish_load(Err("connection refused".to_string()));
        assert!(list.quotes.is_empty());
        assert!(list.error.is_some());
    }

    #[test]
    fn test_add_random_requests_reload_and_final_state_is_the_reload() {
        let mut list = SavedList::new();
        list.begin_add_random();

        // Whatever the random-save endpoint returned is not appended...
        let reload = list.finish_add_random(Ok(SavedRandom {
            quote: saved_quote("99", "from random-save"),
            message: Some("Added!".to_string()),
        }));
        assert!(reload);
        assert!(list.quotes.is_empty());
        assert_eq!(list.message.as_ref().unwrap().text, "Added!");

        // ...the collection is exactly what the list endpoint returns.
        list.begin_load();
        list.finish_load(Ok(vec![saved_quote("1", "one")]));
        assert_eq!(list.quotes.len(), 1);
        assert_eq!(list.quotes[0].id.as_deref(), Some("1"));
    }

    #[test]
    fn test_add_random_failure_does_not_reload() {
        let mut list = SavedList::new();
        list.begin_add_random();
        let reload = list.finish_add_random(Err("HTTP 502".to_string()));
        assert!(!reload);
        assert!(list.message.is_none());
        assert!(list.error.is_some());
    }

    #[test]
    fn test_add_random_default_message() {
        let mut list = SavedList::new();
        list.finish_add_random(Ok(SavedRandom {
            quote: saved_quote("5", "x"),
            message: None,
        }));
        assert_eq!(list.message.as_ref().unwrap().text, "New quote added!");
    }
}
