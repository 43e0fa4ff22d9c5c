//! API event inbox - applies completed call results to view state

use super::App;
use crate::types::ApiEvent;

impl App {
    /// Drain the inbox and apply every completed call. Events for views
    /// that are no longer on screen still apply to their state; that is a
    /// defined no-op, never an error.
    pub fn poll_api_events(&mut self) {
        let drained: Vec<ApiEvent> = {
            let mut inbox = self.events.lock().unwrap();
            std::mem::take(&mut *inbox)
        };
        for event in drained {
            self.apply_event(event);
        }
    }

    pub(crate) fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::RandomFetched(result) => self.home.finish_fetch(result),
            ApiEvent::QuoteSaved(result) => self.home.finish_save(result),
            ApiEvent::QuoteCreated(result) => {
                if self.add_form.finish_submit(&result) {
                    self.show_add_modal = false;
                    self.home.quote_created();
                }
            }
            ApiEvent::SavedLoaded(result) => self.saved.finish_load(result),
            ApiEvent::QuoteDeleted { id, result } => self.saved.finish_delete(&id, result),
            ApiEvent::RandomSaved(result) => {
                if self.saved.finish_add_random(result) {
                    self.saved.needs_reload = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::QuoteApi;
    use crate::app::{AddQuoteForm, HomeView, SavedList};
    use crate::types::{Quote, Route, SavedRandom};
    use std::sync::{Arc, Mutex};

    fn test_app() -> App {
        App {
            api: QuoteApi::new("http://localhost:0/api/quotes"),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            events: Arc::new(Mutex::new(Vec::new())),
            route: Route::Home,
            home: HomeView::new(),
            saved: SavedList::new(),
            add_form: AddQuoteForm::new(),
            show_add_modal: false,
            logo_texture: None,
            initial_fetch_done: false,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir: std::env::temp_dir(),
            api_url_override: None,
        }
    }

    fn quote(id: &str) -> Quote {
        Quote {
            id: Some(id.to_string()),
            text: "text".to_string(),
            author: "author".to_string(),
        }
    }

    #[test]
    fn test_created_quote_closes_modal_and_notifies_home() {
        let mut app = test_app();
        app.show_add_modal = true;
        app.add_form.submitting = true;
        app.apply_event(ApiEvent::QuoteCreated(Ok(quote("1"))));
        assert!(!app.show_add_modal);
        assert_eq!(
            app.home.message.as_ref().unwrap().text,
            "Quote created successfully!"
        );
    }

    #[test]
    fn test_failed_creation_leaves_modal_open() {
        let mut app = test_app();
        app.show_add_modal = true;
        app.add_form.text = "keep".to_string();
        app.add_form.submitting = true;
        app.apply_event(ApiEvent::QuoteCreated(Err("boom".to_string())));
        assert!(app.show_add_modal);
        assert_eq!(app.add_form.text, "keep");
        assert!(app.home.message.is_none());
    }

    #[test]
    fn test_random_saved_schedules_reload() {
        let mut app = test_app();
        app.apply_event(ApiEvent::RandomSaved(Ok(SavedRandom {
            quote: quote("9"),
            message: None,
        })));
        assert!(app.saved.needs_reload);
    }

    #[test]
    fn test_events_for_hidden_views_are_silent_noops() {
        let mut app = test_app();
        // Saved list not visible, list event still applies harmlessly
        app.apply_event(ApiEvent::SavedLoaded(Ok(vec![quote("1")])));
        assert_eq!(app.saved.quotes.len(), 1);
        // Delete confirmation for an id that is no longer displayed
        app.apply_event(ApiEvent::QuoteDeleted {
            id: "404".to_string(),
            result: Ok(()),
        });
        assert_eq!(app.saved.quotes.len(), 1);
    }
}
