//! Authoring modal logic (the "Create Quote" form)

use super::App;
use crate::types::{ApiEvent, Quote, QuotePayload};
use eframe::egui;
use tracing::debug;

/// Controlled form state for the add-quote modal.
pub struct AddQuoteForm {
    pub text: String,
    pub author: String,
    /// Inline validation or submit error
    pub error: Option<String>,
    pub submitting: bool,
}

impl AddQuoteForm {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            author: String::new(),
            error: None,
            submitting: false,
        }
    }

    /// Validate the form. Blank text is rejected before any network call;
    /// blank author becomes "Unknown".
    pub fn payload(&self) -> Result<QuotePayload, &'static str> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err("Quote text is required");
        }
        let author = self.author.trim();
        Ok(QuotePayload {
            text: text.to_string(),
            author: if author.is_empty() {
                "Unknown".to_string()
            } else {
                author.to_string()
            },
        })
    }

    /// Apply the save result. On success the fields reset and the caller
    /// closes the modal; on failure the entered text stays for retry.
    pub fn finish_submit(&mut self, result: &Result<Quote, String>) -> bool {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.reset();
                true
            }
            Err(e) => {
                self.error = Some(e.clone());
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.text.clear();
        self.author.clear();
        self.error = None;
    }
}

impl App {
    pub fn open_add_modal(&mut self) {
        self.show_add_modal = true;
    }

    /// Cancel/close always resets the form, whether or not a request is
    /// still in flight.
    pub fn close_add_modal(&mut self) {
        self.show_add_modal = false;
        self.add_form.reset();
        self.add_form.submitting = false;
    }

    pub fn submit_new_quote(&mut self, ctx: &egui::Context) {
        if self.add_form.submitting {
            return;
        }
        let payload = match self.add_form.payload() {
            Ok(payload) => payload,
            Err(msg) => {
                self.add_form.error = Some(msg.to_string());
                return;
            }
        };
        debug!(author = %payload.author, "Creating quote");
        self.add_form.submitting = true;
        self.add_form.error = None;

        let api = self.api.clone();
        let inbox = self.events.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = api.save(&payload).await.map_err(|e| e.to_string());
            inbox.lock().unwrap().push(ApiEvent::QuoteCreated(result));
            ctx.request_repaint();
        });
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_blank_text_is_rejected() {
        let mut form = AddQuoteForm::new();
        assert_eq!(form.payload(), Err("Quote text is required"));

        form.text = "   \t ".to_string();
        assert_eq!(form.payload(), Err("Quote text is required"));
    }

    #[test]
    fn test_blank_author_becomes_unknown() {
        let mut form = AddQuoteForm::new();
        form.text = "Be yourself.".to_string();
        let payload = form.payload().unwrap();
        assert_eq!(payload.author, "Unknown");

        form.author = "  ".to_string();
        assert_eq!(form.payload().unwrap().author, "Unknown");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let mut form = AddQuoteForm::new();
        form.text = "  Stay curious.  ".to_string();
        form.author = " Anon ".to_string();
        let payload = form.payload().unwrap();
        assert_eq!(payload.text, "Stay curious.");
        assert_eq!(payload.author, "Anon");
    }

    #[test]
    fn test_successful_submit_resets_fields() {
        let mut form = AddQuoteForm::new();
        form.text = "x".to_string();
        form.author = "y".to_string();
        form.submitting = true;
        let created = form.finish_submit(&Ok(Quote {
            id: Some("1".to_string()),
            text: "x".to_string(),
            author: "y".to_string(),
        }));
        assert!(created);
        assert!(form.text.is_empty());
        assert!(form.author.is_empty());
        assert!(!form.submitting);
    }

    #[test]
    fn test_failed_submit_keeps_entered_text() {
        let mut form = AddQuoteForm::new();
        form.text = "keep me".to_string();
        form.submitting = true;
        let created = form.finish_submit(&Err("Quote text is required".to_string()));
        assert!(!created);
        assert_eq!(form.text, "keep me");
        assert_eq!(form.error.as_deref(), Some("Quote text is required"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut form = AddQuoteForm::new();
        form.text = "x".to_string();
        form.author = "y".to_string();
        form.error = Some("e".to_string());
        form.reset();
        assert!(form.text.is_empty() && form.author.is_empty() && form.error.is_none());
    }
}
