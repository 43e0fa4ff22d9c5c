//! Common types: the normalized quote record, response-shape parsing,
//! timed banners, routes and cross-thread API events.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// A quote as the rest of the app sees it. Backends disagree on field
/// names, so this is only ever produced by [`Quote::from_value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Backend-assigned identifier. `None` while the quote is ephemeral
    /// (fetched but not yet saved).
    pub id: Option<String>,
    pub text: String,
    pub author: String,
}

/// Raw wire shape covering every field name the backends use.
#[derive(Debug, Default, Deserialize)]
struct RawQuote {
    id: Option<Value>,
    q: Option<String>,
    text: Option<String>,
    quote: Option<String>,
    body: Option<String>,
    a: Option<String>,
    author: Option<String>,
    by: Option<String>,
}

impl Quote {
    /// Normalize one backend object into a `Quote`. Field fallback chains:
    /// `q`/`text`/`quote`/`body` for the text, `a`/`author`/`by` for the
    /// author (blank or absent author becomes "Unknown").
    pub fn from_value(value: &Value) -> Quote {
        let raw: RawQuote = serde_json::from_value(value.clone()).unwrap_or_else(|e| {
            warn!(error = %e, "Unrecognized quote shape, using empty record");
            RawQuote::default()
        });

        let text = [raw.q, raw.text, raw.quote, raw.body]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .unwrap_or_default();

        let author = [raw.a, raw.author, raw.by]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "Unknown".to_string());

        let id = raw.id.and_then(|v| match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        });

        Quote { id, text, author }
    }

    /// Parse a random-quote response: a single object, or an array whose
    /// first element is used.
    pub fn from_response(value: &Value) -> Quote {
        match value {
            Value::Array(items) => Quote::from_value(items.first().unwrap_or(&Value::Null)),
            other => Quote::from_value(other),
        }
    }

    /// Parse a collection response: a raw array, or an object wrapping the
    /// array under `quotes`. Anything else yields an empty collection.
    pub fn list_from_response(value: &Value) -> Vec<Quote> {
        let items = match value {
            Value::Array(items) => items.as_slice(),
            Value::Object(map) => match map.get("quotes") {
                Some(Value::Array(items)) => items.as_slice(),
                _ => {
                    warn!(shape = %shape_name(value), "Unexpected collection shape, treating as empty");
                    &[]
                }
            },
            other => {
                warn!(shape = %shape_name(other), "Unexpected collection shape, treating as empty");
                &[]
            }
        };
        items.iter().map(Quote::from_value).collect()
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Body sent to the save endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QuotePayload {
    pub text: String,
    pub author: String,
}

/// Result of the server-side fetch-and-save operation.
#[derive(Debug, Clone)]
pub struct SavedRandom {
    pub quote: Quote,
    pub message: Option<String>,
}

/// A transient status banner. Carries its creation instant so expiry is
/// decided by the update loop, not by a timer that could outlive the view.
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub(crate) shown_at: Instant,
    pub(crate) ttl: Duration,
}

pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(3);
pub const ERROR_BANNER_TTL: Duration = Duration::from_secs(5);

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self::with_ttl(text, SUCCESS_BANNER_TTL)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_ttl(text, ERROR_BANNER_TTL)
    }

    fn with_ttl(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= self.ttl
    }
}

/// Drop an expired banner in place. Returns true while a banner is still
/// showing, so callers know to keep repainting.
pub fn tick_banner(slot: &mut Option<Banner>, now: Instant) -> bool {
    if slot.as_ref().is_some_and(|b| b.expired_at(now)) {
        *slot = None;
    }
    slot.is_some()
}

/// Top-level screens. Both routes render the same saved-list state; only
/// the close behavior differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Saved,
}

/// Completed API call results, pushed from runtime tasks into the app's
/// inbox and drained by the update loop.
#[derive(Debug)]
pub enum ApiEvent {
    RandomFetched(Result<Quote, String>),
    QuoteSaved(Result<Quote, String>),
    QuoteCreated(Result<Quote, String>),
    SavedLoaded(Result<Vec<Quote>, String>),
    QuoteDeleted {
        id: String,
        result: Result<(), String>,
    },
    RandomSaved(Result<SavedRandom, String>),
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    mod normalize {
        use super::*;

        #[test]
        fn test_short_field_names() {
            let q = Quote::from_value(&json!({"q": "Be yourself.", "a": "Oscar Wilde"}));
            assert_eq!(q.text, "Be yourself.");
            assert_eq!(q.author, "Oscar Wilde");
            assert_eq!(q.id, None);
        }

        #[test]
        fn test_long_field_names() {
            let q = Quote::from_value(&json!({"quote": "Stay curious.", "by": "Anon", "id": 7}));
            assert_eq!(q.text, "Stay curious.");
            assert_eq!(q.author, "Anon");
            assert_eq!(q.id, Some("7".to_string()));
        }

        #[test]
        fn test_text_fallback_order() {
            let q = Quote::from_value(&json!({"q": "", "text": "second", "quote": "third"}));
            assert_eq!(q.text, "second");

            let q = Quote::from_value(&json!({"body": "last resort"}));
            assert_eq!(q.text, "last resort");
        }

        #[test]
        fn test_missing_author_defaults_to_unknown() {
            let q = Quote::from_value(&json!({"text": "hello"}));
            assert_eq!(q.author, "Unknown");
        }

        #[test]
        fn test_blank_author_defaults_to_unknown() {
            let q = Quote::from_value(&json!({"text": "hello", "author": "   "}));
            assert_eq!(q.author, "Unknown");
        }

        #[test]
        fn test_string_id_kept_verbatim() {
            let q = Quote::from_value(&json!({"text": "x", "id": "abc-123"}));
            assert_eq!(q.id, Some("abc-123".to_string()));
        }
    }

    mod response_shapes {
        use super::*;

        #[test]
        fn test_random_single_object() {
            let q = Quote::from_response(&json!({"q": "Be yourself.", "a": "Oscar Wilde"}));
            assert_eq!(q.text, "Be yourself.");
            assert_eq!(q.author, "Oscar Wilde");
        }

        #[test]
        fn test_random_array_uses_first_element() {
            let q = Quote::from_response(&json!([
                {"text": "Stay curious.", "author": "Anon"},
                {"text": "ignored", "author": "ignored"},
            ]));
            assert_eq!(q.text, "Stay curious.");
            assert_eq!(q.author, "Anon");
        }

        #[test]
        fn test_collection_wrapped_object() {
            let list = Quote::list_from_response(&json!({"quotes": [
                {"text": "one", "id": 1},
                {"text": "two", "id": 2},
            ]}));
            assert_eq!(list.len(), 2);
            assert_eq!(list[1].text, "two");
        }

        #[test]
        fn test_collection_raw_array() {
            let list = Quote::list_from_response(&json!([{"text": "one", "id": 1}]));
            assert_eq!(list.len(), 1);
        }

        #[test]
        fn test_collection_unexpected_shape_is_empty() {
            assert!(Quote::list_from_response(&json!({})).is_empty());
            assert!(Quote::list_from_response(&json!("nope")).is_empty());
            assert!(Quote::list_from_response(&json!(null)).is_empty());
        }
    }

    mod banners {
        use super::*;

        #[test]
        fn test_success_banner_expires_after_three_seconds() {
            let b = Banner::success("saved");
            assert!(!b.expired_at(b.shown_at + Duration::from_millis(2900)));
            assert!(b.expired_at(b.shown_at + Duration::from_millis(3000)));
        }

        #[test]
        fn test_error_banner_expires_after_five_seconds() {
            let b = Banner::error("failed");
            assert!(!b.expired_at(b.shown_at + Duration::from_millis(4900)));
            assert!(b.expired_at(b.shown_at + Duration::from_millis(5000)));
        }

        #[test]
        fn test_tick_clears_expired_banner() {
            let b = Banner::success("saved");
            let deadline = b.shown_at + Duration::from_secs(4);
            let mut slot = Some(b);
            assert!(!tick_banner(&mut slot, deadline));
            assert!(slot.is_none());
        }
    }
}
