//! Input sanitisation for untrusted request bodies.
//!
//! Runs on the raw JSON object before it is decoded into a typed request, so
//! handlers and the domain only ever see cleaned text. Fields other than
//! `name` and `email` pass through untouched.

use scraper::Html;
use serde_json::{Map, Value};

const NAME_FIELD: &str = "name";
const EMAIL_FIELD: &str = "email";
const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

/// Result of sanitising a request body.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitisedInput {
    /// Cleaned copy of the input object.
    pub sanitised: Map<String, Value>,
    /// Whether markup was stripped from `name`.
    pub was_sanitised: bool,
}

/// Clean the user-facing text fields of a request body.
///
/// - `name` is trimmed and stripped of HTML tags and `<script>`/`<style>`
///   contents; `was_sanitised` is set when stripping changed it.
/// - `email` is trimmed and lowercased.
///
/// Missing or non-string fields are left as they are.
///
/// # Examples
/// ```
/// use food_orders::inbound::http::sanitiser::sanitise_ingredient_input;
/// use serde_json::{Value, json};
///
/// let Value::Object(raw) = json!({ "name": "  <b>Salt</b> ", "quantity": 5 }) else {
///     unreachable!()
/// };
/// let result = sanitise_ingredient_input(raw);
/// assert_eq!(result.sanitised.get("name"), Some(&json!("Salt")));
/// assert!(result.was_sanitised);
/// ```
#[must_use]
pub fn sanitise_ingredient_input(mut input: Map<String, Value>) -> SanitisedInput {
    let mut was_sanitised = false;

    if let Some(Value::String(name)) = input.get_mut(NAME_FIELD) {
        let trimmed = name.trim();
        let stripped = strip_html(trimmed);
        let cleaned = stripped.trim();
        was_sanitised = cleaned != trimmed;
        *name = cleaned.to_owned();
    }

    if let Some(Value::String(email)) = input.get_mut(EMAIL_FIELD) {
        *email = email.trim().to_lowercase();
    }

    SanitisedInput {
        sanitised: input,
        was_sanitised,
    }
}

/// Remove HTML tags, comments, and the bodies of raw-text elements.
///
/// The input is parsed as an HTML body fragment and only its text nodes are
/// kept, so quoted attributes and comments containing `>` cannot leak markup.
/// Character references are decoded.
#[must_use]
pub fn strip_html(input: &str) -> String {
    let fragment = Html::parse_fragment(input);
    fragment
        .root_element()
        .descendants()
        .filter(|node| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| RAW_TEXT_ELEMENTS.contains(&element.name()))
            })
        })
        .filter_map(|node| node.value().as_text().map(|text| &**text))
        .collect()
}
