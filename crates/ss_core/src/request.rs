//! Analysis request model and form-field parsing.
//!
//! A request is built fresh from the raw form fields at submit time and is
//! never mutated afterwards. Only the text is validated here; age/gender are
//! passed through for the service to judge.

use crate::errors::CoreError;

/// Raw field values as read from the page (absent elements → `None`).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormInput {
    pub text: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnalysisRequest {
    text: String,
    age: Option<u32>,
    gender: Option<String>,
}

impl AnalysisRequest {
    /// Build from raw fields. Fails only on empty (post-trim) text.
    pub fn from_form(input: &FormInput) -> Result<Self, CoreError> {
        let text = input.text.as_deref().map(str::trim).unwrap_or_default();
        if text.is_empty() {
            return Err(CoreError::EmptyText);
        }
        Ok(Self {
            text: text.to_string(),
            age: input.age.as_deref().and_then(parse_age),
            gender: input.gender.as_deref().and_then(non_empty),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn age(&self) -> Option<u32> {
        self.age
    }

    pub fn gender(&self) -> Option<&str> {
        self.gender.as_deref()
    }
}

/// Leading-integer parse: "27", " 27 ", "27 years" → 27; anything else → None.
fn parse_age(raw: &str) -> Option<u32> {
    let s = raw.trim();
    let digits_end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..digits_end].parse::<u32>().ok()
}

fn non_empty(raw: &str) -> Option<String> {
    let s = raw.trim();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
