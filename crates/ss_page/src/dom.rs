//! DOM collaborator contract.
//!
//! Components never hold element references; they address elements by
//! stable id through `Page` and treat a missing element as
//! `PageError::MissingElement`, which callers degrade to a no-op.

use std::borrow::Cow;
use std::fmt;

use crate::PageError;

/// Stable element identifier (the `id` attribute).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(Cow<'static, str>);

impl ElementId {
    pub const fn from_static(s: &'static str) -> Self {
        Self(Cow::Borrowed(s))
    }

    pub fn new(s: impl Into<String>) -> Self {
        Self(Cow::Owned(s.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ids the analysis and home pages are rendered with.
pub mod ids {
    use super::ElementId;

    pub const ANALYSIS_FORM: ElementId = ElementId::from_static("analysisForm");
    pub const REPORT_INPUT: ElementId = ElementId::from_static("reportInput");
    pub const AGE_INPUT: ElementId = ElementId::from_static("ageInput");
    pub const GENDER_INPUT: ElementId = ElementId::from_static("genderInput");
    pub const ANALYZE_BUTTON: ElementId = ElementId::from_static("analyzeButton");
    pub const RESULT: ElementId = ElementId::from_static("result");

    pub const WARNING_MODAL: ElementId = ElementId::from_static("warningModal");
    pub const ACCEPT_BUTTON: ElementId = ElementId::from_static("acceptBtn");
    pub const DECLINE_BUTTON: ElementId = ElementId::from_static("declineBtn");

    pub const PREV_BUTTON: ElementId = ElementId::from_static("prevBtn");
    pub const NEXT_BUTTON: ElementId = ElementId::from_static("nextBtn");
    pub const COUNTER: ElementId = ElementId::from_static("counter");

    /// Class (not id) carried by each review panel.
    pub const REVIEW_CLASS: &str = "review";
    /// Class toggled on the visible review panel.
    pub const ACTIVE_CLASS: &str = "active";
}

/// CSS `display` values the controller uses.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Display {
    #[default]
    Block,
    Flex,
    None,
}

/// Minimal mutable view of a rendered page.
pub trait Page {
    /// Current navigation path.
    fn path(&self) -> &str;

    fn contains(&self, id: &ElementId) -> bool;

    fn value(&self, id: &ElementId) -> Result<String, PageError>;
    fn set_value(&mut self, id: &ElementId, value: &str) -> Result<(), PageError>;

    /// `textContent`.
    fn text(&self, id: &ElementId) -> Result<String, PageError>;
    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), PageError>;

    fn is_disabled(&self, id: &ElementId) -> Result<bool, PageError>;
    fn set_disabled(&mut self, id: &ElementId, disabled: bool) -> Result<(), PageError>;

    fn display(&self, id: &ElementId) -> Result<Display, PageError>;
    fn set_display(&mut self, id: &ElementId, display: Display) -> Result<(), PageError>;

    fn set_inner_html(&mut self, id: &ElementId, html: &str) -> Result<(), PageError>;

    /// Set `opacity`, optionally with a CSS `transition` value.
    fn set_opacity(
        &mut self,
        id: &ElementId,
        opacity: f32,
        transition: Option<&str>,
    ) -> Result<(), PageError>;

    fn set_class(&mut self, id: &ElementId, class: &str, on: bool) -> Result<(), PageError>;

    /// Ids of elements carrying `class`, in document order.
    fn ids_with_class(&self, class: &str) -> Vec<ElementId>;

    /// Replace the whole body; every existing element is gone afterwards.
    fn replace_body(&mut self, html: &str);

    /// Leave the current document for `path`.
    fn navigate(&mut self, path: &str);

    /// Blocking user notice (`alert`).
    fn alert(&mut self, message: &str);

    /// Clicking is only possible on present, enabled elements.
    fn is_clickable(&self, id: &ElementId) -> bool {
        matches!(self.is_disabled(id), Ok(false))
    }
}
