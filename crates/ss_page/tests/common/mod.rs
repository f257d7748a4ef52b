//! Shared fixtures: a scripted transport and a page that journals mutations.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use ss_core::{AnalysisRequest, Language, ServiceReply, SiteConfig};
use ss_io::wire::decode_reply;
use ss_io::{AnalysisTransport, TransportError};
use ss_page::{analysis_page, Display, ElementId, MemoryPage, Page, PageError};

pub type Journal = Rc<RefCell<Vec<String>>>;

/// Replies are consumed front to back; an exhausted script answers with a
/// network error.
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<ServiceReply, TransportError>>>,
    calls: Cell<usize>,
    seen: RefCell<Vec<AnalysisRequest>>,
    journal: Journal,
}

impl ScriptedTransport {
    pub fn new(journal: &Journal) -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
            calls: Cell::new(0),
            seen: RefCell::new(Vec::new()),
            journal: Rc::clone(journal),
        }
    }

    pub fn then(self, reply: Result<ServiceReply, TransportError>) -> Self {
        self.replies.borrow_mut().push_back(reply);
        self
    }

    /// Script a raw HTTP reply, decoded the same way the real transport does.
    pub fn then_http(self, status: u16, body: &str) -> Self {
        let reply = decode_reply(status, body.as_bytes());
        self.then(reply)
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn seen(&self) -> Vec<AnalysisRequest> {
        self.seen.borrow().clone()
    }
}

impl AnalysisTransport for ScriptedTransport {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<ServiceReply, TransportError> {
        self.calls.set(self.calls.get() + 1);
        self.seen.borrow_mut().push(request.clone());
        self.journal.borrow_mut().push("POST".into());
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("script exhausted".into())))
    }
}

/// `MemoryPage` that records submit-control and result mutations.
pub struct RecordingPage {
    pub inner: MemoryPage,
    journal: Journal,
}

impl RecordingPage {
    pub fn new(inner: MemoryPage, journal: &Journal) -> Self {
        Self { inner, journal: Rc::clone(journal) }
    }

    fn note(&self, entry: String) {
        self.journal.borrow_mut().push(entry);
    }
}

impl Page for RecordingPage {
    fn path(&self) -> &str {
        self.inner.path()
    }
    fn contains(&self, id: &ElementId) -> bool {
        self.inner.contains(id)
    }
    fn value(&self, id: &ElementId) -> Result<String, PageError> {
        self.inner.value(id)
    }
    fn set_value(&mut self, id: &ElementId, value: &str) -> Result<(), PageError> {
        self.inner.set_value(id, value)
    }
    fn text(&self, id: &ElementId) -> Result<String, PageError> {
        self.inner.text(id)
    }
    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), PageError> {
        self.note(format!("label {id}={text}"));
        self.inner.set_text(id, text)
    }
    fn is_disabled(&self, id: &ElementId) -> Result<bool, PageError> {
        self.inner.is_disabled(id)
    }
    fn set_disabled(&mut self, id: &ElementId, disabled: bool) -> Result<(), PageError> {
        self.note(format!("{} {id}", if disabled { "disable" } else { "enable" }));
        self.inner.set_disabled(id, disabled)
    }
    fn display(&self, id: &ElementId) -> Result<Display, PageError> {
        self.inner.display(id)
    }
    fn set_display(&mut self, id: &ElementId, display: Display) -> Result<(), PageError> {
        self.note(format!("display {id}={display:?}"));
        self.inner.set_display(id, display)
    }
    fn set_inner_html(&mut self, id: &ElementId, html: &str) -> Result<(), PageError> {
        self.inner.set_inner_html(id, html)
    }
    fn set_opacity(
        &mut self,
        id: &ElementId,
        opacity: f32,
        transition: Option<&str>,
    ) -> Result<(), PageError> {
        self.inner.set_opacity(id, opacity, transition)
    }
    fn set_class(&mut self, id: &ElementId, class: &str, on: bool) -> Result<(), PageError> {
        self.inner.set_class(id, class, on)
    }
    fn ids_with_class(&self, class: &str) -> Vec<ElementId> {
        self.inner.ids_with_class(class)
    }
    fn replace_body(&mut self, html: &str) {
        self.inner.replace_body(html)
    }
    fn navigate(&mut self, path: &str) {
        self.inner.navigate(path)
    }
    fn alert(&mut self, message: &str) {
        self.note(format!("alert {message}"));
        self.inner.alert(message)
    }
}

pub fn journal() -> Journal {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn en_page() -> MemoryPage {
    analysis_page("/analyze", Language::En)
}

/// Default site config with the page language matching `en_page`.
pub fn en_config() -> SiteConfig {
    SiteConfig { language: Language::En, ..SiteConfig::default() }
}

pub const SWIMMING: &str = r#"{
    "sport": "Swimming",
    "confidence": 87,
    "reason": "Calm, rhythmic, enjoys water",
    "additional_recommendations": [
        {"sport": "Running", "confidence": 62},
        {"sport": "Cycling", "confidence": 55}
    ]
}"#;

pub const CHESS: &str = r#"{"sport": "Chess", "confidence": 91}"#;

pub const TOO_SHORT: &str = r#"{"error": "Text too short"}"#;
