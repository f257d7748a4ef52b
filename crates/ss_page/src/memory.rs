//! In-memory `Page` implementation plus the two page layouts the site serves.
//!
//! Used by the headless host and by tests. Navigation and body replacement
//! drop every element, the same way a real document unload does.

use std::collections::BTreeSet;

use ss_core::Language;

use crate::dom::{ids, Display, ElementId, Page};
use crate::PageError;

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
    pub inner_html: String,
    pub disabled: bool,
    pub display: Display,
    pub opacity: f32,
    pub transition: Option<String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            classes: BTreeSet::new(),
            text: String::new(),
            value: String::new(),
            inner_html: String::new(),
            disabled: false,
            display: Display::Block,
            opacity: 1.0,
            transition: None,
        }
    }
}

impl Element {
    pub fn input() -> Self {
        Self::default()
    }

    pub fn button(label: &str) -> Self {
        Self { text: label.to_string(), ..Self::default() }
    }

    pub fn hidden() -> Self {
        Self { display: Display::None, ..Self::default() }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryPage {
    path: String,
    elements: Vec<(ElementId, Element)>,
    body_html: Option<String>,
    alerts: Vec<String>,
    history: Vec<String>,
}

impl MemoryPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), ..Self::default() }
    }

    /// Append (or replace) an element; document order is insertion order.
    pub fn with(mut self, id: ElementId, el: Element) -> Self {
        self.insert(id, el);
        self
    }

    pub fn insert(&mut self, id: ElementId, el: Element) {
        match self.elements.iter_mut().find(|(k, _)| *k == id) {
            Some((_, slot)) => *slot = el,
            None => self.elements.push((id, el)),
        }
    }

    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let pos = self.elements.iter().position(|(k, _)| k == id)?;
        Some(self.elements.remove(pos).1)
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|(k, _)| k == id).map(|(_, e)| e)
    }

    /// Inner HTML of `id`, or `""` when absent.
    pub fn html_of(&self, id: &ElementId) -> &str {
        self.element(id).map(|e| e.inner_html.as_str()).unwrap_or_default()
    }

    pub fn body_html(&self) -> Option<&str> {
        self.body_html.as_deref()
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Paths navigated to, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn get(&self, id: &ElementId) -> Result<&Element, PageError> {
        self.element(id).ok_or_else(|| PageError::MissingElement(id.clone()))
    }

    fn get_mut(&mut self, id: &ElementId) -> Result<&mut Element, PageError> {
        self.elements
            .iter_mut()
            .find(|(k, _)| k == id)
            .map(|(_, e)| e)
            .ok_or_else(|| PageError::MissingElement(id.clone()))
    }
}

impl Page for MemoryPage {
    fn path(&self) -> &str {
        &self.path
    }

    fn contains(&self, id: &ElementId) -> bool {
        self.element(id).is_some()
    }

    fn value(&self, id: &ElementId) -> Result<String, PageError> {
        Ok(self.get(id)?.value.clone())
    }

    fn set_value(&mut self, id: &ElementId, value: &str) -> Result<(), PageError> {
        self.get_mut(id)?.value = value.to_string();
        Ok(())
    }

    fn text(&self, id: &ElementId) -> Result<String, PageError> {
        Ok(self.get(id)?.text.clone())
    }

    fn set_text(&mut self, id: &ElementId, text: &str) -> Result<(), PageError> {
        self.get_mut(id)?.text = text.to_string();
        Ok(())
    }

    fn is_disabled(&self, id: &ElementId) -> Result<bool, PageError> {
        Ok(self.get(id)?.disabled)
    }

    fn set_disabled(&mut self, id: &ElementId, disabled: bool) -> Result<(), PageError> {
        self.get_mut(id)?.disabled = disabled;
        Ok(())
    }

    fn display(&self, id: &ElementId) -> Result<Display, PageError> {
        Ok(self.get(id)?.display)
    }

    fn set_display(&mut self, id: &ElementId, display: Display) -> Result<(), PageError> {
        self.get_mut(id)?.display = display;
        Ok(())
    }

    fn set_inner_html(&mut self, id: &ElementId, html: &str) -> Result<(), PageError> {
        self.get_mut(id)?.inner_html = html.to_string();
        Ok(())
    }

    fn set_opacity(
        &mut self,
        id: &ElementId,
        opacity: f32,
        transition: Option<&str>,
    ) -> Result<(), PageError> {
        let el = self.get_mut(id)?;
        el.opacity = opacity;
        if let Some(t) = transition {
            el.transition = Some(t.to_string());
        }
        Ok(())
    }

    fn set_class(&mut self, id: &ElementId, class: &str, on: bool) -> Result<(), PageError> {
        let el = self.get_mut(id)?;
        if on {
            el.classes.insert(class.to_string());
        } else {
            el.classes.remove(class);
        }
        Ok(())
    }

    fn ids_with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|(_, e)| e.classes.contains(class))
            .map(|(k, _)| k.clone())
            .collect()
    }

    fn replace_body(&mut self, html: &str) {
        self.elements.clear();
        self.body_html = Some(html.to_string());
    }

    fn navigate(&mut self, path: &str) {
        self.elements.clear();
        self.body_html = None;
        self.path = path.to_string();
        self.history.push(path.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

// ------------------------- layouts -------------------------

/// The analysis page as served: form fields enabled, modal hidden, result empty.
pub fn analysis_page(path: &str, lang: Language) -> MemoryPage {
    MemoryPage::new(path)
        .with(ids::WARNING_MODAL, Element::hidden().with_class("modal"))
        .with(ids::ACCEPT_BUTTON, Element::button("OK"))
        .with(ids::DECLINE_BUTTON, Element::button("✕"))
        .with(ids::ANALYSIS_FORM, Element::default())
        .with(ids::REPORT_INPUT, Element::input())
        .with(ids::AGE_INPUT, Element::input())
        .with(ids::GENDER_INPUT, Element::input())
        .with(
            ids::ANALYZE_BUTTON,
            Element::button(ss_render::submit_label(lang)).with_class("analyze-button"),
        )
        .with(ids::RESULT, Element::hidden())
}

/// The home page with `reviews` carousel panels (`review-0` …) and its controls.
pub fn home_page(path: &str, reviews: usize) -> MemoryPage {
    let mut page = MemoryPage::new(path);
    for i in 0..reviews {
        let review = Element::default().with_class(ids::REVIEW_CLASS);
        page.insert(ElementId::new(format!("review-{i}")), review);
    }
    page.with(ids::PREV_BUTTON, Element::button("‹"))
        .with(ids::NEXT_BUTTON, Element::button("›"))
        .with(ids::COUNTER, Element::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements_are_reported() {
        let mut p = MemoryPage::new("/");
        assert_eq!(
            p.set_disabled(&ids::ANALYZE_BUTTON, true),
            Err(PageError::MissingElement(ids::ANALYZE_BUTTON))
        );
        assert!(!p.is_clickable(&ids::ANALYZE_BUTTON));
    }

    #[test]
    fn navigate_unloads_document() {
        let mut p = analysis_page("/analyze", Language::Ru);
        assert!(p.element_count() > 0);
        p.navigate("/goodbye");
        assert_eq!(p.path(), "/goodbye");
        assert_eq!(p.element_count(), 0);
        assert_eq!(p.history(), ["/goodbye".to_string()]);
    }

    #[test]
    fn class_queries_follow_document_order() {
        let p = home_page("/", 3);
        let names: Vec<_> =
            p.ids_with_class(ids::REVIEW_CLASS).iter().map(|i| i.to_string()).collect();
        assert_eq!(names, ["review-0", "review-1", "review-2"]);
    }
}
