//! Review carousel: cyclic index over the `.review` panels of the home page.

use tracing::debug;

use crate::dom::{ids, ElementId, Page};

/// Keys the carousel listens to; anything else is `Other`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    /// Map a `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Carousel {
    panels: Vec<ElementId>,
    current: usize,
}

impl Carousel {
    /// Carousel over `total` anonymous panels; `apply` is a no-op for these.
    pub fn new(total: usize) -> Self {
        Self {
            panels: (0..total).map(|i| ElementId::new(format!("review-{i}"))).collect(),
            current: 0,
        }
    }

    /// Collect `.review` panels in document order.
    pub fn from_page<P: Page + ?Sized>(page: &P) -> Self {
        Self { panels: page.ids_with_class(ids::REVIEW_CLASS), current: 0 }
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len();
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + self.len() - 1) % self.len();
        }
        self.current
    }

    /// Returns whether the key moved the carousel.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if self.is_empty() {
            return false;
        }
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Other => return false,
        };
        true
    }

    /// `"{current+1}/{total}"`, or `None` when there are no panels.
    pub fn counter_text(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("{}/{}", self.current + 1, self.len()))
    }

    /// Mark exactly the current panel `active` and refresh `#counter`.
    pub fn apply<P: Page + ?Sized>(&self, page: &mut P) {
        for (i, id) in self.panels.iter().enumerate() {
            if page.set_class(id, ids::ACTIVE_CLASS, i == self.current).is_err() {
                debug!(%id, "review panel missing");
            }
        }
        if let Some(text) = self.counter_text() {
            let _ = page.set_text(&ids::COUNTER, &text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::home_page;

    #[test]
    fn wraps_both_ways() {
        let mut c = Carousel::new(3);
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.counter_text().as_deref(), Some("2/3"));
    }

    #[test]
    fn empty_is_inert() {
        let mut c = Carousel::new(0);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert!(!c.handle_key(Key::ArrowRight));
        assert_eq!(c.counter_text(), None);
    }

    #[test]
    fn keys_map_from_dom_names() {
        let mut c = Carousel::new(2);
        assert!(c.handle_key(Key::from_dom("ArrowLeft")));
        assert_eq!(c.current(), 1);
        assert!(!c.handle_key(Key::from_dom("Enter")));
        assert_eq!(c.current(), 1);
    }

    #[test]
    fn apply_marks_single_active_panel() {
        let mut page = home_page("/", 3);
        let mut c = Carousel::from_page(&page);
        c.next();
        c.apply(&mut page);
        let active = page.ids_with_class(ids::ACTIVE_CLASS);
        assert_eq!(active, vec![ElementId::new("review-1")]);
        assert_eq!(page.text(&ids::COUNTER).unwrap(), "2/3");
    }
}
