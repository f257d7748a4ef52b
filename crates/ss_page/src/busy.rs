//! Scoped "control busy" guard.
//!
//! Acquiring disables the control and swaps its label; dropping restores
//! both, on every exit path of the request cycle including a cancelled
//! future. The page is reached through the guard while it is held.

use tracing::debug;

use crate::dom::{ElementId, Page};

pub struct BusyControl<'p, P: Page + ?Sized> {
    page: &'p mut P,
    control: ElementId,
    original_label: String,
}

impl<'p, P: Page + ?Sized> BusyControl<'p, P> {
    /// `fallback_label` is restored when the control had no label of its own.
    pub fn acquire(
        page: &'p mut P,
        control: ElementId,
        busy_label: &str,
        fallback_label: &str,
    ) -> Self {
        let original_label = page
            .text(&control)
            .ok()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| fallback_label.to_string());
        if page.set_disabled(&control, true).is_err() {
            debug!(%control, "busy control absent; nothing to disable");
        }
        let _ = page.set_text(&control, busy_label);
        Self { page, control, original_label }
    }

    pub fn page(&mut self) -> &mut P {
        &mut *self.page
    }

    pub fn original_label(&self) -> &str {
        &self.original_label
    }
}

impl<P: Page + ?Sized> Drop for BusyControl<'_, P> {
    fn drop(&mut self) {
        let _ = self.page.set_disabled(&self.control, false);
        let _ = self.page.set_text(&self.control, &self.original_label);
    }
}
