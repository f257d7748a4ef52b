//! ss_render: pure, offline HTML for the analysis page.
//!
//! No DOM access and no I/O: callers hand in a decoded result (or a message)
//! and receive a fragment to inject. Static copy comes from the phrasebook,
//! so the same panel renders in Russian (default) or English.

pub mod phrases;
pub mod render_html;

use ss_core::Language;

pub use render_html::{
    esc, render_connection_error_panel, render_goodbye_view, render_rejection_panel,
    render_result_panel, HtmlBuilder,
};

/// Default label of the submit control.
pub fn submit_label(lang: Language) -> &'static str {
    phrases::t(lang, "submit")
}

/// Label shown on the submit control while a request is in flight.
pub fn progress_label(lang: Language) -> &'static str {
    phrases::t(lang, "in_progress")
}

/// Notice raised when the text field is empty after trimming.
pub fn validation_notice(lang: Language) -> &'static str {
    phrases::t(lang, "validation_empty")
}
