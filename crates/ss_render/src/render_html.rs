// crates/ss_render/src/render_html.rs
//
// HTML fragments injected into the page's result container (and the goodbye
// body). Fragment order is fixed: header → primary → alternatives.
// Every server-provided string goes through `esc`.

use std::fmt::Write as _;

use ss_core::{AnalysisResult, Language};

use crate::phrases::t;

// ------------------------- formatting helpers -------------------------

/// Escape text for HTML (minimal, deterministic).
pub fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

// ------------------------- fragment builder -------------------------

pub struct HtmlBuilder {
    lang: Language,
    buf: String,
}

impl HtmlBuilder {
    pub fn new(lang: Language) -> Self {
        Self { lang, buf: String::with_capacity(2 * 1024) }
    }

    pub fn finish(self) -> String {
        self.buf
    }

    /// `<div class="result-header">` with an icon span of `icon_class` and a
    /// bold title.
    pub fn header(&mut self, icon_class: &str, icon: &str, title_key: &str) {
        let _ = write!(
            self.buf,
            "<div class=\"result-header\">\
             <span class=\"{icon_class}\">{icon}</span>\
             <strong>{}</strong></div>",
            esc(t(self.lang, title_key))
        );
    }

    pub fn primary(&mut self, r: &AnalysisResult) {
        let _ = write!(
            self.buf,
            "<h3>🎯 {}</h3>\
             <div class=\"main-recommendation\">\
             <div class=\"sport-name\">{}</div>\
             <div class=\"confidence\">{}: {}</div>",
            esc(t(self.lang, "primary")),
            esc(&r.sport),
            esc(t(self.lang, "confidence")),
            r.confidence
        );
        if let Some(reason) = &r.reason {
            let _ = write!(self.buf, "<div class=\"reason\">{}</div>", esc(reason));
        }
        self.buf.push_str("</div>");
    }

    /// Numbered from 1 in response order. Writes nothing for an empty list.
    pub fn alternatives(&mut self, r: &AnalysisResult) {
        if !r.has_alternatives() {
            return;
        }
        let _ = write!(
            self.buf,
            "<div class=\"alternative-recommendations\">\
             <h4>🔄 {}</h4><div class=\"alternatives-list\">",
            esc(t(self.lang, "alternatives"))
        );
        for (i, alt) in r.alternatives.iter().enumerate() {
            let _ = write!(
                self.buf,
                "<div class=\"alternative-item\">\
                 <span class=\"alt-sport\">{}. {}</span>\
                 <span class=\"alt-confidence\">{}</span></div>",
                i + 1,
                esc(&alt.sport),
                alt.confidence
            );
        }
        self.buf.push_str("</div></div>");
    }

    pub fn error_message(&mut self, text: &str) {
        let _ = write!(
            self.buf,
            "<div class=\"error-message\"><p class=\"error-text\">{}</p></div>",
            esc(text)
        );
    }

    fn open(&mut self, class: &str) {
        let _ = write!(self.buf, "<div class=\"{class}\">");
    }

    fn close(&mut self) {
        self.buf.push_str("</div>");
    }
}

// ------------------------- public renderers -------------------------

const ICON_OK: &str = "checkmark";
const ICON_WARNING: &str = "warning-icon";

/// Success panel: header, primary recommendation, optional alternatives.
pub fn render_result_panel(lang: Language, r: &AnalysisResult) -> String {
    let mut b = HtmlBuilder::new(lang);
    b.header(ICON_OK, "✅", "result_ready");
    b.open("result-container");
    b.primary(r);
    b.alternatives(r);
    b.close();
    b.finish()
}

/// Application-level failure: the service message, verbatim (escaped).
pub fn render_rejection_panel(lang: Language, message: &str) -> String {
    let mut b = HtmlBuilder::new(lang);
    b.header(ICON_WARNING, "⚠️", "analysis_error");
    b.error_message(message);
    b.finish()
}

/// Transport failure: fixed copy, never the underlying error text.
pub fn render_connection_error_panel(lang: Language) -> String {
    let mut b = HtmlBuilder::new(lang);
    b.header(ICON_WARNING, "⚠️", "connection_error");
    let detail = format!("❌ {}", t(lang, "connection_detail"));
    b.error_message(&detail);
    b.finish()
}

/// Body replacement shown after consent is declined.
pub fn render_goodbye_view(lang: Language, home_href: &str) -> String {
    let mut out = String::with_capacity(512);
    let _ = write!(
        out,
        "<div class=\"goodbye\"><h1>{}</h1><p>{}</p>\
         <a class=\"home-link\" href=\"{}\">{}</a></div>",
        esc(t(lang, "goodbye_title")),
        esc(t(lang, "goodbye_body")),
        esc(home_href),
        esc(t(lang, "back_home"))
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn esc_covers_markup_characters() {
        assert_eq!(esc(r#"<b a="1">&'</b>"#), "&lt;b a=&quot;1&quot;&gt;&amp;&#x27;&lt;/b&gt;");
        assert_eq!(esc("Плавание"), "Плавание");
    }

    #[test]
    fn only_the_success_header_carries_a_checkmark() {
        let ok = render_result_panel(
            Language::En,
            &AnalysisResult {
                sport: "Chess".into(),
                confidence: ss_core::Confidence::new(91.0).unwrap(),
                reason: None,
                alternatives: vec![],
            },
        );
        assert!(ok.contains("<span class=\"checkmark\">✅</span>"));

        for html in [
            render_rejection_panel(Language::En, "Text too short"),
            render_connection_error_panel(Language::En),
        ] {
            assert!(html.contains("<span class=\"warning-icon\">⚠️</span>"), "{html}");
            assert!(!html.contains("checkmark"), "{html}");
        }
    }

    #[test]
    fn goodbye_has_no_form_controls() {
        let html = render_goodbye_view(Language::En, "/");
        assert!(html.contains("Goodbye!"));
        assert!(html.contains("href=\"/\""));
        assert!(!html.contains("<button") && !html.contains("<input"));
    }
}
