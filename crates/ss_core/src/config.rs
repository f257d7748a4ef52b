//! Site configuration: routes, language, decline behavior, transport defaults.
//!
//! Defaults mirror the deployed site. `ss_io::config` layers a JSON file and
//! environment variables on top; the CLI layers flags on top of that.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Fixed navigation paths the page controller knows about.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Routes {
    pub home: String,
    /// The only route on which the consent gate arms.
    pub analysis: String,
    /// Destination after consent is declined.
    pub declined: String,
    /// Classification endpoint path (POST).
    pub api_analyze: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            home: "/".into(),
            analysis: "/analyze".into(),
            declined: "/goodbye".into(),
            api_analyze: "/api/analyze".into(),
        }
    }
}

impl Routes {
    /// Exact match; `/analyze/` and `/analyze?x` are different pages.
    #[inline]
    pub fn is_analysis(&self, path: &str) -> bool {
        path == self.analysis
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub fn tag(self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Language {
    type Err = CoreError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru" | "ru-ru" | "ru_ru" => Ok(Language::Ru),
            "en" | "en-us" | "en-gb" | "en_us" | "en_gb" => Ok(Language::En),
            _ => Err(CoreError::UnknownLanguage),
        }
    }
}

/// What `decline()` does to the page.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DeclineMode {
    /// Navigate to `Routes::declined` (unloads the document).
    #[default]
    Navigate,
    /// Replace the page body with the goodbye view in place.
    GoodbyeView,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SiteConfig {
    pub routes: Routes,
    /// Scheme + authority the endpoint path is joined onto, e.g. `http://127.0.0.1:5000`.
    pub endpoint_base: String,
    pub language: Language,
    pub decline_mode: DeclineMode,
    /// Transport-level timeout. `None` leaves the client default (no timeout).
    pub timeout_ms: Option<u64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            routes: Routes::default(),
            endpoint_base: "http://127.0.0.1:5000".into(),
            language: Language::default(),
            decline_mode: DeclineMode::default(),
            timeout_ms: None,
        }
    }
}

impl SiteConfig {
    /// Full endpoint URL without doubled or missing slashes.
    pub fn endpoint_url(&self) -> String {
        let base = self.endpoint_base.trim_end_matches('/');
        let path = self.routes.api_analyze.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_route_is_exact() {
        let r = Routes::default();
        assert!(r.is_analysis("/analyze"));
        assert!(!r.is_analysis("/"));
        assert!(!r.is_analysis("/analyze/"));
        assert!(!r.is_analysis("/analyzer"));
    }

    #[test]
    fn endpoint_url_joins_cleanly() {
        let mut c = SiteConfig::default();
        assert_eq!(c.endpoint_url(), "http://127.0.0.1:5000/api/analyze");
        c.endpoint_base = "http://host:8080/".into();
        assert_eq!(c.endpoint_url(), "http://host:8080/api/analyze");
    }

    #[test]
    fn language_tags() {
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!("ru-RU".parse::<Language>(), Ok(Language::Ru));
        assert_eq!("de".parse::<Language>(), Err(CoreError::UnknownLanguage));
        assert_eq!(Language::default().tag(), "ru");
    }
}
