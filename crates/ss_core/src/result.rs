//! Result model produced by decoding a service response.
//!
//! A result is owned by the render step and replaced wholesale on the next
//! cycle. Alternatives keep the order the service sent them in.

use core::fmt;

use crate::errors::CoreError;

/// Confidence percentage in `0..=100` (finite).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(v: f64) -> Result<Self, CoreError> {
        if v.is_finite() && (0.0..=100.0).contains(&v) {
            Ok(Self(v))
        } else {
            Err(CoreError::ConfidenceOutOfRange)
        }
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Integer percentage for display (round half away from zero).
    #[inline]
    pub fn percent(self) -> u8 {
        self.0.round() as u8
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Alternative {
    pub sport: String,
    pub confidence: Confidence,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub sport: String,
    pub confidence: Confidence,
    pub reason: Option<String>,
    /// Response order; never re-sorted.
    pub alternatives: Vec<Alternative>,
}

impl AnalysisResult {
    #[inline]
    pub fn has_alternatives(&self) -> bool {
        !self.alternatives.is_empty()
    }
}

/// A well-formed reply from the classification service.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceReply {
    Recommendation(AnalysisResult),
    /// Structured `{ "error": … }` payload, surfaced verbatim.
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_bounds() {
        assert!(Confidence::new(0.0).is_ok());
        assert!(Confidence::new(100.0).is_ok());
        assert_eq!(Confidence::new(100.5), Err(CoreError::ConfidenceOutOfRange));
        assert_eq!(Confidence::new(-0.1), Err(CoreError::ConfidenceOutOfRange));
        assert!(Confidence::new(f64::NAN).is_err());
    }

    #[test]
    fn confidence_renders_as_integer_percent() {
        assert_eq!(Confidence::new(87.0).unwrap().to_string(), "87%");
        assert_eq!(Confidence::new(62.4).unwrap().percent(), 62);
        assert_eq!(Confidence::new(62.5).unwrap().percent(), 63);
        assert_eq!(Confidence::new(99.9).unwrap().to_string(), "100%");
    }
}
