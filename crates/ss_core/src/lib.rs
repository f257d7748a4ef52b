//! ss_core: Core types for the SignSport analysis page.
//!
//! This crate is **I/O-free**. It defines the stable types shared by
//! `ss_io`, `ss_render`, `ss_page` and `ss_cli`:
//!
//! - Consent gate state (`ConsentState`)
//! - Request cycle state machine (`RequestCycle`, `RequestCycleState`)
//! - Request model + form parsing (`AnalysisRequest`, `FormInput`)
//! - Result model (`AnalysisResult`, `Alternative`, `Confidence`, `ServiceReply`)
//! - Site configuration (`Routes`, `Language`, `DeclineMode`, `SiteConfig`)
//!
//! Serialization derives on configuration types are gated behind `serde`.

pub mod errors {
    use core::fmt;

    /// Minimal error set for core-domain validation & transitions.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum CoreError {
        /// Text field empty after trimming.
        EmptyText,
        /// Confidence outside `0..=100` or not finite.
        ConfidenceOutOfRange,
        /// A request cycle was asked to move along an edge it does not have.
        IllegalTransition {
            from: crate::state::RequestCycleState,
            to: crate::state::RequestCycleState,
        },
        /// Unknown language tag.
        UnknownLanguage,
    }

    impl fmt::Display for CoreError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                CoreError::EmptyText => write!(f, "text is empty"),
                CoreError::ConfidenceOutOfRange => write!(f, "confidence out of range 0..=100"),
                CoreError::IllegalTransition { from, to } => {
                    write!(f, "illegal cycle transition {from} -> {to}")
                }
                CoreError::UnknownLanguage => write!(f, "unknown language"),
            }
        }
    }

    impl std::error::Error for CoreError {}
}

pub mod config;
pub mod request;
pub mod result;
pub mod state;

pub use config::{DeclineMode, Language, Routes, SiteConfig};
pub use errors::CoreError;
pub use request::{AnalysisRequest, FormInput};
pub use result::{Alternative, AnalysisResult, Confidence, ServiceReply};
pub use state::{ConsentState, RequestCycle, RequestCycleState};
