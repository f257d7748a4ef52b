//! ss_page: page controller for the SignSport analysis workflow.
//!
//! Load → `ConsentGate::activate` (form blocked) → accept → submit →
//! `AnalysisController` runs one request cycle → panel rendered → form ready.
//!
//! All work runs on one task; the transport call is the only await point.
//! The DOM is reached only through the `Page` trait, and a missing element
//! degrades the affected component to a no-op.

use thiserror::Error;

pub mod busy;
pub mod carousel;
pub mod consent;
pub mod controller;
pub mod dom;
pub mod memory;
pub mod session;

pub use busy::BusyControl;
pub use carousel::{Carousel, Key};
pub use consent::{Activation, ConsentGate};
pub use controller::{AnalysisController, CycleError};
pub use dom::{ids, Display, ElementId, Page};
pub use memory::{analysis_page, home_page, Element, MemoryPage};
pub use session::{Dispatch, Session, UiEvent};

/// DOM-collaborator failures. Never shown to the user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("missing element #{0}")]
    MissingElement(ElementId),
}
