//! Consent gate: the form stays blocked until the warning modal is accepted.
//!
//! The route the page was loaded on is a constructor argument; the gate only
//! arms when it equals the configured analysis route. A page without the
//! modal or the text input leaves the gate unarmed and blocks nothing.

use tracing::{debug, info};

use ss_core::{ConsentState, DeclineMode, Language, Routes, SiteConfig};

use crate::dom::{ids, Display, Page};
use crate::PageError;

/// Result of `ConsentGate::activate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Route is not the analysis page; nothing was touched.
    NotApplicable,
    /// A required collaborator is absent; nothing was touched.
    MissingCollaborator(PageError),
    /// Form blocked, modal shown.
    Armed,
}

#[derive(Clone, Debug)]
pub struct ConsentGate {
    route: String,
    routes: Routes,
    decline_mode: DeclineMode,
    language: Language,
    state: ConsentState,
    armed: bool,
}

impl ConsentGate {
    pub fn new(route: impl Into<String>, config: &SiteConfig) -> Self {
        Self {
            route: route.into(),
            routes: config.routes.clone(),
            decline_mode: config.decline_mode,
            language: config.language,
            state: ConsentState::Locked,
            armed: false,
        }
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    pub fn is_applicable(&self) -> bool {
        self.routes.is_analysis(&self.route)
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// True while an armed gate has not been accepted.
    pub fn blocks_submit(&self) -> bool {
        self.armed && !self.state.is_unlocked()
    }

    /// Runs once on page ready.
    pub fn activate<P: Page + ?Sized>(&mut self, page: &mut P) -> Activation {
        if !self.is_applicable() {
            debug!(route = %self.route, "consent gate not applicable");
            return Activation::NotApplicable;
        }
        for id in [&ids::WARNING_MODAL, &ids::REPORT_INPUT] {
            if !page.contains(id) {
                debug!(%id, "consent gate collaborator missing; gate stays inert");
                return Activation::MissingCollaborator(PageError::MissingElement(id.clone()));
            }
        }

        let _ = page.set_disabled(&ids::REPORT_INPUT, true);
        let _ = page.set_disabled(&ids::ANALYZE_BUTTON, true);
        let _ = page.set_display(&ids::WARNING_MODAL, Display::Flex);
        self.state = ConsentState::Locked;
        self.armed = true;
        info!(route = %self.route, "consent gate armed");
        Activation::Armed
    }

    /// Affirmative modal control. Returns whether anything changed.
    pub fn accept<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if !self.armed || self.state != ConsentState::Locked {
            return false;
        }
        let _ = page.set_display(&ids::WARNING_MODAL, Display::None);
        let _ = page.set_disabled(&ids::REPORT_INPUT, false);
        let _ = page.set_disabled(&ids::ANALYZE_BUTTON, false);
        self.state = ConsentState::Unlocked;
        info!("consent accepted");
        true
    }

    /// Negative modal control. One-way: the form and modal are gone afterwards.
    pub fn decline<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if !self.armed || self.state != ConsentState::Locked {
            return false;
        }
        match self.decline_mode {
            DeclineMode::Navigate => page.navigate(&self.routes.declined),
            DeclineMode::GoodbyeView => {
                page.replace_body(&ss_render::render_goodbye_view(self.language, &self.routes.home))
            }
        }
        self.state = ConsentState::Terminated;
        info!(mode = ?self.decline_mode, "consent declined");
        true
    }
}
