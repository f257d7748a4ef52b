//! One page load: page, consent gate, controller and carousel, driven by
//! UI events.

use tracing::debug;

use ss_core::{AnalysisResult, ConsentState, SiteConfig};
use ss_io::AnalysisTransport;

use crate::carousel::{Carousel, Key};
use crate::consent::{Activation, ConsentGate};
use crate::controller::{AnalysisController, CycleError};
use crate::dom::{ids, ElementId, Page};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    Click(ElementId),
    KeyDown(Key),
}

/// What an event did.
#[derive(Debug, PartialEq)]
pub enum Dispatch {
    Ignored,
    Consent(ConsentState),
    Cycle(Result<AnalysisResult, CycleError>),
    Carousel(usize),
}

pub struct Session<P, T> {
    page: P,
    gate: ConsentGate,
    controller: AnalysisController<T>,
    carousel: Carousel,
    activation: Activation,
}

impl<P: Page, T: AnalysisTransport> Session<P, T> {
    /// Page-ready: arm the gate and show the first review panel.
    pub fn load(mut page: P, route: &str, config: &SiteConfig, transport: T) -> Self {
        let mut gate = ConsentGate::new(route, config);
        let activation = gate.activate(&mut page);
        let carousel = Carousel::from_page(&page);
        if !carousel.is_empty() {
            carousel.apply(&mut page);
        }
        Self {
            page,
            gate,
            controller: AnalysisController::new(transport, config.language),
            carousel,
            activation,
        }
    }

    pub async fn dispatch(&mut self, event: UiEvent) -> Dispatch {
        match event {
            UiEvent::Click(id) => self.click(&id).await,
            UiEvent::KeyDown(key) => {
                if self.carousel.handle_key(key) {
                    self.carousel.apply(&mut self.page);
                    Dispatch::Carousel(self.carousel.current())
                } else {
                    Dispatch::Ignored
                }
            }
        }
    }

    async fn click(&mut self, id: &ElementId) -> Dispatch {
        if !self.page.is_clickable(id) {
            debug!(%id, "click on absent or disabled element ignored");
            return Dispatch::Ignored;
        }
        if *id == ids::ACCEPT_BUTTON {
            if self.gate.accept(&mut self.page) {
                return Dispatch::Consent(self.gate.state());
            }
        } else if *id == ids::DECLINE_BUTTON {
            if self.gate.decline(&mut self.page) {
                return Dispatch::Consent(self.gate.state());
            }
        } else if *id == ids::ANALYZE_BUTTON {
            if !self.gate.blocks_submit() {
                let outcome = self.controller.submit(&self.gate, &mut self.page).await;
                return Dispatch::Cycle(outcome);
            }
        } else if *id == ids::PREV_BUTTON || *id == ids::NEXT_BUTTON {
            if !self.carousel.is_empty() {
                let at = if *id == ids::PREV_BUTTON {
                    self.carousel.prev()
                } else {
                    self.carousel.next()
                };
                self.carousel.apply(&mut self.page);
                return Dispatch::Carousel(at);
            }
        }
        Dispatch::Ignored
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn gate(&self) -> &ConsentGate {
        &self.gate
    }

    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    pub fn controller(&self) -> &AnalysisController<T> {
        &self.controller
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn into_page(self) -> P {
        self.page
    }
}
