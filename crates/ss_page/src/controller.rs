//! Analysis controller: one request cycle per submit.
//!
//! Idle → InFlight → {Succeeded, Failed}. The submit control is held by a
//! `BusyControl` for the whole in-flight section, so it comes back enabled
//! with its original label whatever the outcome. No retries, no queue, no
//! timeout of its own.

use thiserror::Error;
use tracing::{debug, error, info, warn};

use ss_core::{
    AnalysisRequest, AnalysisResult, FormInput, Language, RequestCycle, RequestCycleState,
    ServiceReply,
};
use ss_io::{AnalysisTransport, TransportError};
use ss_render::{
    progress_label, render_connection_error_panel, render_rejection_panel, render_result_panel,
    submit_label, validation_notice,
};

use crate::busy::BusyControl;
use crate::consent::ConsentGate;
use crate::dom::{ids, Display, ElementId, Page};
use crate::PageError;

const FADE_IN: &str = "opacity 0.5s ease";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CycleError {
    /// Empty text; no request was issued.
    #[error("validation: text is empty")]
    Validation,

    /// The consent gate is armed and not yet accepted; nothing was touched.
    #[error("consent not given")]
    ConsentRequired,

    /// Structured error payload from the service.
    #[error("application error: {0}")]
    Application(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// A required element is absent; the controller did nothing.
    #[error("unavailable: {0}")]
    Unavailable(#[from] PageError),
}

impl CycleError {
    /// Whether a request was actually issued and failed.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, CycleError::Application(_) | CycleError::Transport(_))
    }
}

pub struct AnalysisController<T> {
    transport: T,
    language: Language,
    last_state: RequestCycleState,
    requests_issued: u64,
}

impl<T: AnalysisTransport> AnalysisController<T> {
    pub fn new(transport: T, language: Language) -> Self {
        Self { transport, language, last_state: RequestCycleState::Idle, requests_issued: 0 }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// State of the most recent cycle (`Idle` before the first submit).
    pub fn state(&self) -> RequestCycleState {
        self.last_state
    }

    pub fn requests_issued(&self) -> u64 {
        self.requests_issued
    }

    /// Run one cycle against `page`. Every error is already rendered or
    /// notified by the time this returns; the value is for the caller's
    /// bookkeeping only.
    ///
    /// Refused outright while `gate` blocks submission, so the submit
    /// control is never re-enabled behind a locked modal.
    pub async fn submit<P: Page + ?Sized>(
        &mut self,
        gate: &ConsentGate,
        page: &mut P,
    ) -> Result<AnalysisResult, CycleError> {
        if gate.blocks_submit() {
            debug!(consent = %gate.state(), "submit refused before consent");
            return Err(CycleError::ConsentRequired);
        }
        for id in [&ids::REPORT_INPUT, &ids::ANALYZE_BUTTON, &ids::RESULT] {
            if !page.contains(id) {
                debug!(%id, "analysis collaborator missing; submit is a no-op");
                return Err(PageError::MissingElement(id.clone()).into());
            }
        }

        let request = match AnalysisRequest::from_form(&read_form(page)) {
            Ok(r) => r,
            Err(_) => {
                info!("empty analysis text; request not sent");
                page.alert(validation_notice(self.language));
                return Err(CycleError::Validation);
            }
        };

        let lang = self.language;
        let mut cycle = RequestCycle::new();
        // Fresh cycle: Idle → InFlight is always legal.
        let _ = cycle.begin();
        self.last_state = cycle.state();

        let mut busy = BusyControl::acquire(
            page,
            ids::ANALYZE_BUTTON,
            progress_label(lang),
            submit_label(lang),
        );
        clear_result(busy.page(), &ids::RESULT);

        self.requests_issued += 1;
        info!(
            chars = request.text().chars().count(),
            age = ?request.age(),
            has_gender = request.gender().is_some(),
            "analysis request in flight"
        );

        let outcome = match self.transport.analyze(&request).await {
            Ok(ServiceReply::Recommendation(result)) => {
                let _ = cycle.succeed();
                show_result(busy.page(), &render_result_panel(lang, &result), true);
                info!(
                    sport = %result.sport,
                    alternatives = result.alternatives.len(),
                    "analysis succeeded"
                );
                Ok(result)
            }
            Ok(ServiceReply::Rejected(message)) => {
                let _ = cycle.fail();
                show_result(busy.page(), &render_rejection_panel(lang, &message), false);
                warn!(%message, "analysis rejected by service");
                Err(CycleError::Application(message))
            }
            Err(e) => {
                let _ = cycle.fail();
                show_result(busy.page(), &render_connection_error_panel(lang), false);
                error!(error = %e, "analysis request failed");
                Err(CycleError::Transport(e))
            }
        };

        drop(busy);
        self.last_state = cycle.state();
        outcome
    }
}

fn read_form<P: Page + ?Sized>(page: &P) -> FormInput {
    FormInput {
        text: page.value(&ids::REPORT_INPUT).ok(),
        age: page.value(&ids::AGE_INPUT).ok(),
        gender: page.value(&ids::GENDER_INPUT).ok(),
    }
}

fn clear_result<P: Page + ?Sized>(page: &mut P, id: &ElementId) {
    let _ = page.set_display(id, Display::None);
    let _ = page.set_inner_html(id, "");
    let _ = page.set_opacity(id, 0.0, None);
}

fn show_result<P: Page + ?Sized>(page: &mut P, html: &str, fade_in: bool) {
    let _ = page.set_inner_html(&ids::RESULT, html);
    let _ = page.set_display(&ids::RESULT, Display::Block);
    let _ = page.set_opacity(&ids::RESULT, 1.0, fade_in.then_some(FADE_IN));
}
