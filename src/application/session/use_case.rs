//! Form session implementation

use std::time::{Duration, Instant};

use crate::application::recompute::{RecomputeUseCase, Recomputed};
use crate::application::scheduler::{RecomputeScheduler, ScheduleDelays};
use crate::domain::entities::{ExitGuard, FormControls, Submission, UnloadDecision};
use crate::domain::ports::{
    ConfirmPrompt, FormSource, InMemoryFormSource, NeverConfirm, PriceView, PromptContext,
    PromptReason,
};
use crate::error::TallyResult;

use super::event::{FormEvent, IgnoredReason, SessionOutcome};

/// An open form with its guard, scheduler and view.
pub struct FormSession<S, V> {
    source: S,
    view: V,
    recompute: RecomputeUseCase,
    guard: ExitGuard,
    scheduler: RecomputeScheduler,
    delays: ScheduleDelays,
    controls: FormControls,
    prompt: Box<dyn ConfirmPrompt>,
    renders: usize,
}

impl<S: FormSource, V: PriceView> FormSession<S, V> {
    /// Create a session. Without a prompt, discarding changes is declined.
    pub fn new(source: S, view: V, recompute: RecomputeUseCase) -> Self {
        Self {
            source,
            view,
            recompute,
            guard: ExitGuard::new(),
            scheduler: RecomputeScheduler::new(),
            delays: ScheduleDelays::default(),
            controls: FormControls::default(),
            prompt: Box::new(NeverConfirm),
            renders: 0,
        }
    }

    pub fn with_delays(mut self, delays: ScheduleDelays) -> Self {
        self.delays = delays;
        self
    }

    pub fn with_prompt(mut self, prompt: Box<dyn ConfirmPrompt>) -> Self {
        self.prompt = prompt;
        self
    }

    /// The form finished loading: note which controls exist, render the
    /// panel for the initial state, then schedule the settle recompute.
    pub fn load(&mut self, now: Instant) -> TallyResult<Recomputed> {
        let snapshot = self.source.read()?;
        self.controls = snapshot.controls;
        tracing::debug!(
            submit = self.controls.submit,
            cancel = self.controls.cancel,
            "form session loaded"
        );
        let recomputed = self.recompute_now()?;
        self.schedule(now, self.delays.settle);
        Ok(recomputed)
    }

    pub fn dispatch(&mut self, event: FormEvent, now: Instant) -> TallyResult<SessionOutcome> {
        tracing::trace!(?event, "form event");
        let outcome = match event {
            FormEvent::CheckboxChanged => {
                self.guard.mark_dirty();
                self.schedule(now, self.delays.change)
            }
            FormEvent::LabelClicked => {
                self.guard.mark_dirty();
                self.schedule(now, self.delays.label)
            }
            FormEvent::SubmitClicked => {
                if !self.controls.submit {
                    return Ok(SessionOutcome::Ignored {
                        reason: IgnoredReason::NoSubmitControl,
                    });
                }
                self.guard.mark_submitting();
                SessionOutcome::SubmitStarted
            }
            FormEvent::FormSubmitted => {
                self.guard.mark_submitting();
                let submission = Submission::from_snapshot(&self.source.read()?);
                tracing::info!(
                    tickets = submission.tickets.len(),
                    no_ticket_events = submission.no_ticket_events.len(),
                    "form submitted"
                );
                SessionOutcome::Submitted { submission }
            }
            FormEvent::CancelClicked => {
                if !self.controls.cancel {
                    return Ok(SessionOutcome::Ignored {
                        reason: IgnoredReason::NoCancelControl,
                    });
                }
                let prompt = &self.prompt;
                let message = &self.recompute.labels().discard_prompt;
                let decision = self.guard.on_cancel(|| {
                    prompt.confirm(&PromptContext {
                        reason: PromptReason::DiscardChanges,
                        message,
                    })
                });
                SessionOutcome::Cancel { decision }
            }
            FormEvent::BeforeUnload => SessionOutcome::Unload {
                decision: self.guard.on_before_unload(),
            },
        };
        Ok(outcome)
    }

    /// Ask whether leaving is fine. Only prompts when the guard would.
    pub fn confirm_leave(&self) -> bool {
        match self.guard.on_before_unload() {
            UnloadDecision::Proceed => true,
            UnloadDecision::Prompt => self.prompt.confirm(&PromptContext {
                reason: PromptReason::LeaveWithChanges,
                message: &self.recompute.labels().leave_prompt,
            }),
        }
    }

    /// Run the pending recompute if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> TallyResult<Option<Recomputed>> {
        if !self.scheduler.poll(now) {
            return Ok(None);
        }
        self.recompute_now().map(Some)
    }

    /// Run the pending recompute regardless of its deadline.
    pub fn flush(&mut self) -> TallyResult<Option<Recomputed>> {
        if !self.scheduler.take_pending() {
            return Ok(None);
        }
        self.recompute_now().map(Some)
    }

    pub fn recompute_now(&mut self) -> TallyResult<Recomputed> {
        let recomputed = self.recompute.run(&self.source, &mut self.view)?;
        self.renders += 1;
        Ok(recomputed)
    }

    fn schedule(&mut self, now: Instant, delay: Duration) -> SessionOutcome {
        self.scheduler.schedule(now, delay);
        SessionOutcome::RecomputeScheduled {
            delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn guard(&self) -> &ExitGuard {
        &self.guard
    }

    pub fn controls(&self) -> FormControls {
        self.controls
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn recompute(&self) -> &RecomputeUseCase {
        &self.recompute
    }

    /// Time left until the pending recompute, if any.
    pub fn time_until_recompute(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until(now)
    }

    /// Number of recomputes run so far
    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl<V: PriceView> FormSession<InMemoryFormSource, V> {
    /// Flip a checkbox and report the change.
    pub fn toggle(&mut self, name: &str, value: &str, now: Instant) -> TallyResult<SessionOutcome> {
        let checked = self.source.document_mut().toggle(name, value)?;
        tracing::debug!(name, value, checked, "checkbox toggled");
        self.dispatch(FormEvent::CheckboxChanged, now)
    }
}
