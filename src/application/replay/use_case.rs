//! Replay Use Case implementation

use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::application::recompute::{RecomputeUseCase, Recomputed};
use crate::application::scheduler::ScheduleDelays;
use crate::application::session::{FormSession, SessionOutcome};
use crate::domain::entities::{FormConventions, FormDocument};
use crate::domain::ports::{InMemoryFormSource, PanelNodes, ScriptedPrompt};
use crate::domain::services::PanelState;
use crate::domain::value_objects::Amount;
use crate::error::TallyResult;

use super::script::{ReplayScript, ReplayStep};

/// Replay event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// A step ran
    Step {
        index: usize,
        at_ms: u64,
        step: ReplayStep,
        #[serde(skip_serializing_if = "Option::is_none")]
        outcome: Option<SessionOutcome>,
    },
    /// A deferred recompute ran
    Rendered {
        at_ms: u64,
        panel: PanelState,
        total: Amount,
        discount: Amount,
        final_price: Amount,
    },
    /// The script ended
    Finished {
        dirty: bool,
        submitting: bool,
        renders: usize,
    },
}

impl ReplayEvent {
    /// Convert to JSON string with "command": "replay" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("replay"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Replays a script against an in-memory copy of the form.
#[derive(Debug, Clone, Default)]
pub struct ReplayUseCase {
    recompute: RecomputeUseCase,
    delays: ScheduleDelays,
    conventions: FormConventions,
}

impl ReplayUseCase {
    pub fn new(
        recompute: RecomputeUseCase,
        delays: ScheduleDelays,
        conventions: FormConventions,
    ) -> Self {
        Self {
            recompute,
            delays,
            conventions,
        }
    }

    /// Run every step, then flush any pending recompute. Returns the final
    /// state of the panel nodes.
    pub fn run<F>(
        &self,
        document: FormDocument,
        script: &ReplayScript,
        on_event: F,
    ) -> TallyResult<PanelNodes>
    where
        F: Fn(ReplayEvent),
    {
        let prompt = Rc::new(ScriptedPrompt::new(script.confirm));
        let source = InMemoryFormSource::new(document, self.conventions.clone());
        let mut session = FormSession::new(source, PanelNodes::default(), self.recompute.clone())
            .with_delays(self.delays)
            .with_prompt(Box::new(Rc::clone(&prompt)));

        let start = Instant::now();
        let mut now = start;
        let initial = session.load(now)?;
        on_event(rendered(&initial, 0));

        for (index, step) in script.steps.iter().enumerate() {
            let outcome = match step {
                ReplayStep::Toggle { name, value } => Some(session.toggle(name, value, now)?),
                ReplayStep::Wait { ms } => {
                    now += Duration::from_millis(*ms);
                    None
                }
                other => {
                    if let ReplayStep::Cancel {
                        confirm: Some(answer),
                    } = other
                    {
                        prompt.push_answer(*answer);
                    }
                    match other.form_event() {
                        Some(event) => Some(session.dispatch(event, now)?),
                        None => None,
                    }
                }
            };

            on_event(ReplayEvent::Step {
                index,
                at_ms: elapsed_ms(start, now),
                step: step.clone(),
                outcome,
            });

            if let Some(recomputed) = session.poll(now)? {
                on_event(rendered(&recomputed, elapsed_ms(start, now)));
            }
        }

        if let Some(deadline) = session.time_until_recompute(now) {
            now += deadline;
        }
        if let Some(recomputed) = session.flush()? {
            on_event(rendered(&recomputed, elapsed_ms(start, now)));
        }

        on_event(ReplayEvent::Finished {
            dirty: session.guard().is_dirty(),
            submitting: session.guard().is_submitting(),
            renders: session.renders(),
        });

        Ok(session.view().clone())
    }
}

fn rendered(recomputed: &Recomputed, at_ms: u64) -> ReplayEvent {
    ReplayEvent::Rendered {
        at_ms,
        panel: recomputed.panel.clone(),
        total: recomputed.quote.total,
        discount: recomputed.quote.discount.amount,
        final_price: recomputed.quote.final_price,
    }
}

fn elapsed_ms(start: Instant, now: Instant) -> u64 {
    u64::try_from(now.duration_since(start).as_millis()).unwrap_or(u64::MAX)
}
