//! Fixed-period auto-play.

use std::time::{Duration, Instant};

use log::debug;

use crate::types::StepperResult;

use super::{EngineState, Simulator, StepOutcome};

/// Result of polling the driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    /// Not playing.
    Idle,
    /// Playing, next step not due yet.
    NotDue,
    /// Stepped once.
    Stepped(StepOutcome),
    /// The run ended or was reset; the driver disarmed itself.
    Stopped,
}

/// Steps a simulator on a fixed period until the run finishes.
///
/// At most one trigger is pending. A late poll performs a single step and
/// schedules the next one a full period later; missed periods are dropped.
#[derive(Debug, Clone)]
pub struct AutoPlayDriver {
    period: Duration,
    next_due: Option<Instant>,
    seen_running: bool,
}

impl AutoPlayDriver {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
            seen_running: false,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Arm the first trigger one period after `now`.
    pub fn play(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
        self.seen_running = false;
        debug!("auto-play armed, period {:?}", self.period);
    }

    /// Cancel the pending trigger.
    pub fn pause(&mut self) {
        if self.next_due.take().is_some() {
            debug!("auto-play paused");
        }
    }

    /// Whether a trigger is pending.
    pub fn is_playing(&self) -> bool {
        self.next_due.is_some()
    }

    /// When the pending trigger fires.
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    /// Step `sim` if the trigger is due at `now`.
    ///
    /// Disarms when the engine is finished, when it went back to `NotStarted`
    /// after having run (it was reset underneath the driver), or when a step
    /// fails.
    pub fn poll(&mut self, now: Instant, sim: &mut Simulator) -> StepperResult<PollOutcome> {
        let Some(due) = self.next_due else {
            return Ok(PollOutcome::Idle);
        };
        match sim.engine().state() {
            EngineState::Finished => return Ok(self.stop()),
            EngineState::NotStarted if self.seen_running => return Ok(self.stop()),
            _ => {}
        }
        if now < due {
            return Ok(PollOutcome::NotDue);
        }

        let outcome = match sim.step() {
            Ok(outcome) => outcome,
            Err(e) => {
                self.next_due = None;
                return Err(e);
            }
        };
        self.seen_running = true;
        if sim.engine().is_finished() {
            self.next_due = None;
        } else {
            self.next_due = Some(now + self.period);
        }
        Ok(PollOutcome::Stepped(outcome))
    }

    /// Play to the end, sleeping between steps. Calls `on_step` after each.
    pub fn run_blocking<F>(&mut self, sim: &mut Simulator, mut on_step: F) -> StepperResult<()>
    where
        F: FnMut(&StepOutcome, &Simulator),
    {
        self.play(Instant::now());
        while let Some(due) = self.next_due {
            let now = Instant::now();
            if due > now {
                std::thread::sleep(due - now);
            }
            if let PollOutcome::Stepped(outcome) = self.poll(Instant::now(), sim)? {
                on_step(&outcome, sim);
            }
        }
        Ok(())
    }

    fn stop(&mut self) -> PollOutcome {
        self.next_due = None;
        debug!("auto-play stopped");
        PollOutcome::Stopped
    }
}
