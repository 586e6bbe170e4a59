use crate::{
    core::{DelayMs, SubscriptionId, TimerId},
    model::TimelineSpec,
    observe::{ViewPolicy, VisibilityObserver},
    scheduler::Scheduler,
    surface::{RenderSurface, SurfaceOp},
};

/// Delay between the trigger event and the first step activation.
pub const INITIAL_DELAY: DelayMs = DelayMs(500);
/// Delay between consecutive step activations.
pub const STEP_INTERVAL: DelayMs = DelayMs(400);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimelineState {
    Idle,
    Armed,
    /// `completed` steps have been activated so far.
    Pending {
        completed: usize,
    },
    Done,
}

/// Discrete, strictly sequential timeline progression: once the trigger
/// region becomes visible, steps activate in index order on a fixed cadence
/// and progress tracks `(completed / total) * 100`.
///
/// There is no cancellation: once running, the sequence reaches `Done`.
#[derive(Debug)]
pub struct TimelineRun {
    spec: TimelineSpec,
    state: TimelineState,
    sub: Option<SubscriptionId>,
    timer: Option<TimerId>,
}

impl TimelineRun {
    pub fn new(spec: TimelineSpec) -> Self {
        Self {
            spec,
            state: TimelineState::Idle,
            sub: None,
            timer: None,
        }
    }

    pub fn state(&self) -> TimelineState {
        self.state
    }

    pub fn total_steps(&self) -> usize {
        self.spec.steps.len()
    }

    /// Registers the single trigger subscription.
    pub fn arm(&mut self, observer: &mut dyn VisibilityObserver) {
        if self.state != TimelineState::Idle {
            return;
        }
        self.sub = Some(observer.observe(self.spec.trigger.clone(), ViewPolicy::timeline()));
        self.state = TimelineState::Armed;
    }

    /// First qualifying trigger event starts the run; anything else is a
    /// no-op. With zero steps nothing is scheduled at all.
    pub fn on_visibility(
        &mut self,
        sub: SubscriptionId,
        observer: &mut dyn VisibilityObserver,
        scheduler: &mut dyn Scheduler,
    ) -> bool {
        if self.sub != Some(sub) {
            return false;
        }
        self.sub = None;
        observer.cancel(sub);

        if self.spec.steps.is_empty() {
            self.state = TimelineState::Done;
            return true;
        }
        tracing::debug!(trigger = %self.spec.trigger, steps = self.spec.steps.len(), "timeline started");
        self.timer = Some(scheduler.schedule(INITIAL_DELAY));
        self.state = TimelineState::Pending { completed: 0 };
        true
    }

    pub fn on_timer(
        &mut self,
        timer: TimerId,
        surface: &mut dyn RenderSurface,
        scheduler: &mut dyn Scheduler,
    ) -> bool {
        if self.timer != Some(timer) {
            return false;
        }
        self.timer = None;

        let TimelineState::Pending { completed } = self.state else {
            // A timer is only ever outstanding while Pending.
            debug_assert!(false, "timeline timer fired outside Pending");
            return true;
        };
        let index = completed;
        let total = self.spec.steps.len();

        surface.apply(SurfaceOp::Progress {
            timeline: self.spec.trigger.clone(),
            percent: ((index + 1) as f64 / total as f64) * 100.0,
        });
        surface.apply(SurfaceOp::StepActive {
            step: self.spec.steps[index].clone(),
            index,
        });

        if index + 1 == total {
            self.state = TimelineState::Done;
        } else {
            self.state = TimelineState::Pending {
                completed: index + 1,
            };
            self.timer = Some(scheduler.schedule(STEP_INTERVAL));
        }
        true
    }

    /// Instant path: every step active and progress at 100, synchronously.
    pub fn complete_all(&mut self, surface: &mut dyn RenderSurface) {
        if self.state == TimelineState::Done {
            return;
        }
        let start = match self.state {
            TimelineState::Pending { completed } => completed,
            _ => 0,
        };
        for (index, step) in self.spec.steps.iter().enumerate().skip(start) {
            surface.apply(SurfaceOp::StepActive {
                step: step.clone(),
                index,
            });
        }
        surface.apply(SurfaceOp::Progress {
            timeline: self.spec.trigger.clone(),
            percent: 100.0,
        });
        self.state = TimelineState::Done;
        self.timer = None;
    }

    pub fn is_idle(&self) -> bool {
        self.sub.is_none() && self.timer.is_none()
    }
}
