use crate::{
    core::{SubscriptionId, TimerId},
    entrance::{EntrancePhase, EntranceSequencer},
    error::AperioResult,
    model::PageSpec,
    observe::VisibilityObserver,
    reveal::RevealEngine,
    scheduler::Scheduler,
    surface::{RenderSurface, SurfaceOp},
    timeline::{TimelineRun, TimelineState},
};

/// The presentation context: owns the page and the three component state
/// machines, and routes host-delivered events to whichever one owns them.
///
/// Capabilities (surface, observer, scheduler) are passed per call rather
/// than owned, so a host can share them across presentations and tests can
/// substitute recording implementations.
#[derive(Debug)]
pub struct Presentation {
    page: PageSpec,
    reveal: RevealEngine,
    timeline: Option<TimelineRun>,
    entrance: Option<EntranceSequencer>,
    started: bool,
}

impl Presentation {
    pub fn new(page: PageSpec) -> AperioResult<Self> {
        page.validate()?;
        let reveal = RevealEngine::new(page.reveals.clone());
        let timeline = page.timeline.clone().map(TimelineRun::new);
        let entrance = page.entrance.clone().map(EntranceSequencer::new);
        Ok(Self {
            page,
            reveal,
            timeline,
            entrance,
            started: false,
        })
    }

    /// Single entry point. The reduced-motion flag is read once, here:
    /// when set, every component reaches its terminal state synchronously
    /// before this returns, with zero subscriptions and zero timers;
    /// otherwise the entrance chain starts, reveal targets are observed,
    /// and the timeline is armed. Motion-insensitive cosmetics are
    /// installed on both paths. Calling `start` again is a no-op.
    #[tracing::instrument(skip(self, surface, observer, scheduler))]
    pub fn start(
        &mut self,
        reduced_motion: bool,
        surface: &mut dyn RenderSurface,
        observer: &mut dyn VisibilityObserver,
        scheduler: &mut dyn Scheduler,
    ) {
        if self.started {
            return;
        }
        self.started = true;

        if reduced_motion {
            if let Some(entrance) = &mut self.entrance {
                entrance.finish_instantly(surface);
            }
            self.reveal.reveal_all(surface);
            if let Some(timeline) = &mut self.timeline {
                timeline.complete_all(surface);
            }
        } else {
            if let Some(entrance) = &mut self.entrance {
                entrance.start(surface, scheduler);
            }
            self.reveal.observe(observer);
            if let Some(timeline) = &mut self.timeline {
                timeline.arm(observer);
            }
        }

        for effect in &self.page.effects {
            if reduced_motion && effect.motion_sensitive() {
                continue;
            }
            surface.apply(SurfaceOp::Effect(*effect));
        }
    }

    /// Routes a qualifying visibility event. Unknown subscription ids are
    /// silently ignored; no failure is ever surfaced.
    pub fn on_visibility(
        &mut self,
        sub: SubscriptionId,
        observer: &mut dyn VisibilityObserver,
        scheduler: &mut dyn Scheduler,
    ) {
        if self.reveal.on_visibility(sub, observer, scheduler) {
            return;
        }
        if let Some(timeline) = &mut self.timeline {
            timeline.on_visibility(sub, observer, scheduler);
        }
    }

    /// Routes an expired timer. Unknown timer ids are silently ignored.
    pub fn on_timer(
        &mut self,
        timer: TimerId,
        surface: &mut dyn RenderSurface,
        scheduler: &mut dyn Scheduler,
    ) {
        if self.reveal.on_timer(timer, surface) {
            return;
        }
        if let Some(timeline) = &mut self.timeline {
            if timeline.on_timer(timer, surface, scheduler) {
                return;
            }
        }
        if let Some(entrance) = &mut self.entrance {
            entrance.on_timer(timer, surface, scheduler);
        }
    }

    /// True when no subscriptions or timers remain outstanding.
    pub fn is_idle(&self) -> bool {
        self.reveal.is_idle()
            && self.timeline.as_ref().is_none_or(TimelineRun::is_idle)
            && self.entrance.as_ref().is_none_or(EntranceSequencer::is_idle)
    }

    pub fn timeline_state(&self) -> Option<TimelineState> {
        self.timeline.as_ref().map(TimelineRun::state)
    }

    pub fn entrance_phase(&self) -> Option<EntrancePhase> {
        self.entrance.as_ref().map(EntranceSequencer::phase)
    }
}
