use crate::{
    core::{DelayMs, TimerId},
    model::EntranceSpec,
    scheduler::Scheduler,
    surface::{RenderSurface, SurfaceOp},
};

/// Delay from start until the overlay begins opening.
pub const OPEN_DELAY: DelayMs = DelayMs(800);
/// Delay from opening until the overlay is hidden and scroll unlocks.
pub const HIDE_DELAY: DelayMs = DelayMs(1200);
/// Delay from hiding until the floating affordance shows.
pub const AUX_DELAY: DelayMs = DelayMs(500);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntrancePhase {
    Closed,
    Opening,
    Opened,
    AuxVisible,
}

/// Entrance overlay sequencer: a fixed three-transition timed chain played
/// exactly once at page load, independent of scroll position. No user
/// input, no cancellation.
#[derive(Debug)]
pub struct EntranceSequencer {
    spec: EntranceSpec,
    phase: EntrancePhase,
    timer: Option<TimerId>,
}

impl EntranceSequencer {
    pub fn new(spec: EntranceSpec) -> Self {
        Self {
            spec,
            phase: EntrancePhase::Closed,
            timer: None,
        }
    }

    pub fn phase(&self) -> EntrancePhase {
        self.phase
    }

    /// Locks scrolling and schedules the opening transition. Only valid
    /// from the initial phase; anything else is a no-op.
    pub fn start(&mut self, surface: &mut dyn RenderSurface, scheduler: &mut dyn Scheduler) {
        if self.phase != EntrancePhase::Closed || self.timer.is_some() {
            return;
        }
        surface.apply(SurfaceOp::ScrollLock(true));
        self.timer = Some(scheduler.schedule(OPEN_DELAY));
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

        match self.phase {
            EntrancePhase::Closed => {
                self.phase = EntrancePhase::Opening;
                surface.apply(SurfaceOp::OverlayOpened(self.spec.overlay.clone()));
                self.timer = Some(scheduler.schedule(HIDE_DELAY));
            }
            EntrancePhase::Opening => {
                self.phase = EntrancePhase::Opened;
                surface.apply(SurfaceOp::OverlayHidden(self.spec.overlay.clone()));
                surface.apply(SurfaceOp::ScrollLock(false));
                self.timer = Some(scheduler.schedule(AUX_DELAY));
            }
            EntrancePhase::Opened => {
                self.phase = EntrancePhase::AuxVisible;
                surface.apply(SurfaceOp::AuxVisible);
            }
            EntrancePhase::AuxVisible => {}
        }
        true
    }

    /// Instant path: jumps straight to the terminal state without
    /// traversing intermediate phases or waiting any delay.
    pub fn finish_instantly(&mut self, surface: &mut dyn RenderSurface) {
        if self.phase == EntrancePhase::AuxVisible {
            return;
        }
        surface.apply(SurfaceOp::OverlayHidden(self.spec.overlay.clone()));
        surface.apply(SurfaceOp::ScrollLock(false));
        surface.apply(SurfaceOp::AuxVisible);
        self.phase = EntrancePhase::AuxVisible;
        self.timer = None;
    }

    pub fn is_idle(&self) -> bool {
        self.timer.is_none()
    }
}
