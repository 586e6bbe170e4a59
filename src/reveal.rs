use std::collections::{BTreeMap, BTreeSet};

use crate::{
    core::{ElementId, SubscriptionId, TimerId},
    model::RevealTarget,
    observe::{ViewPolicy, VisibilityObserver},
    scheduler::Scheduler,
    surface::{RenderSurface, SurfaceOp},
};

/// Scroll-triggered reveal engine: one subscription per target, at most one
/// reveal per element, optional per-element delay between the visibility
/// event and the reveal itself.
///
/// Subscription lifetime and effect application are decoupled on purpose:
/// the subscription is cancelled the moment its first event qualifies,
/// while the reveal may still be sitting on a timer.
#[derive(Debug, Default)]
pub struct RevealEngine {
    targets: Vec<RevealTarget>,
    subs: BTreeMap<SubscriptionId, RevealTarget>,
    pending: BTreeMap<TimerId, ElementId>,
    revealed: BTreeSet<ElementId>,
}

impl RevealEngine {
    pub fn new(targets: Vec<RevealTarget>) -> Self {
        Self {
            targets,
            ..Self::default()
        }
    }

    /// Registers one subscription per target with the reveal policy.
    pub fn observe(&mut self, observer: &mut dyn VisibilityObserver) {
        for target in &self.targets {
            let sub = observer.observe(target.id.clone(), ViewPolicy::reveal());
            self.subs.insert(sub, target.clone());
        }
    }

    /// Handles a qualifying visibility event. Returns false when the
    /// subscription is not one of ours (already cancelled, or owned by
    /// another component), which is a silent no-op for the caller.
    pub fn on_visibility(
        &mut self,
        sub: SubscriptionId,
        observer: &mut dyn VisibilityObserver,
        scheduler: &mut dyn Scheduler,
    ) -> bool {
        let Some(target) = self.subs.remove(&sub) else {
            return false;
        };
        // Cancel right away; the reveal itself may still be pending.
        observer.cancel(sub);

        let timer = scheduler.schedule(target.delay);
        tracing::debug!(element = %target.id, delay_ms = target.delay.0, "reveal scheduled");
        self.pending.insert(timer, target.id);
        true
    }

    /// Applies the deferred reveal. Monotonic: an already revealed element
    /// is never revealed twice.
    pub fn on_timer(&mut self, timer: TimerId, surface: &mut dyn RenderSurface) -> bool {
        let Some(id) = self.pending.remove(&timer) else {
            return false;
        };
        if self.revealed.insert(id.clone()) {
            surface.apply(SurfaceOp::Reveal(id));
        }
        true
    }

    /// Instant path: every target reaches its terminal state synchronously.
    /// No subscriptions, no timers.
    pub fn reveal_all(&mut self, surface: &mut dyn RenderSurface) {
        for target in &self.targets {
            if self.revealed.insert(target.id.clone()) {
                surface.apply(SurfaceOp::Reveal(target.id.clone()));
            }
        }
    }

    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.revealed.contains(id)
    }

    pub fn is_idle(&self) -> bool {
        self.subs.is_empty() && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DelayMs;
    use crate::observe::ManualViewport;
    use crate::scheduler::VirtualScheduler;
    use crate::surface::RecordingSurface;

    fn engine() -> RevealEngine {
        RevealEngine::new(vec![
            RevealTarget {
                id: "a".into(),
                delay: DelayMs(0),
            },
            RevealTarget {
                id: "b".into(),
                delay: DelayMs(300),
            },
        ])
    }

    #[test]
    fn observe_registers_one_subscription_per_target() {
        let mut e = engine();
        let mut vp = ManualViewport::new();
        e.observe(&mut vp);
        assert_eq!(vp.active_count(), 2);
        assert!(!e.is_idle());
    }

    #[test]
    fn subscription_cancelled_before_reveal_applies() {
        let mut e = engine();
        let mut vp = ManualViewport::new();
        let mut sched = VirtualScheduler::new();
        let mut surface = RecordingSurface::new();
        e.observe(&mut vp);

        let subs = vp.enter(&"b".into(), 0.5, 200);
        assert_eq!(subs.len(), 1);
        assert!(e.on_visibility(subs[0], &mut vp, &mut sched));

        // Subscription is gone while the reveal is still pending.
        assert!(!vp.is_active(subs[0]));
        assert!(!e.is_revealed(&"b".into()));
        assert!(surface.ops.is_empty());

        for timer in sched.advance_by(DelayMs(300)) {
            e.on_timer(timer, &mut surface);
        }
        assert!(e.is_revealed(&"b".into()));
        assert_eq!(surface.ops, vec![SurfaceOp::Reveal("b".into())]);
    }

    #[test]
    fn repeated_visibility_events_fire_once() {
        let mut e = engine();
        let mut vp = ManualViewport::new();
        let mut sched = VirtualScheduler::new();
        let mut surface = RecordingSurface::new();
        e.observe(&mut vp);

        let subs = vp.enter(&"a".into(), 0.5, 200);
        assert!(e.on_visibility(subs[0], &mut vp, &mut sched));
        // A stale event for the cancelled subscription is a no-op.
        assert!(!e.on_visibility(subs[0], &mut vp, &mut sched));

        for timer in sched.advance_by(DelayMs(0)) {
            e.on_timer(timer, &mut surface);
        }
        assert_eq!(surface.ops, vec![SurfaceOp::Reveal("a".into())]);
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn reveal_all_is_synchronous_and_monotonic() {
        let mut e = engine();
        let mut surface = RecordingSurface::new();
        e.reveal_all(&mut surface);
        e.reveal_all(&mut surface);
        assert_eq!(
            surface.ops,
            vec![SurfaceOp::Reveal("a".into()), SurfaceOp::Reveal("b".into())]
        );
        assert!(e.is_idle());
    }

    #[test]
    fn unknown_timer_is_ignored() {
        let mut e = engine();
        let mut surface = RecordingSurface::new();
        assert!(!e.on_timer(TimerId(99), &mut surface));
        assert!(surface.ops.is_empty());
    }
}
