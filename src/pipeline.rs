use crate::{
    init::Presentation,
    scheduler::VirtualScheduler,
    surface::RenderSurface,
};

/// Advances the virtual clock from due instant to due instant, dispatching
/// every expired timer, until no timers remain. Visibility events stay
/// host-driven; interleave calls to [`Presentation::on_visibility`] between
/// drains to script scrolling.
pub fn drain_timers(
    presentation: &mut Presentation,
    surface: &mut dyn RenderSurface,
    scheduler: &mut VirtualScheduler,
) {
    while let Some(due) = scheduler.next_due() {
        for timer in scheduler.advance_to(due) {
            presentation.on_timer(timer, surface, scheduler);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsl::PageBuilder;
    use crate::observe::ManualViewport;
    use crate::surface::RecordingSurface;

    #[test]
    fn drains_chained_timers_to_idle() {
        let page = PageBuilder::new().entrance("door-overlay").build().unwrap();
        let mut p = Presentation::new(page).unwrap();
        let mut surface = RecordingSurface::new();
        let mut vp = ManualViewport::new();
        let mut sched = VirtualScheduler::new();

        p.start(false, &mut surface, &mut vp, &mut sched);
        drain_timers(&mut p, &mut surface, &mut sched);

        assert!(p.is_idle());
        assert_eq!(sched.now().0, 2500);
    }
}
