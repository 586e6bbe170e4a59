//! One scripted scroll-through of a complete page, checking the combined
//! op ordering across all three components on a shared virtual clock.

use aperio::{
    ElementId, ManualViewport, PageBuilder, Presentation, RecordingSurface, SurfaceOp, TimeMs,
    VirtualScheduler,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn pump(
    p: &mut Presentation,
    surface: &mut RecordingSurface,
    sched: &mut VirtualScheduler,
    t: TimeMs,
) {
    for timer in sched.advance_to(t) {
        p.on_timer(timer, surface, sched);
    }
}

fn scroll_to(
    p: &mut Presentation,
    vp: &mut ManualViewport,
    sched: &mut VirtualScheduler,
    region: &ElementId,
) {
    for sub in vp.enter(region, 0.8, 300) {
        p.on_visibility(sub, vp, sched);
    }
}

#[test]
fn components_interleave_on_one_clock() {
    init_tracing();
    let page = PageBuilder::new()
        .reveal("hero", 0)
        .reveal("card", 300)
        .timeline("process", ["step-1", "step-2"])
        .entrance("door-overlay")
        .build()
        .unwrap();
    let mut p = Presentation::new(page).unwrap();
    let mut surface = RecordingSurface::new();
    let mut vp = ManualViewport::new();
    let mut sched = VirtualScheduler::new();

    // t=0: page load. The hero is already in view.
    p.start(false, &mut surface, &mut vp, &mut sched);
    scroll_to(&mut p, &mut vp, &mut sched, &"hero".into());
    pump(&mut p, &mut surface, &mut sched, TimeMs(0));

    // t=800: the overlay opens; the user scrolls the card into view.
    pump(&mut p, &mut surface, &mut sched, TimeMs(800));
    scroll_to(&mut p, &mut vp, &mut sched, &"card".into());

    // t=1100: the card's 300ms reveal lands; the process section enters.
    pump(&mut p, &mut surface, &mut sched, TimeMs(1100));
    scroll_to(&mut p, &mut vp, &mut sched, &"process".into());

    // Run out the clock.
    while let Some(due) = sched.next_due() {
        pump(&mut p, &mut surface, &mut sched, due);
    }

    assert_eq!(
        surface.ops,
        vec![
            SurfaceOp::ScrollLock(true),
            SurfaceOp::Reveal("hero".into()),
            SurfaceOp::OverlayOpened("door-overlay".into()),
            SurfaceOp::Reveal("card".into()),
            // t=1600: trigger + 500ms initial delay.
            SurfaceOp::Progress {
                timeline: "process".into(),
                percent: 50.0,
            },
            SurfaceOp::StepActive {
                step: "step-1".into(),
                index: 0,
            },
            // t=2000: the entrance hide timer predates the step timer.
            SurfaceOp::OverlayHidden("door-overlay".into()),
            SurfaceOp::ScrollLock(false),
            SurfaceOp::Progress {
                timeline: "process".into(),
                percent: 100.0,
            },
            SurfaceOp::StepActive {
                step: "step-2".into(),
                index: 1,
            },
            // t=2500.
            SurfaceOp::AuxVisible,
        ]
    );
    assert_eq!(sched.now(), TimeMs(2500));
    assert!(p.is_idle());
}
