//! # Aperio guide (v0.1.0)
//!
//! This module is a standalone walkthrough of Aperio's architecture and public API.
//! If you are wiring the engine into a host, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`PageSpec`](crate::PageSpec): what one page sequences (reveal targets, timeline, entrance)
//! - [`Presentation`](crate::Presentation): the context object composing the three components
//! - [`RevealEngine`](crate::RevealEngine): one-shot scroll-triggered reveals
//! - [`TimelineRun`](crate::TimelineRun): discrete step progression with exact progress arithmetic
//! - [`EntranceSequencer`](crate::EntranceSequencer): the timed overlay chain played once at load
//! - [`SurfaceOp`](crate::SurfaceOp): the visual-state mutations the engine requests
//!
//! The engine owns sequencing decisions only. All side effects flow through three
//! injected capabilities:
//!
//! 1. [`RenderSurface`](crate::RenderSurface) applies [`SurfaceOp`](crate::SurfaceOp)s
//! 2. [`VisibilityObserver`](crate::VisibilityObserver) tracks region visibility per
//!    [`ViewPolicy`](crate::ViewPolicy)
//! 3. [`Scheduler`](crate::Scheduler) runs deferred callbacks
//!
//! ---
//!
//! ## "No platform in the engine" (and why)
//!
//! Aperio wants sequencing to be deterministic, testable, and portable. Engine code
//! never touches real timers, a DOM, or a compositor. Instead:
//!
//! - hosts deliver visibility events and timer expiries back into
//!   [`Presentation::on_visibility`](crate::Presentation::on_visibility) and
//!   [`Presentation::on_timer`](crate::Presentation::on_timer)
//! - the crate ships [`VirtualScheduler`](crate::VirtualScheduler) (virtual clock),
//!   [`ManualViewport`](crate::ManualViewport), and [`RecordingSurface`](crate::RecordingSurface)
//!   so a full page run can execute in microseconds with exact timing assertions
//!
//! This makes a browser binding a thin adapter: real `IntersectionObserver` events map to
//! `on_visibility`, real timeouts map to `on_timer`, and `SurfaceOp`s map to class-list
//! and style mutations.
//!
//! ---
//!
//! ## Degrade-silently (Aperio's failure contract)
//!
//! There is no runtime error taxonomy on purpose. Unknown subscription or timer ids,
//! missing regions, a host that never delivers events: all of these degrade to "the
//! affected element never transitions". [`AperioError`](crate::AperioError) exists only
//! for page validation and deserialization, before sequencing starts. Worst case is a
//! missing animation, never a broken page.
//!
//! ---
//!
//! ## Building a page (Rust DSL)
//!
//! ```rust
//! use aperio::{
//!     CosmeticEffect, ManualViewport, PageBuilder, Presentation, RecordingSurface,
//!     VirtualScheduler, drain_timers,
//! };
//!
//! # fn main() -> aperio::AperioResult<()> {
//! let page = PageBuilder::new()
//!     .reveal("hero", 0)
//!     .reveal("feature-card", 300)
//!     .timeline("process", ["step-1", "step-2", "step-3"])
//!     .entrance("door-overlay")
//!     .effect(CosmeticEffect::SmoothScroll)
//!     .build()?;
//!
//! let mut presentation = Presentation::new(page)?;
//! let mut surface = RecordingSurface::new();
//! let mut viewport = ManualViewport::new();
//! let mut scheduler = VirtualScheduler::new();
//!
//! // reduced_motion = false: entrance starts, reveals observed, timeline armed.
//! presentation.start(false, &mut surface, &mut viewport, &mut scheduler);
//!
//! // Script the viewport: the hero scrolls into view.
//! for sub in viewport.enter(&"hero".into(), 0.5, 200) {
//!     presentation.on_visibility(sub, &mut viewport, &mut scheduler);
//! }
//!
//! drain_timers(&mut presentation, &mut surface, &mut scheduler);
//! assert!(surface.ops.contains(&aperio::SurfaceOp::Reveal("hero".into())));
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Reduced motion: the instant path
//!
//! `start(true, ..)` reaches every terminal state synchronously: all targets revealed,
//! all steps active with progress 100, overlay hidden, affordance visible. Zero
//! subscriptions and zero timers are created, so there is nothing to drain and nothing
//! left to fire. Motion-sensitive cosmetics
//! ([`CosmeticEffect::motion_sensitive`](crate::CosmeticEffect::motion_sensitive)) are
//! skipped on this path; the rest install on both paths.
//!
//! ---
//!
//! ## Timing contract
//!
//! All delays are fixed and live next to their state machines:
//!
//! - entrance: opening at t+800ms, hidden at t+2000ms, affordance at t+2500ms
//!   ([`OPEN_DELAY`](crate::entrance::OPEN_DELAY), [`HIDE_DELAY`](crate::entrance::HIDE_DELAY),
//!   [`AUX_DELAY`](crate::entrance::AUX_DELAY))
//! - timeline: first step 500ms after trigger, then one step each 400ms
//!   ([`INITIAL_DELAY`](crate::timeline::INITIAL_DELAY), [`STEP_INTERVAL`](crate::timeline::STEP_INTERVAL))
//! - reveals: per-target delay from [`RevealTarget::delay`](crate::RevealTarget)
//!
//! One deliberate asymmetry, kept from the behavior this engine models: a reveal's
//! subscription is cancelled the moment its first event qualifies, while the reveal
//! itself may still be pending on a timer. Subscription lifetime and effect
//! application are decoupled.
