use crate::core::ElementId;

/// A cosmetic one-line effect the host installs on request. The engine only
/// decides *whether* each effect runs; the mechanics live in the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum CosmeticEffect {
    SmoothScroll,
    CardHover,
    Parallax,
    ScrollIndicator,
}

impl CosmeticEffect {
    /// Motion-sensitive effects are skipped on the reduced-motion path.
    pub fn motion_sensitive(self) -> bool {
        matches!(self, Self::Parallax | Self::ScrollIndicator)
    }
}

/// One visual-state mutation requested of the render surface.
///
/// Every op is fire-and-forget: a missing target is a silent no-op on the
/// host side, never an error back into the engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum SurfaceOp {
    /// Transition an element to its revealed state. Monotonic: emitted at
    /// most once per element.
    Reveal(ElementId),
    /// Activate timeline step `index` (its own element id). Strict index
    /// order within a timeline.
    StepActive { step: ElementId, index: usize },
    /// Set timeline progress, 0..=100.
    Progress { timeline: ElementId, percent: f64 },
    /// Lock or unlock page scrolling during the entrance overlay.
    ScrollLock(bool),
    OverlayOpened(ElementId),
    OverlayHidden(ElementId),
    /// Show the floating action affordance.
    AuxVisible,
    Effect(CosmeticEffect),
}

/// The render surface capability: applies visual-state ops.
pub trait RenderSurface {
    fn apply(&mut self, op: SurfaceOp);
}

/// In-memory surface that records ops in application order. Useful for
/// tests and for hosts that batch-flush mutations themselves.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains the recorded ops, leaving the log empty.
    pub fn take(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }
}

impl RenderSurface for RecordingSurface {
    fn apply(&mut self, op: SurfaceOp) {
        self.ops.push(op);
    }
}
