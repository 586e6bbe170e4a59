#![forbid(unsafe_code)]

pub mod core;
pub mod dsl;
pub mod entrance;
pub mod error;
pub mod guide;
pub mod init;
pub mod model;
pub mod observe;
pub mod pipeline;
pub mod reveal;
pub mod scheduler;
pub mod surface;
pub mod timeline;

pub use crate::core::{DelayMs, ElementId, SubscriptionId, TimeMs, TimerId};
pub use crate::dsl::PageBuilder;
pub use crate::entrance::{EntrancePhase, EntranceSequencer};
pub use crate::error::{AperioError, AperioResult};
pub use crate::init::Presentation;
pub use crate::model::{EntranceSpec, PageSpec, RevealTarget, TimelineSpec};
pub use crate::observe::{ManualViewport, ViewPolicy, VisibilityObserver};
pub use crate::pipeline::drain_timers;
pub use crate::reveal::RevealEngine;
pub use crate::scheduler::{Scheduler, VirtualScheduler};
pub use crate::surface::{CosmeticEffect, RecordingSurface, RenderSurface, SurfaceOp};
pub use crate::timeline::{TimelineRun, TimelineState};
