use crate::{
    core::{DelayMs, ElementId},
    error::AperioResult,
    model::{EntranceSpec, PageSpec, RevealTarget, TimelineSpec},
    surface::CosmeticEffect,
};

/// Builder for [`PageSpec`]. JSON is supported via Serde, but programmatic
/// wiring reads better through the builder.
#[derive(Debug, Default)]
pub struct PageBuilder {
    reveals: Vec<RevealTarget>,
    timeline: Option<TimelineSpec>,
    entrance: Option<EntranceSpec>,
    effects: Vec<CosmeticEffect>,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reveal(mut self, id: impl Into<ElementId>, delay_ms: u64) -> Self {
        self.reveals.push(RevealTarget {
            id: id.into(),
            delay: DelayMs(delay_ms),
        });
        self
    }

    pub fn timeline(
        mut self,
        trigger: impl Into<ElementId>,
        steps: impl IntoIterator<Item = impl Into<ElementId>>,
    ) -> Self {
        self.timeline = Some(TimelineSpec {
            trigger: trigger.into(),
            steps: steps.into_iter().map(Into::into).collect(),
        });
        self
    }

    pub fn entrance(mut self, overlay: impl Into<ElementId>) -> Self {
        self.entrance = Some(EntranceSpec {
            overlay: overlay.into(),
        });
        self
    }

    pub fn effect(mut self, effect: CosmeticEffect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn build(self) -> AperioResult<PageSpec> {
        let page = PageSpec {
            reveals: self.reveals,
            timeline: self.timeline,
            entrance: self.entrance,
            effects: self.effects,
        };
        page.validate()?;
        Ok(page)
    }
}
